#![warn(clippy::all)]

use allocine::allocine::{Lookup, pretty_print_movie};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Output printing error")]
pub enum Err {
  #[error("JSON output error: {0}")]
  Json(#[from] serde_json::Error),
  #[error("YAML output error: {0}")]
  Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
  Text,
  Json,
  Yaml,
}

pub trait Printer {
  type Error;

  fn render(&self, lookup: &Lookup) -> Result<String, Self::Error>;

  fn print(&self, lookup: &Lookup) -> Result<(), Self::Error> {
    let out = self.render(lookup)?;
    if !out.is_empty() {
      println!("{out}");
    }
    Ok(())
  }
}

/// Prints the summary of the exact match with its genres and synopsis, or one summary
/// line per search result.
pub struct TextPrinter;

impl TextPrinter {
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

impl Printer for TextPrinter {
  type Error = Err;

  fn render(&self, lookup: &Lookup) -> Result<String, Self::Error> {
    Ok(match lookup {
      Lookup::Detail(movie) => pretty_print_movie(movie),
      Lookup::Results(movies) => movies.iter().map(pretty_print_movie).collect::<Vec<_>>().join("\n"),
    })
  }
}

pub struct JsonPrinter;

impl JsonPrinter {
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

impl Printer for JsonPrinter {
  type Error = Err;

  fn render(&self, lookup: &Lookup) -> Result<String, Self::Error> {
    Ok(match lookup {
      Lookup::Detail(movie) => serde_json::to_string_pretty(movie)?,
      Lookup::Results(movies) => serde_json::to_string_pretty(movies)?,
    })
  }
}

pub struct YamlPrinter;

impl YamlPrinter {
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

impl Printer for YamlPrinter {
  type Error = Err;

  fn render(&self, lookup: &Lookup) -> Result<String, Self::Error> {
    Ok(match lookup {
      Lookup::Detail(movie) => serde_yaml::to_string(movie)?,
      Lookup::Results(movies) => serde_yaml::to_string(movies)?,
    })
  }
}
