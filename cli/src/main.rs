#![warn(clippy::all)]

mod print;
mod ui;

use std::process;
use std::time::Instant;

use crate::print::{JsonPrinter, OutputFormat, Printer, TextPrinter, YamlPrinter};
use crate::ui::create_progress_spinner;

use allocine::allocine::{Allocine, AllocineError};
use allocine::utils::search::SearchPhrase;

use clap::{CommandFactory, Parser};
use humantime::format_duration;
use log::{debug, error};

const EXAMPLES: &str = "EXAMPLES:
    $ allocine las vegas
    [**** ] Las Vegas parano (Fear and Loathing in Las Vegas) 1998
    [**   ] Lune de miel à Las Vegas (Honeymoon in Vegas) 1992
    [  ?  ] The Virgin of Las Vegas 2009

    $ allocine las vegas parano
    [**** ] Las Vegas parano (Fear and Loathing in Las Vegas) 1998
    Genre: Comédie dramatique, Aventure
    Synopsis: A travers l'épopée à la fois comique et horrible vers Las Vegas...";

#[derive(Debug, thiserror::Error)]
#[error("Allocine error")]
enum Error {
  #[error("Allocine service error: {0}")]
  Allocine(#[from] AllocineError),
  #[error("Output error: {0}")]
  Print(#[from] print::Err),
}

#[derive(Debug, clap::Parser)]
#[clap(name = "allocine", author, version, about, long_about = None, after_help = EXAMPLES)]
struct Opt {
  /// Verbose output (can be specified multiple times)
  #[clap(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  /// Set output format
  #[clap(short, long, value_enum, default_value = "text")]
  output: OutputFormat,

  /// Words of the movie title to search for. If a result's title is exactly these
  /// words, its details are shown instead of the list of results
  #[clap(name = "WORDS")]
  words: Vec<String>,
}

fn create_output_printer(output_format: OutputFormat) -> Box<dyn Printer<Error = print::Err>> {
  match output_format {
    OutputFormat::Text => Box::new(TextPrinter::new()),
    OutputFormat::Json => Box::new(JsonPrinter::new()),
    OutputFormat::Yaml => Box::new(YamlPrinter::new()),
  }
}

fn get_log_level(verbose: u8) -> log::LevelFilter {
  match verbose {
    0 => log::LevelFilter::Off,
    1 => log::LevelFilter::Error,
    2 => log::LevelFilter::Warn,
    3 => log::LevelFilter::Info,
    4 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  }
}

/// Returns whether errors can be reported through the logger.
fn init_logger(verbose: u8) -> bool {
  let log_level = get_log_level(verbose);
  let logger = env_logger::Builder::new().filter_level(log_level).try_init();
  if let Err(e) = &logger {
    eprintln!("Error initializing logger: {e}");
  }
  logger.is_ok() && log_level >= log::LevelFilter::Error
}

macro_rules! fail {
  ($logger:expr, $e:expr) => {
    match $e {
      Ok(v) => v,
      Err(e) => {
        let logger: bool = $logger;
        if logger {
          error!("Error: {e}");
        } else {
          eprintln!("Error: {e}");
        }
        process::exit(1);
      }
    }
  };
}

fn usage() -> String {
  let mut usage = Vec::new();
  if let Err(e) = Opt::command().write_help(&mut usage) {
    eprintln!("Error rendering usage: {e}");
  }
  String::from_utf8_lossy(&usage).into_owned()
}

/// Returns the exit status to stop with, after printing the usage, when there is
/// nothing to search for.
fn check_words(opt: &Opt) -> Option<i32> {
  if opt.words.is_empty() {
    Some(1)
  } else {
    None
  }
}

fn run(phrase: &SearchPhrase, printer: &dyn Printer<Error = print::Err>) -> Result<(), Error> {
  let service = Allocine::new()?;

  let start_time = Instant::now();
  let spinner = create_progress_spinner(format!("Searching Allociné for `{phrase}`"));
  let lookup = service.lookup(phrase);
  spinner.finish_and_clear();
  let lookup = lookup?;
  debug!("Allocine lookup took {}", format_duration(Instant::now().duration_since(start_time)));

  printer.print(&lookup)?;

  Ok(())
}

fn main() {
  let start_time = Instant::now();
  let args = Opt::parse();
  let have_logger = init_logger(args.verbose);

  if let Some(status) = check_words(&args) {
    println!("{}", usage());
    process::exit(status);
  }

  let phrase = SearchPhrase::from_words(&args.words);
  debug!("Search phrase: `{phrase}`");

  let printer = create_output_printer(args.output);
  fail!(have_logger, run(&phrase, printer.as_ref()));

  debug!("Total time: {}", format_duration(Instant::now().duration_since(start_time)));
}
