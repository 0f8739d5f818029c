#![warn(clippy::all)]

use crate::allocine::config::Config;
use crate::allocine::error::Error;
use crate::allocine::fetch::{Fetch, HttpFetcher};
use crate::allocine::movie::{Movie, MovieCode};
use crate::allocine::pretty;
use crate::allocine::query::{self, Query};
use crate::allocine::response;
use crate::utils::search::SearchPhrase;

use log::{debug, info};

/// The outcome of looking up a search phrase.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
  /// The full record of the first search result whose title matched the phrase exactly.
  Detail(Movie),
  /// All the search results, in the order the API returned them.
  Results(Vec<Movie>),
}

/// Client for the Allociné API.
///
/// Every call is independent: the service only holds its configuration and a fetcher
/// and sends one request at a time.
pub struct Service<F = HttpFetcher> {
  config: Config,
  fetcher: F,
}

impl Service<HttpFetcher> {
  /// Construct a service for the public Allociné endpoints.
  pub fn new() -> Result<Self, Error> {
    Ok(Self::with_fetcher(Config::default(), HttpFetcher::new()?))
  }
}

impl<F: Fetch> Service<F> {
  /// Construct a service with custom configuration and fetcher.
  ///
  /// # Arguments
  ///
  /// * `config` - Endpoints and partner token.
  /// * `fetcher` - Sends the requests, e.g. an `HttpFetcher`.
  pub fn with_fetcher(config: Config, fetcher: F) -> Self {
    Self { config, fetcher }
  }

  /// The configuration of the service.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Search movies by free text.
  ///
  /// Returns an empty list when nothing matched.
  ///
  /// # Arguments
  ///
  /// * `phrase` - The text to search for, sent as-is.
  pub fn search_movie(&self, phrase: &str) -> Result<Vec<Movie>, Error> {
    let url = query::build_url(&self.config, Query::Search, phrase)?;
    let body = self.fetcher.fetch(&url)?;
    let movies = response::parse_search(&body)?;
    info!("Found {} movies for `{phrase}`", movies.len());
    Ok(movies)
  }

  /// Fetch the full record of a movie.
  ///
  /// # Arguments
  ///
  /// * `code` - The code of the movie, as found in search results.
  pub fn movie_detail(&self, code: &MovieCode) -> Result<Movie, Error> {
    let url = query::build_url(&self.config, Query::Detail, code.as_str())?;
    let body = self.fetcher.fetch(&url)?;
    response::parse_detail(&body)
  }

  /// Renders a movie as a short human-readable summary.
  ///
  /// See [`crate::allocine::pretty_print_movie`].
  pub fn pretty_print_movie(&self, movie: &Movie) -> String {
    pretty::pretty_print_movie(movie)
  }

  /// Search for a phrase and pick out an exact match.
  ///
  /// If the title or the original title of a search result is equal to the phrase,
  /// ignoring case, the full record of the first such result is fetched. Otherwise all
  /// the search results are returned.
  ///
  /// # Errors
  ///
  /// Besides request errors, `Error::MissingKey` if the matching result has no code.
  pub fn lookup(&self, phrase: &SearchPhrase) -> Result<Lookup, Error> {
    let results = self.search_movie(phrase.as_str())?;

    match results.iter().find(|movie| movie.matches(phrase)) {
      Some(movie) => {
        let code = movie.code().ok_or(Error::MissingKey("code"))?;
        debug!("Search result {code} matches `{phrase}` exactly, fetching details");
        Ok(Lookup::Detail(self.movie_detail(&code)?))
      }
      None => {
        debug!("No search result matches `{phrase}` exactly");
        Ok(Lookup::Results(results))
      }
    }
  }
}
