#![warn(clippy::all)]

//! Building request URLs.

use crate::allocine::config::Config;

use derive_more::Display;
use url::Url;

/// The kind of request to send to the API.
#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Query {
  /// Search movies by free text.
  #[display("search")]
  Search,
  /// Fetch the full record of one movie by its code.
  #[display("movie")]
  Detail,
}

impl Query {
  /// The name of the query parameter carrying the value of the request.
  pub fn key(&self) -> &'static str {
    match self {
      Query::Search => "q",
      Query::Detail => "code",
    }
  }

  fn base_url<'a>(&self, config: &'a Config) -> &'a str {
    match self {
      Query::Search => config.search_url(),
      Query::Detail => config.detail_url(),
    }
  }
}

/// Builds the URL of a request.
///
/// The value is URL-encoded and sent along with the fixed `json=1` and `partner`
/// parameters. It is not validated in any way, an empty value is sent as-is.
///
/// # Arguments
///
/// * `config` - Endpoints and partner token to use.
/// * `query` - Whether to build a search or a movie detail request.
/// * `value` - The search phrase or the movie code.
pub fn build_url(config: &Config, query: Query, value: &str) -> Result<Url, url::ParseError> {
  let partner = config.partner().to_string();
  let params = [(query.key(), value), ("json", "1"), ("partner", partner.as_str())];
  Url::parse_with_params(query.base_url(config), &params)
}
