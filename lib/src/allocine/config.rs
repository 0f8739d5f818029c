#![warn(clippy::all)]

//! Endpoints and fixed parameters of the Allociné API.

const SEARCH_URL: &str = "http://api.allocine.fr/xml/search?";
const DETAIL_URL: &str = "http://api.allocine.fr/xml/movie?";
const PARTNER: u32 = 3;

/// Where and how to reach the Allociné API.
///
/// The configuration is owned by the client and does not change after construction.
/// The default points at the public Allociné endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  search_url: String,
  detail_url: String,
  partner: u32,
}

impl Config {
  /// Construct a configuration that uses custom endpoints, e.g. a mirror of the API.
  ///
  /// # Arguments
  ///
  /// * `search_url` - Base URL of the search endpoint, query parameters are appended to it.
  /// * `detail_url` - Base URL of the movie detail endpoint.
  pub fn new(search_url: impl Into<String>, detail_url: impl Into<String>) -> Self {
    Self { search_url: search_url.into(), detail_url: detail_url.into(), partner: PARTNER }
  }

  /// Base URL of the search endpoint.
  pub fn search_url(&self) -> &str {
    &self.search_url
  }

  /// Base URL of the movie detail endpoint.
  pub fn detail_url(&self) -> &str {
    &self.detail_url
  }

  /// The partner token sent with every request.
  pub fn partner(&self) -> u32 {
    self.partner
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(SEARCH_URL, DETAIL_URL)
  }
}
