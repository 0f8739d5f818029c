#![warn(clippy::all)]

/// Errors when talking to the Allociné API.
#[derive(Debug, thiserror::Error)]
#[error("Allocine error")]
pub enum Error {
  /// Networking error.
  #[error("Networking error: {0}")]
  Net(#[from] reqwest::Error),
  /// The server answered with a non-success status.
  #[error("Request to `{url}` failed with HTTP status {status}")]
  Status {
    /// The requested URL.
    url: String,
    /// The HTTP status code of the response.
    status: u16,
  },
  /// The response body is not valid JSON.
  #[error("Error parsing JSON response: {0}")]
  Json(#[from] serde_json::Error),
  /// A key that is required to make sense of a response is absent.
  #[error("Key `{0}` is missing from the response")]
  MissingKey(&'static str),
  /// A request URL could not be built.
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}
