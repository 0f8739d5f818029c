#![warn(clippy::all)]

//! Sending requests.

use crate::allocine::error::Error;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

/// Something that can GET a URL and return the body of the response as text.
pub trait Fetch {
  /// Sends a GET request to `url` and returns the body of the response.
  fn fetch(&self, url: &Url) -> Result<String, Error>;
}

/// Fetches over HTTP with a blocking `reqwest` client.
///
/// The client has no timeout (a request waits for the server as long as it takes), no
/// retries and the default redirect policy. Responses with a non-success status are turned into `Error::Status`.
pub struct HttpFetcher {
  client: Client,
}

impl HttpFetcher {
  /// Construct a fetcher with an HTTP client that never times out.
  pub fn new() -> Result<Self, Error> {
    let client = Client::builder().timeout(None).build()?;
    Ok(Self { client })
  }
}

impl Fetch for HttpFetcher {
  fn fetch(&self, url: &Url) -> Result<String, Error> {
    debug!("GET {url}");
    let resp = self.client.get(url.clone()).send()?;
    let status = resp.status();
    debug!("Response status {status} for {url}");
    if !status.is_success() {
      return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
    }
    Ok(resp.text()?)
  }
}
