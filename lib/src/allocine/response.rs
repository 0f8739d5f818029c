#![warn(clippy::all)]

//! Decoding response bodies and extracting movie records from them.

use crate::allocine::error::Error;
use crate::allocine::movie::Movie;

use log::{debug, warn};
use serde_json::Value;

/// Extracts the movies of a search response.
///
/// Search responses look like `{"feed": {"movie": [...]}}`. When nothing matched the
/// API leaves out the `movie` key, which results in an empty list.
///
/// # Arguments
///
/// * `body` - The JSON body of the response.
///
/// # Errors
///
/// * `Error::Json` - The body is not valid JSON.
/// * `Error::MissingKey` - The body has no `feed`.
pub fn parse_search(body: &str) -> Result<Vec<Movie>, Error> {
  let mut root: Value = serde_json::from_str(body)?;
  let feed = root.get_mut("feed").ok_or(Error::MissingKey("feed"))?;

  let entries = match feed.get_mut("movie").map(Value::take) {
    None | Some(Value::Null) => {
      debug!("Search response contains no movies");
      return Ok(vec![]);
    }
    Some(Value::Array(entries)) => entries,
    Some(entry @ Value::Object(_)) => vec![entry],
    Some(other) => {
      warn!("Ignoring unexpected `movie` value in search response: {other}");
      return Ok(vec![]);
    }
  };

  let movies: Vec<Movie> = entries
    .into_iter()
    .filter_map(|entry| match entry {
      Value::Object(fields) => Some(Movie::from(fields)),
      other => {
        warn!("Ignoring search result that is not an object: {other}");
        None
      }
    })
    .collect();

  debug!("Search response contains {} movies", movies.len());
  Ok(movies)
}

/// Extracts the movie of a detail response.
///
/// Detail responses look like `{"movie": {...}}`. Unlike searches, a missing movie is
/// an error.
///
/// # Arguments
///
/// * `body` - The JSON body of the response.
///
/// # Errors
///
/// * `Error::Json` - The body is not valid JSON.
/// * `Error::MissingKey` - The body has no `movie` object.
pub fn parse_detail(body: &str) -> Result<Movie, Error> {
  let mut root: Value = serde_json::from_str(body)?;
  match root.get_mut("movie").map(Value::take) {
    Some(Value::Object(fields)) => Ok(Movie::from(fields)),
    _ => Err(Error::MissingKey("movie")),
  }
}
