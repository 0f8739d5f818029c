#![warn(clippy::all)]

//! Schema-less movie records.

use crate::utils::search::SearchPhrase;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const STARS: u8 = 5;

/// The identifier of a movie, as used by detail lookups.
///
/// The API sends codes as JSON numbers, but they are only ever passed back to it as a
/// query parameter, so the textual form is kept.
#[derive(Debug, Display, PartialEq, Eq, Hash, Clone)]
pub struct MovieCode(String);

impl MovieCode {
  /// Return the code as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<u64> for MovieCode {
  fn from(code: u64) -> Self {
    Self(code.to_string())
  }
}

impl From<String> for MovieCode {
  fn from(code: String) -> Self {
    Self(code)
  }
}

impl From<&str> for MovieCode {
  fn from(code: &str) -> Self {
    Self(code.to_owned())
  }
}

/// One film as returned by the API.
///
/// A movie is a plain JSON object without a fixed schema: search results carry a
/// summary of a film while detail lookups carry more keys, and any key may be
/// missing. Accessors return `None` for absent or unusable values. Keys that are not
/// used here (e.g. `castMember`, `poster`, `release`, `link`) are kept untouched and
/// serialized back as they were received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie(Map<String, Value>);

impl From<Map<String, Value>> for Movie {
  fn from(fields: Map<String, Value>) -> Self {
    Self(fields)
  }
}

impl From<Movie> for Map<String, Value> {
  fn from(movie: Movie) -> Self {
    movie.0
  }
}

impl Movie {
  /// The raw value of a key.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  /// All the fields of the record.
  pub fn fields(&self) -> &Map<String, Value> {
    &self.0
  }

  /// The code to use for detail lookups.
  pub fn code(&self) -> Option<MovieCode> {
    self.get("code").and_then(scalar_to_string).map(MovieCode)
  }

  /// The (localized) title.
  pub fn title(&self) -> Option<&str> {
    self.get("title").and_then(Value::as_str)
  }

  /// The original title.
  pub fn original_title(&self) -> Option<&str> {
    self.get("originalTitle").and_then(Value::as_str)
  }

  /// The production year as it was received.
  pub fn production_year(&self) -> Option<String> {
    self.get("productionYear").and_then(scalar_to_string)
  }

  /// The user rating under `statistics.userRating`, in stars.
  ///
  /// Fractional ratings are truncated and the result is clamped to `0..=5`.
  pub fn user_rating(&self) -> Option<u8> {
    let rating = self.get("statistics")?.get("userRating")?;
    let rating = match rating {
      Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
      Value::String(s) => s.trim().parse::<f64>().ok()?.trunc() as i64,
      _ => return None,
    };
    Some(rating.clamp(0, i64::from(STARS)) as u8)
  }

  /// The names of the genres, in the order they were received.
  ///
  /// Returns `Some` whenever the `genre` key is present, even if no name could be read
  /// from it.
  pub fn genres(&self) -> Option<Vec<&str>> {
    let genre = self.get("genre")?;
    let entries: Vec<&Value> = match genre {
      Value::Array(entries) => entries.iter().collect(),
      Value::Object(_) => vec![genre],
      _ => vec![],
    };
    Some(entries.into_iter().filter_map(|entry| entry.get("$").and_then(Value::as_str)).collect())
  }

  /// The synopsis.
  pub fn synopsis(&self) -> Option<&str> {
    self.get("synopsis").and_then(Value::as_str)
  }

  /// Whether the original title or the title is equal to the phrase, ignoring case.
  pub fn matches(&self, phrase: &SearchPhrase) -> bool {
    self.original_title().is_some_and(|title| phrase.matches(title))
      || self.title().is_some_and(|title| phrase.matches(title))
  }
}

fn scalar_to_string(value: &Value) -> Option<String> {
  match value {
    Value::Number(n) => Some(n.to_string()),
    Value::String(s) => Some(s.clone()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::{Movie, MovieCode};
  use crate::utils::search::SearchPhrase;

  use serde_json::json;

  fn movie(value: serde_json::Value) -> Movie {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn empty_record() {
    let m = movie(json!({}));
    assert_eq!(m.code(), None);
    assert_eq!(m.title(), None);
    assert_eq!(m.original_title(), None);
    assert_eq!(m.production_year(), None);
    assert_eq!(m.user_rating(), None);
    assert_eq!(m.genres(), None);
    assert_eq!(m.synopsis(), None);
  }

  #[test]
  fn fields() {
    let m = movie(json!({
      "code": 18457,
      "title": "Las Vegas parano",
      "originalTitle": "Fear and Loathing in Las Vegas",
      "productionYear": 1998,
      "statistics": { "userRating": 4 },
      "genre": [{ "code": 13002, "$": "Comédie dramatique" }, { "code": 13001, "$": "Aventure" }],
      "synopsis": "A travers l'épopée..."
    }));

    assert_eq!(m.code(), Some(MovieCode::from(18457u64)));
    assert_eq!(m.title(), Some("Las Vegas parano"));
    assert_eq!(m.original_title(), Some("Fear and Loathing in Las Vegas"));
    assert_eq!(m.production_year().as_deref(), Some("1998"));
    assert_eq!(m.user_rating(), Some(4));
    assert_eq!(m.genres(), Some(vec!["Comédie dramatique", "Aventure"]));
    assert_eq!(m.synopsis(), Some("A travers l'épopée..."));
  }

  #[test]
  fn code_as_string() {
    let m = movie(json!({ "code": "18457" }));
    assert_eq!(m.code().unwrap().as_str(), "18457");
  }

  #[test]
  fn rating_variants() {
    assert_eq!(movie(json!({ "statistics": { "userRating": 3.7 } })).user_rating(), Some(3));
    assert_eq!(movie(json!({ "statistics": { "userRating": "2" } })).user_rating(), Some(2));
    assert_eq!(movie(json!({ "statistics": { "userRating": 9 } })).user_rating(), Some(5));
    assert_eq!(movie(json!({ "statistics": { "userRating": -1 } })).user_rating(), Some(0));
    assert_eq!(movie(json!({ "statistics": { "userRating": null } })).user_rating(), None);
    assert_eq!(movie(json!({ "statistics": {} })).user_rating(), None);
  }

  #[test]
  fn genre_variants() {
    assert_eq!(movie(json!({ "genre": [] })).genres(), Some(vec![]));
    assert_eq!(movie(json!({ "genre": { "$": "Drame" } })).genres(), Some(vec!["Drame"]));
    assert_eq!(movie(json!({ "genre": [{ "code": 1 }, { "$": "Drame" }] })).genres(), Some(vec!["Drame"]));
  }

  #[test]
  fn matches_title_or_original_title() {
    let m = movie(json!({ "title": "Las Vegas parano", "originalTitle": "Fear and Loathing in Las Vegas" }));
    assert!(m.matches(&SearchPhrase::from("las vegas parano")));
    assert!(m.matches(&SearchPhrase::from("FEAR AND LOATHING IN LAS VEGAS")));
    assert!(!m.matches(&SearchPhrase::from("las vegas")));
    assert!(!movie(json!({})).matches(&SearchPhrase::from("")));
  }

  #[test]
  fn serializes_back_untouched() {
    let value = json!({
      "code": 18457,
      "poster": { "href": "http://images.allocine.fr/medias/04/21/07/042107_af.jpg" },
      "release": { "releaseDate": "1998-08-19" }
    });
    assert_eq!(serde_json::to_value(movie(value.clone())).unwrap(), value);
  }
}
