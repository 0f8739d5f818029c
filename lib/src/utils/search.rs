//! A search phrase that can be compared case-insensitively against titles.

use derive_more::Display;

/// A free-text search phrase.
///
/// The phrase is sent to the API as it was given, but also keeps a lowercase copy
/// of itself so that titles from the results can be matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{contents}")]
pub struct SearchPhrase {
  contents: String,
  folded: String,
}

impl SearchPhrase {
  /// Join words with single spaces into a search phrase.
  ///
  /// # Arguments
  ///
  /// * `words` - The words of the phrase, e.g. command-line arguments.
  pub fn from_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut contents = String::new();
    for (i, word) in words.into_iter().enumerate() {
      if i > 0 {
        contents.push(' ');
      }
      contents.push_str(word.as_ref());
    }
    Self::from(contents)
  }

  /// Return the search phrase as a string slice.
  pub fn as_str(&self) -> &str {
    &self.contents
  }

  /// Whether `title` is equal to this phrase, ignoring case.
  pub fn matches(&self, title: &str) -> bool {
    title.to_lowercase() == self.folded
  }
}

impl From<String> for SearchPhrase {
  fn from(contents: String) -> Self {
    let folded = contents.to_lowercase();
    Self { contents, folded }
  }
}

impl From<&str> for SearchPhrase {
  fn from(value: &str) -> Self {
    Self::from(value.to_owned())
  }
}

impl From<SearchPhrase> for String {
  fn from(phrase: SearchPhrase) -> Self {
    phrase.contents
  }
}
