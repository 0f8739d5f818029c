#![warn(clippy::all)]

//! Human-readable rendering of movie records.

use crate::allocine::movie::Movie;

const STARS: usize = 5;
const UNKNOWN_RATING: &str = "[  ?  ]";

/// Renders a movie as a short summary, e.g.
/// `[**** ] Las Vegas parano (Fear and Loathing in Las Vegas) 1998`.
///
/// Present parts are joined with single spaces: the star rating, the title followed by
/// the original title in parentheses, the production year and then, on lines of their
/// own, the genres and the synopsis. Every part is optional except the rating, which is
/// rendered as `[  ?  ]` when unknown. Records from searches usually carry neither
/// genres nor a synopsis, records from detail lookups do.
pub fn pretty_print_movie(movie: &Movie) -> String {
  let mut out = Vec::with_capacity(5);

  out.push(rating(movie.user_rating()));

  match (movie.title(), movie.original_title()) {
    (Some(title), Some(original_title)) => out.push(format!("{title} ({original_title})")),
    (Some(title), None) | (None, Some(title)) => out.push(title.to_owned()),
    (None, None) => {}
  }

  if let Some(year) = movie.production_year() {
    out.push(year);
  }

  if let Some(genres) = movie.genres() {
    out.push(format!("\nGenre: {}", genres.join(", ")));
  }

  if let Some(synopsis) = movie.synopsis() {
    out.push(format!("\nSynopsis: {synopsis}"));
  }

  out.join(" ")
}

fn rating(stars: Option<u8>) -> String {
  match stars {
    Some(stars) => {
      let stars = usize::from(stars).min(STARS);
      format!("[{}{}]", "*".repeat(stars), " ".repeat(STARS - stars))
    }
    None => UNKNOWN_RATING.to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use super::pretty_print_movie;
  use crate::allocine::movie::Movie;
  use crate::allocine::response::parse_detail;
  use crate::allocine::testdata;

  use serde_json::json;

  fn movie(value: serde_json::Value) -> Movie {
    serde_json::from_value(value).unwrap()
  }

  #[test]
  fn brief() {
    let m = movie(json!({
      "statistics": { "userRating": 4 },
      "title": "Las Vegas parano",
      "originalTitle": "Fear and Loathing in Las Vegas",
      "productionYear": 1998
    }));
    assert_eq!(pretty_print_movie(&m), "[**** ] Las Vegas parano (Fear and Loathing in Las Vegas) 1998");
  }

  #[test]
  fn stars() {
    for n in 0..=5 {
      let m = movie(json!({ "statistics": { "userRating": n } }));
      let expected = format!("[{}{}]", "*".repeat(n), " ".repeat(5 - n));
      assert_eq!(pretty_print_movie(&m), expected);
    }
  }

  #[test]
  fn unknown_rating() {
    let m = movie(json!({ "originalTitle": "The Virgin of Las Vegas", "productionYear": 2009 }));
    assert_eq!(pretty_print_movie(&m), "[  ?  ] The Virgin of Las Vegas 2009");
  }

  #[test]
  fn titles() {
    let both = movie(json!({ "title": "Foo", "originalTitle": "Bar" }));
    assert_eq!(pretty_print_movie(&both), "[  ?  ] Foo (Bar)");

    let original_only = movie(json!({ "originalTitle": "Bar" }));
    assert_eq!(pretty_print_movie(&original_only), "[  ?  ] Bar");

    let title_only = movie(json!({ "title": "Foo" }));
    assert_eq!(pretty_print_movie(&title_only), "[  ?  ] Foo");
  }

  #[test]
  fn empty_record() {
    assert_eq!(pretty_print_movie(&Movie::default()), "[  ?  ]");
  }

  #[test]
  fn full() {
    let m = parse_detail(testdata::DETAIL_LAS_VEGAS_PARANO).unwrap();
    assert_eq!(
      pretty_print_movie(&m),
      "[**** ] Las Vegas parano (Fear and Loathing in Las Vegas) 1998 \
       \nGenre: Comédie dramatique, Aventure \
       \nSynopsis: A travers l'épopée à la fois comique et horrible vers Las Vegas du journaliste Raoul Duke."
    );
  }

  #[test]
  fn no_genre_or_synopsis_segments_when_absent() {
    let m = movie(json!({ "title": "Foo", "originalTitle": "Bar", "productionYear": 2001 }));
    let out = pretty_print_movie(&m);
    assert!(!out.contains("Genre:"));
    assert!(!out.contains("Synopsis:"));
    assert!(!out.contains('\n'));
  }

  #[test]
  fn embedded_newlines_are_kept() {
    let m = movie(json!({ "synopsis": "one\ntwo" }));
    assert_eq!(pretty_print_movie(&m), "[  ?  ] \nSynopsis: one\ntwo");
  }
}
