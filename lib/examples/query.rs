#![warn(clippy::all)]

use allocine::allocine::Allocine;
use allocine::utils::result::Res;

fn main() -> Res {
  let allocine = Allocine::new()?;

  let phrase = "las vegas";
  let movies = allocine.search_movie(phrase)?;

  println!("{} matches for `{}`:", movies.len(), phrase);

  for movie in &movies {
    match movie.code() {
      Some(code) => println!("Code: {}", code),
      None => println!("Code: N/A"),
    }

    println!("Summary: {}", allocine.pretty_print_movie(movie));
    println!("--");
  }

  if let Some(code) = movies.first().and_then(|movie| movie.code()) {
    let movie = allocine.movie_detail(&code)?;
    println!("Details of {}:", code);
    println!("{}", allocine.pretty_print_movie(&movie));
  }

  Ok(())
}
