#![warn(clippy::all)]
#![warn(missing_docs)]

//! A client for the Allociné movie database.
//!
//! Search movies by title, fetch the full record of a movie by its code and render
//! records as short human-readable summaries.

pub mod allocine;
pub mod utils;
