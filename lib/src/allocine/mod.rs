#![warn(clippy::all)]
#![warn(missing_docs)]

//! Module for querying the Allociné web API.

mod config;
mod error;
mod fetch;
mod movie;
mod pretty;
mod query;
mod response;
mod service;

#[cfg(test)]
mod testdata;

pub use config::Config as AllocineConfig;
pub use error::Error as AllocineError;
pub use fetch::{Fetch, HttpFetcher};
pub use movie::{Movie, MovieCode};
pub use pretty::pretty_print_movie;
pub use query::{Query as AllocineQuery, build_url};
pub use response::{parse_detail, parse_search};
pub use service::{Lookup, Service as Allocine};
