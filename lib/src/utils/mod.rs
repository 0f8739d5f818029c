#![warn(clippy::all)]
#![warn(missing_docs)]

//! Common utilities for error-handling and search phrases.

pub mod result;
pub mod search;
