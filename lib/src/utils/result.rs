#![warn(clippy::all)]

//! A catch-all result type for callers that mix the library's errors with their own.

use std::error::Error;

/// Result with a boxed error, e.g. for `main` functions of examples.
pub type Res<T = ()> = Result<T, Box<dyn Error>>;
