//! Command line front door for the analysis engine.
//!
//! This layer only deserializes input, picks a strategy, invokes the
//! analyzer and prints the result; all scoring semantics live in
//! [`crate::analyzer`].

pub mod args;
pub mod input;

pub use args::{Args, Commands};
pub use input::{Batch, InputError, load_batch};
