//! OpenGRC Common - Shared types for the compliance posture core
//!
//! This crate provides the primitives the scoring crates build on:
//! - Error taxonomy
//! - Validated value objects (risk factors, domain keys)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::*;
