//! Angles between every unique pair of 2D vectors, sorted ascending.
//!
//! The pipeline runs one way: numeric tokens → [`Vector2`] values
//! ([`ingest`]) → unique position pairs ([`operations::pairwise_elts`]) →
//! pairs ordered by angle ([`operations::ThetaSort`]).

pub mod error;
pub mod ingest;
pub mod math;
pub mod operations;
pub mod output;

pub use error::{Error, GeometryError, MalformedInputError, Result};
pub use math::Vector2;
