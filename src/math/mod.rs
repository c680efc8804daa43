mod vector_2d;

pub use vector_2d::{dot, theta, Vector2};
