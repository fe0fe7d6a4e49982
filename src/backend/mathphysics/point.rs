use derive_more::Display;
use serde::{Deserialize, Serialize};


// Equality is exact on both axes, no tolerance is applied.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Display, Serialize, Deserialize
)]
#[display("({x}, {y})")]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
