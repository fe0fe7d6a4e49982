pub use point::Point2D;


pub mod point;


pub type Meter = f64;


#[must_use]
pub fn distance(coordinates: &Point2D) -> Meter {
    (coordinates.x * coordinates.x + coordinates.y * coordinates.y).sqrt()
}


pub trait Position {
    fn position(&self) -> &Point2D;

    fn distance_from_origin(&self) -> Meter {
        distance(self.position())
    }
}
