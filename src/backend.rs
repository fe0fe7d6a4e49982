use mathphysics::Meter;


pub mod coordinates;
pub mod engine;
pub mod mathphysics;
pub mod protocol;
pub mod scan;
pub mod validation;


// Points further than this from the origin are never engaged.
pub const ENGAGEMENT_RADIUS: Meter = 100.0;
