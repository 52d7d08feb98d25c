//! Data models shared between the client, settings and UI crates.

mod point;

pub use point::PointCoordinates;
