pub mod color;
pub mod params;
pub mod parts;

pub use color::*;
pub use params::*;
pub use parts::*;
