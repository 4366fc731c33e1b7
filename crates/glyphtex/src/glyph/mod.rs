pub mod font;
pub mod grid;
pub mod palette;
pub mod ramp;
