pub mod actions;
pub mod data;
pub mod fractals;
pub mod frame;
pub mod util;
