pub mod colour_map;
pub mod errors;
pub mod kernel;
pub mod lyapunov_config;
pub mod noise;
pub mod palettes;
pub mod params;
pub mod pattern;
