pub mod functions;
pub mod kinds;

pub use kinds::{PaletteKind, UnknownPaletteError};
