pub mod generate;
pub mod palette;

pub use generate::generate;
pub use palette::{ColorSource, Palette};
