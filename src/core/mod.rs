pub mod error;
pub mod grid;
pub mod types;

pub use error::{IslandsError, Result};
pub use grid::GridModel;
pub use types::{CellStatus, Color, Config};
