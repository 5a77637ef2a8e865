pub mod core;
pub mod terrain;
pub mod fill;
pub mod bench;
pub mod session;

pub use session::IslandSession;
