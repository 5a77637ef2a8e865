pub mod runner;
pub mod timer;

pub use timer::{measure, Timed};
