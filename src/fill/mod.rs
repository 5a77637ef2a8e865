pub mod flatten;
pub mod islands;
pub mod neighbors;
pub mod repaint;

pub use flatten::flatten;
pub use islands::find_islands;
pub use repaint::repaint;
