pub mod error;
pub mod quadtree;

pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadTree};
