use common::shapes::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "quadtree bounds must have positive power-of-two width/height (width: {width}, height: {height})"
    )]
    InvalidBounds { width: f32, height: f32 },
    #[error("rectangle must be finite with non-negative width/height ({rect})")]
    InvalidRectangle { rect: Rectangle },
    #[error("{rect} lies outside the quadtree bounds {bounds}")]
    OutOfBounds { rect: Rectangle, bounds: Rectangle },
    #[error("key is already stored in the quadtree (inserting at {rect})")]
    DuplicateKey { rect: Rectangle },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
