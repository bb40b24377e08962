use crate::id::ObjectId;
use quadtree::QuadtreeError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ObjectError {
    #[error(transparent)]
    Quadtree(#[from] QuadtreeError),
    #[error("object {0} is not a unit and cannot take movement commands")]
    NotAUnit(ObjectId),
}

pub type ObjectResult<T> = Result<T, ObjectError>;
