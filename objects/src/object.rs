use crate::id::ObjectId;
use crate::unit::Unit;
use common::shapes::{Point, Rectangle};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub enum ObjectKind {
    Static,
    Unit(Unit),
}

impl ObjectKind {
    pub fn unit(speed: f32) -> Self {
        ObjectKind::Unit(Unit::new(speed))
    }
}

/// A game object with a stable id and a bounding box in world space.
///
/// Objects compare and hash by id only, so an object stays the same key
/// while its bounding box changes. The bounding box and the selected flag
/// are written only by the `ObjectManager`.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: ObjectId,
    bbox: Rectangle,
    selected: bool,
    kind: ObjectKind,
}

impl GameObject {
    pub(crate) fn new(id: ObjectId, bbox: Rectangle, kind: ObjectKind) -> Self {
        Self {
            id,
            bbox,
            selected: false,
            kind,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn bbox(&self) -> Rectangle {
        self.bbox
    }

    pub fn position(&self) -> Point {
        self.bbox.position()
    }

    pub fn size(&self) -> (f32, f32) {
        self.bbox.size()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match &self.kind {
            ObjectKind::Unit(unit) => Some(unit),
            ObjectKind::Static => None,
        }
    }

    pub(crate) fn as_unit_mut(&mut self) -> Option<&mut Unit> {
        match &mut self.kind {
            ObjectKind::Unit(unit) => Some(unit),
            ObjectKind::Static => None,
        }
    }

    pub(crate) fn set_bbox(&mut self, bbox: Rectangle) {
        self.bbox = bbox;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    // Bounding box this object wants to occupy after elapsed time
    pub(crate) fn advance(&mut self, elapsed: f32, threshold: f32) -> Option<Rectangle> {
        let position = self.position();
        let step = self.as_unit_mut()?.advance(position, elapsed, threshold)?;
        Some(self.bbox.translate(step.x, step.y))
    }
}

impl PartialEq for GameObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GameObject {}

impl Hash for GameObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameObject({}, id={})", self.bbox, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;
    use fxhash::FxHashSet;

    #[test]
    fn identity_ignores_bbox() {
        let mut ids = IdGenerator::new();
        let id = ids.next_id();
        let a = GameObject::new(id, Rectangle::new(0.0, 0.0, 1.0, 1.0), ObjectKind::Static);
        let mut b = a.clone();
        b.set_bbox(Rectangle::new(5.0, 5.0, 2.0, 3.0));
        assert_eq!(a, b);
        assert_eq!(b.size(), (2.0, 3.0));

        let mut set = FxHashSet::default();
        set.insert(a);
        assert!(set.contains(&b));

        let other = GameObject::new(ids.next_id(), Rectangle::new(0.0, 0.0, 1.0, 1.0), ObjectKind::Static);
        assert!(!set.contains(&other));
    }

    #[test]
    fn static_objects_never_move() {
        let mut ids = IdGenerator::new();
        let mut object = GameObject::new(ids.next_id(), Rectangle::new(0.0, 0.0, 1.0, 1.0), ObjectKind::Static);
        assert!(object.as_unit().is_none());
        assert_eq!(object.advance(10.0, 0.5), None);
    }
}
