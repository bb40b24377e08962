use crate::config::ManagerConfig;
use crate::error::{ObjectError, ObjectResult};
use crate::id::{IdGenerator, ObjectId};
use crate::object::{GameObject, ObjectKind};
use common::shapes::{Point, Rectangle};
use fxhash::{FxHashMap, FxHashSet};
use quadtree::QuadTree;
use tracing::debug;

/// Owns every game object, the quadtree indexing them, and the selection.
///
/// The manager is the only writer of object bounding boxes and selected
/// flags. Query results borrow the manager, so they cannot outlive the next
/// `update`.
pub struct ObjectManager {
    quadtree: QuadTree<ObjectId>,
    objects: FxHashMap<ObjectId, GameObject>,
    selection: FxHashSet<ObjectId>,
    ids: IdGenerator,
    config: ManagerConfig,
    // None until the first update
    last_update: Option<f64>,
}

impl ObjectManager {
    pub fn new(bounds: Rectangle) -> ObjectResult<Self> {
        Self::new_with_config(bounds, ManagerConfig::default())
    }

    pub fn new_with_config(bounds: Rectangle, config: ManagerConfig) -> ObjectResult<Self> {
        let quadtree = QuadTree::new_with_config(bounds, config.quadtree.clone())?;
        Ok(ObjectManager {
            quadtree,
            objects: FxHashMap::default(),
            selection: FxHashSet::default(),
            ids: IdGenerator::new(),
            config,
            last_update: None,
        })
    }

    pub fn bounds(&self) -> Rectangle {
        self.quadtree.bounds()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn quadtree(&self) -> &QuadTree<ObjectId> {
        &self.quadtree
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// # Panics
    ///
    /// If `id` was not returned by `create` on this manager.
    pub fn get(&self, id: ObjectId) -> &GameObject {
        match self.objects.get(&id) {
            Some(object) => object,
            None => panic!("unknown object id {}", id),
        }
    }

    pub fn objects(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects.values()
    }

    pub fn selection(&self) -> &FxHashSet<ObjectId> {
        &self.selection
    }

    pub fn create(&mut self, kind: ObjectKind, bbox: Rectangle) -> ObjectResult<ObjectId> {
        // The id is only consumed once the quadtree accepted the rectangle
        if let Err(err) = self.quadtree.insert(self.ids.peek(), bbox) {
            debug!(%bbox, %err, "rejected object creation");
            return Err(err.into());
        }
        let id = self.ids.next_id();
        self.objects.insert(id, GameObject::new(id, bbox, kind));
        debug!(%id, %bbox, "created object");
        Ok(id)
    }

    // A unit at the top-left of bbox with the configured default speed
    pub fn create_unit(&mut self, bbox: Rectangle) -> ObjectResult<ObjectId> {
        let speed = self.config.default_unit_speed;
        self.create(ObjectKind::unit(speed), bbox)
    }

    /// Advance every object to the timestamp `now`.
    ///
    /// The first call only records `now` as the starting time; nothing moves
    /// until a later timestamp arrives.
    pub fn update(&mut self, now: f64) {
        let last = match self.last_update {
            Some(last) => last,
            None => {
                debug!(now = now, "started object clock");
                self.last_update = Some(now);
                return;
            }
        };
        // A clock running backwards counts as no time passing
        let elapsed = (now - last).max(0.0);
        self.last_update = Some(last.max(now));
        self.tick(elapsed as f32);
    }

    /// Advance every object by `elapsed` time units.
    pub fn tick(&mut self, elapsed: f32) {
        let threshold = self.config.arrival_threshold;
        let policy = self.config.blocked_policy;
        for object in self.objects.values_mut() {
            let target = match object.advance(elapsed, threshold) {
                Some(target) => target,
                None => continue,
            };
            let moved = relocate(&mut self.quadtree, object, target);
            if let Some(unit) = object.as_unit_mut() {
                if moved {
                    unit.settle(target.position(), threshold);
                } else {
                    unit.blocked(policy);
                }
            }
        }
    }

    /// Move an object by `(dx, dy)`. Returns false, leaving the object in
    /// place, if it would leave the world.
    pub fn move_object(&mut self, id: ObjectId, dx: f32, dy: f32) -> bool {
        let object = lookup_mut(&mut self.objects, id);
        let target = object.bbox().translate(dx, dy);
        relocate(&mut self.quadtree, object, target)
    }

    /// Move an object's top-left corner to `position`.
    pub fn move_object_to(&mut self, id: ObjectId, position: Point) -> bool {
        let object = lookup_mut(&mut self.objects, id);
        let target = object.bbox().with_position(position);
        relocate(&mut self.quadtree, object, target)
    }

    /// Objects intersecting `area`, or every object when `area` is `None`.
    pub fn query(&self, area: Option<&Rectangle>) -> Vec<&GameObject> {
        let mut found = Vec::new();
        match area {
            Some(area) => self
                .quadtree
                .query_intersect_with(area, |id| found.push(&self.objects[&id])),
            None => self
                .quadtree
                .query_all_with(|id| found.push(&self.objects[&id])),
        }
        found
    }

    pub fn query_at(&self, point: Point) -> Vec<&GameObject> {
        let mut found = Vec::new();
        self.quadtree
            .query_at_with(point, |id| found.push(&self.objects[&id]));
        found
    }

    /// Objects lying fully inside `area`.
    pub fn query_contained(&self, area: &Rectangle) -> Vec<&GameObject> {
        let mut found = Vec::new();
        self.quadtree
            .query_with(area, |id| found.push(&self.objects[&id]));
        found
    }

    /// Select every object intersecting `area`, replacing the selection.
    pub fn select(&mut self, area: &Rectangle) {
        let mut selection = FxHashSet::default();
        self.quadtree
            .query_intersect_with(area, |id| {
                selection.insert(id);
            });
        self.select_objects(selection);
    }

    /// Select every object under `point`, replacing the selection.
    pub fn select_at(&mut self, point: Point) {
        let mut selection = FxHashSet::default();
        self.quadtree.query_at_with(point, |id| {
            selection.insert(id);
        });
        self.select_objects(selection);
    }

    pub fn clear_selection(&mut self) {
        self.select_objects(FxHashSet::default());
    }

    fn select_objects(&mut self, selection: FxHashSet<ObjectId>) {
        for id in self.selection.difference(&selection) {
            if let Some(object) = self.objects.get_mut(id) {
                object.set_selected(false);
            }
        }
        for id in &selection {
            if let Some(object) = self.objects.get_mut(id) {
                object.set_selected(true);
            }
        }
        debug!(count = selection.len(), "selection changed");
        self.selection = selection;
    }

    /// Command every selected unit toward `destination`, either queueing it
    /// after their current waypoints or replacing them.
    pub fn send_selected(&mut self, destination: Point, add_waypoint: bool) {
        for id in &self.selection {
            if let Some(unit) = self.objects.get_mut(id).and_then(GameObject::as_unit_mut) {
                unit.send_to(destination, add_waypoint);
            }
        }
    }

    /// Send a single unit to `destination`, dropping its queued waypoints.
    pub fn set_destination(&mut self, id: ObjectId, destination: Point) -> ObjectResult<()> {
        match lookup_mut(&mut self.objects, id).as_unit_mut() {
            Some(unit) => {
                unit.send_to(destination, false);
                Ok(())
            }
            None => Err(ObjectError::NotAUnit(id)),
        }
    }
}

fn lookup_mut(objects: &mut FxHashMap<ObjectId, GameObject>, id: ObjectId) -> &mut GameObject {
    match objects.get_mut(&id) {
        Some(object) => object,
        None => panic!("unknown object id {}", id),
    }
}

// Move object to target in the quadtree, keeping its bbox in sync
fn relocate(quadtree: &mut QuadTree<ObjectId>, object: &mut GameObject, target: Rectangle) -> bool {
    match quadtree.move_to(object.id(), &object.bbox(), target) {
        Ok(()) => {
            object.set_bbox(target);
            true
        }
        Err(err) => {
            debug!(id = %object.id(), %err, "rejected move");
            false
        }
    }
}
