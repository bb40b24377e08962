use common::shapes::Rectangle;
use fxhash::FxHashMap;
use smallvec::SmallVec;

pub(crate) type NodeIndex = usize;

pub(crate) const ROOT: NodeIndex = 0;

pub(crate) type NodeStack = SmallVec<[NodeIndex; 64]>;

pub(crate) struct Node<K> {
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) bounds: Rectangle,
    pub(crate) depth: usize,
    pub(crate) entries: FxHashMap<K, Rectangle>,
    // Top-left, top-right, bottom-left, bottom-right
    pub(crate) children: Option<[NodeIndex; 4]>,
}

impl<K> Node<K> {
    pub(crate) fn new_leaf(bounds: Rectangle, parent: Option<NodeIndex>, depth: usize) -> Self {
        Self {
            parent,
            bounds,
            depth,
            entries: FxHashMap::default(),
            children: None,
        }
    }

    // Reuse a recycled arena slot, keeping the entry map's allocation
    pub(crate) fn initialize(
        &mut self,
        bounds: Rectangle,
        parent: Option<NodeIndex>,
        depth: usize,
    ) {
        self.bounds = bounds;
        self.parent = parent;
        self.depth = depth;
        self.entries.clear();
        self.children = None;
    }

    pub(crate) fn is_empty_leaf(&self) -> bool {
        self.entries.is_empty() && self.children.is_none()
    }
}

pub(crate) fn quadrants(bounds: &Rectangle) -> [Rectangle; 4] {
    let half_width = bounds.width / 2.0;
    let half_height = bounds.height / 2.0;
    let split_x = bounds.x + half_width;
    let split_y = bounds.y + half_height;
    [
        Rectangle::new(bounds.x, bounds.y, half_width, half_height),
        Rectangle::new(split_x, bounds.y, half_width, half_height),
        Rectangle::new(bounds.x, split_y, half_width, half_height),
        Rectangle::new(split_x, split_y, half_width, half_height),
    ]
}

pub(crate) fn is_power_of_two(value: f32) -> bool {
    value.is_finite() && value >= 1.0 && value.fract() == 0.0 && (value as u64).is_power_of_two()
}
