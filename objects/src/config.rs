/// What a unit does when the world edge rejects its next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockedPolicy {
    /// Stop and forget all queued waypoints.
    #[default]
    Halt,
    /// Give up on the current leg and continue with the next waypoint.
    SkipLeg,
    /// Stay on the leg and retry every tick.
    Keep,
}

#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Units closer than this to a waypoint count as having arrived.
    pub arrival_threshold: f32,
    /// World units per time unit for units created with `ObjectKind::unit`.
    pub default_unit_speed: f32,
    pub blocked_policy: BlockedPolicy,
    pub quadtree: quadtree::Config,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            arrival_threshold: 0.5,
            default_unit_speed: 1.0,
            blocked_policy: BlockedPolicy::default(),
            quadtree: quadtree::Config::default(),
        }
    }
}
