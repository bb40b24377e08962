#[derive(Debug, Clone)]
pub struct Config {
    /// Nodes whose halves would be narrower or shorter than this stay leaves.
    pub min_size: f32,
    pub max_depth: usize,
    /// Collapse subtrees that become empty after a removal or move.
    pub prune_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // Matches integer world coordinates: a 1x1 cell never splits.
            min_size: 1.0,
            max_depth: 16,
            prune_empty: true,
        }
    }
}
