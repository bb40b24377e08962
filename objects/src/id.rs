use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out increasing ids starting at 1. Ids are never reused.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> ObjectId {
        ObjectId(self.last + 1)
    }

    pub fn next_id(&mut self) -> ObjectId {
        self.last += 1;
        ObjectId(self.last)
    }
}
