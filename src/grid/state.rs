use serde::Serialize;

/// Position plus the goal-precondition flag. This is the full search state:
/// reaching the same cell with and without the key are different states, and
/// both carry their own closed-set entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridState {
    pub x: i32,
    pub y: i32,
    pub has_key: bool,
}

impl GridState {
    pub fn new(x: i32, y: i32, has_key: bool) -> Self {
        Self { x, y, has_key }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
