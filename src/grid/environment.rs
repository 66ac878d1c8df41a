use crate::grid::GridState;
use crate::search::{Environment, Transition};
use ndarray::Array2;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Every move costs the same; this is what makes BFS and IDS optimal on the
/// grid.
pub const STEP_COST: f64 = 1.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum GridAction {
    Up,
    Down,
    Left,
    Right,
}

impl GridAction {
    fn delta(self) -> (i32, i32) {
        match self {
            GridAction::Up => (0, -1),
            GridAction::Down => (0, 1),
            GridAction::Left => (-1, 0),
            GridAction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("maze text is empty")]
    Empty,
    #[error("maze rows have unequal lengths")]
    RaggedRows,
    #[error("unexpected character {0:?} in maze text")]
    UnexpectedCharacter(char),
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no goal cell")]
    MissingGoal,
    #[error("maze has more than one {0} cell")]
    DuplicateCell(&'static str),
}

/// A fixed maze instance. `y` grows downwards, `x` to the right, matching the
/// row-by-row text layout.
///
/// The text format is one character per cell: `#` wall, `.` open, `S` start,
/// `K` key, `G` goal. A maze without a `K` cell has no key precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEnvironment {
    walls: Array2<bool>,
    start: (i32, i32),
    key: Option<(i32, i32)>,
    goal: (i32, i32),
}

impl GridEnvironment {
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].chars().count();
        if width == 0 || rows.iter().any(|row| row.chars().count() != width) {
            return Err(GridError::RaggedRows);
        }

        let mut walls = Array2::from_elem((rows.len(), width), false);
        let mut start = None;
        let mut key = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                let position = (x as i32, y as i32);
                match cell {
                    '#' => walls[(y, x)] = true,
                    '.' => {}
                    'S' => {
                        if start.replace(position).is_some() {
                            return Err(GridError::DuplicateCell("start"));
                        }
                    }
                    'K' => {
                        if key.replace(position).is_some() {
                            return Err(GridError::DuplicateCell("key"));
                        }
                    }
                    'G' => {
                        if goal.replace(position).is_some() {
                            return Err(GridError::DuplicateCell("goal"));
                        }
                    }
                    other => return Err(GridError::UnexpectedCharacter(other)),
                }
            }
        }

        Ok(Self {
            walls,
            start: start.ok_or(GridError::MissingStart)?,
            key,
            goal: goal.ok_or(GridError::MissingGoal)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.walls.ncols() as i32
    }

    pub fn height(&self) -> i32 {
        self.walls.nrows() as i32
    }

    pub fn start(&self) -> (i32, i32) {
        self.start
    }

    pub fn key(&self) -> Option<(i32, i32)> {
        self.key
    }

    pub fn goal(&self) -> (i32, i32) {
        self.goal
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.walls[(y as usize, x as usize)]
    }

    fn is_open(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height() && !self.is_wall(x, y)
    }
}

impl Environment for GridEnvironment {
    type State = GridState;
    type Action = GridAction;

    fn initial_state(&self) -> GridState {
        let has_key = match self.key {
            Some(key) => key == self.start,
            None => true,
        };
        GridState::new(self.start.0, self.start.1, has_key)
    }

    fn is_goal(&self, state: &GridState) -> bool {
        state.position() == self.goal && state.has_key
    }

    fn successors(&self, state: &GridState) -> Vec<Transition<GridState, GridAction>> {
        GridAction::iter()
            .filter_map(|action| {
                let (dx, dy) = action.delta();
                let (x, y) = (state.x + dx, state.y + dy);
                if !self.is_open(x, y) {
                    return None;
                }
                let has_key = state.has_key || self.key == Some((x, y));
                Some(Transition {
                    state: GridState::new(x, y, has_key),
                    action,
                    cost: STEP_COST,
                })
            })
            .collect()
    }
}
