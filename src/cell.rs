use serde::{Deserialize, Serialize};

/// Mine/safe status of a single grid position.
///
/// `Safe` carries the adjacent-mine count directly, so a mine with a
/// leftover count is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    Safe(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent-mine count in `[0, 8]`, or `None` for a mine.
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Safe(count) => Some(count),
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// One grid position: mine/safe status plus the hidden flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    hidden: bool,
}

impl Cell {
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        self.kind.is_mine()
    }

    pub const fn is_hidden(self) -> bool {
        self.hidden
    }

    pub const fn rank(self) -> Option<u8> {
        self.kind.rank()
    }

    pub(crate) fn place_mine(&mut self) {
        self.kind = CellKind::Mine;
    }

    /// Accumulates one adjacent mine. No-op on a mine cell, which keeps no
    /// count of its own.
    pub(crate) fn bump_rank(&mut self) {
        if let CellKind::Safe(count) = &mut self.kind {
            *count += 1;
        }
    }

    pub(crate) fn unhide(&mut self) {
        self.hidden = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::default(),
            hidden: true,
        }
    }
}
