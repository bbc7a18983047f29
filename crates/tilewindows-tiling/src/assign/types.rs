//! Assignment result types.

/// How a target found its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The target's saved index named this window.
    Index,
    /// First free standard window, in enumeration order.
    Fallback,
}

/// One target paired with one live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// Position of the target in the stored sequence.
    pub target: usize,
    /// Enumeration index of the live window.
    pub window: u32,
    pub kind: MatchKind,
}

/// Per-application mapping from saved targets to live windows.
///
/// `pairs` is ordered by target position. `gaps` holds the positions of
/// targets that found no window, also in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pub pairs: Vec<Pairing>,
    pub gaps: Vec<usize>,
}

impl Assignment {
    /// The live window assigned to the target at `target`, if any.
    pub fn window_for(&self, target: usize) -> Option<u32> {
        self.pairs
            .iter()
            .find(|p| p.target == target)
            .map(|p| p.window)
    }

    /// The target position that claimed live window `window`, if any.
    pub fn target_for(&self, window: u32) -> Option<usize> {
        self.pairs
            .iter()
            .find(|p| p.window == window)
            .map(|p| p.target)
    }

    pub fn is_total(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
