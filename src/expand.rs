/// Achievements shown on a collapsed experience card.
pub const VISIBLE_ACHIEVEMENTS: usize = 4;

/// Expand/collapse state of one card, keyed by the owning entry's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub id: String,
    pub expanded: bool,
}

impl CardState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            expanded: false,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

/// A list that shows its first `threshold` items until expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub len: usize,
    pub threshold: usize,
}

impl Truncation {
    pub fn new(len: usize, threshold: usize) -> Self {
        Self { len, threshold }
    }

    /// No control is rendered when everything already fits.
    pub fn has_toggle(&self) -> bool {
        self.len > self.threshold
    }

    pub fn hidden(&self) -> usize {
        self.len.saturating_sub(self.threshold)
    }

    pub fn visible_count(&self, expanded: bool) -> usize {
        if expanded {
            self.len
        } else {
            self.len.min(self.threshold)
        }
    }

    pub fn visible<'a, T>(&self, items: &'a [T], expanded: bool) -> &'a [T] {
        &items[..self.visible_count(expanded).min(items.len())]
    }

    /// Items revealed only when expanded.
    pub fn overflow<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.threshold.min(items.len())..]
    }

    pub fn toggle_label(&self, expanded: bool) -> String {
        if expanded {
            "COLLAPSE".to_string()
        } else {
            format!("+{} MORE", self.hidden())
        }
    }
}
