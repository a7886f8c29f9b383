/// Keyboard/mouse cursor over the displayed item list.
///
/// The cursor only tracks an index; keeping the active row visible is the
/// rendering layer's job (see [`super::MenuHost::reveal`]).
use log::debug;

/// Navigation keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
}

/// Active-row state. `None` means no row is active, which happens after the
/// mouse leaves the active row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    active: Option<usize>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { active: Some(0) }
    }
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The active index if it addresses one of `len` rows.
    #[must_use]
    pub fn selected(&self, len: usize) -> Option<usize> {
        self.active.filter(|&i| i < len)
    }

    /// Move down one row, stopping at the last of `len` rows.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.active.map_or(0, |i| i + 1).min(len - 1);
        self.set(Some(next));
    }

    /// Move up one row, stopping at the first.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.active.map_or(0, |i| i.saturating_sub(1)).min(len - 1);
        self.set(Some(next));
    }

    /// Mouse entered row `index`.
    pub fn hover(&mut self, index: usize, len: usize) {
        if index < len {
            self.set(Some(index));
        }
    }

    /// Mouse left row `index`; clears the cursor only if that row was active.
    pub fn leave(&mut self, index: usize) {
        if self.active == Some(index) {
            self.set(None);
        }
    }

    /// Back to the first row (menu opened or query changed).
    pub fn reset(&mut self) {
        self.set(Some(0));
    }

    fn set(&mut self, active: Option<usize>) {
        if self.active != active {
            debug!("cursor: {:?} -> {:?}", self.active, active);
        }
        self.active = active;
    }
}
