//! Selection state for the startup menus.

/// Cursor over a list of options plus an optional trailing "Quit" row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    len: usize,
    allow_quit: bool,
    selected: usize,
}

impl Menu {
    /// Create a menu over `len` options with the first one selected.
    #[must_use]
    pub const fn new(len: usize, allow_quit: bool) -> Self {
        Self {
            len,
            allow_quit,
            selected: 0,
        }
    }

    /// Number of selectable rows, including "Quit".
    #[must_use]
    pub const fn rows(&self) -> usize {
        let rows = if self.allow_quit { self.len + 1 } else { self.len };
        if rows == 0 {
            1
        } else {
            rows
        }
    }

    /// Index of the highlighted row.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Move down, wrapping to the top.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.rows();
    }

    /// Move up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let rows = self.rows();
        self.selected = (self.selected + rows - 1) % rows;
    }

    /// Option index for the highlighted row, or None for "Quit".
    #[must_use]
    pub const fn choice(&self) -> Option<usize> {
        if self.allow_quit && self.selected == self.len {
            None
        } else {
            Some(self.selected)
        }
    }
}
