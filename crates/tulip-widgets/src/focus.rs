//! Focus traversal across a fixed set of widgets.

/// Routes keyboard focus among `N` slots, skipping slots that are currently
/// not focusable (for example a disabled checkbox, which has left the tab
/// order).
///
/// The ring only tracks an index.  Callers pass the current focusability of
/// every slot, usually `element().is_focusable()` of each widget, and deliver
/// the resulting blur/focus messages themselves.
pub struct FocusRing<const N: usize> {
    focused: usize,
}

impl<const N: usize> FocusRing<N> {
    const NON_EMPTY: () = assert!(N > 0, "a focus ring needs at least one slot");

    /// Create a focus ring with focus on the first slot (index 0).
    pub fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self { focused: 0 }
    }

    /// Return the index of the currently focused slot.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The slot [`focus_next`](FocusRing::focus_next) would move to.
    pub fn next_focusable(&self, focusable: [bool; N]) -> usize {
        self.scan(focusable, 1)
    }

    /// The slot [`focus_prev`](FocusRing::focus_prev) would move to.
    pub fn prev_focusable(&self, focusable: [bool; N]) -> usize {
        self.scan(focusable, N - 1)
    }

    /// The current slot if it is still focusable, otherwise the next one that is.
    pub fn repaired(&self, focusable: [bool; N]) -> usize {
        if focusable[self.focused] {
            self.focused
        } else {
            self.next_focusable(focusable)
        }
    }

    /// Move focus to the next focusable slot, wrapping around after the last.
    ///
    /// Focus stays put when no other slot is focusable.
    pub fn focus_next(&mut self, focusable: [bool; N]) -> usize {
        self.focused = self.next_focusable(focusable);
        self.focused
    }

    /// Move focus to the previous focusable slot, wrapping around before the first.
    pub fn focus_prev(&mut self, focusable: [bool; N]) -> usize {
        self.focused = self.prev_focusable(focusable);
        self.focused
    }

    /// If the focused slot stopped being focusable, move on to the next one.
    pub fn repair(&mut self, focusable: [bool; N]) -> usize {
        self.focused = self.repaired(focusable);
        self.focused
    }

    /// Set focus to the given slot index, clamped to the valid range.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(N - 1);
    }

    /// Return whether the slot at the given index currently has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }

    fn scan(&self, focusable: [bool; N], stride: usize) -> usize {
        let mut candidate = self.focused;
        for _ in 1..N {
            candidate = (candidate + stride) % N;
            if focusable[candidate] {
                return candidate;
            }
        }
        self.focused
    }
}

impl<const N: usize> Default for FocusRing<N> {
    fn default() -> Self {
        Self::new()
    }
}
