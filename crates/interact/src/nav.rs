/// Open/closed state of the navigation menu on narrow screens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavToggle {
    expanded: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Called when any navigation link is followed.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
