//! Mobile navigation menu state

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn closed() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn opened() -> Self {
        Self { open: true }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu, returning whether it was open
    pub const fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert!(!MenuState::default().is_open());
        assert_eq!(MenuState::default(), MenuState::closed());
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuState::closed();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut menu = MenuState::opened();
        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }
}
