//! Current-screen identity and back navigation.

use super::intent::Screen;

/// Owns the single current-screen field.
///
/// The two transitions below are the only way the field changes; shells
/// call them from the UI thread and re-render from the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Screen::Home,
        }
    }
}

impl Navigator {
    /// Start on the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently shown.
    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Unconditional jump; reachability is not validated.
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current, to = ?screen, "navigate");
        self.current = screen;
    }

    /// One step of back navigation along [`Screen::parent`].
    pub fn navigate_back(&mut self) {
        self.navigate_to(self.current.parent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn navigate_to_is_unconditional() {
        let mut nav = Navigator::new();
        for screen in [
            Screen::GroupDetails,
            Screen::Home,
            Screen::CreateGroup,
            Screen::GroupList,
        ] {
            nav.navigate_to(screen);
            assert_eq!(nav.current(), screen);
        }
    }

    #[test]
    fn back_follows_the_fixed_table() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::CreateGroup);
        nav.navigate_back();
        assert_eq!(nav.current(), Screen::GroupList);
        nav.navigate_back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn back_on_home_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.navigate_back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn details_always_backs_to_the_list() {
        // No history stack: even entered straight from Home, details backs
        // to the list.
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::GroupDetails);
        nav.navigate_back();
        assert_eq!(nav.current(), Screen::GroupList);
    }
}
