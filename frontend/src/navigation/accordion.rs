//! Tap-driven accordion state for the mobile menu. No timers involved.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionState<K> {
    Collapsed,
    Expanded(K),
}

/// Visibility of the slide-in menu plus which section is expanded inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion<K> {
    visible: bool,
    state: AccordionState<K>,
    default_key: K,
}

impl<K: Copy + PartialEq> Accordion<K> {
    pub fn new(default_key: K) -> Self {
        Self {
            visible: false,
            state: AccordionState::Collapsed,
            default_key,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> AccordionState<K> {
        self.state
    }

    pub fn expanded(&self) -> Option<K> {
        match self.state {
            AccordionState::Expanded(key) => Some(key),
            AccordionState::Collapsed => None,
        }
    }

    pub fn is_expanded(&self, key: K) -> bool {
        self.state == AccordionState::Expanded(key)
    }

    /// Shows the menu with the default section expanded. Opening an already
    /// visible menu leaves it as it is.
    pub fn open(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.state = AccordionState::Expanded(self.default_key);
    }

    /// Hides the menu and forgets the expanded section.
    pub fn close(&mut self) {
        self.visible = false;
        self.state = AccordionState::Collapsed;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn tap_header(&mut self, key: K) {
        self.state = if self.is_expanded(key) {
            AccordionState::Collapsed
        } else {
            AccordionState::Expanded(key)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::nav_data::SectionKey;

    #[test]
    fn starts_hidden_and_collapsed() {
        let accordion = Accordion::new(SectionKey::Solutions);
        assert!(!accordion.is_visible());
        assert_eq!(accordion.state(), AccordionState::Collapsed);
    }

    #[test]
    fn tapping_expanded_header_collapses_it() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.open();
        accordion.tap_header(SectionKey::Solutions);
        assert_eq!(accordion.state(), AccordionState::Collapsed);
    }

    #[test]
    fn tapping_other_header_leaves_exactly_one_expanded() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.open();
        for key in [SectionKey::Resources, SectionKey::WhoWeServe, SectionKey::Industries] {
            accordion.tap_header(key);
            assert_eq!(accordion.expanded(), Some(key));
            assert!(!accordion.is_expanded(SectionKey::Solutions));
        }
    }

    #[test]
    fn opening_always_expands_default() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.open();
        accordion.tap_header(SectionKey::Resources);
        accordion.close();
        assert_eq!(accordion.state(), AccordionState::Collapsed);

        accordion.open();
        assert_eq!(accordion.expanded(), Some(SectionKey::Solutions));

        accordion.tap_header(SectionKey::Solutions);
        accordion.toggle();
        accordion.toggle();
        assert_eq!(accordion.expanded(), Some(SectionKey::Solutions));
    }

    #[test]
    fn reopening_a_visible_menu_keeps_current_section() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.open();
        accordion.tap_header(SectionKey::Industries);
        accordion.open();
        assert_eq!(accordion.expanded(), Some(SectionKey::Industries));
    }

    #[test]
    fn close_resets_visibility_and_state() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.toggle();
        assert!(accordion.is_visible());
        accordion.toggle();
        assert!(!accordion.is_visible());
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn mobile_scenario() {
        let mut accordion = Accordion::new(SectionKey::Solutions);
        accordion.open();
        assert_eq!(accordion.expanded(), Some(SectionKey::Solutions));

        accordion.tap_header(SectionKey::Industries);
        assert_eq!(accordion.expanded(), Some(SectionKey::Industries));
        assert!(!accordion.is_expanded(SectionKey::Solutions));

        accordion.tap_header(SectionKey::Industries);
        assert_eq!(accordion.state(), AccordionState::Collapsed);
    }
}
