//! State owned by the landing page while it is mounted: the current
//! section, the mobile menu and the expanded project card.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::nav::{active_section, SectionBounds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    pub fn css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

/// Styles for the three hamburger bars. Open turns them into an X.
pub fn hamburger_bars(open: bool) -> [BarStyle; 3] {
    if open {
        [
            BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
            BarStyle { transform: "none", opacity: "0" },
            BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
        ]
    } else {
        [BarStyle { transform: "none", opacity: "1" }; 3]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingState {
    pub active_section: Option<String>,
    pub scroll_y: f64,
    pub menu_open: bool,
    pub active_card: Option<usize>,
}

pub enum LandingAction {
    Scrolled { scroll_y: f64, sections: Vec<SectionBounds> },
    ToggleMenu,
    CloseMenu,
    /// Opens the card, or closes it if it's already open. Any other open
    /// card closes.
    ToggleCard(usize),
    ClearCard,
}

impl LandingState {
    pub fn is_card_active(&self, index: usize) -> bool {
        self.active_card == Some(index)
    }
}

impl Reducible for LandingState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LandingAction::Scrolled { scroll_y, sections } => {
                next.scroll_y = scroll_y;
                next.active_section = active_section(scroll_y, &sections).map(str::to_string);
                if next.active_section != self.active_section {
                    debug!("Active section is now {:?}", next.active_section);
                }
            }
            LandingAction::ToggleMenu => next.menu_open = !self.menu_open,
            LandingAction::CloseMenu => {
                if !self.menu_open {
                    return self;
                }
                next.menu_open = false;
            }
            LandingAction::ToggleCard(index) => {
                next.active_card = if self.is_card_active(index) { None } else { Some(index) };
            }
            LandingAction::ClearCard => {
                if self.active_card.is_none() {
                    return self;
                }
                next.active_card = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 900.0),
            SectionBounds::new("about", 900.0, 900.0),
        ]
    }

    #[test]
    fn test_scroll_updates_active_section() {
        let state = Rc::new(LandingState::default()).reduce(LandingAction::Scrolled {
            scroll_y: 850.0,
            sections: sections(),
        });

        assert_eq!(state.active_section.as_deref(), Some("about"));
        assert_eq!(state.scroll_y, 850.0);
    }

    #[test]
    fn test_scroll_past_last_section_clears_highlight() {
        let state = Rc::new(LandingState::default())
            .reduce(LandingAction::Scrolled { scroll_y: 0.0, sections: sections() })
            .reduce(LandingAction::Scrolled { scroll_y: 5000.0, sections: sections() });

        assert_eq!(state.active_section, None);
    }

    #[test]
    fn test_opening_a_card_closes_the_previous_one() {
        let state = Rc::new(LandingState::default())
            .reduce(LandingAction::ToggleCard(0))
            .reduce(LandingAction::ToggleCard(2));

        assert!(!state.is_card_active(0));
        assert!(state.is_card_active(2));
    }

    #[test]
    fn test_toggling_the_open_card_closes_it() {
        let state = Rc::new(LandingState::default())
            .reduce(LandingAction::ToggleCard(1))
            .reduce(LandingAction::ToggleCard(1));

        assert_eq!(state.active_card, None);
    }

    #[test]
    fn test_clear_card_without_open_card_keeps_state() {
        let state = Rc::new(LandingState::default());
        let next = Rc::clone(&state).reduce(LandingAction::ClearCard);

        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let state = Rc::new(LandingState::default()).reduce(LandingAction::ToggleMenu);
        assert!(state.menu_open);

        let state = state.reduce(LandingAction::CloseMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_hamburger_bars() {
        let open = hamburger_bars(true);
        assert_eq!(open[0].transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(open[1].opacity, "0");
        assert_eq!(open[2].transform, "rotate(-45deg) translate(7px, -6px)");

        let closed = hamburger_bars(false);
        assert!(closed.iter().all(|bar| bar.transform == "none" && bar.opacity == "1"));
    }
}
