//! Mobile navigation menu.
//!
//! The page holds exactly one piece of UI state: whether the mobile menu is
//! open. It is modelled here as a two-state machine so the transitions can be
//! tested without a browser, and the same table is what `static/menu.js`
//! implements on the generated page:
//!
//! | state  | toggle | navigate |
//! |--------|--------|----------|
//! | Closed | Open   | Closed   |
//! | Open   | Closed | Closed   |
//!
//! The server-rendered markup always reflects [`MenuState::default`]
//! (closed). Links rendered with the close hook carry `data-menu-close`; the
//! script applies `navigate` when one of them is activated, after the
//! browser's own anchor navigation.

use maud::{Markup, PreEscaped, html};

/// Client-side half of the state machine, inlined into the page.
pub const MENU_JS: &str = include_str!("../static/menu.js");

/// Element id of the collapsible mobile panel.
pub const PANEL_ID: &str = "mobile-menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that reach the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger/close button was activated.
    Toggle,
    /// A navigation link carrying the close hook was activated.
    Navigate,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Any navigation closes the menu, whichever link it was.
    pub fn navigate(self) -> Self {
        MenuState::Closed
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::Navigate => self.navigate(),
        }
    }

    /// Fold a sequence of events starting from this state.
    pub fn replay<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = MenuEvent>,
    {
        events.into_iter().fold(self, MenuState::apply)
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    fn toggle_label(self) -> &'static str {
        if self.is_open() { "\u{2715}" } else { "\u{2630}" }
    }
}

/// Renders the toggle button shown at narrow widths.
pub fn toggle_button(state: MenuState) -> Markup {
    html! {
        button.menu-toggle type="button" aria-label="Toggle menu"
            aria-controls=(PANEL_ID) aria-expanded=(state.aria_expanded()) data-menu-toggle {
            span.menu-icon aria-hidden="true" { (state.toggle_label()) }
        }
    }
}

/// Renders the collapsible panel. Hidden unless `state` is open.
pub fn panel(state: MenuState, links: Markup) -> Markup {
    html! {
        div.mobile-menu id=(PANEL_ID) hidden[!state.is_open()] {
            div.container.mobile-menu-links {
                (links)
            }
        }
    }
}

/// Inline script wiring the toggle and close hooks.
pub fn script() -> Markup {
    html! {
        script { (PreEscaped(MENU_JS)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MenuEvent::{Navigate, Toggle};

    #[test]
    fn initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn odd_toggles_open_even_toggles_close() {
        for n in 0..9 {
            let state = MenuState::default().replay(std::iter::repeat_n(Toggle, n));
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn navigate_from_open_closes() {
        assert_eq!(MenuState::Open.navigate(), MenuState::Closed);
        assert_eq!(MenuState::Open.apply(Navigate), MenuState::Closed);
    }

    #[test]
    fn navigate_from_closed_stays_closed() {
        assert_eq!(MenuState::Closed.apply(Navigate), MenuState::Closed);
    }

    #[test]
    fn replay_mixed_sequence() {
        let state = MenuState::default().replay([Toggle, Navigate, Toggle, Toggle, Toggle]);
        assert_eq!(state, MenuState::Open);
    }

    #[test]
    fn closed_panel_is_hidden() {
        let html = panel(MenuState::Closed, html! { a href="#work" { "Work" } }).into_string();
        assert!(html.contains("hidden"));
        assert!(html.contains(r#"id="mobile-menu""#));
    }

    #[test]
    fn open_panel_is_visible() {
        let html = panel(MenuState::Open, html! {}).into_string();
        assert!(!html.contains("hidden"));
    }

    #[test]
    fn toggle_button_reflects_state() {
        let closed = toggle_button(MenuState::Closed).into_string();
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(closed.contains("data-menu-toggle"));
        let open = toggle_button(MenuState::Open).into_string();
        assert!(open.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn script_implements_close_hook() {
        assert!(MENU_JS.contains("data-menu-close"));
        assert!(MENU_JS.contains("data-menu-toggle"));
        assert!(MENU_JS.contains(PANEL_ID));
    }
}
