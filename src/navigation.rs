use crate::style::StylePatch;

const NAVBAR_SOLID: &str = "rgba(10, 10, 26, 0.95)";
const NAVBAR_TRANSLUCENT: &str = "rgba(10, 10, 26, 0.8)";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: Option<String>,
    pub top: f64,
}

/// Id of the last section, in document order, whose top minus `lookahead` is
/// at or above the scroll position. `None` when the page is above every
/// section, or when that section has no id.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - lookahead)
        .and_then(|section| section.id.as_deref())
}

pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (link_target(href), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

pub fn navbar_background(scroll_y: f64, threshold: f64) -> StylePatch {
    let background = if scroll_y > threshold {
        NAVBAR_SOLID
    } else {
        NAVBAR_TRANSLUCENT
    };
    StylePatch::new().set("background", background)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Outcome of clicking a nav link: the menu closes, default navigation is
/// suppressed, and the page scrolls to the linked section if there is one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkActivation<'a> {
    pub menu: MenuState,
    pub prevent_default: bool,
    pub scroll_to: Option<&'a str>,
}

pub fn activate_link(menu: MenuState, href: &str) -> LinkActivation<'_> {
    LinkActivation {
        menu: menu.closed(),
        prevent_default: true,
        scroll_to: link_target(href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        [("home", 0.0), ("about", 700.0), ("skills", 1_400.0), ("contact", 2_100.0)]
            .into_iter()
            .map(|(id, top)| SectionOffset {
                id: Some(id.to_string()),
                top,
            })
            .collect()
    }

    fn active_links(scroll_y: f64) -> Vec<&'static str> {
        let sections = sections();
        let active = active_section(&sections, scroll_y, 200.0);
        ["#home", "#about", "#skills", "#contact"]
            .into_iter()
            .filter(|href| is_link_active(href, active))
            .collect()
    }

    #[test]
    fn lookahead_activates_a_section_before_it_reaches_the_top() {
        let sections = sections();

        assert_eq!(active_section(&sections, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 200.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 200.0), Some("about"));
        assert_eq!(active_section(&sections, 5_000.0, 200.0), Some("contact"));
    }

    #[test]
    fn nothing_is_active_above_the_first_section() {
        let sections = vec![SectionOffset {
            id: Some("about".to_string()),
            top: 900.0,
        }];

        assert_eq!(active_section(&sections, 100.0, 200.0), None);
        assert_eq!(active_section(&[], 100.0, 200.0), None);
    }

    #[test]
    fn at_most_one_link_is_active_for_any_scroll_position() {
        for step in 0..60 {
            let scroll_y = f64::from(step) * 50.0;
            assert_eq!(active_links(scroll_y).len(), 1, "scroll_y = {scroll_y}");
        }
        assert_eq!(active_links(1_250.0), vec!["#skills"]);
    }

    #[test]
    fn anonymous_section_clears_the_active_link() {
        let mut sections = sections();
        sections[1].id = None;

        assert_eq!(active_section(&sections, 600.0, 200.0), None);
    }

    #[test]
    fn link_target_requires_a_fragment() {
        assert_eq!(link_target("#skills"), Some("skills"));
        assert_eq!(link_target("#"), None);
        assert_eq!(link_target("/resume.pdf"), None);
    }

    #[test]
    fn navbar_turns_solid_past_the_threshold() {
        assert_eq!(
            navbar_background(50.0, 50.0).get("background"),
            Some("rgba(10, 10, 26, 0.8)")
        );
        assert_eq!(
            navbar_background(51.0, 50.0).get("background"),
            Some("rgba(10, 10, 26, 0.95)")
        );
    }

    #[test]
    fn every_link_click_closes_the_menu_and_suppresses_navigation() {
        let open = MenuState::default().toggled();

        for (href, scroll_to) in [("#skills", Some("skills")), ("#", None), ("/resume.pdf", None)] {
            let activation = activate_link(open, href);
            assert!(!activation.menu.is_open(), "href = {href}");
            assert!(activation.prevent_default, "href = {href}");
            assert_eq!(activation.scroll_to, scroll_to);
        }
    }

    #[test]
    fn menu_toggles_and_closes() {
        let menu = MenuState::default();

        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert!(!menu.toggled().closed().is_open());
    }
}
