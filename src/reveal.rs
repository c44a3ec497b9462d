use crate::style::StylePatch;
use std::collections::HashSet;

pub const REVEALED_CLASS: &str = "animate-in";
pub const SKILLS_SECTION_CLASS: &str = "skills";
pub const ABOUT_SECTION_CLASS: &str = "about";

pub const REVEALED_RULE: &str = "
.animate-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    SkillBars,
    Counters,
}

impl RevealTrigger {
    pub fn for_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        let mut triggers = Vec::new();
        for class in classes {
            let trigger = match class {
                SKILLS_SECTION_CLASS => Self::SkillBars,
                ABOUT_SECTION_CLASS => Self::Counters,
                _ => continue,
            };
            if !triggers.contains(&trigger) {
                triggers.push(trigger);
            }
        }
        triggers
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SkillBars => "skill_bars",
            Self::Counters => "counters",
        }
    }
}

/// Tracks which observed sections have been revealed. A section is revealed
/// once; later intersections are ignored, so dependent animations start at
/// most once per section.
#[derive(Debug, Default)]
pub struct RevealLedger {
    revealed: HashSet<usize>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the first intersecting notification of `section`.
    pub fn observe(&mut self, section: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(section)
    }

    #[cfg(test)]
    fn is_revealed(&self, section: usize) -> bool {
        self.revealed.contains(&section)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

pub fn section_hidden() -> StylePatch {
    StylePatch::new()
        .set("opacity", "0")
        .set("transform", "translateY(30px)")
        .set("transition", "all 0.8s ease-out")
}

pub fn section_visible() -> StylePatch {
    StylePatch::new()
        .set("opacity", "1")
        .set("transform", "translateY(0)")
}

pub fn card_stagger(index: usize, step_ms: u32) -> StylePatch {
    let delay_ms = (index as u64).saturating_mul(u64::from(step_ms));
    StylePatch::new().set("transition-delay", format!("{delay_ms}ms"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals_and_later_ones_do_not() {
        let mut ledger = RevealLedger::new();

        assert!(!ledger.observe(2, false));
        assert!(!ledger.is_revealed(2));
        assert!(ledger.observe(2, true));
        assert!(!ledger.observe(2, false));
        assert!(!ledger.observe(2, true));
        assert!(ledger.is_revealed(2));
    }

    #[test]
    fn sections_are_tracked_independently() {
        let mut ledger = RevealLedger::new();

        assert!(ledger.observe(0, true));
        assert!(ledger.observe(1, true));
        assert!(!ledger.observe(0, true));
        assert_eq!(ledger.revealed_count(), 2);
    }

    #[test]
    fn triggers_follow_section_classes() {
        assert_eq!(
            RevealTrigger::for_classes(["section", "skills"]),
            vec![RevealTrigger::SkillBars]
        );
        assert_eq!(
            RevealTrigger::for_classes(["about", "skills", "about"]),
            vec![RevealTrigger::Counters, RevealTrigger::SkillBars]
        );
        assert!(RevealTrigger::for_classes(["hero"]).is_empty());
    }

    #[test]
    fn cards_are_staggered_by_page_order() {
        assert_eq!(card_stagger(0, 100).get("transition-delay"), Some("0ms"));
        assert_eq!(card_stagger(3, 100).get("transition-delay"), Some("300ms"));
    }

    #[test]
    fn hidden_sections_slide_up_into_place() {
        let hidden = section_hidden();
        let visible = section_visible();

        assert_eq!(hidden.get("opacity"), Some("0"));
        assert_eq!(hidden.get("transition"), Some("all 0.8s ease-out"));
        assert_eq!(visible.get("transform"), Some("translateY(0)"));
    }
}
