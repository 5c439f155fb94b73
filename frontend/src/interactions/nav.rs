/// How far below the top of the viewport a section counts as current.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;
/// Height of the fixed navbar; smooth scrolling stops this far above a
/// section so its heading isn't hidden.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, pos: f64) -> bool {
        self.top <= pos && pos < self.top + self.height
    }
}

/// Section that owns the current scroll position. Sections are checked in
/// document order and the last match wins. A winning section without an
/// id has no nav entry, so nothing is active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let pos = scroll_y + SCROLL_LOOKAHEAD_PX;
    sections
        .iter()
        .filter(|section| section.contains(pos))
        .last()
        .map(|section| section.id.as_str())
        .filter(|id| !id.is_empty())
}

pub fn scroll_target(section_top: f64) -> f64 {
    section_top - NAVBAR_OFFSET_PX
}

pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("companies", 800.0, 600.0),
            SectionBounds::new("about", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_later_section_is_the_only_active_one() {
        let sections = page();
        let active = active_section(750.0, &sections);

        assert_eq!(active, Some("companies"));
        assert!(is_active_link("#companies", active));
        assert!(!is_active_link("#home", active));
    }

    #[rstest]
    #[case(0.0, Some("home"))]
    #[case(699.0, Some("home"))]
    #[case(700.0, Some("companies"))]
    #[case(1799.0, Some("about"))]
    #[case(1800.0, None)]
    fn test_active_section_boundaries(#[case] scroll_y: f64, #[case] expected: Option<&str>) {
        assert_eq!(active_section(scroll_y, &page()), expected);
    }

    #[test]
    fn test_nothing_active_above_first_section() {
        let sections = vec![SectionBounds::new("home", 400.0, 800.0)];

        assert_eq!(active_section(0.0, &sections), None);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 300.0),
        ];

        assert_eq!(active_section(500.0, &sections), Some("inner"));
    }

    #[test]
    fn test_section_without_id_clears_highlight() {
        let sections = vec![
            SectionBounds::new("home", 0.0, 2000.0),
            SectionBounds::new("", 500.0, 300.0),
        ];

        assert_eq!(active_section(500.0, &sections), None);
    }

    #[test]
    fn test_scroll_target_clears_navbar() {
        assert_eq!(scroll_target(800.0), 720.0);
    }

    #[test]
    fn test_non_fragment_link_is_never_active() {
        assert!(!is_active_link("/bluewave", Some("bluewave")));
        assert!(!is_active_link("#home", None));
    }
}
