// Browsers round the reported ratio, so an entry sitting exactly on the
// threshold can come back a hair below it.
const RATIO_TOLERANCE: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the element that has to be on screen.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: &'static str,
}

impl WatchOptions {
    pub const FADE_IN: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };

    pub const STATS: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };
}

/// One-shot marker for an element that has been revealed. Once set it
/// stays set for the lifetime of the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityFlag(bool);

impl VisibilityFlag {
    pub fn is_set(self) -> bool {
        self.0
    }

    /// Feeds one intersection report. Returns `true` only on the report
    /// that flips the flag.
    pub fn observe(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.0 || !intersecting || ratio + RATIO_TOLERANCE < threshold {
            return false;
        }
        self.0 = true;
        true
    }

    /// Marks the element visible without an intersection report. Used when
    /// the platform cannot observe intersections at all.
    pub fn force(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }
}

pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        "animate-element animate-in"
    } else {
        "animate-element"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_flag_flips_once_for_repeated_events() {
        let mut flag = VisibilityFlag::default();
        let threshold = WatchOptions::FADE_IN.threshold;

        let flips = [0.2, 0.5, 1.0, 0.3]
            .into_iter()
            .filter(|ratio| flag.observe(true, *ratio, threshold))
            .count();

        assert_eq!(flips, 1);
        assert!(flag.is_set());
    }

    #[test]
    fn test_flag_is_never_cleared() {
        let mut flag = VisibilityFlag::default();
        flag.observe(true, 1.0, 0.1);

        assert!(!flag.observe(false, 0.0, 0.1));
        assert!(flag.is_set());
    }

    #[rstest]
    #[case(false, 0.5)]
    #[case(true, 0.05)]
    fn test_flag_ignores_reports_below_threshold(#[case] intersecting: bool, #[case] ratio: f64) {
        let mut flag = VisibilityFlag::default();

        assert!(!flag.observe(intersecting, ratio, 0.1));
        assert!(!flag.is_set());
    }

    #[test]
    fn test_force_after_observe_does_not_flip_again() {
        let mut flag = VisibilityFlag::default();

        assert!(flag.force());
        assert!(!flag.force());
        assert!(!flag.observe(true, 1.0, 0.1));
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(reveal_classes(false), "animate-element");
        assert_eq!(reveal_classes(true), "animate-element animate-in");
    }
}
