//! Stat counters that count up from zero once they scroll into view.

pub const COUNT_DURATION_MS: f64 = 2000.0;
pub const FRAME_INTERVAL_MS: f64 = 16.0;
/// Pause between the label dropping to `0` and the first frame.
pub const COUNT_START_DELAY_MS: u32 = 500;

/// A stat label such as `1200+` split into the number to count to and the
/// text needed to put it back together afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterLabel {
    original: String,
    target: u64,
}

impl CounterLabel {
    /// Every digit in the label, concatenated, is the target. Labels with
    /// no digits, a zero target, or more digits than fit in a `u64` don't
    /// animate.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok().filter(|n| *n > 0)?;
        Some(Self {
            original: text.to_string(),
            target,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Only two suffixes come back: a trailing `+` and a `B` right after
    /// the number. Anything else in the label is lost.
    pub fn finished_text(&self) -> String {
        let digits = self.target.to_string();
        let mut text = digits.clone();
        if self.original.contains('+') {
            text.push('+');
        }
        if self.original.contains('B') {
            text.insert(digits.len(), 'B');
        }
        text
    }
}

/// Frame-by-frame values for a counter. Each frame adds a fixed increment
/// and shows the truncated total; the last frame is always exactly the
/// target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            increment: target as f64 / (duration_ms / FRAME_INTERVAL_MS),
            current: 0.0,
            done: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(self.current.floor() as u64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }
}

/// What a single stat element shows, plus its "counted" guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCounter {
    label: Option<CounterLabel>,
    display: String,
    counted: bool,
}

impl StatCounter {
    pub fn new(text: &str) -> Self {
        Self {
            label: CounterLabel::parse(text),
            display: text.to_string(),
            counted: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Starts counting the first time it's called. Later calls, and labels
    /// without a number, get `None` and leave the display untouched.
    pub fn start(&mut self, duration_ms: f64) -> Option<CounterAnimation> {
        if self.counted {
            return None;
        }
        self.counted = true;
        let target = self.label.as_ref()?.target();
        self.display = "0".to_string();
        Some(CounterAnimation::new(target, duration_ms))
    }

    pub fn show_frame(&mut self, value: u64) {
        self.display = value.to_string();
    }

    pub fn finish(&mut self) {
        if let Some(label) = &self.label {
            self.display = label.finished_text();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_counter_ends_on_label_with_suffix() {
        let mut stat = StatCounter::new("1200+");
        let frames: Vec<u64> = stat.start(COUNT_DURATION_MS).unwrap().collect();

        for value in &frames {
            stat.show_frame(*value);
        }
        stat.finish();

        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(frames.iter().all(|value| *value <= 1200));
        assert_eq!(frames.last(), Some(&1200));
        assert_eq!(stat.display(), "1200+");
    }

    #[test]
    fn test_counter_truncates_each_frame() {
        let frames: Vec<u64> = CounterAnimation::new(1200, 2000.0).collect();

        // 1200 / (2000 / 16) = 9.6 per frame
        assert_eq!(&frames[..3], &[9, 19, 28]);
        assert!(frames.len() >= 125);
    }

    #[test]
    fn test_label_without_digits_is_left_alone() {
        let mut stat = StatCounter::new("Global");

        assert!(stat.start(COUNT_DURATION_MS).is_none());
        stat.finish();

        assert_eq!(stat.display(), "Global");
        assert!(stat.is_counted());
    }

    #[test]
    fn test_counter_runs_once() {
        let mut stat = StatCounter::new("50+");

        assert!(stat.start(COUNT_DURATION_MS).is_some());
        assert!(stat.start(COUNT_DURATION_MS).is_none());
    }

    #[test]
    fn test_start_resets_display_to_zero() {
        let mut stat = StatCounter::new("99%");
        stat.start(COUNT_DURATION_MS);

        assert_eq!(stat.display(), "0");
    }

    #[rstest]
    #[case("1200+", "1200+")]
    #[case("5B+", "5B+")]
    #[case("3B", "3B")]
    #[case("24", "24")]
    #[case("99%", "99")]
    fn test_finished_text(#[case] label: &str, #[case] expected: &str) {
        let label = CounterLabel::parse(label).unwrap();

        assert_eq!(label.finished_text(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("N/A")]
    #[case("0+")]
    #[case("99999999999999999999999")]
    fn test_parse_rejects(#[case] label: &str) {
        assert_eq!(CounterLabel::parse(label), None);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let frames: Vec<u64> = CounterAnimation::new(7, 0.0).collect();

        assert_eq!(frames, vec![7]);
    }
}
