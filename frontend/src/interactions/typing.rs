use std::rc::Rc;

use yew::prelude::*;

pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPING_SPEED_MS: u32 = 50;

/// Hero title that shows in full until typing starts, then blanks and
/// reappears one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    typed: Option<usize>,
}

pub enum TypewriterAction {
    Start,
    Advance,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            typed: None,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_complete(&self) -> bool {
        self.typed.map_or(true, |typed| typed >= self.char_count())
    }

    pub fn visible(&self) -> &str {
        match self.typed {
            None => &self.text,
            Some(typed) => match self.text.char_indices().nth(typed) {
                Some((end, _)) => &self.text[..end],
                None => &self.text,
            },
        }
    }
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let typed = match action {
            TypewriterAction::Start => 0,
            TypewriterAction::Advance => match self.typed {
                Some(typed) if typed < self.char_count() => typed + 1,
                _ => return self,
            },
        };
        Rc::new(Self {
            text: self.text.clone(),
            typed: Some(typed),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_types_one_char_per_step() {
        let mut writer = Rc::new(Typewriter::new("Hi!"));
        assert_eq!(writer.visible(), "Hi!");

        writer = writer.reduce(TypewriterAction::Start);
        assert_eq!(writer.visible(), "");

        let mut seen = Vec::new();
        while !writer.is_complete() {
            writer = writer.reduce(TypewriterAction::Advance);
            seen.push(writer.visible().to_string());
        }

        assert_eq!(seen, vec!["H", "Hi", "Hi!"]);
    }

    #[test]
    fn test_multibyte_text() {
        let writer = Rc::new(Typewriter::new("Ünïcode"))
            .reduce(TypewriterAction::Start)
            .reduce(TypewriterAction::Advance)
            .reduce(TypewriterAction::Advance);

        assert_eq!(writer.visible(), "Ün");
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let writer = Rc::new(Typewriter::new("a"))
            .reduce(TypewriterAction::Start)
            .reduce(TypewriterAction::Advance);
        let again = Rc::clone(&writer).reduce(TypewriterAction::Advance);

        assert!(Rc::ptr_eq(&writer, &again));
    }

    #[test]
    fn test_advance_before_start_is_noop() {
        let writer = Rc::new(Typewriter::new("abc")).reduce(TypewriterAction::Advance);

        assert_eq!(writer.visible(), "abc");
    }
}
