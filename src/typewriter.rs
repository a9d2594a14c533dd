//! Rotating "I'm a ..." title in the hero.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speeds {
    pub type_char: Duration,
    pub erase_char: Duration,
    /// Pause with the full word shown before erasing.
    pub hold: Duration,
}

impl Default for Speeds {
    fn default() -> Self {
        Self {
            type_char: Duration::from_millis(50),
            erase_char: Duration::from_millis(30),
            hold: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    speeds: Speeds,
    word: usize,
    chars: usize,
    stage: Stage,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], speeds: Speeds) -> Self {
        Self {
            words,
            speeds,
            word: 0,
            chars: 0,
            stage: Stage::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    /// Currently visible prefix of the active word.
    pub fn text(&self) -> &'static str {
        let word = self.current();
        match word.char_indices().nth(self.chars) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Delay before the first call to [`Typewriter::tick`].
    pub fn first_delay(&self) -> Duration {
        self.speeds.type_char
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let len = self.current().chars().count();
        if len == 0 {
            self.word = (self.word + 1) % self.words.len().max(1);
            return self.speeds.hold;
        }
        match self.stage {
            Stage::Typing => {
                self.chars = (self.chars + 1).min(len);
                if self.chars == len {
                    self.stage = Stage::Holding;
                    self.speeds.hold
                } else {
                    self.speeds.type_char
                }
            }
            Stage::Holding => {
                self.stage = Stage::Erasing;
                self.erase()
            }
            Stage::Erasing => self.erase(),
        }
    }

    fn erase(&mut self) -> Duration {
        self.chars = self.chars.saturating_sub(1);
        if self.chars == 0 {
            self.word = (self.word + 1) % self.words.len();
            self.stage = Stage::Typing;
            self.speeds.type_char
        } else {
            self.speeds.erase_char
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    #[test]
    fn test_types_holds_erases_and_loops() {
        let speeds = Speeds::default();
        let mut tw = Typewriter::new(WORDS, speeds);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), speeds.type_char);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), speeds.hold);
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.tick(), speeds.erase_char);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), speeds.type_char);
        assert_eq!(tw.text(), "");

        for expected in ["x", "xy", "xyz"] {
            tw.tick();
            assert_eq!(tw.text(), expected);
        }
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "");

        // back to the first word
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_prefixes() {
        const ACCENTED: &[&str] = &["héllo"];
        let mut tw = Typewriter::new(ACCENTED, Speeds::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_empty_word_list_is_inert() {
        let mut tw = Typewriter::new(&[], Speeds::default());
        assert_eq!(tw.tick(), Speeds::default().hold);
        assert_eq!(tw.text(), "");
    }
}
