use crate::config::EffectsConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_word_ms: u32,
}

impl TypingDelays {
    pub fn from_config(config: &EffectsConfig) -> Self {
        Self {
            type_ms: config.type_delay_ms,
            delete_ms: config.delete_delay_ms,
            hold_ms: config.hold_delay_ms,
            next_word_ms: config.next_word_delay_ms,
        }
    }
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self::from_config(&EffectsConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Typewriter cursor over a cyclic word list.
///
/// Each word is typed one character per tick, held, deleted one character per
/// tick, then the next word starts after a short pause. Characters are Unicode
/// scalar values, so multi-byte scripts step one glyph at a time.
#[derive(Clone, Debug)]
pub struct TypingState {
    words: Vec<Vec<char>>,
    delays: TypingDelays,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    pub fn new<S: AsRef<str>>(words: &[S], delays: TypingDelays) -> Self {
        Self {
            words: words
                .iter()
                .map(|word| word.as_ref().chars().collect())
                .collect(),
            delays,
            word_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    #[cfg(test)]
    fn word_index(&self) -> usize {
        self.word_index
    }

    #[cfg(test)]
    fn char_index(&self) -> usize {
        self.char_index
    }

    #[cfg(test)]
    fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one step. Returns `None` when there are no words to type.
    pub fn tick(&mut self) -> Option<TypingFrame> {
        let word = self.words.get(self.word_index)?;
        let len = word.len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = word[..self.char_index].iter().collect();

        let mut delay_ms = if self.deleting {
            self.delays.delete_ms
        } else {
            self.delays.type_ms
        };

        if !self.deleting && self.char_index == len {
            delay_ms = self.delays.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = self.delays.next_word_ms;
        }

        Some(TypingFrame { text, delay_ms })
    }
}
