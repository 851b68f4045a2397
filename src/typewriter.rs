/// Interval between typewriter ticks.
pub const TICK_MS: u64 = 80;
/// Ticks a fully typed word stays on screen before deletion starts.
pub const HOLD_TICKS: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Cycles through a fixed word list, typing and deleting one character per
/// tick, forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    pub fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.current().chars().count();
        self.phase = match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len {
                    Phase::Holding(HOLD_TICKS)
                } else {
                    Phase::Typing
                }
            }
            Phase::Typing => Phase::Holding(HOLD_TICKS),
            Phase::Holding(0) => Phase::Deleting,
            Phase::Holding(n) => Phase::Holding(n - 1),
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                Phase::Deleting
            }
            Phase::Deleting => {
                self.word = (self.word + 1) % self.words.len();
                Phase::Typing
            }
        };
    }
}
