//! Typewriter reveal state: a fixed string typed out one character per tick.
//!
//! DESIGN
//! ======
//! The widget owns a `TypewriterState` and advances it from a timer task. The
//! state never loops or rewinds; a fresh instance is created on remount.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Default milliseconds between characters.
pub const DEFAULT_SPEED_MS: u32 = 80;

/// Mount-time timing for a typewriter widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub speed_ms: u32,
    pub delay_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { speed_ms: DEFAULT_SPEED_MS, delay_ms: 0 }
    }
}

impl TypewriterConfig {
    /// Tick interval, never zero so a timer cannot spin.
    pub fn tick_ms(&self) -> u32 {
        self.speed_ms.max(1)
    }

    /// Milliseconds to wait before revealing character number `tick` (0-based).
    ///
    /// The first reveal waits out the initial delay plus one interval; every
    /// later reveal waits one interval.
    pub fn sleep_before(&self, tick: usize) -> u32 {
        if tick == 0 { self.delay_ms.saturating_add(self.tick_ms()) } else { self.tick_ms() }
    }
}

/// Displayed prefix of the target string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    chars: Vec<char>,
    typed: usize,
}

impl TypewriterState {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    /// Reveal one more character. Returns `true` while characters remain.
    pub fn tick(&mut self) -> bool {
        if self.typed < self.chars.len() {
            self.typed += 1;
        }
        !self.is_complete()
    }

    pub fn typed_len(&self) -> usize {
        self.typed
    }

    pub fn total_len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_complete(&self) -> bool {
        self.typed >= self.chars.len()
    }

    pub fn prefix(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }
}

/// Number of characters shown `elapsed_ms` after mount.
///
/// Walks the same [`TypewriterConfig::sleep_before`] schedule the widget
/// sleeps on: zero until `delay_ms` plus one interval has elapsed, then one
/// more per full interval, capped at `text_len`.
pub fn typed_len_at(text_len: usize, speed_ms: u32, delay_ms: u32, elapsed_ms: u64) -> usize {
    let config = TypewriterConfig { speed_ms, delay_ms };
    let mut due = 0_u64;
    for tick in 0..text_len {
        due += u64::from(config.sleep_before(tick));
        if due > elapsed_ms {
            return tick;
        }
    }
    text_len
}
