//! Local view state: project gallery position and toast notices.
//!
//! DESIGN
//! ======
//! These values live in page-local signals and are discarded on navigation;
//! only their transitions are modeled here.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 2500;

/// Active image in a project gallery. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    pub index: usize,
    pub len: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jump to `index`, ignoring out-of-range values.
    pub fn select(self, index: usize) -> Self {
        if index < self.len { Self { index, ..self } } else { self }
    }

    /// One-based "current / total" label.
    pub fn counter(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} / {}", self.index + 1, self.len)
        }
    }
}

/// A short notice shown by the toast layer. `seq` distinguishes repeated
/// identical messages so an older dismiss timer cannot hide a newer toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    pub message: Option<String>,
    pub seq: u64,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Hide the toast if `seq` is still the one on screen.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}
