//! Partitioning options

use serde::{Deserialize, Serialize};

/// Controls how [`to_frames`](super::to_frames) treats a sequence whose length
/// is not a multiple of the frame length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    /// Keep the leftover items as a final, shorter frame instead of dropping them
    pub keep_trailing: bool,
    /// Reject the input up front if it would leave a trailing frame
    pub throw_if_trailing: bool,
}

impl FrameOptions {
    /// Options with both flags off: trailing items are discarded silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a short trailing frame is kept
    pub fn keep_trailing(mut self, keep: bool) -> Self {
        self.keep_trailing = keep;
        self
    }

    /// Set whether a short trailing frame is an error
    pub fn throw_if_trailing(mut self, throw: bool) -> Self {
        self.throw_if_trailing = throw;
        self
    }
}
