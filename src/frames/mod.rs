//! Partitioning ordered sequences into fixed-length frames

use thiserror::Error;

pub mod options;
pub mod partition;

pub use options::FrameOptions;
pub use partition::{frame_count, to_frames};

/// Invalid arguments to a partitioning call.
///
/// Always raised before any frame is built or any operation is started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Frame or chunk length of zero
    #[error("frame length must be greater than 0")]
    ZeroFrameLength,

    /// Trailing items were rejected by `throw_if_trailing`
    #[error(
        "sequence length {len} is not a multiple of frame length {frame_length}, \
         this would leave a trailing frame shorter than {frame_length}"
    )]
    TrailingFrame {
        /// Length of the rejected sequence
        len: usize,
        /// Requested frame length
        frame_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_message_names_lengths() {
        let message = FrameError::TrailingFrame {
            len: 10,
            frame_length: 3,
        }
        .to_string();

        assert!(message.contains("10"));
        assert!(message.contains("frame length 3"));
        assert!(message.contains("trailing frame"));
    }
}
