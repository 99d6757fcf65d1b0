//! Fixed-length partitioning of ordered sequences

use std::num::NonZeroUsize;

use tracing::trace;

use super::{FrameError, FrameOptions};

/// Split `items` into consecutive frames of `frame_length` items each.
///
/// Frames never overlap and preserve input order. When `items.len()` is not a
/// multiple of `frame_length`, the leftover items are handled by `options`:
/// an error if `throw_if_trailing` is set, a final shorter frame if
/// `keep_trailing` is set, and otherwise they are discarded.
///
/// Validation happens before any frame is built.
///
/// ```
/// use frameflow::frames::{to_frames, FrameOptions};
///
/// let frames = to_frames((0..10).collect(), 3, FrameOptions::new().keep_trailing(true))?;
/// assert_eq!(frames, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]);
/// # Ok::<(), frameflow::frames::FrameError>(())
/// ```
pub fn to_frames<T>(
    items: Vec<T>,
    frame_length: usize,
    options: FrameOptions,
) -> Result<Vec<Vec<T>>, FrameError> {
    let frame_length = validate(items.len(), frame_length, options)?;
    Ok(split_frames(items, frame_length, options.keep_trailing))
}

/// Number of frames [`to_frames`] would return for a sequence of `len` items,
/// with the same validation.
pub fn frame_count(
    len: usize,
    frame_length: usize,
    options: FrameOptions,
) -> Result<usize, FrameError> {
    let frame_length = validate(len, frame_length, options)?.get();
    let full = len / frame_length;
    if options.keep_trailing && len % frame_length != 0 {
        Ok(full + 1)
    } else {
        Ok(full)
    }
}

fn validate(
    len: usize,
    frame_length: usize,
    options: FrameOptions,
) -> Result<NonZeroUsize, FrameError> {
    let frame_length = NonZeroUsize::new(frame_length).ok_or(FrameError::ZeroFrameLength)?;
    if options.throw_if_trailing && len % frame_length.get() != 0 {
        return Err(FrameError::TrailingFrame {
            len,
            frame_length: frame_length.get(),
        });
    }
    Ok(frame_length)
}

/// Single pass over `items`, sealing a frame every `frame_length` items.
pub(crate) fn split_frames<T>(
    items: Vec<T>,
    frame_length: NonZeroUsize,
    keep_trailing: bool,
) -> Vec<Vec<T>> {
    let frame_length = frame_length.get();
    let mut frames = Vec::with_capacity(items.len() / frame_length + 1);
    let mut items = items.into_iter();
    // Capacity is bounded by the items left, never by frame_length alone.
    let mut current = Vec::with_capacity(frame_length.min(items.len()));

    while let Some(item) = items.next() {
        current.push(item);
        if current.len() == frame_length {
            let next = Vec::with_capacity(frame_length.min(items.len()));
            frames.push(std::mem::replace(&mut current, next));
        }
    }

    if !current.is_empty() {
        if keep_trailing {
            trace!(trailing = current.len(), "Keeping trailing frame");
            frames.push(current);
        } else {
            trace!(trailing = current.len(), "Discarding trailing frame");
        }
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_exact_division() {
        let frames = to_frames(numbers(10), 2, FrameOptions::default()).unwrap();

        assert_eq!(frames.len(), 5);
        assert!(frames.iter().all(|frame| frame.len() == 2));
    }

    #[test]
    fn test_trailing_discarded_by_default() {
        let frames = to_frames(numbers(10), 3, FrameOptions::default()).unwrap();

        assert_eq!(frames, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
    }

    #[test]
    fn test_trailing_kept() {
        let frames = to_frames(numbers(10), 3, FrameOptions::new().keep_trailing(true)).unwrap();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames.last(), Some(&vec![9]));
    }

    #[test]
    fn test_throw_if_trailing() {
        let err = to_frames(numbers(10), 3, FrameOptions::new().throw_if_trailing(true))
            .unwrap_err();

        assert_eq!(
            err,
            FrameError::TrailingFrame {
                len: 10,
                frame_length: 3
            }
        );
    }

    #[test]
    fn test_throw_if_trailing_wins_over_keep() {
        let options = FrameOptions::new().keep_trailing(true).throw_if_trailing(true);

        assert!(to_frames(numbers(7), 2, options).is_err());
        assert_eq!(to_frames(numbers(8), 2, options).unwrap().len(), 4);
    }

    #[test]
    fn test_zero_frame_length() {
        let err = to_frames(numbers(4), 0, FrameOptions::new().throw_if_trailing(true))
            .unwrap_err();

        assert_eq!(err, FrameError::ZeroFrameLength);
    }

    #[test]
    fn test_empty_input() {
        for options in [
            FrameOptions::new(),
            FrameOptions::new().keep_trailing(true),
            FrameOptions::new().throw_if_trailing(true),
        ] {
            let frames = to_frames(Vec::<u8>::new(), 4, options).unwrap();
            assert!(frames.is_empty());
        }
    }

    #[test]
    fn test_frame_longer_than_input() {
        let dropped = to_frames(numbers(3), 5, FrameOptions::new()).unwrap();
        let kept = to_frames(numbers(3), 5, FrameOptions::new().keep_trailing(true)).unwrap();

        assert!(dropped.is_empty());
        assert_eq!(kept, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_unbounded_frame_length_keeps_whole_input() {
        let kept = to_frames(numbers(3), usize::MAX, FrameOptions::new().keep_trailing(true)).unwrap();
        let dropped = to_frames(numbers(3), usize::MAX, FrameOptions::new()).unwrap();

        assert_eq!(kept, vec![vec![0, 1, 2]]);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_frame_count_matches() {
        let options = FrameOptions::new().keep_trailing(true);
        assert_eq!(frame_count(10, 3, options).unwrap(), 4);
        assert_eq!(frame_count(10, 3, FrameOptions::new()).unwrap(), 3);
        assert_eq!(frame_count(0, 3, options).unwrap(), 0);
        assert_eq!(frame_count(3, 0, options), Err(FrameError::ZeroFrameLength));
    }
}
