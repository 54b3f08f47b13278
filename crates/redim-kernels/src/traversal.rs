//! Index traversal helpers shared by the kernels

use redim_core::UNSEEDED_KEY;

/// Step a row-major multi-index to its successor within `shape`
///
/// Returns `false` once the index wraps past the last position; the index is
/// then back at all zeros. A rank-0 index has a single position and always
/// returns `false`.
#[inline]
pub fn advance(index: &mut [usize], shape: &[usize]) -> bool {
    for axis in (0..index.len()).rev() {
        index[axis] += 1;
        if index[axis] < shape[axis] {
            return true;
        }
        index[axis] = 0;
    }
    false
}

/// Canonical key counter advanced in lockstep with a traversal
///
/// Keys are 1-based, so a fresh cursor hands out 1 first and the unseeded
/// sentinel 0 is never produced.
#[derive(Debug, Clone)]
pub struct KeyCursor {
    next: usize,
}

impl KeyCursor {
    /// Cursor positioned before the first element
    pub fn new() -> Self {
        Self::starting_at(UNSEEDED_KEY + 1)
    }

    /// Cursor whose next key is `key`
    pub fn starting_at(key: usize) -> Self {
        Self { next: key }
    }

    /// Take the current key and move to the next one
    #[inline]
    pub fn advance(&mut self) -> usize {
        let key = self.next;
        self.next += 1;
        key
    }
}

impl Default for KeyCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_row_major_order() {
        let shape = [2, 3];
        let mut index = [0, 0];
        let mut seen = vec![index.to_vec()];
        while advance(&mut index, &shape) {
            seen.push(index.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
        assert_eq!(index, [0, 0]);
    }

    #[test]
    fn test_advance_rank_zero() {
        let mut index: [usize; 0] = [];
        assert!(!advance(&mut index, &[]));
    }

    #[test]
    fn test_key_cursor_starts_at_one() {
        let mut cursor = KeyCursor::new();
        assert_eq!(cursor.advance(), 1);
        assert_eq!(cursor.advance(), 2);
        let mut offset = KeyCursor::starting_at(10);
        assert_eq!(offset.advance(), 10);
    }
}
