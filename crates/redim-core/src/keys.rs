//! Canonical key enumeration
//!
//! A key is the 1-based position of an element in the logical row-major
//! enumeration of an array. Key `0` never names an element; index accumulators
//! use it to mark cells that have not recorded a position yet.

/// Key value meaning "no position recorded yet".
pub const UNSEEDED_KEY: usize = 0;

/// Convert a multi-dimensional index to its canonical key.
///
/// Returns `None` when the index rank differs from the shape rank or any
/// component is out of bounds.
///
/// # Examples
///
/// ```
/// use redim_core::ravel_index;
///
/// assert_eq!(ravel_index(&[0, 0], &[2, 3]), Some(1));
/// assert_eq!(ravel_index(&[1, 2], &[2, 3]), Some(6));
/// assert_eq!(ravel_index(&[2, 0], &[2, 3]), None);
/// ```
pub fn ravel_index(indices: &[usize], shape: &[usize]) -> Option<usize> {
    if indices.len() != shape.len() {
        return None;
    }

    let mut linear = 0;
    let mut stride = 1;

    for i in (0..indices.len()).rev() {
        if indices[i] >= shape[i] {
            return None;
        }
        linear += indices[i] * stride;
        stride *= shape[i];
    }

    Some(linear + 1)
}

/// Convert a canonical key back to a 0-based multi-dimensional index.
///
/// Returns `None` for the unseeded key and for keys past the last element.
///
/// # Examples
///
/// ```
/// use redim_core::unravel_key;
///
/// assert_eq!(unravel_key(1, &[2, 3]), Some(vec![0, 0]));
/// assert_eq!(unravel_key(5, &[2, 3]), Some(vec![1, 1]));
/// assert_eq!(unravel_key(0, &[2, 3]), None);
/// assert_eq!(unravel_key(7, &[2, 3]), None);
/// ```
pub fn unravel_key(key: usize, shape: &[usize]) -> Option<Vec<usize>> {
    let total: usize = shape.iter().product();
    if key == UNSEEDED_KEY || key > total {
        return None;
    }

    let mut rest = key - 1;
    let mut index = vec![0; shape.len()];
    for d in (0..shape.len()).rev() {
        index[d] = rest % shape[d];
        rest /= shape[d];
    }
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ravel_unravel_inverse() {
        let shape = [3, 4, 2];
        for key in 1..=24 {
            let index = unravel_key(key, &shape).unwrap();
            assert_eq!(ravel_index(&index, &shape), Some(key));
        }
    }

    #[test]
    fn test_rank_zero_has_single_key() {
        assert_eq!(ravel_index(&[], &[]), Some(1));
        assert_eq!(unravel_key(1, &[]), Some(vec![]));
        assert_eq!(unravel_key(2, &[]), None);
    }

    #[test]
    fn test_empty_shape_has_no_keys() {
        assert_eq!(unravel_key(1, &[0, 3]), None);
    }
}
