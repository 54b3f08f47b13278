//! Element access by multi-index and by canonical key

use super::types::DenseND;
use crate::keys::{ravel_index, unravel_key};

impl<T> DenseND<T> {
    /// Get an element by multi-index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// assert_eq!(tensor.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        self.data.get(index)
    }

    /// Get an element by its 1-based canonical key
    ///
    /// Keys follow the logical row-major enumeration, so the same key names
    /// the same logical element whatever the memory layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![10, 20, 30, 40], &[2, 2]).unwrap();
    /// let transposed = tensor.permuted(&[1, 0]).unwrap();
    /// assert_eq!(transposed.get_key(2), Some(&30));
    /// assert_eq!(transposed.get_key(0), None);
    /// ```
    pub fn get_key(&self, key: usize) -> Option<&T> {
        let index = unravel_key(key, self.shape())?;
        self.data.get(index.as_slice())
    }

    /// Convert a canonical key to a 0-based multi-index for this array's shape
    pub fn unravel_key(&self, key: usize) -> Option<Vec<usize>> {
        unravel_key(key, self.shape())
    }

    /// Convert a 0-based multi-index to its canonical key
    pub fn ravel_index(&self, index: &[usize]) -> Option<usize> {
        ravel_index(index, self.shape())
    }

    /// Iterate elements in canonical (logical row-major) order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }
}

impl<T: Clone> DenseND<T> {
    /// Copy the elements into a vector in canonical order
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor.permuted(&[1, 0]).unwrap().to_vec(), vec![1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_key_matches_multi_index() {
        let tensor = DenseND::from_vec((1..=24).collect::<Vec<i32>>(), &[2, 3, 4]).unwrap();
        for key in 1..=24 {
            let index = tensor.unravel_key(key).unwrap();
            assert_eq!(tensor.get_key(key), tensor.get(&index));
            assert_eq!(tensor.get_key(key), Some(&(key as i32)));
        }
        assert_eq!(tensor.get_key(25), None);
    }

    #[test]
    fn test_index_mut_writes_through() {
        let mut tensor = DenseND::from_elem(&[2, 2], 0u8);
        tensor[&[1, 1][..]] = 9;
        assert_eq!(tensor.get_key(4), Some(&9));
    }
}
