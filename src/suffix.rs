//! Suffix expansion for suffix-index construction.

use std::iter::FusedIterator;

/// Every non-empty suffix of `key`, longest first.
pub fn suffixes(key: &[u8]) -> Suffixes<'_> {
    Suffixes { key, start: 0 }
}

/// Iterator returned by [`suffixes`].
#[derive(Clone, Debug)]
pub struct Suffixes<'a> {
    key: &'a [u8],
    start: usize,
}

impl<'a> Iterator for Suffixes<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.key.len() {
            return None;
        }
        let s = &self.key[self.start..];
        self.start += 1;
        Some(s)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.key.len().saturating_sub(self.start);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Suffixes<'_> {}
impl FusedIterator for Suffixes<'_> {}
