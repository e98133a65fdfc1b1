//! The line buffer being edited.
//!
//! Line numbers are 1-based at every public boundary; the buffer converts to
//! 0-based indices internally. The buffer never contains gaps: an edit may
//! overwrite an existing line or append exactly one line past the end, and
//! every other line number is rejected without touching the contents.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::error::{Error, Result};

/// An ordered, mutable sequence of text lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a buffer holding `lines` in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the buffer holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the text of 1-based `line`, if it exists.
    #[must_use]
    pub fn get(&self, line: usize) -> Option<&str> {
        let index = line.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the text of 1-based `line`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `line` is not in `[1, len]`.
    pub fn require(&self, line: usize) -> Result<&str> {
        self.get(line)
            .ok_or_else(|| Error::out_of_range(line, self.len()))
    }

    /// Returns a lazy iterator over `(line number, text)` pairs in order.
    ///
    /// The iterator borrows the buffer; call `list` again to restart.
    #[must_use]
    pub fn list(&self) -> Lines<'_> {
        Lines {
            inner: self.lines.iter().enumerate(),
        }
    }

    /// Sets 1-based `line` to `text`, appending when `line == len + 1`.
    ///
    /// Returns the buffer size after the edit.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error for line 0 or any line past `len + 1`.
    /// The buffer is left unchanged.
    pub fn edit(&mut self, line: usize, text: impl Into<String>) -> Result<usize> {
        let append_at = self.lines.len() + 1;
        match line {
            0 => return Err(Error::out_of_range(line, append_at)),
            n if n == append_at => self.lines.push(text.into()),
            n if n < append_at => self.lines[n - 1] = text.into(),
            _ => return Err(Error::out_of_range(line, append_at)),
        }
        Ok(self.lines.len())
    }

    /// Overwrites an existing 1-based `line`, returning the previous text.
    ///
    /// Unlike [`LineBuffer::edit`] this never appends.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `line` is not in `[1, len]`.
    pub fn replace(&mut self, line: usize, text: impl Into<String>) -> Result<String> {
        let len = self.lines.len();
        let slot = line
            .checked_sub(1)
            .and_then(|index| self.lines.get_mut(index))
            .ok_or_else(|| Error::out_of_range(line, len))?;
        Ok(std::mem::replace(slot, text.into()))
    }

    /// Replaces the whole contents, e.g. after loading a file.
    pub fn replace_all(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// Returns the lines as a slice.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl FromIterator<String> for LineBuffer {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LineBuffer {
    type Item = (usize, &'a str);
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}

/// Iterator over numbered lines, produced by [`LineBuffer::list`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    inner: Enumerate<slice::Iter<'a, String>>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, text)| (index + 1, text.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Lines<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(index, text)| (index + 1, text.as_str()))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl FusedIterator for Lines<'_> {}
