//! Dense view over sparse storage
//!
//! [`Dense`] walks logical positions `0..len` while holding a peekable cursor
//! into the sorted entries, synthesizing `T::default()` for every position the
//! cursor does not currently point at. It never touches storage beyond reading
//! through the borrowed entries.

use core::fmt::{self, Display, Formatter, Write};
use core::iter::{FusedIterator, Peekable};
use core::marker::PhantomData;

/// Lazy iterator over every logical position of a sparse sequence
///
/// Entries must be strictly ascending by index and all below `len`.
pub struct Dense<'a, T, E>
where
    E: Iterator<Item = (usize, &'a T)>,
{
    position: usize,
    len: usize,
    entries: Peekable<E>,
    marker: PhantomData<&'a T>,
}

impl<'a, T, E> Dense<'a, T, E>
where
    E: Iterator<Item = (usize, &'a T)>,
{
    /// Create a dense view of logical length `len` over sorted `entries`
    pub fn new(len: usize, entries: E) -> Self {
        Self {
            position: 0,
            len,
            entries: entries.peekable(),
            marker: PhantomData,
        }
    }

    /// Logical position the next call to `next` will yield
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T, E> Iterator for Dense<'a, T, E>
where
    T: Default + Clone + 'a,
    E: Iterator<Item = (usize, &'a T)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.position >= self.len {
            return None;
        }

        let position = self.position;
        self.position += 1;

        match self.entries.next_if(|(index, _)| *index == position) {
            Some((_, value)) => Some(value.clone()),
            None => Some(T::default()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, T, E> ExactSizeIterator for Dense<'a, T, E>
where
    T: Default + Clone + 'a,
    E: Iterator<Item = (usize, &'a T)>,
{
}

impl<'a, T, E> FusedIterator for Dense<'a, T, E>
where
    T: Default + Clone + 'a,
    E: Iterator<Item = (usize, &'a T)>,
{
}

/// Render dense values as `[v0 v1 ... ]`
///
/// Every value is followed by one space, so an empty view renders as `[]`.
pub fn write_dense<T, I>(f: &mut Formatter<'_>, values: I) -> fmt::Result
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    f.write_char('[')?;
    for value in values {
        write!(f, "{value} ")?;
    }
    f.write_char(']')
}
