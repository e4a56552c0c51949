use alloc::alloc::Global;
use core::{alloc::Allocator, fmt, ptr::NonNull};

use super::{next, prev, value, Links, List};

/// A bidirectional position in a [`List`].
///
/// Moving past the last element lands on the sentinel (the end position), and
/// one more step wraps around to the first element. Two cursors are equal when
/// they sit on the same node.
pub struct Cursor<'a, T, A: Allocator = Global> {
    list: &'a List<T, A>,
    current: NonNull<Links>,
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    #[inline]
    pub(super) fn new(list: &'a List<T, A>, current: NonNull<Links>) -> Self {
        Self { list, current }
    }

    /// The element under the cursor, or `None` on the end position.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        if self.is_end() {
            None
        } else {
            // SAFETY: every node but the sentinel holds a value
            Some(unsafe { &*value(self.current) })
        }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.current == self.list.sentinel
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.current = unsafe { next(self.current) };
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.current = unsafe { prev(self.current) };
    }

    #[inline]
    pub fn list(&self) -> &'a List<T, A> {
        self.list
    }
}

impl<'a, T, A: Allocator> Clone for Cursor<'a, T, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, A: Allocator> Copy for Cursor<'a, T, A> {}

impl<'a, T, A: Allocator> PartialEq for Cursor<'a, T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T, A: Allocator> Eq for Cursor<'a, T, A> {}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Cursor<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}
