//! Random-access positions in a [`Deque`].
//!
//! A cursor is just a logical index paired with the deque it belongs to. It
//! never caches an element address: every access resolves the index through
//! the deque again. Comparisons and distances only look at the index, so
//! comparing cursors of two different deques gives a meaningless answer.

use alloc::alloc::Global;
use core::{
    alloc::Allocator,
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use super::Deque;

pub struct Cursor<'a, T, A: Allocator = Global> {
    deque: &'a Deque<T, A>,
    index: usize,
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    #[inline]
    pub(super) fn new(deque: &'a Deque<T, A>, index: usize) -> Self {
        Self { deque, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element under the cursor, or `None` past either end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.deque.get(self.index)
    }

    #[inline]
    pub fn deque(&self) -> &'a Deque<T, A> {
        self.deque
    }

    #[inline]
    pub fn move_next(&mut self) {
        *self += 1;
    }

    #[inline]
    pub fn move_prev(&mut self) {
        *self -= 1;
    }

    /// # Panics
    /// If the cursor would move before the first element.
    #[inline]
    fn offset(self, n: isize) -> Self {
        match self.index.checked_add_signed(n) {
            Some(index) => Self { index, ..self },
            None => panic!("cursor moved before the start of the deque"),
        }
    }
}

impl<'a, T, A: Allocator> Clone for Cursor<'a, T, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, A: Allocator> Copy for Cursor<'a, T, A> {}

impl<'a, T, A: Allocator> Add<isize> for Cursor<'a, T, A> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<'a, T, A: Allocator> Sub<isize> for Cursor<'a, T, A> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        self.offset(n.checked_neg().expect("cursor offset overflow"))
    }
}

impl<'a, T, A: Allocator> AddAssign<isize> for Cursor<'a, T, A> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        *self = *self + n;
    }
}

impl<'a, T, A: Allocator> SubAssign<isize> for Cursor<'a, T, A> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        *self = *self - n;
    }
}

/// The signed distance between two cursors.
impl<'a, T, A: Allocator> Sub for Cursor<'a, T, A> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Self) -> isize {
        self.index.wrapping_sub(other.index) as isize
    }
}

impl<'a, T, A: Allocator> PartialEq for Cursor<'a, T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, T, A: Allocator> Eq for Cursor<'a, T, A> {}

impl<'a, T, A: Allocator> PartialOrd for Cursor<'a, T, A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T, A: Allocator> Ord for Cursor<'a, T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Cursor<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.index).field(&self.get()).finish()
    }
}

/// A position in a [`Deque`] that can also edit it.
///
/// [`insert`](Self::insert) and [`remove_current`](Self::remove_current) have
/// the same *O*(len) cost as [`Deque::insert`] and [`Deque::remove`].
pub struct CursorMut<'a, T, A: Allocator = Global> {
    deque: &'a mut Deque<T, A>,
    index: usize,
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    #[inline]
    pub(super) fn new(deque: &'a mut Deque<T, A>, index: usize) -> Self {
        Self { deque, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.deque.get(self.index)
    }

    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.deque.get_mut(self.index)
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.index += 1;
    }

    /// # Panics
    /// If the cursor is at the first element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = match self.index.checked_sub(1) {
            Some(index) => index,
            None => panic!("cursor moved before the start of the deque"),
        };
    }

    #[inline]
    pub fn seek(&mut self, index: usize) {
        self.index = index;
    }

    /// Inserts `val` before the current element; the cursor then points at
    /// the new element.
    ///
    /// # Panics
    /// If the cursor is past the end of the deque.
    #[inline]
    pub fn insert(&mut self, val: T) {
        self.deque.insert(self.index, val);
    }

    /// Removes the current element; the cursor then points at the element
    /// that followed it.
    #[inline]
    pub fn remove_current(&mut self) -> Option<T> {
        self.deque.remove(self.index)
    }

    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, A> {
        Cursor::new(self.deque, self.index)
    }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for CursorMut<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.index).field(&self.current()).finish()
    }
}
