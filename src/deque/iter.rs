use alloc::alloc::Global;
use core::{
    alloc::Allocator,
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

use super::Deque;

/// Borrowing iterator over a [`Deque`]. Each step resolves its logical index
/// through the deque, so it walks across block boundaries transparently.
pub struct Iter<'a, T, A: Allocator = Global> {
    deque: &'a Deque<T, A>,
    head: usize,
    tail: usize,
}

impl<'a, T, A: Allocator> Iter<'a, T, A> {
    #[inline]
    pub(super) fn new(deque: &'a Deque<T, A>, head: usize, tail: usize) -> Self {
        debug_assert!(head <= tail && tail <= deque.len());
        Self { deque, head, tail }
    }
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: head < tail <= len
        let t = unsafe { self.deque.get_unchecked(self.head) };
        self.head += 1;
        Some(t)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.head = self.head.saturating_add(n).min(self.tail);
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T, A: Allocator> DoubleEndedIterator for Iter<'a, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        // SAFETY: tail < len
        Some(unsafe { self.deque.get_unchecked(self.tail) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.tail = self.tail.saturating_sub(n).max(self.head);
        self.next_back()
    }
}

impl<'a, T, A: Allocator> ExactSizeIterator for Iter<'a, T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.tail - self.head
    }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> {}

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
    #[inline]
    fn clone(&self) -> Self {
        Self { deque: self.deque, head: self.head, tail: self.tail }
    }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct IterFormatter<'a, 'b, T, A: Allocator>(&'b Iter<'a, T, A>);

        impl<'a, 'b, T: fmt::Debug, A: Allocator> fmt::Debug for IterFormatter<'a, 'b, T, A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.clone()).finish()
            }
        }

        f.debug_tuple("Iter").field(&IterFormatter(self)).finish()
    }
}

/// Mutable iterator over a [`Deque`]. Every slot is handed out at most once.
pub struct IterMut<'a, T, A: Allocator = Global> {
    deque: NonNull<Deque<T, A>>,
    head: usize,
    tail: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, A: Allocator> IterMut<'a, T, A> {
    #[inline]
    pub(super) fn new(deque: &'a mut Deque<T, A>, head: usize, tail: usize) -> Self {
        debug_assert!(head <= tail && tail <= deque.len());
        Self { deque: NonNull::from(deque), head, tail, _marker: PhantomData }
    }

    /// SAFETY: `idx` must be in `head..tail` and never be handed out twice.
    #[inline]
    unsafe fn take(&mut self, idx: usize) -> &'a mut T {
        &mut *self.deque.as_ref().ptr_at_idx(idx)
    }
}

impl<'a, T, A: Allocator> Iterator for IterMut<'a, T, A> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let t = unsafe { self.take(self.head) };
        self.head += 1;
        Some(t)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T, A: Allocator> DoubleEndedIterator for IterMut<'a, T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        Some(unsafe { self.take(self.tail) })
    }
}

impl<'a, T, A: Allocator> ExactSizeIterator for IterMut<'a, T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.tail - self.head
    }
}

impl<'a, T, A: Allocator> FusedIterator for IterMut<'a, T, A> {}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for IterMut<'a, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: only shared access, and no &mut T handed out so far overlaps head..tail
        let deque = unsafe { self.deque.as_ref() };
        f.debug_tuple("IterMut").field(&Iter::new(deque, self.head, self.tail)).finish()
    }
}

unsafe impl<'a, T: Send, A: Allocator + Send> Send for IterMut<'a, T, A> {}

unsafe impl<'a, T: Sync, A: Allocator + Sync> Sync for IterMut<'a, T, A> {}

/// Owning iterator, popping from either end.
#[derive(Debug)]
pub struct IntoIter<T, A: Allocator = Global>(Deque<T, A>);

impl<T, A: Allocator> IntoIter<T, A> {
    #[inline]
    pub(super) fn new(deque: Deque<T, A>) -> Self {
        Self(deque)
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
