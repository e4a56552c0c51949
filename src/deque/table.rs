//! The block table of a [`Deque`](super::Deque): a ring buffer of block
//! pointers that can grow at either end in amortized *O*(1).
//!
//! The table never owns the allocator. Every method that touches memory takes
//! the deque's allocator by reference, and the deque frees the table's storage
//! in its destructor.

use core::{
    alloc::{Allocator, Layout},
    mem,
    ptr::{self, NonNull},
};

use crate::{
    error::{Error, Result},
    raw::{allocate, array_layout, deallocate},
};

pub(crate) struct BlockTable<T> {
    buf: NonNull<NonNull<T>>,
    cap: usize,
    head: usize,
    len: usize,
}

impl<T> BlockTable<T> {
    const MIN_NON_ZERO_CAP: usize = 4;

    #[inline]
    pub(crate) const fn new() -> Self {
        Self { buf: NonNull::dangling(), cap: 0, head: 0, len: 0 }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    // this will never panic, as self.cap >= self.len is guaranteed.
    #[inline]
    const fn is_contiguous(&self) -> bool {
        self.head <= self.cap - self.len
    }

    /// Note that idx must be in the range of [0..self.cap] for this to work properly
    #[inline]
    fn wrap_idx(&self, idx: usize) -> usize {
        if idx < self.cap - self.head {
            self.head + idx
        } else {
            self.head.wrapping_add(idx).wrapping_sub(self.cap)
        }
    }

    #[inline]
    fn tail(&self) -> usize {
        self.wrap_idx(self.len)
    }

    /// Returns the `idx`-th block from the left.
    ///
    /// # Safety
    /// `idx` must be smaller than `self.len()`.
    #[inline]
    pub(crate) unsafe fn get(&self, idx: usize) -> NonNull<T> {
        debug_assert!(idx < self.len);
        *self.buf.as_ptr().add(self.wrap_idx(idx))
    }

    /// Makes room for one more block pointer. On failure the table is left
    /// untouched.
    #[inline]
    pub(crate) fn reserve_for_push<A: Allocator>(&mut self, alloc: &A) -> Result {
        if self.len == self.cap {
            // self.cap <= isize::MAX / size_of::<NonNull<T>>(), so this can't overflow
            let new_cap = (self.cap * 2).max(Self::MIN_NON_ZERO_CAP);
            unsafe { self.grow_to(new_cap, alloc) }
        } else {
            Ok(())
        }
    }

    /// # Safety
    /// `new_cap` must be greater than `self.cap`
    #[cold]
    unsafe fn grow_to<A: Allocator>(&mut self, new_cap: usize, alloc: &A) -> Result {
        let layout = array_layout::<NonNull<T>>(new_cap)?;

        if self.cap == 0 {
            self.buf = allocate(alloc, layout)?;
            self.cap = new_cap;
            return Ok(());
        }

        let cur_layout = Self::layout_unchecked(self.cap);

        // if grow fails the old buffer is still valid and owned by us, so bailing
        // out here leaves the table as it was.
        self.buf = alloc
            .grow(self.buf.cast(), cur_layout, layout)
            .map_err(|_| Error::AllocError { layout })?
            .cast();

        if !self.is_contiguous() {
            // new_cap > self.cap is guaranteed by the function preconditions.
            let shift = new_cap - self.cap;
            let head_len = self.cap - self.head;
            let head_ptr = self.buf.as_ptr().add(self.head);

            ptr::copy(head_ptr, head_ptr.add(shift), head_len);

            self.head += shift;
        }

        self.cap = new_cap;
        Ok(())
    }

    #[inline]
    unsafe fn layout_unchecked(cap: usize) -> Layout {
        Layout::from_size_align_unchecked(
            mem::size_of::<NonNull<T>>() * cap,
            mem::align_of::<NonNull<T>>(),
        )
    }

    /// # Safety
    /// [`reserve_for_push`](Self::reserve_for_push) must have succeeded since
    /// the last push.
    #[inline]
    pub(crate) unsafe fn push_back(&mut self, block: NonNull<T>) {
        debug_assert!(self.len < self.cap);
        self.buf.as_ptr().add(self.tail()).write(block);
        self.len += 1;
    }

    /// # Safety
    /// [`reserve_for_push`](Self::reserve_for_push) must have succeeded since
    /// the last push.
    #[inline]
    pub(crate) unsafe fn push_front(&mut self, block: NonNull<T>) {
        debug_assert!(self.len < self.cap);
        let new_head = self.head.checked_sub(1).unwrap_or(self.cap - 1);
        self.buf.as_ptr().add(new_head).write(block);
        self.head = new_head;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn pop_back(&mut self) -> Option<NonNull<T>> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf.as_ptr().add(self.tail()).read() })
    }

    #[inline]
    pub(crate) fn pop_front(&mut self) -> Option<NonNull<T>> {
        if self.len == 0 {
            return None;
        }
        let block = unsafe { self.buf.as_ptr().add(self.head).read() };
        self.len -= 1;
        self.head = if self.head == self.cap - 1 { 0 } else { self.head + 1 };
        Some(block)
    }

    /// Forgets every block pointer, keeping the table's capacity.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    /// Releases the table's own storage. The blocks it points to must have
    /// been released already.
    ///
    /// # Safety
    /// `alloc` must be the allocator every previous call was made with.
    pub(crate) unsafe fn free<A: Allocator>(&mut self, alloc: &A) {
        if self.cap != 0 {
            deallocate(alloc, self.buf, Self::layout_unchecked(self.cap));
        }
        *self = Self::new();
    }
}
