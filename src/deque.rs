//! A double-ended queue stored as a table of fixed-size blocks.
//!
//! Elements live in blocks of [`BLOCK_LEN`] slots. The blocks are kept in a
//! [`BlockTable`], and the occupied slots are described by two counters,
//! `front` and `back`, in a virtual coordinate space: slot `s` is offset
//! `s % BLOCK_LEN` of block `s / BLOCK_LEN`. Pushing at the back may append a
//! block; pushing at the front when `front == 0` prepends one and shifts both
//! counters by exactly one block, so every existing coordinate keeps pointing
//! at the same element. This gives amortized *O*(1) pushes and pops at both
//! ends with *O*(1) indexing.
//!
//! Blocks are only released by [`Deque::clear`] and on drop.

use alloc::alloc::Global;
use core::{
    alloc::{Allocator, Layout},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut, RangeBounds},
    ptr,
    slice,
};
use std::io;

use crate::{
    error::{Error, Result},
    raw::{allocate, array_layout, deallocate, infallible, AllocPolicy},
};

mod cursor;
mod iter;
mod table;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
use table::BlockTable;

/// The number of element slots in every block.
pub const BLOCK_LEN: usize = 1000;

pub struct Deque<T, A: Allocator = Global> {
    blocks: BlockTable<T>,
    front: usize,
    back: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

/// Splits an absolute slot into its block index and the offset inside it.
#[inline]
const fn locate(slot: usize) -> (usize, usize) {
    (slot / BLOCK_LEN, slot % BLOCK_LEN)
}

impl<T> Deque<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a deque holding `len` default values.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(len, Global)
    }

    /// Creates a deque holding `len` clones of `val`.
    #[inline]
    pub fn from_elem(len: usize, val: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(len, val, Global)
    }
}

impl<T, A: Allocator> Deque<T, A> {
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self { blocks: BlockTable::new(), front: 0, back: 0, alloc, _marker: PhantomData }
    }

    pub fn with_len_in(len: usize, alloc: A) -> Self
    where
        T: Default,
    {
        // if a constructor unwinds, `this` is dropped and takes every block with it
        let mut this = Self::new_in(alloc);
        for _ in 0..len {
            this.emplace_back_with(T::default);
        }
        this
    }

    pub fn from_elem_in(len: usize, val: &T, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut this = Self::new_in(alloc);
        for _ in 0..len {
            this.emplace_back_with(|| val.clone());
        }
        this
    }

    #[inline]
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Self {
        let mut this = Self::new_in(alloc);
        this.extend(iter);
        this
    }

    /// Like [`from_iter_in`](Self::from_iter_in), but reports allocation
    /// failure instead of aborting. Nothing stays allocated on failure.
    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self> {
        let mut this = Self::new_in(alloc);
        for val in iter {
            this.try_push_back(val)?;
        }
        Ok(this)
    }

    /// Clones every element into a new deque using `alloc`.
    pub fn clone_in<B: Allocator>(&self, alloc: B) -> Deque<T, B>
    where
        T: Clone,
    {
        let mut copy = Deque::new_in(alloc);
        for val in self {
            copy.emplace_back_with(|| val.clone());
        }
        copy
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.back - self.front
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// The number of blocks currently allocated.
    #[inline]
    pub const fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// SAFETY: the block holding `slot` must exist.
    #[inline]
    unsafe fn slot(&self, slot: usize) -> *mut T {
        let (block, offset) = locate(slot);
        self.blocks.get(block).as_ptr().add(offset)
    }

    /// SAFETY: `idx` must be smaller than `self.len()`.
    #[inline]
    pub(crate) unsafe fn ptr_at_idx(&self, idx: usize) -> *mut T {
        self.slot(self.front + idx)
    }

    #[inline]
    fn block_layout() -> Result<Layout> {
        array_layout::<T>(BLOCK_LEN)
    }

    /// Safe to call once a block has been allocated, since that layout was
    /// already checked.
    #[inline]
    unsafe fn block_layout_unchecked() -> Layout {
        Layout::from_size_align_unchecked(mem::size_of::<T>() * BLOCK_LEN, mem::align_of::<T>())
    }

    /// Makes sure the block holding slot `self.back` exists. Returns whether a
    /// block had to be appended.
    fn grow_back(&mut self) -> Result<bool> {
        if self.back / BLOCK_LEN < self.blocks.len() {
            return Ok(false);
        }
        self.blocks.reserve_for_push(&self.alloc)?;
        let block = allocate(&self.alloc, Self::block_layout()?)?;
        // SAFETY: the table has room for one more block
        unsafe { self.blocks.push_back(block) };
        Ok(true)
    }

    /// Makes sure slot `self.front - 1` exists. If the front is at the very
    /// start of the table, a block is prepended and the coordinates are
    /// re-based by one block. Returns whether that happened.
    fn grow_front(&mut self) -> Result<bool> {
        if self.front != 0 {
            return Ok(false);
        }
        self.blocks.reserve_for_push(&self.alloc)?;
        let block = allocate(&self.alloc, Self::block_layout()?)?;
        // SAFETY: the table has room for one more block
        unsafe { self.blocks.push_front(block) };
        self.front += BLOCK_LEN;
        self.back += BLOCK_LEN;
        Ok(true)
    }

    /// Once the deque runs empty the coordinates move to a slot with room on
    /// both sides inside the blocks already allocated: the middle of the only
    /// block, or the boundary between the first two. Pushes at either end then
    /// reuse those blocks instead of growing the table.
    #[inline]
    fn rewind_if_empty(&mut self) {
        if self.is_empty() {
            let mid = match self.blocks.len() {
                0 => 0,
                1 => BLOCK_LEN / 2,
                _ => BLOCK_LEN,
            };
            self.front = mid;
            self.back = mid;
        }
    }

    #[inline]
    pub fn push_back(&mut self, val: T) {
        self.emplace_back_with(|| val)
    }

    #[inline]
    pub fn push_front(&mut self, val: T) {
        self.emplace_front_with(|| val)
    }

    /// Appends the value returned by `f`, allocating the slot before `f` runs.
    #[inline]
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) {
        infallible(self.try_emplace_back_with(f))
    }

    #[inline]
    pub fn emplace_front_with<F: FnOnce() -> T>(&mut self, f: F) {
        infallible(self.try_emplace_front_with(f))
    }

    #[inline]
    pub fn try_push_back(&mut self, val: T) -> Result {
        self.try_emplace_back_with(|| val)
    }

    #[inline]
    pub fn try_push_front(&mut self, val: T) -> Result {
        self.try_emplace_front_with(|| val)
    }

    /// Appends the value returned by `f`.
    ///
    /// If allocating fails or `f` unwinds, the deque is left exactly as it was:
    /// a block allocated for this push is removed again.
    pub fn try_emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> Result {
        let grown = self.grow_back()?;
        let guard = if grown { Some(GrowGuard { deque: &mut *self, end: End::Back }) } else { None };
        let val = f();
        mem::forget(guard);

        // SAFETY: grow_back() made sure the block exists, and the slot at
        // self.back is uninitialized
        unsafe { self.slot(self.back).write(val) };
        self.back += 1;
        Ok(())
    }

    /// Prepends the value returned by `f`, with the same guarantees as
    /// [`try_emplace_back_with`](Self::try_emplace_back_with).
    pub fn try_emplace_front_with<F: FnOnce() -> T>(&mut self, f: F) -> Result {
        let grown = self.grow_front()?;
        let guard = if grown { Some(GrowGuard { deque: &mut *self, end: End::Front }) } else { None };
        let val = f();
        mem::forget(guard);

        // SAFETY: grow_front() made sure self.front > 0, so the slot before it
        // exists and is uninitialized
        unsafe { self.slot(self.front - 1).write(val) };
        self.front -= 1;
        Ok(())
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.back -= 1;
        let val = unsafe { self.slot(self.back).read() };
        self.rewind_if_empty();
        Some(val)
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let val = unsafe { self.slot(self.front).read() };
        self.front += 1;
        self.rewind_if_empty();
        Some(val)
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len().checked_sub(1).and_then(|i| self.get_mut(i))
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        if idx >= self.len() {
            None
        } else {
            Some(unsafe { self.get_unchecked(idx) })
        }
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        if idx >= self.len() {
            None
        } else {
            Some(unsafe { self.get_unchecked_mut(idx) })
        }
    }

    /// # Safety
    /// Callers must ensure that `idx < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, idx: usize) -> &T {
        &*self.ptr_at_idx(idx)
    }

    /// # Safety
    /// Callers must ensure that `idx < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, idx: usize) -> &mut T {
        &mut *self.ptr_at_idx(idx)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `idx >= self.len()`.
    #[inline]
    pub fn at(&self, idx: usize) -> Result<&T> {
        let len = self.len();
        self.get(idx).ok_or(Error::OutOfRange { index: idx, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `idx >= self.len()`.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> Result<&mut T> {
        let len = self.len();
        self.get_mut(idx).ok_or(Error::OutOfRange { index: idx, len })
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        let len = self.len();
        if i >= len || j >= len {
            panic!("swap indices out of bounds: tried to swap {i} and {j} on a Deque of length {len}");
        }
        unsafe { self.swap_unchecked(i, j) }
    }

    /// # Safety
    /// `i` and `j` must be smaller than `self.len()`
    #[inline]
    pub unsafe fn swap_unchecked(&mut self, i: usize, j: usize) {
        ptr::swap(self.ptr_at_idx(i), self.ptr_at_idx(j))
    }

    /// Exchanges the whole contents (and allocators) of two deques in *O*(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Inserts `val` at `idx`, shifting every later element one to the back.
    ///
    /// The element is pushed at the back and then walked into place by
    /// adjacent swaps, so this takes *O*(len - idx).
    pub fn insert(&mut self, idx: usize, val: T) {
        let len = self.len();
        if idx > len {
            panic!("tried to insert at index {idx} into a deque of length {len}");
        }
        self.push_back(val);
        for i in (idx..len).rev() {
            unsafe { self.swap_unchecked(i, i + 1) }
        }
    }

    /// Removes and returns the element at `idx`, walking it to the back by
    /// adjacent swaps first.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        let len = self.len();
        if idx >= len {
            return None;
        }
        for i in idx..len - 1 {
            unsafe { self.swap_unchecked(i, i + 1) }
        }
        self.pop_back()
    }

    /// Drops every element and releases every block. The block table keeps
    /// its capacity.
    pub fn clear(&mut self) {
        struct Release<'a, T, A: Allocator>(&'a mut Deque<T, A>);

        impl<'a, T, A: Allocator> Drop for Release<'a, T, A> {
            fn drop(&mut self) {
                let deque = &mut *self.0;
                // SAFETY: blocks were allocated with this layout and allocator
                let layout = unsafe { Deque::<T, A>::block_layout_unchecked() };
                while let Some(block) = deque.blocks.pop_back() {
                    unsafe { deallocate(&deque.alloc, block, layout) };
                }
                deque.blocks.clear();
            }
        }

        let front = mem::replace(&mut self.front, 0);
        let back = mem::replace(&mut self.back, 0);
        let guard = Release(self);
        unsafe { drop_slots(&guard.0.blocks, front, back) };
    }

    #[inline]
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == t)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter::new(self, 0, self.len())
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, A> {
        let len = self.len();
        IterMut::new(self, 0, len)
    }

    #[inline]
    pub fn range<R: RangeBounds<usize>>(&self, r: R) -> Iter<'_, T, A> {
        let r = slice::range(r, ..self.len());
        Iter::new(self, r.start, r.end)
    }

    /// A cursor at the first element (the end cursor if the deque is empty).
    #[inline]
    pub fn cursor_start(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, self.len())
    }

    #[inline]
    pub fn cursor_at(&self, idx: usize) -> Cursor<'_, T, A> {
        Cursor::new(self, idx)
    }

    #[inline]
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut::new(self, 0)
    }

    #[inline]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, A> {
        let len = self.len();
        CursorMut::new(self, len)
    }

    #[inline]
    pub fn cursor_at_mut(&mut self, idx: usize) -> CursorMut<'_, T, A> {
        CursorMut::new(self, idx)
    }
}

enum End {
    Front,
    Back,
}

/// Removes the block a push just added, undoing the re-base for the front.
/// Only lives while the element's constructor runs.
struct GrowGuard<'a, T, A: Allocator> {
    deque: &'a mut Deque<T, A>,
    end: End,
}

impl<'a, T, A: Allocator> Drop for GrowGuard<'a, T, A> {
    fn drop(&mut self) {
        let deque = &mut *self.deque;
        let block = match self.end {
            End::Back => deque.blocks.pop_back(),
            End::Front => {
                deque.front -= BLOCK_LEN;
                deque.back -= BLOCK_LEN;
                deque.blocks.pop_front()
            }
        };
        if let Some(block) = block {
            unsafe { deallocate(&deque.alloc, block, Deque::<T, A>::block_layout_unchecked()) };
        }
    }
}

/// Drops the initialized slots `[start, end)` block by block. If one of the
/// destructors unwinds, the remaining slots are still dropped.
unsafe fn drop_slots<T>(blocks: &BlockTable<T>, start: usize, end: usize) {
    struct Dropper<'a, T> {
        blocks: &'a BlockTable<T>,
        start: usize,
        end: usize,
    }

    impl<'a, T> Drop for Dropper<'a, T> {
        fn drop(&mut self) {
            while self.start < self.end {
                let (block, offset) = locate(self.start);
                let len = (BLOCK_LEN - offset).min(self.end - self.start);
                let ptr = unsafe { self.blocks.get(block).as_ptr().add(offset) };
                self.start += len;

                let guard = Dropper { blocks: self.blocks, start: self.start, end: self.end };
                unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, len)) };
                mem::forget(guard);
            }
        }
    }

    if mem::needs_drop::<T>() {
        drop(Dropper { blocks, start, end });
    }
}

impl<T, A: Allocator> Drop for Deque<T, A> {
    fn drop(&mut self) {
        struct FreeTable<'a, T, A: Allocator>(&'a mut Deque<T, A>);

        impl<'a, T, A: Allocator> Drop for FreeTable<'a, T, A> {
            fn drop(&mut self) {
                let deque = &mut *self.0;
                unsafe { deque.blocks.free(&deque.alloc) }
            }
        }

        let guard = FreeTable(self);
        guard.0.clear();
    }
}

impl<T, A: Allocator> Extend<T> for Deque<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|val| self.push_back(val));
    }
}

impl<'a, T: 'a + Copy, A: Allocator> Extend<&'a T> for Deque<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for Deque<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Global)
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Deque<T, A> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, A: AllocPolicy + Clone> Clone for Deque<T, A> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_in(self.alloc.select_on_clone())
    }

    /// Copy-and-swap: the copy is built completely before `self` changes, so
    /// an unwinding clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let alloc = if A::PROPAGATE_ON_CLONE_FROM { source.alloc.clone() } else { self.alloc.clone() };
        let mut copy = source.clone_in(alloc);
        self.swap_with(&mut copy);
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq<U>, U, A: Allocator, B: Allocator> PartialEq<Deque<U, B>> for Deque<T, A> {
    fn eq(&self, other: &Deque<U, B>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Deque<T, A> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Deque<T, A> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialOrd, A: Allocator> PartialOrd for Deque<T, A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, A: Allocator> Ord for Deque<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Eq, A: Allocator> Eq for Deque<T, A> {}

impl<T: Hash, A: Allocator> Hash for Deque<T, A> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|t| t.hash(state));
    }
}

impl<T, A: Allocator> Index<usize> for Deque<T, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Out of bounds access")
    }
}

impl<T, A: Allocator> IndexMut<usize> for Deque<T, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Out of bounds access")
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for Deque<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for Deque<T, A> {}

impl<A: Allocator> io::Write for Deque<u8, A> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        while written < buf.len() {
            if let Err(e) = self.grow_back() {
                if written > 0 {
                    break;
                }
                return Err(io::Error::new(io::ErrorKind::OutOfMemory, e));
            }
            let (_, offset) = locate(self.back);
            let len = (BLOCK_LEN - offset).min(buf.len() - written);
            // SAFETY: the block holding self.back exists and has `len` free slots from there
            unsafe { ptr::copy_nonoverlapping(buf.as_ptr().add(written), self.slot(self.back), len) };
            self.back += len;
            written += len;
        }
        Ok(written)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<A: Allocator> io::Read for Deque<u8, A> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        let mut read = 0;
        while read < n {
            let (_, offset) = locate(self.front);
            let len = (BLOCK_LEN - offset).min(n - read);
            // SAFETY: the `len` slots from self.front are initialized and in the same block
            unsafe { ptr::copy_nonoverlapping(self.slot(self.front), buf.as_mut_ptr().add(read), len) };
            self.front += len;
            read += len;
        }
        self.rewind_if_empty();
        Ok(n)
    }
}

impl<T, A: Allocator> IntoIterator for Deque<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Deque<T, A> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Deque<T, A> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_splits_on_block_boundaries() {
        assert_eq!(locate(0), (0, 0));
        assert_eq!(locate(BLOCK_LEN - 1), (0, BLOCK_LEN - 1));
        assert_eq!(locate(BLOCK_LEN), (1, 0));
        assert_eq!(locate(3 * BLOCK_LEN + 5), (3, 5));
    }

    #[test]
    fn first_push_back_allocates_one_block() {
        let mut d = Deque::new();
        assert_eq!(d.block_count(), 0);
        d.push_back(1);
        assert_eq!(d.block_count(), 1);
        assert_eq!((d.front, d.back), (0, 1));
    }

    #[test]
    fn push_front_rebases_by_one_block() {
        let mut d = Deque::new();
        d.push_back(1);
        d.push_front(0);
        assert_eq!(d.block_count(), 2);
        assert_eq!((d.front, d.back), (BLOCK_LEN - 1, BLOCK_LEN + 1));
        assert_eq!(d, [0, 1]);

        // the next front push fits in the prepended block
        d.push_front(-1);
        assert_eq!(d.block_count(), 2);
        assert_eq!(d.front, BLOCK_LEN - 2);
    }

    #[test]
    fn table_covers_back() {
        let mut d = Deque::new();
        for i in 0..2 * BLOCK_LEN + 1 {
            d.push_back(i);
            assert!(d.blocks.len() * BLOCK_LEN >= d.back);
        }
        assert_eq!(d.block_count(), 3);

        // popping never releases blocks, and pushing again reuses them
        for _ in 0..BLOCK_LEN {
            d.pop_back();
        }
        assert_eq!(d.block_count(), 3);
        for i in 0..BLOCK_LEN {
            d.push_back(i);
        }
        assert_eq!(d.block_count(), 3);
    }

    #[test]
    fn running_empty_rewinds() {
        let mut d = Deque::new();
        for i in 0..BLOCK_LEN + 10 {
            d.push_back(i);
        }
        while d.pop_front().is_some() {}
        assert_eq!((d.front, d.back), (BLOCK_LEN, BLOCK_LEN));
        assert_eq!(d.block_count(), 2);
        d.push_back(7);
        d.push_front(6);
        assert_eq!(d.block_count(), 2);
        assert_eq!(d, [6, 7]);
    }

    #[test]
    fn single_block_rewinds_to_its_middle() {
        let mut d = Deque::new();
        d.push_back(1);
        assert_eq!(d.pop_back(), Some(1));
        assert_eq!((d.front, d.back), (BLOCK_LEN / 2, BLOCK_LEN / 2));

        for i in 0..100 {
            d.push_front(i);
            assert_eq!(d.pop_front(), Some(i));
            d.push_front(i);
            assert_eq!(d.pop_back(), Some(i));
        }
        assert_eq!(d.block_count(), 1);
    }

    #[test]
    fn clear_releases_blocks() {
        let mut d: Deque<String> = (0..3 * BLOCK_LEN).map(|i| i.to_string()).collect();
        assert_eq!(d.block_count(), 3);
        d.clear();
        assert_eq!(d.block_count(), 0);
        assert!(d.is_empty());
        d.push_front("a".to_owned());
        assert_eq!(d.front(), Some(&"a".to_owned()));
    }
}
