//! A doubly linked list closed into a ring by a sentinel node.
//!
//! The sentinel is a link header without a value, allocated once when the
//! list is created. Its `next` is the first node and its `prev` the last, so
//! an empty list is a sentinel pointing at itself, and pushing or popping at
//! either end is the same relinking with no null checks. The end cursor always
//! sits on the sentinel.
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   ↓                                              │
//! sentinel ⇄ node 0 ⇄ node 1 ⇄ … ⇄ node n-1 ───────┘
//! ```

use alloc::alloc::Global;
use core::{
    alloc::{Allocator, Layout},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

use crate::{
    error::Result,
    raw::{deallocate, infallible, AllocPolicy, RawSlot},
};

mod cursor;
mod iter;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, IterMut};

#[repr(C)]
struct Links {
    next: NonNull<Links>,
    prev: NonNull<Links>,
}

// `links` must stay the first field, so a node pointer is also a links pointer.
#[repr(C)]
struct Node<T> {
    links: Links,
    value: T,
}

impl Links {
    #[inline]
    fn unlinked() -> Self {
        Self { next: NonNull::dangling(), prev: NonNull::dangling() }
    }
}

#[inline]
unsafe fn next(link: NonNull<Links>) -> NonNull<Links> {
    (*link.as_ptr()).next
}

#[inline]
unsafe fn prev(link: NonNull<Links>) -> NonNull<Links> {
    (*link.as_ptr()).prev
}

/// SAFETY: `link` must be a value node (not the sentinel) of a list of `T`.
#[inline]
unsafe fn value<T>(link: NonNull<Links>) -> *mut T {
    ptr::addr_of_mut!((*link.cast::<Node<T>>().as_ptr()).value)
}

pub struct List<T, A: Allocator = Global> {
    sentinel: NonNull<Links>,
    len: usize,
    alloc: A,
    _marker: PhantomData<Node<T>>,
}

impl<T> List<T> {
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(len, Global)
    }

    #[inline]
    pub fn from_elem(len: usize, val: &T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(len, val, Global)
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Creates an empty list. This allocates the sentinel.
    #[inline]
    pub fn new_in(alloc: A) -> Self {
        infallible(Self::try_new_in(alloc))
    }

    pub fn try_new_in(alloc: A) -> Result<Self> {
        let slot = RawSlot::<Links, A>::new(&alloc)?;
        let ptr = slot.ptr();
        let sentinel = slot.construct_with(|| Links { next: ptr, prev: ptr });
        Ok(Self { sentinel, len: 0, alloc, _marker: PhantomData })
    }

    pub fn with_len_in(len: usize, alloc: A) -> Self
    where
        T: Default,
    {
        // a panicking constructor drops `this`, which frees every node built so far
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

    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self> {
        let mut this = Self::try_new_in(alloc)?;
        for val in iter {
            this.try_push_back(val)?;
        }
        Ok(this)
    }

    pub fn clone_in<B: Allocator>(&self, alloc: B) -> List<T, B>
    where
        T: Clone,
    {
        let mut copy = List::new_in(alloc);
        for val in self {
            copy.emplace_back_with(|| val.clone());
        }
        copy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    fn head(&self) -> NonNull<Links> {
        unsafe { next(self.sentinel) }
    }

    #[inline]
    fn tail(&self) -> NonNull<Links> {
        unsafe { prev(self.sentinel) }
    }

    /// Links `node` in right before `at`, which may be the sentinel.
    ///
    /// SAFETY: `at` must belong to this list and `node` must be unlinked.
    #[inline]
    unsafe fn link_before(&mut self, at: NonNull<Links>, node: NonNull<Links>) {
        let before = prev(at);
        (*node.as_ptr()).prev = before;
        (*node.as_ptr()).next = at;
        (*before.as_ptr()).next = node;
        (*at.as_ptr()).prev = node;
        self.len += 1;
    }

    /// Unlinks a value node, drops nothing and returns its value.
    ///
    /// SAFETY: `node` must be a value node of this list.
    #[inline]
    unsafe fn unlink(&mut self, node: NonNull<Links>) -> T {
        let (before, after) = (prev(node), next(node));
        (*before.as_ptr()).next = after;
        (*after.as_ptr()).prev = before;
        self.len -= 1;

        let val = value::<T>(node).read();
        deallocate(&self.alloc, node.cast::<Node<T>>(), Layout::new::<Node<T>>());
        val
    }

    /// Allocates a node holding the value returned by `f`. If `f` unwinds,
    /// the node is deallocated again.
    #[inline]
    fn new_node<F: FnOnce() -> T>(&self, f: F) -> Result<NonNull<Links>> {
        let slot = RawSlot::<Node<T>, A>::new(&self.alloc)?;
        let node = slot.construct_with(|| Node { links: Links::unlinked(), value: f() });
        Ok(node.cast())
    }

    #[inline]
    pub fn push_back(&mut self, val: T) {
        self.emplace_back_with(|| val)
    }

    #[inline]
    pub fn push_front(&mut self, val: T) {
        self.emplace_front_with(|| val)
    }

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

    pub fn try_emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> Result {
        let node = self.new_node(f)?;
        unsafe { self.link_before(self.sentinel, node) };
        Ok(())
    }

    pub fn try_emplace_front_with<F: FnOnce() -> T>(&mut self, f: F) -> Result {
        let node = self.new_node(f)?;
        unsafe { self.link_before(self.head(), node) };
        Ok(())
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { self.unlink(self.tail()) })
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { self.unlink(self.head()) })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { &*value(self.head()) })
        }
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { &*value(self.tail()) })
        }
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { &mut *value(self.head()) })
        }
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { &mut *value(self.tail()) })
        }
    }

    /// Drops every element. The sentinel stays allocated.
    pub fn clear(&mut self) {
        // each pop leaves the ring consistent, so an unwinding destructor
        // leaves a valid (shorter) list behind
        while self.pop_front().is_some() {}
    }

    #[inline]
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == t)
    }

    /// Exchanges the whole contents (and allocators) of two lists in *O*(1).
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.tail(), self.len)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head(), self.tail(), self.len)
    }

    /// A cursor at the first element, or at the sentinel if the list is empty.
    #[inline]
    pub fn cursor_start(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, self.head())
    }

    /// A cursor on the sentinel, one step past the last element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T, A> {
        Cursor::new(self, self.sentinel)
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        struct DropGuard<'a, T, A: Allocator>(&'a mut List<T, A>);

        impl<'a, T, A: Allocator> Drop for DropGuard<'a, T, A> {
            fn drop(&mut self) {
                // Continue the same loop we do below. This only runs when a destructor has panicked.
                let list = &mut *self.0;
                while list.pop_front().is_some() {}
                unsafe { deallocate(&list.alloc, list.sentinel, Layout::new::<Links>()) };
            }
        }

        let guard = DropGuard(self);
        while let Some(val) = guard.0.pop_front() {
            drop(val);
        }
        // the guard frees the sentinel on the way out
    }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|val| self.push_back(val));
    }
}

impl<'a, T: 'a + Copy, A: Allocator> Extend<&'a T> for List<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for List<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Global)
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, A: AllocPolicy + Clone> Clone for List<T, A> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_in(self.alloc.select_on_clone())
    }

    /// Copy-and-swap, see [`Deque`](crate::Deque)'s `clone_from`.
    fn clone_from(&mut self, source: &Self) {
        let alloc = if A::PROPAGATE_ON_CLONE_FROM { source.alloc.clone() } else { self.alloc.clone() };
        let mut copy = source.clone_in(alloc);
        self.swap_with(&mut copy);
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq<U>, U, A: Allocator, B: Allocator> PartialEq<List<U, B>> for List<T, A> {
    fn eq(&self, other: &List<U, B>) -> bool {
        self.len == other.len && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for List<T, A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, A: Allocator> Ord for List<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash, A: Allocator> Hash for List<T, A> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|t| t.hash(state));
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for List<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for List<T, A> {}

impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the ring in both directions and checks every link is mirrored.
    fn check_links<T, A: Allocator>(list: &List<T, A>) {
        unsafe {
            let mut cur = list.sentinel;
            for _ in 0..=list.len {
                let after = next(cur);
                assert_eq!(prev(after), cur);
                cur = after;
            }
            assert_eq!(cur, list.sentinel);
            if !list.is_empty() {
                assert_eq!(prev(list.head()), list.sentinel);
                assert_eq!(next(list.tail()), list.sentinel);
            }
        }
    }

    #[test]
    fn empty_sentinel_points_at_itself() {
        let list = List::<i32>::new();
        assert_eq!(list.head(), list.sentinel);
        assert_eq!(list.tail(), list.sentinel);
        check_links(&list);
    }

    #[test]
    fn links_stay_mirrored() {
        let mut list = List::new();
        list.push_back(1);
        check_links(&list);
        list.push_front(0);
        list.push_back(2);
        check_links(&list);
        assert_eq!(list.pop_front(), Some(0));
        check_links(&list);
        assert_eq!(list.pop_back(), Some(2));
        check_links(&list);
        assert_eq!(list.pop_back(), Some(1));
        check_links(&list);
        assert_eq!(list.head(), list.sentinel);
    }
}
