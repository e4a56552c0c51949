//! Glue between the containers and the user's [`Allocator`].

use alloc::alloc::{handle_alloc_error, Global};
use core::{
    alloc::{Allocator, Layout},
    mem,
    ptr::NonNull,
};

use crate::error::{Error, Result};

/// Allocator behavior consulted when a container is cloned.
///
/// The defaults mirror a stateless allocator: a clone uses a copy of the
/// source's allocator, and `clone_from` keeps the destination's allocator.
pub trait AllocPolicy: Allocator {
    /// Whether [`Clone::clone_from`] replaces the destination's allocator with
    /// a clone of the source's before copying the elements.
    const PROPAGATE_ON_CLONE_FROM: bool = false;

    /// Returns the allocator a cloned container is built with.
    #[inline]
    fn select_on_clone(&self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }
}

impl AllocPolicy for Global {}

impl<A: AllocPolicy + ?Sized> AllocPolicy for &A {
    const PROPAGATE_ON_CLONE_FROM: bool = A::PROPAGATE_ON_CLONE_FROM;
}

#[inline]
pub(crate) fn array_layout<T>(len: usize) -> Result<Layout> {
    match Layout::array::<T>(len) {
        Ok(l) if l.size() <= isize::MAX as _ => Ok(l),
        _ => Err(Error::CapacityOverflow),
    }
}

/// Allocates memory for `layout`, which must describe storage for `T`s.
/// Zero-sized layouts never reach the allocator.
#[inline]
pub(crate) fn allocate<T, A: Allocator + ?Sized>(alloc: &A, layout: Layout) -> Result<NonNull<T>> {
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    alloc.allocate(layout).map(NonNull::cast).map_err(|_| Error::AllocError { layout })
}

/// # Safety
/// `ptr` must come from [`allocate`] with the same allocator and layout.
#[inline]
pub(crate) unsafe fn deallocate<T, A: Allocator + ?Sized>(alloc: &A, ptr: NonNull<T>, layout: Layout) {
    if layout.size() != 0 {
        alloc.deallocate(ptr.cast(), layout);
    }
}

/// Unwraps the result of a fallible operation the way the infallible
/// collection methods do: allocation failures go to [`handle_alloc_error`],
/// everything else is a capacity overflow.
#[inline]
pub(crate) fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(t) => t,
        Err(Error::AllocError { layout }) => handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow"),
    }
}

/// A freshly allocated, uninitialized `T`. Dropping it releases the memory,
/// so an unwinding constructor never leaks the allocation.
pub(crate) struct RawSlot<'a, T, A: Allocator> {
    ptr: NonNull<T>,
    alloc: &'a A,
}

impl<'a, T, A: Allocator> RawSlot<'a, T, A> {
    #[inline]
    pub(crate) fn new(alloc: &'a A) -> Result<Self> {
        let ptr = allocate(alloc, Layout::new::<T>())?;
        Ok(Self { ptr, alloc })
    }

    #[inline]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Writes the value produced by `f` into the slot and hands ownership of
    /// the allocation to the caller.
    #[inline]
    pub(crate) fn construct_with<F: FnOnce() -> T>(self, f: F) -> NonNull<T> {
        let val = f();
        let ptr = self.ptr;
        mem::forget(self);
        // SAFETY: ptr is valid for writes of a T and still uninitialized
        unsafe { ptr.as_ptr().write(val) };
        ptr
    }
}

impl<'a, T, A: Allocator> Drop for RawSlot<'a, T, A> {
    fn drop(&mut self) {
        unsafe { deallocate(self.alloc, self.ptr, Layout::new::<T>()) }
    }
}
