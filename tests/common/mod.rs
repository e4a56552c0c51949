#![allow(dead_code)]

use std::{
    alloc::{AllocError, Allocator, Global, Layout},
    cell::Cell,
    ptr::NonNull,
    rc::Rc,
};

use blockseq::AllocPolicy;

/// Counts live allocations and can be told to start failing.
#[derive(Clone, Default)]
pub struct CountingAlloc {
    live: Rc<Cell<usize>>,
    budget: Rc<Cell<Option<usize>>>,
}

impl CountingAlloc {
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Lets `n` more allocations succeed, then fails every one after.
    pub fn fail_after(&self, n: usize) {
        self.budget.set(Some(n));
    }

    pub fn stop_failing(&self) {
        self.budget.set(None);
    }
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if let Some(n) = self.budget.get() {
            if n == 0 {
                return Err(AllocError);
            }
            self.budget.set(Some(n - 1));
        }
        let ptr = Global.allocate(layout)?;
        self.live.set(self.live.get() + 1);
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        Global.deallocate(ptr, layout)
    }
}

impl AllocPolicy for CountingAlloc {}

/// An allocator with an identity, to observe which allocator a container
/// ends up with after cloning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged<const PROPAGATE: bool>(pub u32);

unsafe impl<const PROPAGATE: bool> Allocator for Tagged<PROPAGATE> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        Global.deallocate(ptr, layout)
    }
}

impl<const PROPAGATE: bool> AllocPolicy for Tagged<PROPAGATE> {
    const PROPAGATE_ON_CLONE_FROM: bool = PROPAGATE;

    fn select_on_clone(&self) -> Self {
        Tagged(self.0 + 100)
    }
}

/// A value whose `clone` panics for negative payloads, and which counts how
/// often it is dropped.
#[derive(Debug)]
pub struct Fuse {
    pub val: i32,
    drops: Rc<Cell<usize>>,
}

impl Fuse {
    pub fn new(val: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self { val, drops: drops.clone() }
    }
}

impl Clone for Fuse {
    fn clone(&self) -> Self {
        if self.val < 0 {
            panic!("fuse {} blew", self.val);
        }
        Self { val: self.val, drops: self.drops.clone() }
    }
}

impl Drop for Fuse {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
