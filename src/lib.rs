#![feature(allocator_api, slice_range)]

//! Two allocator-aware sequence containers:
//!
//! * [`Deque`]: a double-ended queue stored as a table of fixed-size blocks,
//!   with amortized *O*(1) pushes and pops at both ends and *O*(1) indexing.
//! * [`List`]: a doubly linked list closed into a ring by a sentinel node.
//!
//! Both take their memory from an [`Allocator`](core::alloc::Allocator) and
//! consult [`AllocPolicy`] when cloned. Pushes are all-or-nothing: if the
//! allocator fails or the element's constructor panics, the container is left
//! as it was before the call, and a failing bulk construction releases
//! everything it had built.

extern crate alloc;

pub mod deque;
pub mod error;
pub mod list;
mod raw;

pub use deque::{Deque, BLOCK_LEN};
pub use error::{Error, Result};
pub use list::List;
pub use raw::AllocPolicy;
