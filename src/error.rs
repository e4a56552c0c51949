use core::alloc::Layout;

pub type Result<T = (), E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of range for a container of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("capacity overflow")]
    CapacityOverflow,
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError { layout: Layout },
}
