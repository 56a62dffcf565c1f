//! Repository Layer
//!
//! Storage abstraction plus the write-through cart snapshot repository.

mod cart_repo;
mod memory;
mod traits;


pub use cart_repo::CartRepository;
pub use memory::MemoryStorage;
pub use traits::CartStorage;
