//! Collections backing the traversal engines.

pub mod indexed_heap;

pub use indexed_heap::IndexedMinHeap;
