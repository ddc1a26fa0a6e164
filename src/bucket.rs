pub mod deque;
pub mod graph;
pub mod list;
pub mod range;
pub mod slots;

// Re-export all modules
pub use deque::*;
pub use graph::*;
pub use list::*;
pub use range::*;
pub use slots::*;
