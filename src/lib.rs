pub mod bucket;
pub mod cover;
pub mod error;
pub mod io;

pub use bucket::{deque, graph, list, range, slots};
pub use cover::{Cover, Heuristic};
pub use error::{BucketError, ParseError, Result};
