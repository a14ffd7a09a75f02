pub mod types;
pub mod writer;

pub use types::{Location, PropertyBag, TestItem};
pub use writer::write_collection;
