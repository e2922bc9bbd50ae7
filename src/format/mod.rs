//! JSON snapshot I/O for graph stores.

pub(crate) mod snapshot;

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::GraphWriter;
