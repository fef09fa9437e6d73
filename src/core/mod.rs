pub mod engine;
pub mod event_io;
pub mod output;
pub mod source;
pub mod tree;

pub use crate::domain::column::{BranchValue, Entry, LeafType};
pub use crate::domain::ports::{AlignedArraysIO, ConfigProvider, Storage, TreeSink};
pub use crate::utils::error::Result;
