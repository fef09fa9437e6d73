use crate::domain::column::{Entry, LeafType};
use crate::domain::model::{OutputFormat, RecordSelection};
use crate::utils::error::Result;

/// Anything a record IO can declare its branches on.
pub trait TreeSink {
    fn tree_name(&self) -> &str;

    fn has_branch(&self, name: &str) -> bool;

    fn branch(&mut self, name: &str, leaf: LeafType) -> Result<()>;
}

/// Per-record-type buffer of aligned columns, one branch per column.
pub trait AlignedArraysIO {
    fn bind_to_tree(&mut self, tree: &mut dyn TreeSink) -> Result<()>;

    /// Reset the per-event buffers. The binding is kept.
    fn clear(&mut self);

    fn is_bound_to_tree(&self) -> bool;

    /// Copy the current buffers into `entry` under the bound branch names.
    fn fill_entry(&self, entry: &mut Entry);

    fn name(&self) -> &'static str;
}

/// Output side only. Event input lives outside the storage root and is
/// opened directly by the engine.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn tree_name(&self) -> &str;
    fn tree_title(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn write_schema(&self) -> bool;
    fn record_selection(&self) -> RecordSelection;
}
