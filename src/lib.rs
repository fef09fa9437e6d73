pub mod config;
pub mod core;
pub mod domain;
pub mod records;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{storage::LocalStorage, FlatTreeConfig};
pub use crate::core::{
    engine::{FlattenEngine, RunSummary},
    event_io::EventIO,
    tree::FlatTree,
};
pub use crate::domain::model::{OutputFormat, RawEvent, RecordSelection};
pub use crate::records::{
    F125FdcPulseRecord, F125FdcPulseRecordIO, F125WindowRawRecord, F125WindowRawRecordIO,
    SrsRecord, SrsRecordIO,
};
pub use crate::utils::error::{FlatTreeError, Result};
