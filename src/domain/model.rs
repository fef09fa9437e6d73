use crate::records::{F125FdcPulseRecord, F125WindowRawRecord, SrsRecord};
use serde::{Deserialize, Serialize};

/// One unpacked event as handed over by the decoding stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub event_number: u64,
    #[serde(default)]
    pub f125_wraw: Vec<F125WindowRawRecord>,
    #[serde(default)]
    pub srs: Vec<SrsRecord>,
    #[serde(default)]
    pub f125_pulse: Vec<F125FdcPulseRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        }
    }
}

/// Which record types get bound to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSelection {
    pub f125_wraw: bool,
    pub srs: bool,
    pub f125_pulse: bool,
}

impl Default for RecordSelection {
    fn default() -> Self {
        Self {
            f125_wraw: true,
            srs: true,
            f125_pulse: true,
        }
    }
}

impl RecordSelection {
    pub fn none() -> Self {
        Self {
            f125_wraw: false,
            srs: false,
            f125_pulse: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.f125_wraw || self.srs || self.f125_pulse)
    }
}
