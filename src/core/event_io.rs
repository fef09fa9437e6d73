use crate::domain::model::{RawEvent, RecordSelection};
use crate::domain::ports::{AlignedArraysIO, TreeSink};
use crate::records::{F125FdcPulseRecordIO, F125WindowRawRecordIO, SrsRecordIO};
use crate::utils::error::Result;

/// Record counts accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RecordCounts {
    pub f125_wraw: u64,
    pub srs: u64,
    pub f125_pulse: u64,
    pub skipped: u64,
}

/// The set of record IOs written into one tree.
#[derive(Debug, Default)]
pub struct EventIO {
    selection: RecordSelection,
    pub f125_wraw: F125WindowRawRecordIO,
    pub srs: SrsRecordIO,
    pub f125_pulse: F125FdcPulseRecordIO,
}

impl EventIO {
    pub fn new(selection: RecordSelection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> RecordSelection {
        self.selection
    }

    /// Bind the selected IOs, in a fixed order so the branch layout does not
    /// depend on the caller.
    pub fn bind(&mut self, tree: &mut dyn TreeSink) -> Result<()> {
        if self.selection.f125_wraw {
            self.f125_wraw.bind_to_tree(tree)?;
        }
        if self.selection.srs {
            self.srs.bind_to_tree(tree)?;
        }
        if self.selection.f125_pulse {
            self.f125_pulse.bind_to_tree(tree)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.f125_wraw.clear();
        self.srs.clear();
        self.f125_pulse.clear();
    }

    /// Append all records of `event` to the bound IOs. Records of types
    /// that were not selected are dropped and counted as skipped.
    pub fn add_event(&mut self, event: &RawEvent, counts: &mut RecordCounts) -> Result<()> {
        if self.f125_wraw.is_bound_to_tree() {
            self.f125_wraw.extend(&event.f125_wraw)?;
            counts.f125_wraw += event.f125_wraw.len() as u64;
        } else if !event.f125_wraw.is_empty() {
            tracing::debug!(
                "Event {}: skipped {} f125_wraw records",
                event.event_number,
                event.f125_wraw.len()
            );
            counts.skipped += event.f125_wraw.len() as u64;
        }

        if self.srs.is_bound_to_tree() {
            self.srs.extend(&event.srs)?;
            counts.srs += event.srs.len() as u64;
        } else if !event.srs.is_empty() {
            tracing::debug!(
                "Event {}: skipped {} srs records",
                event.event_number,
                event.srs.len()
            );
            counts.skipped += event.srs.len() as u64;
        }

        if self.f125_pulse.is_bound_to_tree() {
            self.f125_pulse.extend(&event.f125_pulse)?;
            counts.f125_pulse += event.f125_pulse.len() as u64;
        } else if !event.f125_pulse.is_empty() {
            tracing::debug!(
                "Event {}: skipped {} f125_pulse records",
                event.event_number,
                event.f125_pulse.len()
            );
            counts.skipped += event.f125_pulse.len() as u64;
        }

        Ok(())
    }

    pub fn sources(&self) -> Vec<&dyn AlignedArraysIO> {
        let all: [&dyn AlignedArraysIO; 3] = [&self.f125_wraw, &self.srs, &self.f125_pulse];
        all.into_iter().filter(|io| io.is_bound_to_tree()).collect()
    }
}
