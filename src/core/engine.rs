use crate::core::event_io::{EventIO, RecordCounts};
use crate::core::output::TreeWriter;
use crate::core::source::read_events;
use crate::core::tree::FlatTree;
use crate::domain::model::RawEvent;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{FlatTreeError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tree: String,
    pub events: u64,
    pub branches: usize,
    pub records: RecordCounts,
    pub files: Vec<String>,
}

impl RunSummary {
    fn new(tree: &FlatTree, records: RecordCounts, files: Vec<String>) -> Self {
        Self {
            tree: tree.name().to_string(),
            events: tree.entry_count(),
            branches: tree.branches().len(),
            records,
            files,
        }
    }
}

pub struct FlattenEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FlattenEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let (tree, records) = self.read_and_flatten()?;

        let writer = TreeWriter::new(
            &self.storage,
            self.config.output_format(),
            self.config.write_schema(),
        );
        let files = writer
            .write(&tree)?
            .iter()
            .map(|name| self.storage.display_path(name))
            .collect::<Vec<_>>();
        for file in &files {
            tracing::debug!("Wrote {}", file);
        }

        Ok(RunSummary::new(&tree, records, files))
    }

    /// Everything `run` does except writing output.
    pub fn dry_run(&self) -> Result<RunSummary> {
        let (tree, records) = self.read_and_flatten()?;
        Ok(RunSummary::new(&tree, records, Vec::new()))
    }

    fn read_and_flatten(&self) -> Result<(FlatTree, RecordCounts)> {
        tracing::info!("Reading events from {}", self.config.input_path());
        let path = self.config.input_path();
        let file = File::open(path).map_err(|source| FlatTreeError::InputOpen {
            path: path.to_string(),
            source,
        })?;
        let events = read_events(BufReader::new(file))?;
        tracing::info!("Read {} events", events.len());

        let (tree, records) = self.flatten(&events)?;
        tracing::info!(
            "Filled tree '{}': {} entries, {} branches",
            tree.name(),
            tree.entry_count(),
            tree.branches().len()
        );
        if records.skipped > 0 {
            tracing::warn!(
                "{} records of unselected types were not written",
                records.skipped
            );
        }
        Ok((tree, records))
    }

    /// One entry per event: clear, add every record, fill.
    pub fn flatten(&self, events: &[RawEvent]) -> Result<(FlatTree, RecordCounts)> {
        let mut tree = FlatTree::new(self.config.tree_name(), self.config.tree_title());
        let mut io = EventIO::new(self.config.record_selection());
        io.bind(&mut tree)?;

        let mut counts = RecordCounts::default();
        for event in events {
            io.clear();
            io.add_event(event, &mut counts)?;
            let entry = tree.fill(&io.sources())?;
            tracing::trace!("Event {} -> entry {}", event.event_number, entry);
        }

        Ok((tree, counts))
    }
}
