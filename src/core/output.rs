use crate::core::tree::FlatTree;
use crate::domain::model::OutputFormat;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TreeMetadata {
    pub name: String,
    pub title: String,
    pub entries: u64,
    pub branches: usize,
    pub created_at: DateTime<Utc>,
}

pub struct TreeWriter<'a, S: Storage> {
    storage: &'a S,
    format: OutputFormat,
    write_schema: bool,
}

impl<'a, S: Storage> TreeWriter<'a, S> {
    pub fn new(storage: &'a S, format: OutputFormat, write_schema: bool) -> Self {
        Self {
            storage,
            format,
            write_schema,
        }
    }

    pub fn entries_file_name(tree: &FlatTree, format: OutputFormat) -> String {
        format!("{}.{}", tree.name(), format.extension())
    }

    /// Write entries, branch schema and metadata. Returns the written file
    /// names relative to the storage root.
    pub fn write(&self, tree: &FlatTree) -> Result<Vec<String>> {
        let mut written = Vec::new();

        let entries_name = Self::entries_file_name(tree, self.format);
        let entries = self.encode_entries(tree)?;
        tracing::debug!("Writing {} ({} bytes)", entries_name, entries.len());
        self.storage.write_file(&entries_name, &entries)?;
        written.push(entries_name);

        if self.write_schema {
            let schema_name = format!("{}_branches.csv", tree.name());
            let schema = encode_schema(tree)?;
            self.storage.write_file(&schema_name, &schema)?;
            written.push(schema_name);
        }

        let meta_name = format!("{}_meta.json", tree.name());
        let meta = TreeMetadata {
            name: tree.name().to_string(),
            title: tree.title().to_string(),
            entries: tree.entry_count(),
            branches: tree.branches().len(),
            created_at: Utc::now(),
        };
        self.storage
            .write_file(&meta_name, &serde_json::to_vec_pretty(&meta)?)?;
        written.push(meta_name);

        Ok(written)
    }

    fn encode_entries(&self, tree: &FlatTree) -> Result<Vec<u8>> {
        match self.format {
            OutputFormat::Jsonl => {
                let mut buf = Vec::new();
                for entry in tree.entries() {
                    serde_json::to_writer(&mut buf, entry)?;
                    buf.push(b'\n');
                }
                Ok(buf)
            }
            OutputFormat::Json => Ok(serde_json::to_vec_pretty(tree.entries())?),
        }
    }
}

fn encode_schema(tree: &FlatTree) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["branch", "leaf_type", "type_name"])?;
    for branch in tree.branches() {
        writer.write_record([
            branch.name.as_str(),
            branch.leaf.as_str(),
            branch.leaf.type_name(),
        ])?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(data)
}
