use crate::domain::column::{BranchValue, Entry, LeafType};
use crate::domain::ports::{AlignedArraysIO, TreeSink};
use crate::utils::error::{FlatTreeError, Result};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchSpec {
    pub name: String,
    pub leaf: LeafType,
}

/// In-memory columnar tree. Branches are declared up front by the bound IOs,
/// then one entry is taken per `fill`.
#[derive(Debug, Clone)]
pub struct FlatTree {
    name: String,
    title: String,
    branches: Vec<BranchSpec>,
    index: HashMap<String, usize>,
    entries: Vec<Entry>,
}

impl FlatTree {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            branches: Vec::new(),
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn branches(&self) -> &[BranchSpec] {
        &self.branches
    }

    pub fn branch_spec(&self, name: &str) -> Option<&BranchSpec> {
        self.index.get(name).map(|&i| &self.branches[i])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Values of one branch across all entries.
    pub fn column<'a>(&'a self, branch: &'a str) -> impl Iterator<Item = &'a BranchValue> + 'a {
        self.entries.iter().filter_map(move |entry| entry.get(branch))
    }

    /// Take one entry from the current buffers of `sources`.
    ///
    /// The entry must cover every declared branch exactly once with the
    /// declared leaf type. On error nothing is stored.
    pub fn fill(&mut self, sources: &[&dyn AlignedArraysIO]) -> Result<u64> {
        let entry_number = self.entry_count();

        let mut entry = Entry::new();
        for source in sources {
            source.fill_entry(&mut entry);
        }

        let mut seen = vec![false; self.branches.len()];
        for (name, value) in entry.iter() {
            let Some(&i) = self.index.get(name) else {
                return Err(FlatTreeError::UnknownBranch {
                    tree: self.name.clone(),
                    branch: name.to_string(),
                });
            };
            if seen[i] {
                return Err(FlatTreeError::BranchConflict {
                    tree: self.name.clone(),
                    branch: name.to_string(),
                });
            }
            seen[i] = true;

            let expected = self.branches[i].leaf;
            if value.leaf_type() != expected {
                return Err(FlatTreeError::LeafMismatch {
                    branch: name.to_string(),
                    expected,
                    actual: value.leaf_type(),
                });
            }
        }

        if let Some(missing) = seen.iter().position(|filled| !filled) {
            return Err(FlatTreeError::MissingBranch {
                tree: self.name.clone(),
                branch: self.branches[missing].name.clone(),
                entry: entry_number,
            });
        }

        tracing::trace!("Tree '{}' entry {} filled", self.name, entry_number);
        self.entries.push(entry);
        Ok(entry_number)
    }
}

impl TreeSink for FlatTree {
    fn tree_name(&self) -> &str {
        &self.name
    }

    fn has_branch(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn branch(&mut self, name: &str, leaf: LeafType) -> Result<()> {
        if self.index.contains_key(name) {
            return Err(FlatTreeError::BranchConflict {
                tree: self.name.clone(),
                branch: name.to_string(),
            });
        }
        self.index.insert(name.to_string(), self.branches.len());
        self.branches.push(BranchSpec {
            name: name.to_string(),
            leaf,
        });
        Ok(())
    }
}
