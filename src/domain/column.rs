//! Column and entry types shared by the record IOs and the tree.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Storage type of a single branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafType {
    /// Scalar per-entry record count.
    Count,
    U16,
    U32,
    Bool,
    /// One variable-length sample vector per record.
    U16Vec,
}

impl LeafType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafType::Count => "count",
            LeafType::U16 => "u16",
            LeafType::U32 => "u32",
            LeafType::Bool => "bool",
            LeafType::U16Vec => "u16_vec",
        }
    }

    /// Type name as a C++ reader of the tree would see it.
    pub fn type_name(&self) -> &'static str {
        match self {
            LeafType::Count => "ULong64_t",
            LeafType::U16 => "vector<unsigned short>",
            LeafType::U32 => "vector<unsigned int>",
            LeafType::Bool => "vector<bool>",
            LeafType::U16Vec => "vector<vector<unsigned short> >",
        }
    }

    /// Leaflist code for scalar branches; vector branches have none.
    pub fn leaflist_code(&self) -> Option<char> {
        match self {
            LeafType::Count => Some('l'),
            _ => None,
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of one branch for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BranchValue {
    Count(u64),
    U16(Vec<u16>),
    U32(Vec<u32>),
    Bool(Vec<bool>),
    U16Vec(Vec<Vec<u16>>),
}

impl BranchValue {
    pub fn leaf_type(&self) -> LeafType {
        match self {
            BranchValue::Count(_) => LeafType::Count,
            BranchValue::U16(_) => LeafType::U16,
            BranchValue::U32(_) => LeafType::U32,
            BranchValue::Bool(_) => LeafType::Bool,
            BranchValue::U16Vec(_) => LeafType::U16Vec,
        }
    }

    /// Number of values held; a count branch always holds one.
    pub fn len(&self) -> usize {
        match self {
            BranchValue::Count(_) => 1,
            BranchValue::U16(v) => v.len(),
            BranchValue::U32(v) => v.len(),
            BranchValue::Bool(v) => v.len(),
            BranchValue::U16Vec(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Field types that can back a record column.
pub trait ColumnValue: Clone {
    const LEAF: LeafType;

    fn to_branch(column: &[Self]) -> BranchValue;
}

impl ColumnValue for u16 {
    const LEAF: LeafType = LeafType::U16;

    fn to_branch(column: &[Self]) -> BranchValue {
        BranchValue::U16(column.to_vec())
    }
}

impl ColumnValue for u32 {
    const LEAF: LeafType = LeafType::U32;

    fn to_branch(column: &[Self]) -> BranchValue {
        BranchValue::U32(column.to_vec())
    }
}

impl ColumnValue for bool {
    const LEAF: LeafType = LeafType::Bool;

    fn to_branch(column: &[Self]) -> BranchValue {
        BranchValue::Bool(column.to_vec())
    }
}

impl ColumnValue for Vec<u16> {
    const LEAF: LeafType = LeafType::U16Vec;

    fn to_branch(column: &[Self]) -> BranchValue {
        BranchValue::U16Vec(column.to_vec())
    }
}

/// One row of a tree, branches kept in the order they were filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    values: Vec<(String, BranchValue)>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, branch: impl Into<String>, value: BranchValue) {
        self.values.push((branch.into(), value));
    }

    pub fn get(&self, branch: &str) -> Option<&BranchValue> {
        self.values
            .iter()
            .find(|(name, _)| name == branch)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BranchValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
