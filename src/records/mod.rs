//! Record types and their tree-binding IOs.
//!
//! Every record type follows the same pattern: a plain struct as produced by
//! the decoding stage, a columns struct holding one `Vec` per field, and an
//! IO that binds those columns to branches named `<prefix>_<field>` plus a
//! `<prefix>_count` scalar. The IO is cleared once per event and records are
//! added zero or more times before the tree takes the entry.
//!
//! All three pieces are generated by [`flat_record!`] so that the bind, clear
//! and add code cannot drift between record types.

/// Declares a record struct together with its columns and IO types.
///
/// ```ignore
/// flat_record! {
///     /// Doc for the record.
///     pub struct MyRecord => MyRecordIO, MyRecordColumns, prefix = "my" {
///         roc: u32,
///         samples: Vec<u16>,
///     }
/// }
/// ```
macro_rules! flat_record {
    (
        $(#[$record_meta:meta])*
        pub struct $record:ident => $io:ident, $columns:ident, prefix = $prefix:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$record_meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $record {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Per-event columns of [`", stringify!($record), "`], one `Vec` per field.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $columns {
            $(pub $field: Vec<$ty>,)+
        }

        #[doc = concat!("Binds [`", stringify!($record), "`] fields to `", $prefix, "_*` branches.")]
        #[derive(Debug, Default)]
        pub struct $io {
            is_bound: bool,
            count: u64,
            columns: $columns,
        }

        impl $io {
            pub const PREFIX: &'static str = $prefix;
            pub const COUNT_BRANCH: &'static str = concat!($prefix, "_count");
            /// Field branches in declaration order, count branch excluded.
            pub const FIELD_BRANCHES: &'static [&'static str] =
                &[$(concat!($prefix, "_", stringify!($field)),)+];

            pub fn new() -> Self {
                Self::default()
            }

            pub fn add(&mut self, data: &$record) -> $crate::utils::error::Result<()> {
                if !self.is_bound {
                    return Err($crate::utils::error::FlatTreeError::NotBound {
                        record: stringify!($record),
                        io: stringify!($io),
                    });
                }
                self.count += 1;
                $(self.columns.$field.push(data.$field.clone());)+
                Ok(())
            }

            pub fn extend<'a, I>(&mut self, records: I) -> $crate::utils::error::Result<()>
            where
                I: IntoIterator<Item = &'a $record>,
            {
                for record in records {
                    self.add(record)?;
                }
                Ok(())
            }

            pub fn count(&self) -> u64 {
                self.count
            }

            pub fn columns(&self) -> &$columns {
                &self.columns
            }
        }

        impl $crate::domain::ports::AlignedArraysIO for $io {
            fn bind_to_tree(
                &mut self,
                tree: &mut dyn $crate::domain::ports::TreeSink,
            ) -> $crate::utils::error::Result<()> {
                // All or nothing: a conflict must not leave part of the
                // branches declared.
                let taken = ::std::iter::once(Self::COUNT_BRANCH)
                    .chain(Self::FIELD_BRANCHES.iter().copied())
                    .find(|name| tree.has_branch(name));
                if let Some(name) = taken {
                    return Err($crate::utils::error::FlatTreeError::BranchConflict {
                        tree: tree.tree_name().to_string(),
                        branch: name.to_string(),
                    });
                }

                tree.branch(Self::COUNT_BRANCH, $crate::domain::column::LeafType::Count)?;
                $(
                    tree.branch(
                        concat!($prefix, "_", stringify!($field)),
                        <$ty as $crate::domain::column::ColumnValue>::LEAF,
                    )?;
                )+
                self.is_bound = true;
                ::tracing::debug!(
                    "{} bound {} branches with prefix '{}'",
                    stringify!($io),
                    Self::FIELD_BRANCHES.len() + 1,
                    $prefix
                );
                Ok(())
            }

            fn clear(&mut self) {
                self.count = 0;
                $(self.columns.$field.clear();)+
            }

            fn is_bound_to_tree(&self) -> bool {
                self.is_bound
            }

            fn fill_entry(&self, entry: &mut $crate::domain::column::Entry) {
                entry.push(
                    Self::COUNT_BRANCH,
                    $crate::domain::column::BranchValue::Count(self.count),
                );
                $(
                    entry.push(
                        concat!($prefix, "_", stringify!($field)),
                        <$ty as $crate::domain::column::ColumnValue>::to_branch(&self.columns.$field),
                    );
                )+
            }

            fn name(&self) -> &'static str {
                stringify!($io)
            }
        }
    };
}

mod f125_fdc_pulse;
mod f125_window_raw;
mod srs;

pub use f125_fdc_pulse::{F125FdcPulseColumns, F125FdcPulseRecord, F125FdcPulseRecordIO};
pub use f125_window_raw::{F125WindowRawColumns, F125WindowRawRecord, F125WindowRawRecordIO};
pub use srs::{SrsColumns, SrsRecord, SrsRecordIO};
