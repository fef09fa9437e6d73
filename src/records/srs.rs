flat_record! {
    /// One APV25 channel read out through the SRS (scalable readout system)
    /// GEM electronics.
    pub struct SrsRecord => SrsRecordIO, SrsColumns, prefix = "srs" {
        roc: u32,
        slot: u32,
        channel: u32,
        apv_id: u32,
        channel_apv: u32,
        best_sample: u16,
        raw_samples: u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::FlatTree;
    use crate::domain::column::LeafType;
    use crate::domain::ports::AlignedArraysIO;

    #[test]
    fn test_srs_branches() {
        assert_eq!(SrsRecordIO::COUNT_BRANCH, "srs_count");
        assert_eq!(
            SrsRecordIO::FIELD_BRANCHES,
            &[
                "srs_roc",
                "srs_slot",
                "srs_channel",
                "srs_apv_id",
                "srs_channel_apv",
                "srs_best_sample",
                "srs_raw_samples",
            ]
        );

        let mut tree = FlatTree::new("events", "test");
        SrsRecordIO::new().bind_to_tree(&mut tree).unwrap();
        assert_eq!(tree.branch_spec("srs_best_sample").map(|b| b.leaf), Some(LeafType::U16));
    }

    #[test]
    fn test_srs_add_and_clear() {
        let mut tree = FlatTree::new("events", "test");
        let mut io = SrsRecordIO::new();
        io.bind_to_tree(&mut tree).unwrap();

        io.add(&SrsRecord {
            apv_id: 3,
            best_sample: 2,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(io.columns().apv_id, vec![3]);
        assert_eq!(io.columns().best_sample, vec![2]);

        io.clear();
        assert_eq!(io.count(), 0);
        assert!(io.columns().apv_id.is_empty());
    }
}
