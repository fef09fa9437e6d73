flat_record! {
    /// fADC125 pulse data in FDC mode. Values come from the two pulse words;
    /// the `*_emulated` fields are recomputed from window-raw data when it
    /// was read out alongside.
    pub struct F125FdcPulseRecord => F125FdcPulseRecordIO, F125FdcPulseColumns, prefix = "f125_pulse" {
        roc: u32,
        slot: u32,
        channel: u32,
        /// From first word.
        npk: u32,
        /// From first word.
        le_time: u32,
        /// From first word.
        time_quality_bit: u32,
        /// From first word.
        overflow_count: u32,
        /// From second word.
        pedestal: u32,
        /// From second word (type 6).
        integral: u32,
        /// From second word (type 9).
        peak_amp: u32,
        /// From second word.
        peak_time: u32,
        word1: u32,
        word2: u32,
        nsamples_pedestal: u32,
        nsamples_integral: u32,
        /// True if emulated values were copied over the main ones.
        emulated: bool,
        le_time_emulated: u32,
        time_quality_bit_emulated: u32,
        overflow_count_emulated: u32,
        pedestal_emulated: u32,
        integral_emulated: u32,
        peak_amp_emulated: u32,
        peak_time_emulated: u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::FlatTree;
    use crate::domain::column::{BranchValue, Entry};
    use crate::domain::ports::AlignedArraysIO;

    #[test]
    fn test_pulse_add_and_fill() {
        let mut tree = FlatTree::new("events", "test");
        let mut io = F125FdcPulseRecordIO::new();
        io.bind_to_tree(&mut tree).unwrap();
        assert_eq!(tree.branches().len(), 24);

        io.add(&F125FdcPulseRecord {
            channel: 12,
            peak_amp: 830,
            emulated: true,
            ..Default::default()
        })
        .unwrap();

        let mut entry = Entry::new();
        io.fill_entry(&mut entry);
        assert_eq!(entry.get("f125_pulse_count"), Some(&BranchValue::Count(1)));
        assert_eq!(entry.get("f125_pulse_peak_amp"), Some(&BranchValue::U32(vec![830])));
        assert_eq!(entry.get("f125_pulse_emulated"), Some(&BranchValue::Bool(vec![true])));
    }
}
