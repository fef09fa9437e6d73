flat_record! {
    /// Flash-ADC (fADC125) window-raw readout of one channel: the full
    /// sample window as read out, before any pulse fitting.
    pub struct F125WindowRawRecord => F125WindowRawRecordIO, F125WindowRawColumns, prefix = "f125_wraw" {
        roc: u32,
        slot: u32,
        channel: u32,
        /// Set by the module when the sample words failed its own checks.
        invalid_samples: bool,
        overflow: bool,
        itrigger: u32,
        samples: Vec<u16>,
    }
}
