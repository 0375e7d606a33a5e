//! Equalizer band type.

/// Center frequencies of the default 15-band layout, in Hz.
///
/// The order matches the channel layout of the `mbeq_1197` LADSPA plugin and
/// is significant: bands are stored and serialized by slot index.
pub const DEFAULT_FREQUENCIES: [u32; 15] = [
    50, 100, 156, 220, 311, 440, 622, 880, 1250, 1750, 2500, 3500, 5000, 10000, 20000,
];

/// One frequency channel of the equalizer.
///
/// The center frequency is fixed per slot; only the gain ("control") changes
/// in normal use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Gain in dB.
    pub control: f32,
    /// Center frequency in Hz.
    pub frequency: u32,
}

impl Band {
    /// Create a flat (0 dB) band at the given frequency.
    pub fn new(frequency: u32) -> Self {
        Self {
            control: 0.0,
            frequency,
        }
    }

    /// Create a band with an explicit gain.
    pub fn with_control(mut self, control: f32) -> Self {
        self.control = control;
        self
    }

    /// Human-readable frequency, e.g. `50 Hz` or `1.25 KHz`.
    ///
    /// Frequencies above 999 Hz are shown in KHz with trailing zeros trimmed.
    pub fn frequency_label(&self) -> String {
        if self.frequency > 999 {
            format!("{} KHz", self.frequency as f32 / 1000.0)
        } else {
            format!("{} Hz", self.frequency)
        }
    }
}

/// The default flat 15-band layout.
pub fn default_bands() -> Vec<Band> {
    DEFAULT_FREQUENCIES.iter().map(|&f| Band::new(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands_are_flat_and_ordered() {
        let bands = default_bands();
        assert_eq!(bands.len(), 15);
        assert!(bands.iter().all(|b| b.control == 0.0));
        assert!(bands.windows(2).all(|w| w[0].frequency < w[1].frequency));
        assert_eq!(bands[0].frequency, 50);
        assert_eq!(bands[14].frequency, 20000);
    }

    #[test]
    fn frequency_label_hz() {
        assert_eq!(Band::new(50).frequency_label(), "50 Hz");
        assert_eq!(Band::new(880).frequency_label(), "880 Hz");
    }

    #[test]
    fn frequency_label_khz_trims_trailing_zeros() {
        assert_eq!(Band::new(1250).frequency_label(), "1.25 KHz");
        assert_eq!(Band::new(2500).frequency_label(), "2.5 KHz");
        assert_eq!(Band::new(10000).frequency_label(), "10 KHz");
        assert_eq!(Band::new(20000).frequency_label(), "20 KHz");
    }

    #[test]
    fn with_control_sets_gain() {
        let band = Band::new(440).with_control(-3.5);
        assert_eq!(band.control, -3.5);
        assert_eq!(band.frequency, 440);
    }
}
