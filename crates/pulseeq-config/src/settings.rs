//! Process-wide equalizer settings.

/// Global equalizer state stored alongside the active preset in the shared
/// config file.
///
/// These fields are owned by the coordinator and written back on every apply;
/// they are independent of any single preset.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSettings {
    /// Preamp value, passed through verbatim. The external control script
    /// owns its meaning; it is never interpreted here.
    pub preamp: String,
    /// Whether the equalizer is enabled.
    pub enabled: bool,
    /// Whether settings persist across sessions.
    pub persistent: bool,
    /// Gain range shown by the UI, (min, max) in dB.
    pub gain_range: (f32, f32),
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            preamp: "1.0".to_string(),
            enabled: true,
            persistent: false,
            gain_range: (-15.0, 15.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.preamp, "1.0");
        assert!(settings.enabled);
        assert!(!settings.persistent);
        assert_eq!(settings.gain_range, (-15.0, 15.0));
    }
}
