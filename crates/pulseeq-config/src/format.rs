//! The positional line format shared with the external control script.
//!
//! Both file variants are newline-delimited text with fields at fixed line
//! offsets (0-indexed):
//!
//! ```text
//! .preset file                 shared config file
//! 0  plugin identifier         0  plugin identifier
//! 1  plugin display name       1  plugin display name
//! 2  plugin short label        2  plugin short label
//! 3  (reserved)                3  preamp
//! 4  preset name               4  preset name
//! 5  band count N              5  enabled flag (0/1)
//! 6..6+N    controls (dB)      6  persistence flag (0/1)
//! 6+N..6+2N frequencies (Hz)   7  gain range min
//!                              8  gain range max
//!                              9  band count N
//!                              10..10+N    controls (dB)
//!                              10+N..10+2N frequencies (Hz)
//! ```
//!
//! The external script reads fields by line offset, so rendering must
//! reproduce this layout byte for byte, including the trailing blank line.

use std::str::FromStr;
use thiserror::Error;

use crate::band::Band;
use crate::preset::Preset;
use crate::settings::GlobalSettings;

/// First control line in a standalone `.preset` file.
const PRESET_BANDS_OFFSET: usize = 6;

/// First control line in the shared config file.
const CONFIG_BANDS_OFFSET: usize = 10;

/// Errors produced while decoding the positional line format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The content has fewer lines than the layout (or the declared band
    /// count) requires.
    #[error("line {line} is missing (truncated content)")]
    MissingLine {
        /// 0-indexed line number that was expected but absent.
        line: usize,
    },

    /// A numeric field failed to parse.
    #[error("line {line}: expected a number, got '{value}'")]
    InvalidNumber {
        /// 0-indexed line number of the bad field.
        line: usize,
        /// The raw field content.
        value: String,
    },
}

fn line<'a>(lines: &[&'a str], idx: usize) -> Result<&'a str, FormatError> {
    lines
        .get(idx)
        .copied()
        .ok_or(FormatError::MissingLine { line: idx })
}

fn number<T: FromStr>(lines: &[&str], idx: usize) -> Result<T, FormatError> {
    let raw = line(lines, idx)?;
    raw.trim().parse().map_err(|_| FormatError::InvalidNumber {
        line: idx,
        value: raw.to_string(),
    })
}

fn flag(lines: &[&str], idx: usize) -> Result<bool, FormatError> {
    Ok(number::<i64>(lines, idx)? != 0)
}

/// Parse the band block: count line at `offset - 1`, then N controls and
/// N frequencies paired by index.
fn bands(lines: &[&str], offset: usize) -> Result<Vec<Band>, FormatError> {
    let count: usize = number(lines, offset - 1)?;

    // A hand-edited file can declare any count; make sure the whole block
    // actually fits before trusting it for an allocation. Checked math,
    // since 2 * count alone can overflow usize.
    let fits = count
        .checked_mul(2)
        .and_then(|n| n.checked_add(offset))
        .is_some_and(|end| end <= lines.len());
    if !fits {
        return Err(FormatError::MissingLine { line: lines.len() });
    }

    let mut bands = Vec::with_capacity(count);
    for i in 0..count {
        let control: f32 = number(lines, offset + i)?;
        let frequency: u32 = number(lines, offset + count + i)?;
        bands.push(Band { control, frequency });
    }
    Ok(bands)
}

fn plugin_header(lines: &[&str], preset: &mut Preset) -> Result<(), FormatError> {
    preset.plugin = line(lines, 0)?.to_string();
    preset.plugin_name = line(lines, 1)?.to_string();
    preset.plugin_label = line(lines, 2)?.to_string();
    preset.name = line(lines, 4)?.to_string();
    Ok(())
}

/// Parse the standalone `.preset` variant.
///
/// The returned preset has no filename and is not marked as a system preset;
/// callers loading from disk fill those in.
pub fn parse_preset(content: &str) -> Result<Preset, FormatError> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut preset = Preset::default();
    plugin_header(&lines, &mut preset)?;
    preset.bands = bands(&lines, PRESET_BANDS_OFFSET)?;
    Ok(preset)
}

/// Parse the shared config variant, which carries the global settings ahead
/// of the band block.
pub fn parse_config(content: &str) -> Result<(Preset, GlobalSettings), FormatError> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut preset = Preset::default();
    plugin_header(&lines, &mut preset)?;
    let settings = GlobalSettings {
        preamp: line(&lines, 3)?.to_string(),
        enabled: flag(&lines, 5)?,
        persistent: flag(&lines, 6)?,
        gain_range: (number(&lines, 7)?, number(&lines, 8)?),
    };
    preset.bands = bands(&lines, CONFIG_BANDS_OFFSET)?;
    Ok((preset, settings))
}

/// Render a control value at the 0.1 dB resolution the UI edits at.
fn control_field(control: f32) -> String {
    format!("{control:.1}")
}

/// Render a gain-range bound. The external script writes plain integers
/// there, so integer-valued bounds must not grow a fractional part.
fn range_field(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn band_block(lines: &mut Vec<String>, bands: &[Band]) {
    lines.push(bands.len().to_string());
    lines.extend(bands.iter().map(|b| control_field(b.control)));
    lines.extend(bands.iter().map(|b| b.frequency.to_string()));
}

fn finish(mut lines: Vec<String>) -> String {
    // Trailing blank line terminator; the consumer depends on it.
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}

/// Render the standalone `.preset` variant.
pub fn render_preset(preset: &Preset) -> String {
    let mut lines = vec![
        preset.plugin.clone(),
        preset.plugin_name.clone(),
        preset.plugin_label.clone(),
        String::new(),
        preset.name.clone(),
    ];
    band_block(&mut lines, &preset.bands);
    finish(lines)
}

/// Render the shared config variant.
pub fn render_config(preset: &Preset, settings: &GlobalSettings) -> String {
    let mut lines = vec![
        preset.plugin.clone(),
        preset.plugin_name.clone(),
        preset.plugin_label.clone(),
        settings.preamp.clone(),
        preset.name.clone(),
        i32::from(settings.enabled).to_string(),
        i32::from(settings.persistent).to_string(),
        range_field(settings.gain_range.0),
        range_field(settings.gain_range.1),
    ];
    band_block(&mut lines, &preset.bands);
    finish(lines)
}
