//! Preset catalog and settings coordinator for the pulseeq equalizer
//! frontend.
//!
//! This crate holds the logic between the storage leaf
//! ([`pulseeq_config`]) and a frontend: it discovers system and user
//! presets into a name-keyed [`Catalog`] (user presets override system
//! presets), tracks the active preset and the process-wide
//! [`GlobalSettings`](pulseeq_config::GlobalSettings), and pushes every
//! state change to the shared config file consumed by the external
//! `pulseaudio-equalizer` script.
//!
//! Two design points worth knowing:
//!
//! - **Copy-on-write editing**: catalog presets are never mutated in place.
//!   The first edit to an active preset that is shared with the catalog
//!   detaches it into an unnamed, unsaved derivative.
//! - **Debounced flushes**: high-rate edits (dragging a band control)
//!   collapse into one write after a 500 ms quiet period, via a single-slot
//!   [`FlushSlot`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Instant;
//! use pulseeq_app::{Equalizer, EqualizerCommand};
//! use pulseeq_config::{PresetDirs, config_file_path};
//!
//! let mut eq = Equalizer::new(
//!     EqualizerCommand::new(),
//!     PresetDirs::default(),
//!     config_file_path(),
//! ).unwrap();
//!
//! eq.select_named("Rock").unwrap();
//! eq.mutate_band(0, -3.0, Instant::now()).unwrap();
//! // ... event loop calls eq.pump(Instant::now()) until the flush fires
//! ```

mod catalog;
mod control;
mod debounce;
mod equalizer;

pub use catalog::Catalog;
pub use control::{EqualizerCommand, ExternalControl};
pub use debounce::{FlushSlot, QUIET_PERIOD};
pub use equalizer::{Equalizer, PresetActions};
