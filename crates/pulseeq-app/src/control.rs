//! The external audio-control collaborator.
//!
//! The live LADSPA sink is owned by the `pulseaudio-equalizer` shell script;
//! all communication goes through the shared config file plus three verbs
//! invoked on the script. The coordinator only ever triggers the script and
//! never consumes a structured result, so the seam is a small trait with
//! fire-and-forget methods — which also keeps the coordinator testable
//! without spawning processes.

use std::process::Command;

/// Verb that refreshes the shared config file from live engine state.
const GET_SETTINGS: &str = "interface.getsettings";

/// Verb that pushes the shared config file into the live engine.
const APPLY_SETTINGS: &str = "interface.applysettings";

/// Verb that restores factory defaults in the engine and the shared file.
const RESET_SETTINGS: &str = "interface.resetsettings";

/// Trigger interface to the external audio-control script.
///
/// All methods are fire-and-forget: the call blocks until the script exits,
/// the exit status is ignored, and a failure only surfaces indirectly
/// through the shared config file not reflecting reality.
pub trait ExternalControl {
    /// Ask the collaborator to refresh the shared config file from the live
    /// engine state.
    fn get_settings(&mut self);

    /// Ask the collaborator to apply the shared config file to the live
    /// engine.
    fn apply_settings(&mut self);

    /// Ask the collaborator to restore its factory defaults, rewriting the
    /// shared config file.
    fn reset_settings(&mut self);
}

/// No-op collaborator for frontends that only edit files.
impl ExternalControl for () {
    fn get_settings(&mut self) {}
    fn apply_settings(&mut self) {}
    fn reset_settings(&mut self) {}
}

/// Production collaborator: synchronously invokes the
/// `pulseaudio-equalizer` script.
#[derive(Debug, Clone)]
pub struct EqualizerCommand {
    program: String,
}

impl EqualizerCommand {
    /// Collaborator invoking the standard `pulseaudio-equalizer` script.
    pub fn new() -> Self {
        Self::with_program("pulseaudio-equalizer")
    }

    /// Collaborator invoking a custom program (e.g. a wrapper script).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invoke(&self, verb: &str) {
        tracing::debug!(program = %self.program, verb, "invoking audio control");
        match Command::new(&self.program).arg(verb).status() {
            Ok(status) if !status.success() => {
                tracing::debug!(verb, %status, "audio control exited nonzero");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(program = %self.program, verb, error = %e, "failed to invoke audio control");
            }
        }
    }
}

impl Default for EqualizerCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalControl for EqualizerCommand {
    fn get_settings(&mut self) {
        tracing::info!("getting settings");
        self.invoke(GET_SETTINGS);
    }

    fn apply_settings(&mut self) {
        self.invoke(APPLY_SETTINGS);
    }

    fn reset_settings(&mut self) {
        tracing::info!("resetting to defaults");
        self.invoke(RESET_SETTINGS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_is_swallowed() {
        // Fire-and-forget: a missing program must not panic or error.
        let mut control = EqualizerCommand::with_program("/nonexistent/pulseeq-control-12345");
        control.get_settings();
        control.apply_settings();
        control.reset_settings();
    }

    #[test]
    fn unit_impl_is_a_noop() {
        let mut control = ();
        control.get_settings();
        control.apply_settings();
        control.reset_settings();
    }
}
