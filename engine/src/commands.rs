//! Command processing for the App.
//!
//! Every user action arrives here as a [`Command`] and is applied
//! synchronously; the caller re-reads `App` state afterwards to redraw.

use pipo_types::BitPosition;
use tracing::{debug, warn};

use super::{App, StatusKind};

/// A user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip one pending input bit. The register is not touched.
    Toggle(BitPosition),
    /// Copy the pending inputs into the register.
    Latch,
    /// Zero the register and the pending inputs.
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Key help shown in the footer.
pub const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        keys: "3 2 1 0",
        description: "toggle D3..D0",
    },
    CommandSpec {
        keys: "Enter",
        description: "load (latch)",
    },
    CommandSpec {
        keys: "r",
        description: "reset",
    },
    CommandSpec {
        keys: "q",
        description: "quit",
    },
];

impl App {
    pub fn dispatch(&mut self, command: Command) {
        debug!(?command, "Dispatching command");
        match command {
            Command::Toggle(position) => {
                let bit = self.inputs.toggle(position);
                self.set_status(
                    StatusKind::Info,
                    format!("{} = {bit}", position.input_label()),
                );
            }
            Command::Latch => self.latch(),
            Command::Reset => {
                self.register.reset();
                self.inputs.clear();
                self.set_status(StatusKind::Info, "Register reset");
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn latch(&mut self) {
        match self.register.load(self.inputs.bits()) {
            Ok(state) => {
                let message = format!(
                    "Latched {} (load #{})",
                    state.output(),
                    state.load_count()
                );
                self.set_status(StatusKind::Info, message);
            }
            Err(err) => {
                warn!(%err, "Latch failed");
                self.set_status(StatusKind::Error, format!("Load failed: {err}"));
            }
        }
    }
}
