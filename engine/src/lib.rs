//! Application state for the PIPO simulator.
//!
//! [`App`] is the composition root: it owns the one [`Register`] and the
//! pending [`InputVector`], applies [`Command`]s, and exposes read-only views
//! for the renderer.

mod commands;

pub use commands::{COMMAND_SPECS, Command, CommandSpec};

pub use pipo_config::PipoConfig;
pub use pipo_core::{Register, RegisterState};
pub use pipo_types::ui::UiOptions;
pub use pipo_types::{Bit, BitPosition, InputVector, LengthPolicy, Word};

/// Resolved settings used to build an [`App`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub ui: UiOptions,
    pub length_policy: LengthPolicy,
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: Option<&PipoConfig>) -> Self {
        config
            .map(|config| Self {
                ui: config.ui_options(),
                length_policy: config.length_policy(),
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug)]
pub struct App {
    register: Register,
    inputs: InputVector,
    status: Option<Status>,
    options: UiOptions,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        tracing::info!(
            policy = settings.length_policy.as_str(),
            "Register initialized"
        );
        Self {
            register: Register::with_policy(settings.length_policy),
            inputs: InputVector::new(),
            status: None,
            options: settings.ui,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn from_config(config: Option<&PipoConfig>) -> Self {
        Self::new(AppSettings::from_config(config))
    }

    #[must_use]
    pub fn register(&self) -> &Register {
        &self.register
    }

    #[must_use]
    pub fn inputs(&self) -> &InputVector {
        &self.inputs
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status {
            kind,
            message: message.into(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}
