//! Launching a selection and starting the stream.

pub mod coordinator;
pub mod session_starter;
pub mod stream_config;

pub use coordinator::{LaunchCoordinator, LaunchOutcome, LaunchPlan, LaunchState, PickerShell};
pub use session_starter::{CommandSessionStarter, SessionStarter};
pub use stream_config::{create_configuration, Preferences, Resolution};
