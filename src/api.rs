//! Outbound machine-control command boundary.
//!
//! The remote API (authentication, transport, request encoding) lives behind
//! [`MachineClient`]; this module only defines the commands the dispatcher
//! can issue and how a menu entry maps onto one.

use crate::config::{PREINFUSION_OFF_THRESHOLD_S, PREINFUSION_ON_THRESHOLD_S};
use crate::menu::{Menu, Value};

/// Which remote operation a menu entry drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    Power,
    BoilerTemperature,
    SteamLevel,
    Preinfusion,
}

/// One outbound command, carrying the value read at fire time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    SetPower(bool),
    SetTemperature(f32),
    SetSteamLevel(i32),
    SetPreinfusion {
        enabled: bool,
        on_threshold: f32,
        off_threshold: f32,
    },
}

/// Errors reported by the API client. Surfaced to the caller and logged;
/// never retried automatically and never fatal to the input loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApiError {
    /// No bearer credential is available yet.
    NotAuthenticated,
    /// The request could not reach the gateway.
    Transport,
    /// The gateway answered with a non-success status.
    Rejected(u16),
}

/// Asynchronous machine-control client.
///
/// Implementations own the credential and the transport; each operation
/// performs one request and reports failure through `ApiError`.
#[allow(async_fn_in_trait)]
pub trait MachineClient {
    async fn set_power(&mut self, on: bool) -> Result<(), ApiError>;
    async fn set_temperature(&mut self, celsius: f32) -> Result<(), ApiError>;
    async fn set_steam_level(&mut self, level: i32) -> Result<(), ApiError>;
    async fn set_preinfusion(
        &mut self,
        enabled: bool,
        on_threshold: f32,
        off_threshold: f32,
    ) -> Result<(), ApiError>;
}

/// Build the outbound command for a menu entry from its *current* value.
///
/// Called when a pending send fires, not when it is scheduled, so a burst of
/// edits always ships the latest value. Read-only entries yield `None`.
pub fn command_for(menu: &Menu, index: usize) -> Option<Command> {
    let setting = menu.get(index);
    match (setting.target?, setting.value) {
        (Target::Power, Value::Bool(on)) => Some(Command::SetPower(on)),
        (Target::BoilerTemperature, Value::Float(celsius)) => {
            Some(Command::SetTemperature(celsius))
        }
        (Target::SteamLevel, Value::Int(level)) => Some(Command::SetSteamLevel(level)),
        (Target::Preinfusion, Value::Bool(enabled)) => Some(Command::SetPreinfusion {
            enabled,
            on_threshold: PREINFUSION_ON_THRESHOLD_S,
            off_threshold: PREINFUSION_OFF_THRESHOLD_S,
        }),
        _ => None,
    }
}

/// Route a [`Command`] to the matching client operation.
pub async fn deliver<C: MachineClient>(client: &mut C, command: Command) -> Result<(), ApiError> {
    match command {
        Command::SetPower(on) => client.set_power(on).await,
        Command::SetTemperature(celsius) => client.set_temperature(celsius).await,
        Command::SetSteamLevel(level) => client.set_steam_level(level).await,
        Command::SetPreinfusion {
            enabled,
            on_threshold,
            off_threshold,
        } => {
            client
                .set_preinfusion(enabled, on_threshold, off_threshold)
                .await
        }
    }
}
