//! Outbound command delivery.
//!
//! Fired sends go through a channel into this task, so a slow or hung
//! remote endpoint can never stall input handling. Failures are logged and
//! surfaced, never retried - the next edit schedules a fresh send.

use brewdial::api::{self, ApiError, Command, MachineClient};
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;

/// Depth of the command channel between the UI loop and the sender task.
pub const COMMAND_QUEUE_DEPTH: usize = 4;

/// Bench transport: logs each command instead of talking to the cloud
/// gateway. The production transport (bearer credential + HTTPS request
/// function) implements [`MachineClient`] behind the same task.
pub struct BenchLink;

impl MachineClient for BenchLink {
    async fn set_power(&mut self, on: bool) -> Result<(), ApiError> {
        info!("link: set_power({})", on);
        Ok(())
    }

    async fn set_temperature(&mut self, celsius: f32) -> Result<(), ApiError> {
        info!("link: set_temperature({})", celsius);
        Ok(())
    }

    async fn set_steam_level(&mut self, level: i32) -> Result<(), ApiError> {
        info!("link: set_steam_level({})", level);
        Ok(())
    }

    async fn set_preinfusion(
        &mut self,
        enabled: bool,
        on_threshold: f32,
        off_threshold: f32,
    ) -> Result<(), ApiError> {
        info!(
            "link: set_preinfusion({}, {}, {})",
            enabled, on_threshold, off_threshold
        );
        Ok(())
    }
}

/// Deliver commands as they fire.
#[embassy_executor::task]
pub async fn sender_task(
    commands: Receiver<'static, CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH>,
    client: BenchLink,
) -> ! {
    let mut client = client;
    loop {
        let command = commands.receive().await;
        match api::deliver(&mut client, command).await {
            Ok(()) => info!("link: delivered {:?}", command),
            Err(e) => warn!("link: {:?} failed: {:?}", command, e),
        }
    }
}
