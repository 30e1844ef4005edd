use crate::client::poller::SnapshotSlot;
use crate::model::config::AppConfig;

pub struct App {
    pub running: bool,
    pub config: AppConfig,
    /// Read side of the polling driver.
    pub slot: SnapshotSlot,
}

impl App {
    pub fn new(config: AppConfig, slot: SnapshotSlot) -> Self {
        Self {
            running: true,
            config,
            slot,
        }
    }
}
