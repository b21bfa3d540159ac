//! Shared test doubles

use crate::settings::Settings;
use crate::traits::DisplayUpdater;

/// Records every display refresh
#[derive(Debug, Default)]
pub struct RefreshSpy {
    pub refreshes: usize,
    pub last: Option<Settings>,
}

impl DisplayUpdater for RefreshSpy {
    fn update_display(&mut self, settings: &Settings) {
        self.refreshes += 1;
        self.last = Some(*settings);
    }
}
