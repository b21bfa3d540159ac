//! Display refresh trait

use crate::settings::Settings;

/// Receives the settings whenever they have been saved
///
/// The settings store calls this after every save so the visible UI
/// always reflects the in-memory record.
pub trait DisplayUpdater {
    /// Project the settings onto the display
    fn update_display(&mut self, settings: &Settings);
}

impl<T: DisplayUpdater + ?Sized> DisplayUpdater for &mut T {
    fn update_display(&mut self, settings: &Settings) {
        (**self).update_display(settings);
    }
}
