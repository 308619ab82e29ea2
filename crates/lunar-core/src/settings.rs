//! Global library settings.
//!
//! [`Settings`] holds the **conversion zone** — the zone used to read the
//! civil date of an absolute instant when the caller does not name one.  It
//! is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the zone is stored behind a `Mutex` so that it can be
//! changed from any thread.  Code that changes it temporarily should use
//! [`ScopedZone`] so the previous value is restored.

use std::sync::{Mutex, OnceLock};

use crate::zone::Zone;

/// Process-wide settings used by the lunar-rs library.
pub struct Settings {
    zone: Mutex<Zone>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            zone: Mutex::new(Zone::default()),
        })
    }

    /// Return the current conversion zone ([`Zone::Local`] unless changed).
    pub fn zone(&self) -> Zone {
        *self.zone.lock().expect("Settings mutex poisoned")
    }

    /// Set the conversion zone.
    pub fn set_zone(&self, zone: Zone) {
        *self.zone.lock().expect("Settings mutex poisoned") = zone;
    }

    /// Reset the conversion zone to the host's local zone.
    pub fn reset_zone(&self) {
        self.set_zone(Zone::default());
    }
}

/// Guard that sets the conversion zone and restores the previous one on drop.
///
/// ```
/// use lunar_core::{ScopedZone, Settings, Zone};
///
/// let before = Settings::instance().zone();
/// {
///     let _guard = ScopedZone::new(Zone::Utc);
///     assert_eq!(Settings::instance().zone(), Zone::Utc);
/// }
/// assert_eq!(Settings::instance().zone(), before);
/// ```
#[must_use = "the previous zone is restored as soon as the guard is dropped"]
pub struct ScopedZone {
    previous: Zone,
}

impl ScopedZone {
    /// Install `zone` as the conversion zone until the guard is dropped.
    pub fn new(zone: Zone) -> Self {
        let settings = Settings::instance();
        let previous = settings.zone();
        settings.set_zone(zone);
        Self { previous }
    }
}

impl Drop for ScopedZone {
    fn drop(&mut self) {
        Settings::instance().set_zone(self.previous);
    }
}
