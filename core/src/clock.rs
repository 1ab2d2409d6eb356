//! Virtual shop clock — maps elapsed real seconds to in-game time.
//!
//! A trading day lasts `day_duration_secs` of real time and spans
//! `open_hour..close_hour` of in-game time. The numeric mapping lives
//! here; rendering "HH:MM" is the presentation layer's job.

use serde::{Deserialize, Serialize};

/// Wall-clock shape of one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Real seconds one full trading day lasts.
    pub day_duration_secs: f64,
    /// In-game hour the shop opens (9.0 means 09:00).
    pub open_hour: f64,
    /// In-game hour the shop closes (21.0 means 21:00).
    pub close_hour: f64,
}

/// An in-game time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualTime {
    pub hour: u32,
    pub minute: u32,
}

impl DaySchedule {
    /// The in-game time once `elapsed_secs` of the day have passed.
    ///
    /// Elapsed time past the end of the day pins to closing time; a
    /// non-positive day duration yields 00:00.
    pub fn virtual_time(&self, elapsed_secs: f64) -> VirtualTime {
        if self.day_duration_secs <= 0.0 {
            return VirtualTime { hour: 0, minute: 0 };
        }

        let ratio = (elapsed_secs / self.day_duration_secs).clamp(0.0, 1.0);
        let hour_float = self.open_hour + ratio * (self.close_hour - self.open_hour);

        let mut hour = hour_float.floor() as u32;
        let mut minute = ((hour_float - hour_float.floor()) * 60.0).round() as u32;

        // Minute rounding can land exactly on 60; carry into the next hour.
        if minute >= 60 {
            minute = 0;
            hour += 1;
        }

        VirtualTime { hour, minute }
    }
}
