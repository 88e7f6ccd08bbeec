//! Hours/minutes/seconds picker for the lock window.

use std::fmt;

use crate::vault::LockDuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds];

    /// Largest value the field accepts.
    pub fn max(&self) -> u32 {
        match self {
            TimeUnit::Hours => 23,
            TimeUnit::Minutes | TimeUnit::Seconds => 59,
        }
    }

    pub fn next(&self) -> TimeUnit {
        match self {
            TimeUnit::Hours => TimeUnit::Minutes,
            TimeUnit::Minutes => TimeUnit::Seconds,
            TimeUnit::Seconds => TimeUnit::Hours,
        }
    }

    pub fn previous(&self) -> TimeUnit {
        match self {
            TimeUnit::Hours => TimeUnit::Seconds,
            TimeUnit::Minutes => TimeUnit::Hours,
            TimeUnit::Seconds => TimeUnit::Minutes,
        }
    }
}

/// Three independently adjusted fields; values clamp at their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPicker {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Default for DurationPicker {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 1,
            seconds: 0,
        }
    }
}

impl DurationPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picker preset to `lock` (sub-second part dropped).
    pub fn from_lock(lock: LockDuration) -> Self {
        let (hours, minutes, seconds) = lock.hms();
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn get(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }

    pub fn set(&mut self, unit: TimeUnit, value: u32) {
        let value = value.min(unit.max());
        match unit {
            TimeUnit::Hours => self.hours = value,
            TimeUnit::Minutes => self.minutes = value,
            TimeUnit::Seconds => self.seconds = value,
        }
    }

    pub fn increment(&mut self, unit: TimeUnit) {
        self.set(unit, self.get(unit).saturating_add(1));
    }

    pub fn decrement(&mut self, unit: TimeUnit) {
        self.set(unit, self.get(unit).saturating_sub(1));
    }

    pub fn lock_duration(&self) -> LockDuration {
        // Fields are clamped on every write, so this is always in range.
        LockDuration::from_hms(self.hours, self.minutes, self.seconds).unwrap_or(LockDuration::MAX)
    }
}

impl fmt::Display for DurationPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lock_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_minute() {
        assert_eq!(DurationPicker::new().lock_duration().as_millis(), 60_000);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut picker = DurationPicker::new();
        picker.decrement(TimeUnit::Hours);
        picker.decrement(TimeUnit::Seconds);
        assert_eq!(picker.get(TimeUnit::Hours), 0);
        assert_eq!(picker.get(TimeUnit::Seconds), 0);
    }

    #[test]
    fn test_increment_clamps_without_wrap() {
        let mut picker = DurationPicker::new();
        picker.set(TimeUnit::Hours, 23);
        picker.set(TimeUnit::Minutes, 59);
        picker.set(TimeUnit::Seconds, 59);
        picker.increment(TimeUnit::Hours);
        picker.increment(TimeUnit::Minutes);
        picker.increment(TimeUnit::Seconds);

        assert_eq!(picker.lock_duration(), LockDuration::MAX);
    }

    #[test]
    fn test_set_clamps() {
        let mut picker = DurationPicker::new();
        picker.set(TimeUnit::Minutes, 75);
        assert_eq!(picker.get(TimeUnit::Minutes), 59);
    }

    #[test]
    fn test_from_lock_roundtrips_fields() {
        let lock = LockDuration::from_hms(2, 5, 10).unwrap();
        let picker = DurationPicker::from_lock(lock);
        assert_eq!(picker.lock_duration(), lock);
        assert_eq!(picker.to_string(), "02:05:10");
    }

    #[test]
    fn test_unit_cycle() {
        assert_eq!(TimeUnit::Seconds.next(), TimeUnit::Hours);
        assert_eq!(TimeUnit::Hours.previous(), TimeUnit::Seconds);
    }
}
