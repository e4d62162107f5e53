//! Simulated wall clock and calendar.
//!
//! Fields are set directly and never advance on their own. There is no
//! Gregorian validation: 31/02 is a perfectly good date here.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockState {
    hour: u8,
    minute: u8,
    day: u8,
    month: u8,
    year: i32,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            hour: 0,
            minute: 0,
            day: 1,
            month: 1,
            year: 2025,
        }
    }
}

impl ClockState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hour(&self) -> u8 { self.hour }
    #[inline]
    pub fn minute(&self) -> u8 { self.minute }
    #[inline]
    pub fn day(&self) -> u8 { self.day }
    #[inline]
    pub fn month(&self) -> u8 { self.month }
    #[inline]
    pub fn year(&self) -> i32 { self.year }

    /// Set the time of day. Both fields wrap, negatives included
    /// (`-1` hours becomes `23`).
    pub fn set_time(&mut self, hour: i64, minute: i64) {
        self.hour = hour.rem_euclid(24) as u8;
        self.minute = minute.rem_euclid(60) as u8;
    }

    /// Set the date. Day and month saturate at their bounds; year is kept as is.
    pub fn set_date(&mut self, day: i64, month: i64, year: i32) {
        self.day = day.clamp(1, 31) as u8;
        self.month = month.clamp(1, 12) as u8;
        self.year = year;
    }

    /// `"HH:MM"`
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// `"DD/MM/YYYY"`, year unpadded.
    pub fn date_string(&self) -> String {
        format!("{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_new_year_2025() {
        let c = ClockState::default();
        assert_eq!(c.time_string(), "00:00");
        assert_eq!(c.date_string(), "01/01/2025");
    }

    #[test]
    fn set_time_wraps_like_euclidean_modulo() {
        let mut c = ClockState::new();
        for h in -100i64..100 {
            for m in [-61i64, -1, 0, 59, 60, 125] {
                c.set_time(h, m);
                assert_eq!(c.hour() as i64, ((h % 24) + 24) % 24);
                assert_eq!(c.minute() as i64, ((m % 60) + 60) % 60);
            }
        }
        c.set_time(23, 59);
        assert_eq!(c.time_string(), "23:59");
        c.set_time(-1, 75);
        assert_eq!(c.time_string(), "23:15");
    }

    #[test]
    fn set_date_clamps_day_and_month() {
        let mut c = ClockState::new();
        for d in -40i64..40 {
            c.set_date(d, 1, 2025);
            assert_eq!(c.day() as i64, d.clamp(1, 31));
        }
        c.set_date(0, 13, -44);
        assert_eq!(c.date_string(), "01/12/-44");
        c.set_date(31, 12, 1999);
        assert_eq!(c.date_string(), "31/12/1999");
    }

    #[test]
    fn year_is_never_padded() {
        let mut c = ClockState::new();
        c.set_date(5, 3, 7);
        assert_eq!(c.date_string(), "05/03/7");
        assert_eq!(c.to_string(), "05/03/7 00:00");
    }
}
