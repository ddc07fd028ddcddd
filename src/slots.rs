//! Bookable time slots and display formatting.
//!
//! The backend accepts a fixed set of half-hour slots: mornings from 09:30
//! to 15:30 and evenings from 18:00 to 20:30.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 24-hour `HH:MM` slot format
    static ref TIME_SLOT_REGEX: Regex = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
}

pub const MORNING_SLOTS: [&str; 13] = [
    "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00",
    "14:30", "15:00", "15:30",
];

pub const EVENING_SLOTS: [&str; 6] = ["18:00", "18:30", "19:00", "19:30", "20:00", "20:30"];

pub const MORNING_LABEL: &str = "Morning Slots (9:30 AM - 3:30 PM)";
pub const EVENING_LABEL: &str = "Evening Slots (6:00 PM - 8:30 PM)";

/// Every slot, morning first.
pub fn all_slots() -> impl Iterator<Item = &'static str> {
    MORNING_SLOTS.iter().chain(EVENING_SLOTS.iter()).copied()
}

pub fn is_valid_slot(slot: &str) -> bool {
    all_slots().any(|s| s == slot)
}

/// `"13:30"` -> `"1:30 PM"`. Input that is not `HH:MM` is returned as is.
pub fn format_time_slot(slot: &str) -> String {
    let Some(caps) = TIME_SLOT_REGEX.captures(slot) else {
        return slot.to_string();
    };
    let hour: u32 = caps[1].parse().unwrap_or(0);
    let minutes = &caps[2];

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{} {}", display_hour, minutes, period)
}

/// `"2025-01-05"` -> `"January 5, 2025"`. Unparsable input is returned as is.
pub fn format_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_counts() {
        assert_eq!(all_slots().count(), 19);
        assert_eq!(all_slots().next(), Some("09:30"));
        assert_eq!(all_slots().last(), Some("20:30"));
    }

    #[test]
    fn test_is_valid_slot() {
        assert!(is_valid_slot("09:30"));
        assert!(is_valid_slot("20:30"));
        assert!(!is_valid_slot("09:00"));
        assert!(!is_valid_slot("16:00"));
        assert!(!is_valid_slot("9:30"));
    }

    #[test]
    fn test_format_time_slot() {
        assert_eq!(format_time_slot("09:30"), "9:30 AM");
        assert_eq!(format_time_slot("12:00"), "12:00 PM");
        assert_eq!(format_time_slot("13:30"), "1:30 PM");
        assert_eq!(format_time_slot("20:30"), "8:30 PM");
        assert_eq!(format_time_slot("00:15"), "12:15 AM");
        assert_eq!(format_time_slot("later"), "later");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-05"), "January 5, 2025");
        assert_eq!(format_date("2024-12-31T10:00:00"), "December 31, 2024");
        assert_eq!(format_date("tomorrow"), "tomorrow");
    }
}
