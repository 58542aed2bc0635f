/// Format seconds as a zero-padded `MM:SS` clock.
///
/// Minutes are not wrapped into hours; a 90-minute workout reads `90:00`
/// and anything past 99 minutes simply grows the field.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Share of the countdown already elapsed, rounded to a whole percent.
pub fn percent_complete(remaining: u32, total: u32) -> u8 {
    if total == 0 {
        return 100;
    }
    let remaining = remaining.min(total);
    let elapsed = (total - remaining) as f64;
    (100.0 * elapsed / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_minutes_end_in_zero_seconds() {
        for minutes in [1, 5, 9, 10, 45, 99] {
            assert_eq!(format_clock(minutes * 60), format!("{minutes:02}:00"));
        }
    }

    #[test]
    fn pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(7), "00:07");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(599), "09:59");
    }

    #[test]
    fn long_workouts_keep_counting_minutes() {
        assert_eq!(format_clock(120 * 60 + 3), "120:03");
    }

    #[test]
    fn percent_at_bounds() {
        assert_eq!(percent_complete(60, 60), 0);
        assert_eq!(percent_complete(0, 60), 100);
    }

    #[test]
    fn percent_rounds() {
        // 1 of 3 elapsed → 33.3%
        assert_eq!(percent_complete(2, 3), 33);
        // 2 of 3 elapsed → 66.7%
        assert_eq!(percent_complete(1, 3), 67);
        assert_eq!(percent_complete(30, 60), 50);
    }

    #[test]
    fn percent_with_zero_total() {
        assert_eq!(percent_complete(0, 0), 100);
    }
}
