use chrono::Weekday;

/// One recurring slot in the weekly voice-event schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub title: &'static str,
    pub time: &'static str,
    pub description: &'static str,
}

impl ScheduleEntry {
    /// Whether this entry's card gets the highlight border and TODAY badge.
    pub fn is_today(&self, today: Weekday) -> bool {
        self.day == today
    }
}

/// Full English weekday name, matching the card labels in the markup.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: ScheduleEntry = ScheduleEntry {
        day: Weekday::Fri,
        title: "Game Night",
        time: "8:00 PM",
        description: "Community games in the main channel",
    };

    /// Tests weekday labels against the names used on the cards.
    ///
    /// Expected: full English names for all seven days
    #[test]
    fn labels_are_full_english_names() {
        assert_eq!(weekday_label(Weekday::Sun), "Sunday");
        assert_eq!(weekday_label(Weekday::Mon), "Monday");
        assert_eq!(weekday_label(Weekday::Tue), "Tuesday");
        assert_eq!(weekday_label(Weekday::Wed), "Wednesday");
        assert_eq!(weekday_label(Weekday::Thu), "Thursday");
        assert_eq!(weekday_label(Weekday::Fri), "Friday");
        assert_eq!(weekday_label(Weekday::Sat), "Saturday");
    }

    /// Tests the today check for matching and non-matching days.
    ///
    /// Expected: true only when the weekday equals the entry's day
    #[test]
    fn today_check_matches_only_own_day() {
        assert!(ENTRY.is_today(Weekday::Fri));
        assert!(!ENTRY.is_today(Weekday::Thu));
        assert!(!ENTRY.is_today(Weekday::Sat));
    }

    /// Tests that at most one entry of a full week matches any given day.
    ///
    /// Expected: exactly one match per weekday across seven distinct entries
    #[test]
    fn one_match_per_day_across_a_week() {
        let week = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        let entries: Vec<ScheduleEntry> = week
            .iter()
            .map(|day| ScheduleEntry { day: *day, ..ENTRY })
            .collect();

        for today in week {
            let matches = entries.iter().filter(|e| e.is_today(today)).count();
            assert_eq!(matches, 1);
        }
    }
}
