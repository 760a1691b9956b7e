use chrono::{Datelike, NaiveDate};

use crate::domain::model::{Period, Season};
use crate::domain::ports::PeriodSource;
use crate::utils::error::Result;

/// New England riding season: November through March counts as winter,
/// everything else as summer.
pub fn season_for(date: NaiveDate) -> Season {
    match date.month() {
        11 | 12 | 1..=3 => Season::Winter,
        _ => Season::Summer,
    }
}

/// Daily periods over an inclusive date range, labeled with ISO dates.
///
/// An inverted range produces zero periods rather than an error; a run
/// over no days is a valid degenerate run.
#[derive(Debug, Clone)]
pub struct CalendarPeriods {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarPeriods {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl PeriodSource for CalendarPeriods {
    fn periods(&self) -> Result<Vec<Period>> {
        let mut periods = Vec::new();
        let mut day = self.start;
        while day <= self.end {
            periods.push(Period::new(
                day.format("%Y-%m-%d").to_string(),
                season_for(day),
            ));
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_daily_range_with_iso_labels() {
        let source = CalendarPeriods::new(date(2024, 1, 30), date(2024, 2, 2));
        let periods = source.periods().unwrap();

        assert_eq!(periods.len(), 4);
        assert_eq!(periods[0].label, "2024-01-30");
        assert_eq!(periods[3].label, "2024-02-02");
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let source = CalendarPeriods::new(date(2024, 6, 1), date(2024, 5, 1));
        assert!(source.periods().unwrap().is_empty());
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(season_for(date(2024, 10, 31)), Season::Summer);
        assert_eq!(season_for(date(2024, 11, 1)), Season::Winter);
        assert_eq!(season_for(date(2024, 1, 15)), Season::Winter);
        assert_eq!(season_for(date(2024, 3, 31)), Season::Winter);
        assert_eq!(season_for(date(2024, 4, 1)), Season::Summer);
        assert_eq!(season_for(date(2024, 7, 4)), Season::Summer);
    }

    #[test]
    fn test_periods_carry_their_season() {
        // Spans the March/April transition.
        let source = CalendarPeriods::new(date(2024, 3, 30), date(2024, 4, 1));
        let periods = source.periods().unwrap();

        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].season, Season::Winter);
        assert_eq!(periods[1].season, Season::Winter);
        assert_eq!(periods[2].season, Season::Summer);
    }
}
