//! Month grid for the calendar view.

use crate::Trip;
use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One grid cell; `None` pads the week before the 1st
pub type CalendarCell = Option<NaiveDate>;

/// Leading blanks for the weekday of the 1st (Sunday first), then every day
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let padding = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<CalendarCell> = vec![None; padding];
    cells.extend(
        first
            .iter_days()
            .take_while(|day| day.month() == month)
            .map(Some),
    );
    cells
}

/// Trips whose inclusive range covers `date`
pub fn trips_on<'a>(trips: &'a [Trip], date: NaiveDate) -> Vec<&'a Trip> {
    trips
        .iter()
        .filter(|trip| trip.start_date <= date && date <= trip.end_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TripStyle;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_grid_padding() {
        // October 2026 starts on a Thursday.
        let grid = month_grid(2026, 10);
        assert_eq!(grid.iter().take_while(|c| c.is_none()).count(), 4);
        assert_eq!(grid.len(), 4 + 31);
        assert_eq!(grid[4], Some(d(2026, 10, 1)));
        assert_eq!(grid.last().copied().flatten(), Some(d(2026, 10, 31)));
    }

    #[test]
    fn test_february_leap_year() {
        let days = month_grid(2028, 2).into_iter().flatten().count();
        assert_eq!(days, 29);
        assert!(month_grid(2026, 13).is_empty());
    }

    #[test]
    fn test_trips_on_is_inclusive() {
        let trip = Trip {
            id: "t".to_string(),
            name: "t".to_string(),
            description: String::new(),
            start_date: d(2026, 10, 10),
            end_date: d(2026, 10, 12),
            budget: 0.0,
            cover_photo: None,
            style: TripStyle::default(),
            stops: Vec::new(),
            stops_count: None,
            activities_count: None,
            activities: Vec::new(),
        };
        let trips = vec![trip];
        assert_eq!(trips_on(&trips, d(2026, 10, 10)).len(), 1);
        assert_eq!(trips_on(&trips, d(2026, 10, 12)).len(), 1);
        assert!(trips_on(&trips, d(2026, 10, 13)).is_empty());
    }
}
