use std::{collections::BTreeMap, fmt};

use chrono::{Datelike, Timelike};
use serde::Serialize;

use super::patterns::total_hours;
use crate::types::Play;

/// Part of the day a play falls into.
///
/// Morning is 06:00-11:59, afternoon 12:00-16:59, evening 17:00-21:59 and
/// night everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning (6AM-12PM)",
            TimePeriod::Afternoon => "Afternoon (12PM-5PM)",
            TimePeriod::Evening => "Evening (5PM-10PM)",
            TimePeriod::Night => "Night (10PM-6AM)",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Play counts per part of the day, always all four periods in day order.
pub fn analyze_time_patterns(plays: &[Play]) -> Vec<(TimePeriod, usize)> {
    let mut counts = [0usize; 4];
    for play in plays {
        let period = TimePeriod::from_hour(play.local_time.hour());
        if let Some(idx) = TimePeriod::ALL.iter().position(|p| *p == period) {
            counts[idx] += 1;
        }
    }

    TimePeriod::ALL.into_iter().zip(counts).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthStats {
    pub plays: usize,
    pub listening_hours: f64,
}

/// Plays and hours per month of the year (1 = January), across all years.
pub fn analyze_monthly(plays: &[Play]) -> BTreeMap<u32, MonthStats> {
    let mut by_month: BTreeMap<u32, Vec<&Play>> = BTreeMap::new();
    for play in plays {
        by_month.entry(play.local_time.month()).or_default().push(play);
    }

    by_month
        .into_iter()
        .map(|(month, plays)| {
            (
                month,
                MonthStats {
                    plays: plays.len(),
                    listening_hours: total_hours(plays.iter().copied()),
                },
            )
        })
        .collect()
}

/// Play counts per hour of day for every (local) calendar year.
///
/// # Returns
///
/// A map from year to 24 hourly counts, midnight first, oldest year first.
/// Only years with plays appear.
///
/// # Example
///
/// ```
/// let heatmap = analyze_hourly_by_year(&plays);
/// if let Some(hours) = heatmap.get(&2023) {
///     println!("Plays at 22:00 in 2023: {}", hours[22]);
/// }
/// ```
pub fn analyze_hourly_by_year(plays: &[Play]) -> BTreeMap<i32, [usize; 24]> {
    let mut by_year: BTreeMap<i32, [usize; 24]> = BTreeMap::new();
    for play in plays {
        let hours = by_year.entry(play.local_time.year()).or_insert([0; 24]);
        hours[play.local_time.hour() as usize] += 1;
    }
    by_year
}
