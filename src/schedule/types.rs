//! Dated schedule types and calendar queries.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One scheduled training day with its calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedActivity {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Activity line exactly as written in the plan
    pub raw_activity: String,
    /// Name of the owning phase
    pub phase_name: String,
    /// Week number of the owning week
    pub week_num: u32,
    /// Notes of the owning week
    pub week_notes: String,
    /// Free-text volume of the owning week
    pub week_total_km: String,
    /// Position in the flattened day sequence (0-based)
    pub day_index: usize,
    /// Index of the owning phase in the plan
    pub phase_index: usize,
    /// Index of the owning week within its phase
    pub week_index: usize,
}

/// Weekly volume entry for the mileage chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMileage {
    /// Name of the owning phase
    pub phase_name: String,
    /// Week number
    pub week_num: u32,
    /// Parsed volume in km, `None` if the sheet text has no number
    pub km: Option<f64>,
}

/// A Monday-to-Sunday calendar week over the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView<'a> {
    /// Monday of the week
    pub monday: NaiveDate,
    /// Scheduled activity per weekday, Monday first
    pub days: [Option<&'a DatedActivity>; 7],
    /// Notes of the first scheduled day in the window, if any
    pub notes: Option<&'a str>,
}

impl<'a> WeekView<'a> {
    /// Date of the `offset`-th day of the week (0 = Monday).
    pub fn date_at(&self, offset: u64) -> Option<NaiveDate> {
        self.monday.checked_add_days(Days::new(offset))
    }

    /// Number of scheduled days in the window.
    pub fn scheduled_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }
}

/// The dated training schedule produced by the resolver.
///
/// Dates are contiguous: day `i` is always `start_date + i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    start_date: NaiveDate,
    race_date: NaiveDate,
    days: Vec<DatedActivity>,
    mileage: Vec<WeeklyMileage>,
}

impl Schedule {
    pub(crate) fn new(
        start_date: NaiveDate,
        race_date: NaiveDate,
        days: Vec<DatedActivity>,
        mileage: Vec<WeeklyMileage>,
    ) -> Self {
        Self {
            start_date,
            race_date,
            days,
            mileage,
        }
    }

    /// Date of the first scheduled day.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Date of the last scheduled day (race day).
    pub fn race_date(&self) -> NaiveDate {
        self.race_date
    }

    /// All scheduled days in date order.
    pub fn days(&self) -> &[DatedActivity] {
        &self.days
    }

    /// Iterate over the scheduled days in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatedActivity> {
        self.days.iter()
    }

    /// Number of scheduled days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule is empty (never true for a resolved plan).
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index of a date in the schedule, if it falls inside it.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.start_date).num_days();
        usize::try_from(offset).ok().filter(|i| *i < self.days.len())
    }

    /// The activity scheduled on a given date.
    pub fn activity_on(&self, date: NaiveDate) -> Option<&DatedActivity> {
        self.index_of(date).map(|i| &self.days[i])
    }

    /// The Monday-to-Sunday week containing `date`.
    pub fn week_containing(&self, date: NaiveDate) -> WeekView<'_> {
        let from_monday = u64::from(date.weekday().num_days_from_monday());
        let monday = date
            .checked_sub_days(Days::new(from_monday))
            .unwrap_or(date);

        let mut days = [None; 7];
        for (offset, slot) in days.iter_mut().enumerate() {
            *slot = monday
                .checked_add_days(Days::new(offset as u64))
                .and_then(|d| self.activity_on(d));
        }

        let notes = days.iter().flatten().next().map(|d| d.week_notes.as_str());

        WeekView {
            monday,
            days,
            notes,
        }
    }

    /// Signed number of days from `today` until race day.
    pub fn days_until_race(&self, today: NaiveDate) -> i64 {
        (self.race_date - today).num_days()
    }

    /// Whether `date` is race day.
    pub fn is_race_day(&self, date: NaiveDate) -> bool {
        date == self.race_date
    }

    /// Weekly volumes in plan order.
    pub fn weekly_mileage(&self) -> &[WeeklyMileage] {
        &self.mileage
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a DatedActivity;
    type IntoIter = std::slice::Iter<'a, DatedActivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
