//! Calendar days and the planning horizon.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Result, ShiftForgeError};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One calendar date inside the planning horizon.
///
/// Days are created by [`Horizon`]; `index` is the position in the horizon
/// and defines the total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day {
    index: usize,
    date: NaiveDate,
    is_final: bool,
}

impl Day {
    /// Position of this day in the horizon.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Weekday as 0 (Monday) .. 6 (Sunday).
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    /// Short weekday label, e.g. `"Mon"`.
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.weekday_index() as usize]
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// True for the last day of the horizon.
    #[inline]
    pub fn is_final_day(&self) -> bool {
        self.is_final
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day_{:04}/{:02}/{:02}",
            self.year(),
            self.month(),
            self.day_of_month()
        )
    }
}

/// A contiguous sequence of days, the planning horizon.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftforge_core::domain::Horizon;
///
/// let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let horizon = Horizon::new(start, 14).unwrap();
///
/// assert_eq!(horizon.len(), 14);
/// assert!(horizon.day(13).unwrap().is_final_day());
/// assert!(horizon.day(5).unwrap().is_weekend()); // Saturday 2024-04-06
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horizon {
    days: Vec<Day>,
}

impl Horizon {
    /// Creates a horizon of `n_days` consecutive dates starting at `start`.
    pub fn new(start: NaiveDate, n_days: usize) -> Result<Self> {
        if n_days == 0 {
            return Err(ShiftForgeError::InvalidCatalog(
                "horizon must contain at least one day".to_string(),
            ));
        }

        let mut days = Vec::with_capacity(n_days);
        for index in 0..n_days {
            let date = start
                .checked_add_days(Days::new(index as u64))
                .ok_or_else(|| {
                    ShiftForgeError::InvalidCatalog(format!(
                        "horizon of {} days from {} overflows the calendar",
                        n_days, start
                    ))
                })?;
            days.push(Day {
                index,
                date,
                is_final: index + 1 == n_days,
            });
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false: construction rejects empty horizons.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn final_day(&self) -> &Day {
        &self.days[self.days.len() - 1]
    }

    /// Looks up a day by horizon index.
    pub fn day(&self, index: usize) -> Result<&Day> {
        self.days.get(index).ok_or(ShiftForgeError::IndexOutOfRange {
            kind: "day",
            index,
            len: self.days.len(),
        })
    }

    /// Looks up the day carrying `date`.
    pub fn day_by_date(&self, date: NaiveDate) -> Result<&Day> {
        let offset = (date - self.start()).num_days();
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.days.get(i))
            .ok_or_else(|| ShiftForgeError::UnknownId {
                kind: "day",
                id: date.to_string(),
            })
    }

    /// Returns true when `date` falls inside the horizon.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.day_by_date(date).is_ok()
    }
}
