use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Calendar of the control room running the dashboard
///
/// "Today" and "created on D" are business days at a fixed UTC offset,
/// not UTC days. A shuffle at 01:00 local time belongs to the local date
/// even when UTC is still on the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    offset: FixedOffset,
}

impl BusinessCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Business date an instant falls on
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Current business date
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Half-open UTC range `[local midnight of date, local midnight of date+1)`
    ///
    /// # Example
    /// ```
    /// use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    /// use cit_dispatch_api::domain::calendar::BusinessCalendar;
    ///
    /// let calendar = BusinessCalendar::new(FixedOffset::east_opt(3 * 3600).unwrap());
    /// let (start, _) = calendar.day_bounds(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    ///
    /// assert_eq!(start, Utc.with_ymd_and_hms(2026, 10, 16, 21, 0, 0).unwrap());
    /// ```
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.local_midnight(date).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let end = date
            .checked_add_days(Days::new(1))
            .and_then(|next| self.local_midnight(next))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        (start, end)
    }

    fn local_midnight(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        date.and_time(NaiveTime::MIN)
            .and_local_timezone(self.offset)
            .single()
            .map(|midnight| midnight.with_timezone(&Utc))
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::utc()
    }
}
