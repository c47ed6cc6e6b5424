//! The date filter shared by the expense list, the summary and the dashboard.

use serde::{Deserialize, Serialize};
use time_tz::Tz;

use crate::{
    Error,
    stores::TimestampRange,
    timestamp::{end_of_day, parse_date, start_of_day},
};

/// Query parameters for filtering by an inclusive range of calendar dates.
///
/// Both bounds are optional and blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterQuery {
    /// The first day to include, formatted `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// The last day to include, formatted `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl DateFilterQuery {
    /// Convert the dates into instants in `timezone`: the start of the first
    /// day and the last millisecond of the last day.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidDateFilter] if a date is given that is not
    /// formatted `YYYY-MM-DD`.
    pub fn to_range(&self, timezone: &Tz) -> Result<TimestampRange, Error> {
        let start = parse_bound(self.start_date.as_deref())?
            .map(|date| start_of_day(date, timezone));
        let end = parse_bound(self.end_date.as_deref())?.map(|date| end_of_day(date, timezone));

        Ok(TimestampRange { start, end })
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<time::Date>, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| Error::InvalidDateFilter(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{Error, stores::TimestampRange, timestamp::resolve_timezone};

    use super::DateFilterQuery;

    fn query(start: Option<&str>, end: Option<&str>) -> DateFilterQuery {
        DateFilterQuery {
            start_date: start.map(str::to_owned),
            end_date: end.map(str::to_owned),
        }
    }

    #[test]
    fn empty_query_is_unbounded() {
        let utc = resolve_timezone("UTC").unwrap();

        assert_eq!(
            query(None, Some("")).to_range(utc),
            Ok(TimestampRange::unbounded())
        );
    }

    #[test]
    fn end_date_covers_the_whole_day() {
        let utc = resolve_timezone("UTC").unwrap();

        let range = query(Some("2025-05-01"), Some("2025-05-31"))
            .to_range(utc)
            .unwrap();

        assert_eq!(range.start, Some(datetime!(2025-05-01 0:00 UTC)));
        assert_eq!(range.end, Some(datetime!(2025-05-31 23:59:59.999 UTC)));
    }

    #[test]
    fn range_on_clock_change_day_covers_the_local_day() {
        let new_york = resolve_timezone("America/New_York").unwrap();

        let range = query(Some("2025-03-09"), Some("2025-03-09"))
            .to_range(new_york)
            .unwrap();

        assert_eq!(range.start, Some(datetime!(2025-03-09 5:00 UTC)));
        assert_eq!(range.end, Some(datetime!(2025-03-10 3:59:59.999 UTC)));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let utc = resolve_timezone("UTC").unwrap();

        assert_eq!(
            query(Some("01/05/2025"), None).to_range(utc),
            Err(Error::InvalidDateFilter("01/05/2025".to_owned()))
        );
    }
}
