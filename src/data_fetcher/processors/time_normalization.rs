use super::SkipReason;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Offset-carrying layouts accepted besides RFC 3339.
///
/// `%#z` takes `+01:00`, `+0100` and `+01`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Layouts without an offset; these are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A timestamp that is not a valid ISO-8601 instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse timestamp '{timestamp}'")]
pub struct TimestampError {
    pub timestamp: String,
}

/// Converts upstream UTC timestamps into the configured local timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeNormalizer {
    tz: Tz,
}

impl TimeNormalizer {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Parses an ISO-8601 instant and returns it in local time.
    ///
    /// `Z` and `+00:00` are equivalent, other offsets are honoured and a
    /// timestamp without an offset is taken as UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use nba_txt::data_fetcher::processors::TimeNormalizer;
    ///
    /// let normalizer = TimeNormalizer::new(chrono_tz::Europe::Berlin);
    /// let local = normalizer.to_local("2025-11-25T18:00:00Z").unwrap();
    /// assert_eq!(local.format("%d.%m.%Y %H:%M").to_string(), "25.11.2025 19:00");
    /// ```
    pub fn to_local(&self, timestamp: &str) -> Result<DateTime<Tz>, TimestampError> {
        let trimmed = timestamp.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(parsed.with_timezone(&self.tz));
        }

        for format in OFFSET_FORMATS {
            if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
                return Ok(parsed.with_timezone(&self.tz));
            }
        }

        let without_zulu = trimmed
            .strip_suffix('Z')
            .or_else(|| trimmed.strip_suffix('z'))
            .unwrap_or(trimmed);
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(without_zulu, format) {
                return Ok(naive.and_utc().with_timezone(&self.tz));
            }
        }

        Err(TimestampError {
            timestamp: timestamp.to_string(),
        })
    }

    /// UTC instants of the start of `date` and of the following day in local time.
    ///
    /// Used to narrow the odds query to the requested day.
    pub fn day_bounds_utc(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.local_midnight_utc(date);
        let end = date
            .succ_opt()
            .map(|next| self.local_midnight_utc(next))
            .unwrap_or(start + chrono::Duration::days(1));
        (start, end)
    }

    fn local_midnight_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let naive = date.and_time(NaiveTime::MIN);
        match self.tz.from_local_datetime(&naive).earliest() {
            Some(local) => local.with_timezone(&Utc),
            // Midnight skipped by a DST jump
            None => naive.and_utc(),
        }
    }
}

/// Keeps only records whose local start falls on the target date.
#[derive(Debug, Clone, Copy)]
pub struct DateFilter {
    normalizer: TimeNormalizer,
    target_date: NaiveDate,
}

impl DateFilter {
    pub fn new(normalizer: TimeNormalizer, target_date: NaiveDate) -> Self {
        Self {
            normalizer,
            target_date,
        }
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    pub fn normalizer(&self) -> &TimeNormalizer {
        &self.normalizer
    }

    /// Normalizes a record's start time and checks it against the target date.
    ///
    /// Only the calendar date is compared; the time of day is ignored.
    pub fn local_start(&self, timestamp: Option<&str>) -> Result<DateTime<Tz>, SkipReason> {
        let timestamp = timestamp.ok_or(SkipReason::MissingTime)?;
        let local = self.normalizer.to_local(timestamp)?;
        let date = local.date_naive();
        if date != self.target_date {
            return Err(SkipReason::OtherDate(date));
        }
        Ok(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::{America, Europe};

    fn berlin() -> TimeNormalizer {
        TimeNormalizer::new(Europe::Berlin)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zulu_and_zero_offset_are_equivalent() {
        let normalizer = berlin();
        for (zulu, offset) in [
            ("2025-11-25T18:00:00Z", "2025-11-25T18:00:00+00:00"),
            ("2025-07-01T23:30:00Z", "2025-07-01T23:30:00+00:00"),
            ("2025-03-30T00:59:59.250Z", "2025-03-30T00:59:59.250+00:00"),
        ] {
            assert_eq!(
                normalizer.to_local(zulu).unwrap(),
                normalizer.to_local(offset).unwrap()
            );
        }
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let normalizer = berlin();
        assert_eq!(
            normalizer.to_local("2025-11-25T18:00:00").unwrap(),
            normalizer.to_local("2025-11-25T18:00:00Z").unwrap()
        );
        assert_eq!(
            normalizer.to_local("2025-11-25 18:00").unwrap(),
            normalizer.to_local("2025-11-25T18:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_winter_and_summer_offsets() {
        let normalizer = berlin();
        let winter = normalizer.to_local("2025-11-25T18:00:00Z").unwrap();
        assert_eq!(winter.hour(), 19);

        let summer = normalizer.to_local("2025-06-10T18:00:00Z").unwrap();
        assert_eq!(summer.hour(), 20);
    }

    #[test]
    fn test_explicit_offset_is_honoured() {
        let normalizer = berlin();
        assert_eq!(
            normalizer.to_local("2025-11-25T13:00:00-05:00").unwrap(),
            normalizer.to_local("2025-11-25T18:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_basic_and_hour_only_offsets() {
        let normalizer = berlin();
        let expected = normalizer.to_local("2025-11-25T18:00:00Z").unwrap();
        for timestamp in [
            "2025-11-25T18:00:00+0000",
            "2025-11-25T18:00:00+00",
            "2025-11-25T13:00:00-0500",
            "2025-11-25T13:00:00-05",
            "2025-11-25 19:00:00+01",
            "2025-11-25T19:00+0100",
        ] {
            assert_eq!(normalizer.to_local(timestamp).unwrap(), expected, "{timestamp}");
        }
    }

    #[test]
    fn test_late_utc_game_rolls_into_next_local_day() {
        let local = berlin().to_local("2025-11-25T23:30:00Z").unwrap();
        assert_eq!(local.date_naive(), date(2025, 11, 26));
        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn test_invalid_timestamps() {
        let normalizer = berlin();
        for bad in ["", "not a timestamp", "2025-13-45T25:70:90Z", "25.11.2025 19:00"] {
            let err = normalizer.to_local(bad).unwrap_err();
            assert_eq!(err.timestamp, bad);
        }
    }

    #[test]
    fn test_day_bounds_follow_local_midnight() {
        let (start, end) = berlin().day_bounds_utc(date(2025, 11, 25));
        assert_eq!(start.to_rfc3339(), "2025-11-24T23:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-11-25T23:00:00+00:00");

        let (start, _) = TimeNormalizer::new(America::New_York).day_bounds_utc(date(2025, 7, 4));
        assert_eq!(start.to_rfc3339(), "2025-07-04T04:00:00+00:00");
    }

    #[test]
    fn test_date_filter() {
        let filter = DateFilter::new(berlin(), date(2025, 11, 25));

        let local = filter.local_start(Some("2025-11-25T18:00:00Z")).unwrap();
        assert_eq!(local.hour(), 19);

        assert_eq!(
            filter.local_start(Some("2025-11-25T23:30:00Z")),
            Err(SkipReason::OtherDate(date(2025, 11, 26)))
        );
        assert_eq!(filter.local_start(None), Err(SkipReason::MissingTime));
        assert!(matches!(
            filter.local_start(Some("tomorrow")),
            Err(SkipReason::Timestamp(_))
        ));
    }
}
