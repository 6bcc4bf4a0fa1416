//! Daily Schedule
//!
//! Wall-clock trigger for the refresher: a fixed time of day in a fixed UTC offset,
//! written as a six-field cron expression (`sec min hour * * *`).
//! The clock is injectable so tests can compute fire times deterministically.

use chrono::{
    DateTime, Duration as ChronoDuration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc,
};
use thiserror::Error;

/// Fire daily at 04:00:00.
pub const DEFAULT_CRON: &str = "00 00 04 * * *";
/// America/Recife observes UTC-03:00 all year.
pub const DEFAULT_UTC_OFFSET: &str = "-03:00";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cron expression must have 6 fields, got {0}")]
    FieldCount(usize),
    #[error("invalid {field} field '{value}'")]
    InvalidField { field: &'static str, value: String },
    #[error("only daily schedules are supported, '{0}' must be '*'")]
    NotDaily(String),
    #[error("invalid UTC offset '{0}'")]
    InvalidOffset(String),
}

/// Source of the current time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fires once per day at `time` in `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    time: NaiveTime,
    offset: FixedOffset,
}

impl DailySchedule {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Parses `"ss mm hh * * *"`. Day-of-month, month and day-of-week must be `*`.
    pub fn from_cron(expr: &str, offset: FixedOffset) -> Result<Self, ScheduleError> {
        let fields: Vec<&str> = expr.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ScheduleError::FieldCount(fields.len()));
        }

        let second = parse_field(fields[0], "second", 59)?;
        let minute = parse_field(fields[1], "minute", 59)?;
        let hour = parse_field(fields[2], "hour", 23)?;

        if let Some(field) = fields[3..].iter().find(|f| **f != "*") {
            return Err(ScheduleError::NotDaily(field.to_string()));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            ScheduleError::InvalidField {
                field: "time",
                value: expr.to_string(),
            }
        })?;

        Ok(Self::new(time, offset))
    }

    /// Parses both the cron expression and an offset such as `-03:00`.
    pub fn parse(expr: &str, utc_offset: &str) -> Result<Self, ScheduleError> {
        let offset = parse_offset(utc_offset)?;
        Self::from_cron(expr, offset)
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// First fire time strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local_date = now.with_timezone(&self.offset).date_naive();
        let shift = ChronoDuration::seconds(i64::from(self.offset.local_minus_utc()));

        let fire_on =
            |date: NaiveDate| Utc.from_utc_datetime(&(date.and_time(self.time) - shift));

        let today = fire_on(local_date);
        if today > now {
            return today;
        }
        fire_on(local_date + ChronoDuration::days(1))
    }

    /// Next fire time after both `now` and `last_fire`. A wall clock lagging the
    /// timer that just fired must not get the same slot back.
    pub fn next_fire(
        &self,
        now: DateTime<Utc>,
        last_fire: Option<DateTime<Utc>>,
    ) -> DateTime<Utc> {
        self.next_after(last_fire.map_or(now, |fired| fired.max(now)))
    }
}

impl Default for DailySchedule {
    fn default() -> Self {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap_or_else(|| Utc.fix());
        let time = NaiveTime::from_hms_opt(4, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::new(time, offset)
    }
}

fn parse_field(value: &str, field: &'static str, max: u32) -> Result<u32, ScheduleError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| ScheduleError::InvalidField {
            field,
            value: value.to_string(),
        })
}

/// Accepts `Z`, `+HH:MM`, `-HH:MM`, `+HHMM` or `-HHMM`.
pub fn parse_offset(value: &str) -> Result<FixedOffset, ScheduleError> {
    let invalid = || ScheduleError::InvalidOffset(value.to_string());

    if value == "Z" || value == "z" {
        return Ok(Utc.fix());
    }

    let (sign, rest) = if let Some(rest) = value.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = value.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
