//! Producer win-interval extraction
//!
//! Turns the set of winning `(producer, year)` credits into the producers
//! whose consecutive wins are closest together and furthest apart.
//!
//! Wins are grouped per producer (exact string match), sorted by year, and
//! each adjacent pair yields one [`ProducerInterval`]. The report keeps every
//! interval equal to the global minimum and every interval equal to the
//! global maximum, so ties are never dropped.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Award years accepted from the nominee list and from storage
pub const VALID_YEARS: RangeInclusive<i64> = 1..=9999;

/// One winning credit: a producer and the year their movie won
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub producer: String,
    pub year: i64,
}

impl WinRecord {
    pub fn new(producer: impl Into<String>, year: i64) -> Self {
        Self {
            producer: producer.into(),
            year,
        }
    }
}

/// Win credit as read from storage, before validation
///
/// Both columns are read as text so that a non-numeric year surfaces as a
/// validation error instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct RawWinRow {
    pub producer: Option<String>,
    pub year: Option<String>,
}

impl TryFrom<RawWinRow> for WinRecord {
    type Error = ValidationError;

    fn try_from(raw: RawWinRow) -> Result<Self, Self::Error> {
        let producer = match raw.producer {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(ValidationError::MissingProducer { year: raw.year }),
        };

        let value = match raw.year {
            Some(v) => v,
            None => return Err(ValidationError::MissingYear { producer }),
        };

        let parsed = value.trim().parse::<i64>();
        match parsed {
            Ok(year) if VALID_YEARS.contains(&year) => Ok(WinRecord { producer, year }),
            _ => Err(ValidationError::InvalidYear { producer, value }),
        }
    }
}

/// Gap between two chronologically adjacent wins of the same producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    #[serde(rename = "producers")]
    pub producer: String,
    pub interval: i64,
    pub previous_win: i64,
    pub following_win: i64,
}

/// Producers with the smallest and largest consecutive-win gaps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalReport {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl IntervalReport {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// All consecutive-win intervals, ordered by producer then year
///
/// A producer with K wins contributes exactly K-1 intervals. Same-year
/// duplicates are kept and produce a zero-length interval. A pair whose gap
/// does not fit in an `i64` is skipped; years inside [`VALID_YEARS`] never
/// produce one.
pub fn consecutive_intervals(wins: &[WinRecord]) -> Vec<ProducerInterval> {
    let mut by_producer: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for win in wins {
        by_producer
            .entry(win.producer.as_str())
            .or_default()
            .push(win.year);
    }

    let mut intervals = Vec::new();
    for (producer, mut years) in by_producer {
        years.sort();
        intervals.extend(years.windows(2).filter_map(|pair| {
            let interval = pair[1].checked_sub(pair[0])?;
            Some(ProducerInterval {
                producer: producer.to_string(),
                interval,
                previous_win: pair[0],
                following_win: pair[1],
            })
        }));
    }

    intervals
}

/// Select the globally minimal and maximal intervals
///
/// Empty input, or input where nobody won twice, yields an empty report.
pub fn extract_intervals(wins: &[WinRecord]) -> IntervalReport {
    let intervals = consecutive_intervals(wins);

    let (Some(min_interval), Some(max_interval)) = (
        intervals.iter().map(|i| i.interval).min(),
        intervals.iter().map(|i| i.interval).max(),
    ) else {
        return IntervalReport::default();
    };

    IntervalReport {
        min: intervals
            .iter()
            .filter(|i| i.interval == min_interval)
            .cloned()
            .collect(),
        max: intervals
            .iter()
            .filter(|i| i.interval == max_interval)
            .cloned()
            .collect(),
    }
}

/// Validate raw stored rows, then extract
///
/// Stops at the first malformed row; nothing is coerced or skipped.
pub fn extract_from_rows<I>(rows: I) -> Result<IntervalReport, ValidationError>
where
    I: IntoIterator<Item = RawWinRow>,
{
    let wins = rows
        .into_iter()
        .map(WinRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(extract_intervals(&wins))
}
