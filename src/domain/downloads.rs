// Daily download observations and their chart-ready form
use super::calendar::DateTriple;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Downloads observed on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRecord {
    pub time: DateTriple,
    pub value: f64,
}

impl CountRecord {
    #[cfg(test)]
    pub fn new(time: DateTriple, value: f64) -> Self {
        Self { time, value }
    }
}

/// A labelled run of daily records, e.g. one per distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub ddts: Vec<CountRecord>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, ddts: Vec<CountRecord>) -> Self {
        Self {
            name: name.into(),
            ddts,
        }
    }
}

/// One plotted point, serialized as `["YYYY-MM-DD", value]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(NaiveDate, f64)", into = "(NaiveDate, f64)")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

impl From<(NaiveDate, f64)> for ChartPoint {
    fn from((date, value): (NaiveDate, f64)) -> Self {
        Self::new(date, value)
    }
}

impl From<ChartPoint> for (NaiveDate, f64) {
    fn from(point: ChartPoint) -> Self {
        (point.date, point.value)
    }
}

/// The date span shared by every series on a chart's x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl ChartBounds {
    pub fn at(date: NaiveDate) -> Self {
        Self {
            min: date,
            max: date,
        }
    }

    /// Widen to include `date`. Equal dates keep the existing extreme.
    pub fn including(self, date: NaiveDate) -> Self {
        Self {
            min: if date < self.min { date } else { self.min },
            max: if date > self.max { date } else { self.max },
        }
    }

    /// Bounds of every date in `dates`, or `None` when there are none.
    pub fn spanning<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().fold(None, |bounds, date| {
            Some(match bounds {
                None => Self::at(date),
                Some(bounds) => bounds.including(date),
            })
        })
    }
}
