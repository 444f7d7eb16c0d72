// Shaped series and the chart view handed to the renderer
use super::downloads::{ChartBounds, ChartPoint};
use serde::Serialize;

pub const DATE_TICK_FORMAT: &str = "%Y/%m/%d";

/// Points of one series plus the axis span they cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedSeries {
    pub points: Vec<ChartPoint>,
    pub bounds: Option<ChartBounds>,
}

/// Several aligned series on one shared time axis. `labels[i]` names `series[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedGroups {
    pub series: Vec<Vec<ChartPoint>>,
    pub labels: Vec<String>,
    pub bounds: Option<ChartBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Single,
    Grouped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<Vec<ChartPoint>>,
    pub labels: Vec<String>,
    pub bounds: Option<ChartBounds>,
    pub y_min: f64,
    pub tick_format: &'static str,
}

impl Chart {
    pub fn single(title: impl Into<String>, shaped: ShapedSeries) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Single,
            series: vec![shaped.points],
            labels: Vec::new(),
            bounds: shaped.bounds,
            y_min: 0.0,
            tick_format: DATE_TICK_FORMAT,
        }
    }

    pub fn grouped(title: impl Into<String>, shaped: ShapedGroups) -> Self {
        Self {
            title: title.into(),
            kind: ChartKind::Grouped,
            series: shaped.series,
            labels: shaped.labels,
            bounds: shaped.bounds,
            y_min: 0.0,
            tick_format: DATE_TICK_FORMAT,
        }
    }

    /// Nothing should be drawn for a chart without bounds.
    pub fn is_drawable(&self) -> bool {
        self.bounds.is_some()
    }
}
