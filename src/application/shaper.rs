// Time-series shaping - Daily records to plot-ready points with shared axis bounds
use crate::domain::calendar::{DateError, DatePolicy};
use crate::domain::chart::{ShapedGroups, ShapedSeries};
use crate::domain::downloads::{ChartBounds, ChartPoint, CountRecord, NamedSeries};

/// Stateless; the date policy is its only setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSeriesShaper {
    policy: DatePolicy,
}

impl TimeSeriesShaper {
    pub fn new(policy: DatePolicy) -> Self {
        Self { policy }
    }

    /// One point per record in input order, bounded by the earliest and latest date.
    pub fn shape_single(&self, records: &[CountRecord]) -> Result<ShapedSeries, DateError> {
        let points = self.points(records)?;
        let bounds = ChartBounds::spanning(points.iter().map(|p| p.date));

        tracing::debug!("Shaped {} records, bounds {:?}", points.len(), bounds);
        Ok(ShapedSeries { points, bounds })
    }

    /// Each group shaped on its own, with one set of bounds across all of them.
    /// Empty groups keep their slot so labels stay aligned with series.
    pub fn shape_grouped(&self, groups: &[NamedSeries]) -> Result<ShapedGroups, DateError> {
        let series = groups
            .iter()
            .map(|group| self.points(&group.ddts))
            .collect::<Result<Vec<_>, _>>()?;
        let labels = groups.iter().map(|group| group.name.clone()).collect();
        let bounds = ChartBounds::spanning(series.iter().flatten().map(|p| p.date));

        tracing::debug!("Shaped {} groups, bounds {:?}", series.len(), bounds);
        Ok(ShapedGroups {
            series,
            labels,
            bounds,
        })
    }

    fn points(&self, records: &[CountRecord]) -> Result<Vec<ChartPoint>, DateError> {
        records
            .iter()
            .map(|record| {
                let date = record.time.to_date(self.policy)?;
                Ok(ChartPoint::new(date, record.value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::DateTriple;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: i32, d: i32, value: f64) -> CountRecord {
        CountRecord::new(DateTriple::new(y, m, d), value)
    }

    #[test]
    fn test_shape_single_scenario() {
        let shaper = TimeSeriesShaper::default();
        let shaped = shaper
            .shape_single(&[record(2020, 1, 15, 10.0), record(2020, 1, 17, 5.0)])
            .unwrap();

        assert_eq!(
            shaped.points,
            vec![
                ChartPoint::new(ymd(2020, 1, 15), 10.0),
                ChartPoint::new(ymd(2020, 1, 17), 5.0),
            ]
        );
        assert_eq!(
            shaped.bounds,
            Some(ChartBounds {
                min: ymd(2020, 1, 15),
                max: ymd(2020, 1, 17),
            })
        );
    }

    #[test]
    fn test_shape_single_empty() {
        let shaped = TimeSeriesShaper::default().shape_single(&[]).unwrap();
        assert!(shaped.points.is_empty());
        assert_eq!(shaped.bounds, None);
    }

    #[test]
    fn test_shape_single_keeps_order_and_duplicates() {
        let records = vec![
            record(2021, 3, 2, 1.0),
            record(2021, 1, 9, 2.0),
            record(2021, 3, 2, 3.0),
            record(2020, 12, 31, 4.0),
            record(2021, 2, 14, 5.0),
        ];
        let shaped = TimeSeriesShaper::default().shape_single(&records).unwrap();

        assert_eq!(shaped.points.len(), records.len());
        let values: Vec<f64> = shaped.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        // Bounds match a direct scan over the converted dates
        let dates: Vec<NaiveDate> = shaped.points.iter().map(|p| p.date).collect();
        let bounds = shaped.bounds.unwrap();
        assert_eq!(bounds.min, *dates.iter().min().unwrap());
        assert_eq!(bounds.max, *dates.iter().max().unwrap());
        assert!(dates.iter().all(|d| bounds.min <= *d && *d <= bounds.max));
    }

    #[test]
    fn test_shape_single_rolls_over_by_default() {
        let shaped = TimeSeriesShaper::default()
            .shape_single(&[record(2020, 13, 1, 1.0), record(2020, 2, 30, 2.0)])
            .unwrap();
        assert_eq!(shaped.points[0].date, ymd(2021, 1, 1));
        assert_eq!(shaped.points[1].date, ymd(2020, 3, 1));
        assert_eq!(shaped.bounds.unwrap().max, ymd(2021, 1, 1));
    }

    #[test]
    fn test_shape_single_strict_rejects() {
        let shaper = TimeSeriesShaper::new(DatePolicy::Strict);
        let err = shaper
            .shape_single(&[record(2020, 1, 1, 1.0), record(2020, 13, 1, 1.0)])
            .unwrap_err();
        assert_eq!(err, DateError::Invalid(DateTriple::new(2020, 13, 1)));
    }

    #[test]
    fn test_shape_grouped_scenario() {
        let groups = vec![
            NamedSeries::new("A", vec![record(2020, 2, 1, 3.0)]),
            NamedSeries::new("B", vec![record(2020, 1, 1, 7.0)]),
        ];
        let shaped = TimeSeriesShaper::default().shape_grouped(&groups).unwrap();

        assert_eq!(shaped.labels, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(shaped.series.len(), 2);
        assert_eq!(shaped.series[0], vec![ChartPoint::new(ymd(2020, 2, 1), 3.0)]);
        assert_eq!(
            shaped.bounds,
            Some(ChartBounds {
                min: ymd(2020, 1, 1),
                max: ymd(2020, 2, 1),
            })
        );
    }

    #[test]
    fn test_shape_grouped_bounds_match_flattened() {
        let groups = vec![
            NamedSeries::new("focal", vec![record(2020, 5, 3, 1.0), record(2020, 5, 9, 2.0)]),
            NamedSeries::new("bionic", vec![record(2019, 11, 30, 4.0)]),
            NamedSeries::new("jammy", vec![record(2022, 4, 21, 8.0), record(2020, 6, 1, 1.0)]),
        ];
        let shaper = TimeSeriesShaper::default();

        let flattened: Vec<CountRecord> = groups.iter().flat_map(|g| g.ddts.clone()).collect();
        let grouped = shaper.shape_grouped(&groups).unwrap();
        let single = shaper.shape_single(&flattened).unwrap();

        assert_eq!(grouped.bounds, single.bounds);
        for (series, group) in grouped.series.iter().zip(&groups) {
            assert_eq!(series.len(), group.ddts.len());
        }
    }

    #[test]
    fn test_shape_grouped_keeps_empty_groups() {
        let groups = vec![
            NamedSeries::new("focal", vec![]),
            NamedSeries::new("bionic", vec![record(2020, 1, 1, 1.0)]),
            NamedSeries::new("focal", vec![]),
        ];
        let shaped = TimeSeriesShaper::default().shape_grouped(&groups).unwrap();

        assert_eq!(shaped.series.len(), 3);
        assert!(shaped.series[0].is_empty());
        assert!(shaped.series[2].is_empty());
        assert_eq!(shaped.labels, vec!["focal", "bionic", "focal"]);
        assert_eq!(shaped.bounds, Some(ChartBounds::at(ymd(2020, 1, 1))));
    }

    #[test]
    fn test_shape_grouped_all_empty() {
        let shaper = TimeSeriesShaper::default();

        let shaped = shaper.shape_grouped(&[]).unwrap();
        assert!(shaped.series.is_empty());
        assert_eq!(shaped.bounds, None);

        let shaped = shaper
            .shape_grouped(&[NamedSeries::new("focal", vec![]), NamedSeries::new("", vec![])])
            .unwrap();
        assert_eq!(shaped.series, vec![Vec::<ChartPoint>::new(), Vec::new()]);
        assert_eq!(shaped.labels, vec!["focal", ""]);
        assert_eq!(shaped.bounds, None);
    }
}
