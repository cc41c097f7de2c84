//! FILENAME: core/engine/src/chart.rs
//! PURPOSE: Data shaping for the GPA progress chart.
//! CONTEXT: The chart starts at the origin, so a (0, 0) point is placed
//! ahead of the term averages. Drawing the chart is left to the caller.

use crate::record::ReportSet;
use serde::{Deserialize, Serialize};

/// One plotted point: term position (0 is the origin) and average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: u32,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    /// Upper bound of the y axis: highest average plus one.
    pub y_max: f64,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Term averages in term order, preceded by the origin point.
/// An empty report gives an empty series.
pub fn progress_series(report: &ReportSet) -> ChartSeries {
    if report.is_empty() {
        return ChartSeries::default();
    }

    let mut points = Vec::with_capacity(report.len() + 1);
    points.push(ChartPoint { x: 0, y: 0.0 });
    points.extend(report.terms().iter().enumerate().map(|(i, term)| ChartPoint {
        x: i as u32 + 1,
        y: term.average(),
    }));

    let y_max = points.iter().map(|p| p.y).fold(0.0, f64::max) + 1.0;

    ChartSeries { points, y_max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{SubjectRecord, TermRecord};

    #[test]
    fn test_series_starts_at_origin() {
        let report = ReportSet::new(vec![
            TermRecord::new(1, vec![SubjectRecord::new("A", 86.0, 5.0)]).unwrap(),
            TermRecord::new(2, vec![SubjectRecord::new("B", 90.0, 4.0)]).unwrap(),
        ]);
        let series = progress_series(&report);
        let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
        let xs: Vec<u32> = series.points.iter().map(|p| p.x).collect();
        assert_eq!(ys, vec![0.0, 86.0, 90.0]);
        assert_eq!(xs, vec![0, 1, 2]);
        assert_eq!(series.y_max, 91.0);
    }

    #[test]
    fn test_empty_report_has_empty_series() {
        assert!(progress_series(&ReportSet::default()).is_empty());
    }
}
