//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions returned to the UI collaborator.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use crate::state::Calculation;
use engine::{progress_series, ChartSeries};
use serde::{Deserialize, Serialize};

/// Average of one term, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSummary {
    pub term: u32,
    pub average: f64,
}

/// Everything the UI shows after a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub terms: Vec<TermSummary>,
    pub overall_average: Option<f64>,
    /// Term averages with the leading origin point, ready to plot.
    pub chart: ChartSeries,
}

impl CalculationSummary {
    pub fn from_calculation(calculation: &Calculation) -> Self {
        CalculationSummary {
            terms: calculation
                .report
                .terms()
                .iter()
                .map(|t| TermSummary {
                    term: t.term(),
                    average: t.average(),
                })
                .collect(),
            overall_average: calculation.overall_average,
            chart: progress_series(&calculation.report),
        }
    }

    /// Text lines as shown under the form.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .terms
            .iter()
            .map(|t| format!("Semester {} GPA: {:.2}", t.term, t.average))
            .collect();
        if let Some(overall) = self.overall_average {
            lines.push(format!("Overall CGPA: {:.2}", overall));
        }
        lines
    }
}

/// A finished export ready to hand to a download button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
