//! FILENAME: app/src/commands.rs
// PURPOSE: Commands invoked by the UI: calculate, read back, download.
// CONTEXT: Commands return Result<T, String> so errors cross the UI boundary as text.

use crate::api_types::{CalculationSummary, Download};
use crate::config::ReportConfig;
use crate::state::{Calculation, SessionState};
use crate::{log_enter_info, log_exit_info};
use crate::{log_error, log_info, log_warn};
use engine::{ReportSet, TermInput};
use export::{render_report_document, render_spreadsheet, ExportFormat};
use std::sync::Arc;

const NOTHING_TO_EXPORT: &str = "Nothing to export: run a calculation first";

// ============================================================================
// CALCULATION
// ============================================================================

/// Validate the inputs, compute every average and store the result.
/// A failed calculation leaves the previous one in place.
pub fn calculate(
    state: &SessionState,
    inputs: Vec<TermInput>,
) -> Result<CalculationSummary, String> {
    log_enter_info!("commands", "calculate", "terms={}", inputs.len());

    let report = match ReportSet::from_inputs(inputs) {
        Ok(report) => report,
        Err(e) => {
            log_warn!("commands", "calculate rejected: {}", e);
            return Err(e.to_string());
        }
    };

    let calculation = state.replace(Calculation::new(report))?;
    let summary = CalculationSummary::from_calculation(&calculation);

    log_exit_info!(
        "commands",
        "calculate",
        "terms={} overall={:?}",
        summary.terms.len(),
        summary.overall_average
    );
    Ok(summary)
}

/// Same as `calculate`, taking the form contents as a JSON array of terms.
pub fn calculate_json(state: &SessionState, json: &str) -> Result<CalculationSummary, String> {
    let inputs: Vec<TermInput> = serde_json::from_str(json).map_err(|e| {
        log_warn!("commands", "calculate_json parse error: {}", e);
        format!("Invalid input: {}", e)
    })?;
    calculate(state, inputs)
}

/// Summary of the last successful calculation, if any.
pub fn current_summary(state: &SessionState) -> Result<Option<CalculationSummary>, String> {
    Ok(state
        .current()?
        .map(|calculation| CalculationSummary::from_calculation(&calculation)))
}

// ============================================================================
// DOWNLOADS
// ============================================================================

fn require_calculation(state: &SessionState) -> Result<Arc<Calculation>, String> {
    match state.current()? {
        Some(calculation) => Ok(calculation),
        None => {
            log_warn!("commands", "download requested without a calculation");
            Err(NOTHING_TO_EXPORT.to_string())
        }
    }
}

pub fn download_pdf(state: &SessionState, config: &ReportConfig) -> Result<Download, String> {
    log_enter_info!("commands", "download_pdf");
    let calculation = require_calculation(state)?;

    let bytes = render_report_document(
        &calculation.report,
        calculation.overall_average,
        &config.document_options(),
    )
    .map_err(|e| {
        log_error!("commands", "pdf export failed: {}", e);
        e.to_string()
    })?;

    log_exit_info!("commands", "download_pdf", "bytes={}", bytes.len());
    Ok(Download {
        file_name: config.file_name(ExportFormat::Pdf),
        content_type: ExportFormat::Pdf.content_type().to_string(),
        bytes,
    })
}

pub fn download_excel(state: &SessionState, config: &ReportConfig) -> Result<Download, String> {
    log_enter_info!("commands", "download_excel");
    let calculation = require_calculation(state)?;

    let bytes = render_spreadsheet(
        &calculation.report,
        calculation.overall_average,
        &config.sheet_options(),
    )
    .map_err(|e| {
        log_error!("commands", "xlsx export failed: {}", e);
        e.to_string()
    })?;

    log_info!("commands", "xlsx sheet={}", config.sheet_name);
    log_exit_info!("commands", "download_excel", "bytes={}", bytes.len());
    Ok(Download {
        file_name: config.file_name(ExportFormat::Xlsx),
        content_type: ExportFormat::Xlsx.content_type().to_string(),
        bytes,
    })
}
