//! FILENAME: app/src/lib.rs
// PURPOSE: Session layer of the GPA report generator.
// CONTEXT: Holds the last calculation and turns it into summaries and downloads.

pub mod logging;

pub mod api_types;
pub mod commands;
pub mod config;
pub mod state;

pub use api_types::{CalculationSummary, Download, TermSummary};
pub use commands::{
    calculate, calculate_json, current_summary, download_excel, download_pdf,
};
pub use config::ReportConfig;
pub use state::{Calculation, SessionState};

pub fn create_session_state() -> SessionState {
    SessionState::new()
}
