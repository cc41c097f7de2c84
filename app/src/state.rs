//! FILENAME: app/src/state.rs
// PURPOSE: Session state holding the last successful calculation.
// CONTEXT: The cell holds at most one calculation. A new calculation replaces
// it wholesale; the stored value is never modified in place.

use engine::ReportSet;
use std::sync::{Arc, Mutex};

/// A validated report and its overall average.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub report: ReportSet,
    pub overall_average: Option<f64>,
}

impl Calculation {
    pub fn new(report: ReportSet) -> Self {
        let overall_average = report.overall_average();
        Calculation {
            report,
            overall_average,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionState {
    last: Mutex<Option<Arc<Calculation>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last calculation, if any.
    pub fn current(&self) -> Result<Option<Arc<Calculation>>, String> {
        let guard = self.last.lock().map_err(|e| e.to_string())?;
        Ok(guard.clone())
    }

    /// Stores `calculation`, dropping the previous one.
    pub fn replace(&self, calculation: Calculation) -> Result<Arc<Calculation>, String> {
        let calculation = Arc::new(calculation);
        let mut guard = self.last.lock().map_err(|e| e.to_string())?;
        *guard = Some(Arc::clone(&calculation));
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{SubjectRecord, TermRecord};

    fn calculation(score: f64) -> Calculation {
        Calculation::new(ReportSet::new(vec![TermRecord::new(
            1,
            vec![SubjectRecord::new("Math", score, 3.0)],
        )
        .unwrap()]))
    }

    #[test]
    fn test_starts_empty() {
        assert!(SessionState::new().current().unwrap().is_none());
    }

    #[test]
    fn test_replace_swaps_whole_value() {
        let state = SessionState::new();
        let first = state.replace(calculation(70.0)).unwrap();
        state.replace(calculation(90.0)).unwrap();

        let current = state.current().unwrap().unwrap();
        assert_eq!(current.overall_average, Some(90.0));
        // Earlier handles keep seeing the value they were given
        assert_eq!(first.overall_average, Some(70.0));
    }

    #[test]
    fn test_poisoned_lock_is_an_error_not_empty() {
        let state = SessionState::new();
        state.replace(calculation(70.0)).unwrap();

        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = state.last.lock().unwrap();
                    panic!("writer died holding the lock");
                })
                .join();
        });

        assert!(state.current().is_err());
        assert!(crate::commands::current_summary(&state).is_err());
    }
}
