//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the report session integration tests.

#![allow(dead_code)]

use app_lib::{calculate, create_session_state, CalculationSummary, SessionState};
use engine::{SubjectInput, TermInput};

/// Test harness for creating and managing session state.
pub struct TestHarness {
    pub state: SessionState,
}

impl TestHarness {
    /// Create a new test harness with no calculation.
    pub fn new() -> Self {
        TestHarness {
            state: create_session_state(),
        }
    }

    /// Create a harness that has already calculated the two-term sample.
    pub fn with_sample_calculation() -> Self {
        let harness = Self::new();
        harness.calculate(sample_inputs()).unwrap();
        harness
    }

    pub fn calculate(&self, inputs: Vec<TermInput>) -> Result<CalculationSummary, String> {
        calculate(&self.state, inputs)
    }

    pub fn has_calculation(&self) -> bool {
        self.state.current().unwrap().is_some()
    }
}

/// Two terms; the second has a zero-credit subject.
pub fn sample_inputs() -> Vec<TermInput> {
    vec![
        TermInput::new(
            1,
            vec![
                SubjectInput::new("Mathematics", 90.0, 3.0),
                SubjectInput::new("Physics", 80.0, 2.0),
            ],
        ),
        TermInput::new(
            2,
            vec![
                SubjectInput::new("Chemistry", 90.0, 4.0),
                SubjectInput::new("Library Orientation", 100.0, 0.0),
            ],
        ),
    ]
}

pub fn single_term_inputs(score: f64) -> Vec<TermInput> {
    vec![TermInput::new(
        1,
        vec![SubjectInput::new("Programming", score, 4.0)],
    )]
}
