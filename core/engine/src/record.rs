//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Grade records (subjects, terms, report set) and the input shapes
//! they are built from.
//! CONTEXT: A TermRecord's average is derived when the record is built and
//! can never be set directly. A ReportSet is rebuilt from scratch for every
//! calculation and is then shared read-only by the renderers.

use crate::aggregate::weighted_average;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// A record handed over by the input collaborator violates the contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("{record} is missing required field '{field}'")]
    MissingField { record: String, field: &'static str },

    #[error("{record} has term index 0; term indices start at 1")]
    InvalidTermIndex { record: String },

    #[error("{field} of subject '{subject}' is not a finite number")]
    NonFiniteValue { subject: String, field: &'static str },
}

// ============================================================================
// SUBJECT
// ============================================================================

/// One subject within a term.
/// A weight of 0 keeps the subject on the report but out of the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

impl SubjectRecord {
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Self {
        SubjectRecord {
            name: name.into(),
            score,
            weight,
        }
    }

    /// Whether this subject counts towards averages.
    pub fn is_included(&self) -> bool {
        self.weight > 0.0
    }

    fn validate(&self) -> Result<(), RecordError> {
        if !self.score.is_finite() {
            return Err(RecordError::NonFiniteValue {
                subject: self.name.clone(),
                field: "score",
            });
        }
        if !self.weight.is_finite() {
            return Err(RecordError::NonFiniteValue {
                subject: self.name.clone(),
                field: "weight",
            });
        }
        Ok(())
    }
}

// ============================================================================
// TERM
// ============================================================================

/// One grading period with its subjects and derived average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRecord {
    term: u32,
    subjects: Vec<SubjectRecord>,
    average: f64,
}

impl TermRecord {
    /// Builds a term and computes its average from `subjects`.
    pub fn new(term: u32, subjects: Vec<SubjectRecord>) -> Result<Self, RecordError> {
        if term == 0 {
            return Err(RecordError::InvalidTermIndex {
                record: "term record".to_string(),
            });
        }
        for subject in &subjects {
            subject.validate()?;
        }

        let average = weighted_average(subjects.iter().map(|s| (s.score, s.weight)));

        Ok(TermRecord {
            term,
            subjects,
            average,
        })
    }

    pub fn term(&self) -> u32 {
        self.term
    }

    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    /// Term average, rounded to 2 decimal places.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Sum of the weights of subjects that count towards the average.
    /// This is the term's weight in the overall average.
    pub fn included_weight(&self) -> f64 {
        self.subjects
            .iter()
            .filter(|s| s.is_included())
            .map(|s| s.weight)
            .sum()
    }
}

// ============================================================================
// REPORT SET
// ============================================================================

/// All terms of one calculation, in term order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReportSet {
    terms: Vec<TermRecord>,
}

impl ReportSet {
    pub fn new(terms: Vec<TermRecord>) -> Self {
        ReportSet { terms }
    }

    /// Validates and converts the collaborator's input records.
    pub fn from_inputs(inputs: Vec<TermInput>) -> Result<Self, RecordError> {
        let terms = inputs
            .into_iter()
            .enumerate()
            .map(|(position, input)| input.into_record(position + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ReportSet { terms })
    }

    pub fn terms(&self) -> &[TermRecord] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of subjects across all terms, zero-weight ones included.
    pub fn subject_count(&self) -> usize {
        self.terms.iter().map(|t| t.subjects.len()).sum()
    }

    /// Weighted average of the term averages, each weighted by the term's
    /// included credits. `None` when there are no terms.
    pub fn overall_average(&self) -> Option<f64> {
        if self.terms.is_empty() {
            return None;
        }
        Some(weighted_average(
            self.terms.iter().map(|t| (t.average, t.included_weight())),
        ))
    }
}

// ============================================================================
// INPUT SHAPES
// ============================================================================

/// Subject as received from the input form. Every field is optional on the
/// wire so that a missing one can be reported instead of defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    pub name: Option<String>,
    pub score: Option<f64>,
    pub weight: Option<f64>,
}

impl SubjectInput {
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Self {
        SubjectInput {
            name: Some(name.into()),
            score: Some(score),
            weight: Some(weight),
        }
    }

    fn into_record(self, record: &str) -> Result<SubjectRecord, RecordError> {
        let missing = |field| RecordError::MissingField {
            record: record.to_string(),
            field,
        };
        Ok(SubjectRecord {
            name: self.name.ok_or_else(|| missing("name"))?,
            score: self.score.ok_or_else(|| missing("score"))?,
            weight: self.weight.ok_or_else(|| missing("weight"))?,
        })
    }
}

/// Term as received from the input form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermInput {
    pub term: Option<u32>,
    pub subjects: Option<Vec<SubjectInput>>,
}

impl TermInput {
    pub fn new(term: u32, subjects: Vec<SubjectInput>) -> Self {
        TermInput {
            term: Some(term),
            subjects: Some(subjects),
        }
    }

    /// `position` is the 1-based position of this term in the input, used
    /// to name the offending record in errors.
    fn into_record(self, position: usize) -> Result<TermRecord, RecordError> {
        let record = format!("term #{}", position);
        let term = self.term.ok_or_else(|| RecordError::MissingField {
            record: record.clone(),
            field: "term",
        })?;
        if term == 0 {
            return Err(RecordError::InvalidTermIndex { record });
        }
        let inputs = self.subjects.ok_or_else(|| RecordError::MissingField {
            record: record.clone(),
            field: "subjects",
        })?;

        let subjects = inputs
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.into_record(&format!("{}, subject #{}", record, i + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        TermRecord::new(term, subjects)
    }
}
