use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Everything the validator or analyzer can reject.
///
/// All variants are terminal: the pipeline stops and nothing downstream runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A token in `field` could not be read as a finite number.
    #[error("{field}[{position}]: '{token}' is not a {reason}")]
    Parse {
        field: &'static str,
        /// 1-based position of the token within its field.
        position: usize,
        token: String,
        reason: &'static str,
    },

    /// Angle and reflectance lists have different lengths.
    #[error("{angles} angle values but {reflectances} reflectance values; both lists must have the same length")]
    LengthMismatch { angles: usize, reflectances: usize },

    /// A least count below zero.
    #[error("{field} must not be negative, got {value}")]
    InvalidLeastCount { field: &'static str, value: f64 },

    /// The analyzer was handed a dataset without samples.
    #[error("dataset contains no samples")]
    EmptyDataset,
}

impl PipelineError {
    pub fn not_a_number(field: &'static str, position: usize, token: &str) -> Self {
        Self::Parse {
            field,
            position,
            token: token.to_string(),
            reason: "number",
        }
    }

    pub fn not_finite(field: &'static str, position: usize, token: &str) -> Self {
        Self::Parse {
            field,
            position,
            token: token.to_string(),
            reason: "finite number",
        }
    }
}
