use std::fmt;

// ---------------------------------------------------------------------------
// Sample – one (angle, reflectance) measurement
// ---------------------------------------------------------------------------

/// A single measurement: angle of incidence and the reflectance read at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Angle of incidence in degrees (independent variable).
    pub angle_degrees: f64,
    /// Measured reflectance (dependent variable).
    pub reflectance: f64,
}

impl Sample {
    pub fn new(angle_degrees: f64, reflectance: f64) -> Self {
        Self {
            angle_degrees,
            reflectance,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°, {})", self.angle_degrees, self.reflectance)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the paired samples of one run
// ---------------------------------------------------------------------------

/// An immutable sequence of samples.
///
/// Built by [`crate::data::ordering::order_by_angle`], which guarantees
/// non-decreasing angles. [`Dataset::from_samples`] keeps the given order and
/// exists for callers that already hold paired samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Wrap samples as-is, without reordering.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Angles in dataset order.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.angle_degrees)
    }

    /// Reflectances in dataset order.
    pub fn reflectances(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.reflectance)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// InstrumentError – fixed resolution of the apparatus
// ---------------------------------------------------------------------------

/// Least counts of the goniometer and the detector, supplied once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentError {
    /// Smallest resolvable angle step, in degrees.
    pub angle_least_count_degrees: f64,
    /// Smallest resolvable reflectance step.
    pub reflectance_least_count: f64,
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// Outcome of one analysis. Recomputed on every run and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    /// Angle of the minimum-reflectance sample, exactly as measured.
    pub brewster_angle_degrees: f64,
    /// `tan(θ_B)`.
    pub refractive_index: f64,
    /// Linear propagation of the angle least count into `n`.
    pub refractive_index_uncertainty: f64,
}

impl AnalysisResult {
    /// True when the uncertainty diverged (θ_B at 90°).
    pub fn is_singular(&self) -> bool {
        !self.refractive_index_uncertainty.is_finite()
    }
}
