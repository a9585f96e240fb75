use std::f64::consts::PI;

use super::error::PipelineError;
use super::model::{AnalysisResult, Dataset, InstrumentError, Sample};

// ---------------------------------------------------------------------------
// Trigonometry capability
// ---------------------------------------------------------------------------

/// The math the analyzer needs, passed in rather than taken from globals.
///
/// Every method works in radians; degree conversion stays in the analyzer.
pub trait Trigonometry {
    fn tan(&self, radians: f64) -> f64;
    fn cos(&self, radians: f64) -> f64;
}

/// `f64` intrinsics from the standard library.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTrigonometry;

impl Trigonometry for StdTrigonometry {
    fn tan(&self, radians: f64) -> f64 {
        radians.tan()
    }

    fn cos(&self, radians: f64) -> f64 {
        radians.cos()
    }
}

/// `cos` values at or below this are rounding residue of an exact zero:
/// `cos(90°)` in `f64` evaluates to ~6.1e-17, not 0.
const COS_ZERO: f64 = 1e-15;

// ---------------------------------------------------------------------------
// BrewsterAnalyzer
// ---------------------------------------------------------------------------

/// Locates the Brewster angle in a dataset and derives `n` and `Δn` from it.
#[derive(Debug, Clone, Default)]
pub struct BrewsterAnalyzer<T = StdTrigonometry> {
    trig: T,
}

impl BrewsterAnalyzer<StdTrigonometry> {
    pub fn new() -> Self {
        Self::with_trigonometry(StdTrigonometry)
    }
}

impl<T: Trigonometry> BrewsterAnalyzer<T> {
    /// Create an analyzer on top of a specific math capability.
    pub fn with_trigonometry(trig: T) -> Self {
        Self { trig }
    }

    /// Run the full analysis.
    ///
    /// The dataset need not be sorted; the minimum search scans every sample.
    /// The reflectance least count is not part of `Δn`, it only sizes the
    /// vertical error bars of the chart.
    pub fn analyze(
        &self,
        dataset: &Dataset,
        instrument: &InstrumentError,
    ) -> Result<AnalysisResult, PipelineError> {
        let minimum = minimum_reflectance(dataset).ok_or(PipelineError::EmptyDataset)?;
        log::debug!("Minimum reflectance sample: {minimum}");

        let theta_b = minimum.angle_degrees;
        let result = AnalysisResult {
            brewster_angle_degrees: theta_b,
            refractive_index: self.refractive_index(theta_b),
            refractive_index_uncertainty: self
                .index_uncertainty(theta_b, instrument.angle_least_count_degrees),
        };

        if result.is_singular() {
            log::warn!(
                "Uncertainty diverges at θ_B = {theta_b}°; linear error propagation breaks down here"
            );
        }
        log::info!(
            "Brewster angle {theta_b}° from {} samples: n = {:.4} ± {:.4}",
            dataset.len(),
            result.refractive_index,
            result.refractive_index_uncertainty
        );

        Ok(result)
    }

    /// `n = tan θ_B`, with the angle given in degrees.
    pub fn refractive_index(&self, brewster_angle_degrees: f64) -> f64 {
        self.trig.tan(brewster_angle_degrees.to_radians())
    }

    /// `Δn = sec²(θ_B) · Δθ_B`, with `Δθ_B` converted from degrees to radians.
    ///
    /// At 90° the secant is infinite and so is the result (NaN when the least
    /// count is zero).
    pub fn index_uncertainty(&self, brewster_angle_degrees: f64, angle_least_count_degrees: f64) -> f64 {
        let cos = self.trig.cos(brewster_angle_degrees.to_radians());
        let sec_squared = if cos.abs() <= COS_ZERO {
            f64::INFINITY
        } else {
            (1.0 / cos).powi(2)
        };
        sec_squared * angle_least_count_degrees * (PI / 180.0)
    }
}

/// First sample holding the smallest reflectance, in dataset order.
pub fn minimum_reflectance(dataset: &Dataset) -> Option<Sample> {
    dataset
        .samples()
        .iter()
        .copied()
        .reduce(|best, s| if s.reflectance < best.reflectance { s } else { best })
}
