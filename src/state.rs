use crate::color::SeriesColors;
use crate::data::analyzer::BrewsterAnalyzer;
use crate::data::error::PipelineError;
use crate::data::model::{AnalysisResult, Dataset, InstrumentError};
use crate::data::ordering::order_by_angle;
use crate::data::validator::{validate, RawInput};
use crate::report;

// ---------------------------------------------------------------------------
// Session: one experiment run, fully computed
// ---------------------------------------------------------------------------

/// Everything the renderer needs, computed once and read-only afterwards.
pub struct Session {
    /// Samples sorted by angle.
    pub dataset: Dataset,

    /// Least counts, used for the error bars.
    pub instrument: InstrumentError,

    /// Brewster angle, `n` and `Δn`.
    pub result: AnalysisResult,

    /// Console summary, also shown above the chart.
    pub summary: [String; 2],

    /// Text of the annotation box.
    pub annotation: String,

    /// Chart series colours.
    pub colors: SeriesColors,
}

impl Session {
    /// Validate, order and analyse the raw answers.
    ///
    /// Stops at the first failing stage; nothing is kept from a failed run.
    pub fn from_raw(raw: &RawInput) -> Result<Self, PipelineError> {
        let input = validate(raw)?;
        log::info!("Read {} angle/reflectance pairs", input.angles.len());

        let dataset = order_by_angle(&input.angles, &input.reflectances);
        let result = BrewsterAnalyzer::new().analyze(&dataset, &input.instrument)?;

        let angle_label = typed_angle(&input.angles, &input.angle_labels, result.brewster_angle_degrees);

        Ok(Self {
            summary: report::summary_lines(&result, &angle_label),
            annotation: report::annotation(&result, &angle_label),
            colors: SeriesColors::default(),
            dataset,
            instrument: input.instrument,
            result,
        })
    }
}

/// The operator's spelling of `angle`, which is always one of the inputs.
fn typed_angle(angles: &[f64], labels: &[String], angle: f64) -> String {
    angles
        .iter()
        .position(|a| a.to_bits() == angle.to_bits())
        .and_then(|i| labels.get(i))
        .cloned()
        .unwrap_or_else(|| angle.to_string())
}
