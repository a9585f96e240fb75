use crate::data::model::AnalysisResult;

// ---------------------------------------------------------------------------
// Text rendering of an analysis
// ---------------------------------------------------------------------------

/// The two console lines printed after a successful run.
///
/// `angle_label` is the Brewster angle as the operator typed it.
pub fn summary_lines(result: &AnalysisResult, angle_label: &str) -> [String; 2] {
    [
        format!("Empirical Brewster angle: {angle_label}°"),
        format!(
            "Refractive index: n = {:.4} ± {:.4}",
            result.refractive_index, result.refractive_index_uncertainty
        ),
    ]
}

/// Multi-line label shown in the chart's annotation box.
pub fn annotation(result: &AnalysisResult, angle_label: &str) -> String {
    format!(
        "θ_B = {angle_label}°\nn = {:.3} ± {:.3}",
        result.refractive_index, result.refractive_index_uncertainty
    )
}
