/// Data layer: core types, validation, ordering and analysis.
///
/// Architecture:
/// ```text
///  four raw strings (least counts, angles, reflectances)
///        │
///        ▼
///   ┌───────────┐
///   │ validator  │  parse + shape checks → ValidatedInput
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ ordering   │  stable sort by angle → Dataset
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ analyzer   │  minimum search, n = tan θ_B, Δn → AnalysisResult
///   └───────────┘
/// ```

pub mod analyzer;
pub mod error;
pub mod model;
pub mod ordering;
pub mod validator;
