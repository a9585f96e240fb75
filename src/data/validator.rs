use super::error::PipelineError;
use super::model::InstrumentError;

// ---------------------------------------------------------------------------
// Raw and validated input
// ---------------------------------------------------------------------------

/// The four answers collected from the operator, untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub angle_least_count: String,
    pub reflectance_least_count: String,
    /// Comma-separated angles in degrees.
    pub angles: String,
    /// Comma-separated reflectances.
    pub reflectances: String,
}

/// Parsed, shape-checked input. Angles and reflectances have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub angles: Vec<f64>,
    /// Angle tokens exactly as typed (trimmed), for display.
    pub angle_labels: Vec<String>,
    pub reflectances: Vec<f64>,
    pub instrument: InstrumentError,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Parse and check all four answers, failing on the first problem.
///
/// Order of checks: angle least count, reflectance least count, angles,
/// reflectances, then the length comparison.
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, PipelineError> {
    let angle_least_count = parse_least_count(&raw.angle_least_count, "angle least count")?;
    let reflectance_least_count =
        parse_least_count(&raw.reflectance_least_count, "reflectance least count")?;

    let angles = parse_comma_floats(&raw.angles, "angles")?;
    let reflectances = parse_comma_floats(&raw.reflectances, "reflectances")?;

    if angles.len() != reflectances.len() {
        return Err(PipelineError::LengthMismatch {
            angles: angles.len(),
            reflectances: reflectances.len(),
        });
    }

    Ok(ValidatedInput {
        angles,
        angle_labels: raw.angles.split(',').map(|t| t.trim().to_string()).collect(),
        reflectances,
        instrument: InstrumentError {
            angle_least_count_degrees: angle_least_count,
            reflectance_least_count,
        },
    })
}

/// Split on commas, trim each token and parse it as a finite `f64`.
///
/// An empty string yields one empty token and therefore an error, never an
/// empty list.
pub fn parse_comma_floats(s: &str, field: &'static str) -> Result<Vec<f64>, PipelineError> {
    s.split(',')
        .enumerate()
        .map(|(j, tok)| parse_token(tok, field, j + 1))
        .collect()
}

/// Parse a single non-negative least count.
pub fn parse_least_count(s: &str, field: &'static str) -> Result<f64, PipelineError> {
    let value = parse_token(s, field, 1)?;
    if value < 0.0 {
        return Err(PipelineError::InvalidLeastCount { field, value });
    }
    Ok(value)
}

fn parse_token(tok: &str, field: &'static str, position: usize) -> Result<f64, PipelineError> {
    let tok = tok.trim();
    let value = tok
        .parse::<f64>()
        .map_err(|_| PipelineError::not_a_number(field, position, tok))?;
    // "nan" and "inf" parse fine but would break ordering and the minimum search.
    if !value.is_finite() {
        return Err(PipelineError::not_finite(field, position, tok));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(angles: &str, reflectances: &str) -> RawInput {
        RawInput {
            angle_least_count: "0.5".into(),
            reflectance_least_count: "0.01".into(),
            angles: angles.into(),
            reflectances: reflectances.into(),
        }
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        let v = parse_comma_floats(" 10, 20.5 ,30 ", "angles").unwrap();
        assert_eq!(v, vec![10.0, 20.5, 30.0]);
    }

    #[test]
    fn valid_input_produces_sequences_and_least_counts() {
        let input = validate(&raw("10,20,30", "3,2,1")).unwrap();
        assert_eq!(input.angles, vec![10.0, 20.0, 30.0]);
        assert_eq!(input.angle_labels, vec!["10", "20", "30"]);
        assert_eq!(input.reflectances, vec![3.0, 2.0, 1.0]);
        assert_eq!(input.instrument.angle_least_count_degrees, 0.5);
        assert_eq!(input.instrument.reflectance_least_count, 0.01);
    }

    #[test]
    fn angle_labels_keep_the_typed_spelling() {
        let input = validate(&raw(" 56.50, 1e1 ,60", "0.1,0.2,0.3")).unwrap();
        assert_eq!(input.angles, vec![56.5, 10.0, 60.0]);
        assert_eq!(input.angle_labels, vec!["56.50", "1e1", "60"]);
    }

    #[test]
    fn non_numeric_token_is_a_parse_error() {
        let err = validate(&raw("12, abc, 30", "1,2,3")).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Parse {
                field: "angles",
                position: 2,
                token: "abc".into(),
                reason: "number",
            }
        );
        assert_eq!(err.to_string(), "angles[2]: 'abc' is not a number");
    }

    #[test]
    fn unequal_lengths_report_both_counts() {
        let err = validate(&raw("10,20,30", "1,2")).unwrap_err();
        assert_eq!(
            err,
            PipelineError::LengthMismatch {
                angles: 3,
                reflectances: 2
            }
        );
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "{msg}");
    }

    #[test]
    fn parse_error_wins_over_length_mismatch() {
        let err = validate(&raw("10,20,30", "1,x")).unwrap_err();
        assert!(matches!(err, PipelineError::Parse { field: "reflectances", .. }));
    }

    #[test]
    fn empty_line_and_empty_token_are_rejected() {
        assert!(matches!(
            parse_comma_floats("", "angles"),
            Err(PipelineError::Parse { position: 1, .. })
        ));
        assert!(matches!(
            parse_comma_floats("10,,20", "angles"),
            Err(PipelineError::Parse { position: 2, .. })
        ));
    }

    #[test]
    fn non_finite_tokens_are_rejected() {
        let err = parse_comma_floats("10, NaN", "angles").unwrap_err();
        assert_eq!(err, PipelineError::not_finite("angles", 2, "NaN"));
        assert!(parse_comma_floats("inf", "angles").is_err());
    }

    #[test]
    fn least_count_checks() {
        assert_eq!(parse_least_count(" 0.25 ", "angle least count"), Ok(0.25));
        assert_eq!(parse_least_count("0", "angle least count"), Ok(0.0));
        assert!(matches!(
            parse_least_count("-1", "angle least count"),
            Err(PipelineError::InvalidLeastCount { value, .. }) if value == -1.0
        ));
        assert!(parse_least_count("half a degree", "angle least count").is_err());
    }

    #[test]
    fn bad_least_count_stops_before_sequences() {
        let mut input = raw("not even looked at", "1");
        input.reflectance_least_count = "?".into();
        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Parse { field: "reflectance least count", .. }
        ));
    }
}
