use crate::errors::MatchError;

/// Linear experience ramp that saturates at the requirement.
///
/// `required_years == 0` means no requirement and always scores 1.0. Being
/// far more experienced than required is not penalized.
pub fn score_experience(candidate_years: i64, required_years: i64) -> Result<f64, MatchError> {
    if candidate_years < 0 || required_years < 0 {
        return Err(MatchError::InvalidInput(format!(
            "experience years must be non-negative, got candidate={candidate_years} required={required_years}"
        )));
    }
    if required_years == 0 {
        return Ok(1.0);
    }
    Ok((candidate_years as f64 / required_years as f64).min(1.0))
}

/// Infallible variant for already-validated profile and posting values.
pub(crate) fn score_experience_years(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 {
        return 1.0;
    }
    (f64::from(candidate_years) / f64::from(required_years)).min(1.0)
}
