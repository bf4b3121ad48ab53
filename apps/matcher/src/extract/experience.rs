use once_cell::sync::Lazy;
use regex::Regex;

/// Tried in order; the first pattern with any match decides.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*(?:years?|yrs?)\s+(?:of\s+)?experience",
        r"experience[:\s]+(\d+)\s*(?:years?|yrs?)",
        r"(\d+)\s*(?:years?|yrs?)\s+(?:of\s+)?(?:professional|work)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static experience pattern"))
    .collect()
});

const SENIOR_FALLBACK_YEARS: u32 = 5;
const MID_LEVEL_FALLBACK_YEARS: u32 = 3;
const DEFAULT_YEARS: u32 = 1;

/// Coarse "at least N years" estimate from résumé text.
///
/// Highest number captured by the first matching pattern wins ("5-7 years
/// experience" gives 7). Without any explicit figure, seniority words fall
/// back to 5 (senior) or 3 (mid-level/intermediate), otherwise 1.
pub fn estimate_experience_years(text: &str) -> u32 {
    let text = text.to_lowercase();

    for pattern in EXPERIENCE_PATTERNS.iter() {
        let best = pattern
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .max();
        if let Some(years) = best {
            return years;
        }
    }

    if text.contains("senior") {
        SENIOR_FALLBACK_YEARS
    } else if text.contains("mid-level") || text.contains("intermediate") {
        MID_LEVEL_FALLBACK_YEARS
    } else {
        DEFAULT_YEARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_years_of_experience() {
        assert_eq!(estimate_experience_years("8 years of experience in backend"), 8);
        assert_eq!(estimate_experience_years("5+ Years Experience"), 5);
        assert_eq!(estimate_experience_years("3 yrs experience with Go"), 3);
    }

    #[test]
    fn test_highest_match_wins() {
        let text = "2 years experience at A. Later 6 years of experience at B.";
        assert_eq!(estimate_experience_years(text), 6);
        assert_eq!(estimate_experience_years("5-7 years experience"), 7);
    }

    #[test]
    fn test_experience_label_pattern() {
        assert_eq!(estimate_experience_years("Experience: 4 years"), 4);
    }

    #[test]
    fn test_professional_work_pattern() {
        assert_eq!(estimate_experience_years("10 years of professional software"), 10);
        assert_eq!(estimate_experience_years("2 years work history"), 2);
    }

    #[test]
    fn test_first_pattern_takes_precedence() {
        // Pattern 1 matches, so the larger "professional" figure is ignored.
        let text = "3 years experience; 9 years professional";
        assert_eq!(estimate_experience_years(text), 3);
    }

    #[test]
    fn test_seniority_fallbacks() {
        assert_eq!(estimate_experience_years("Senior Data Engineer"), 5);
        assert_eq!(estimate_experience_years("Mid-level developer"), 3);
        assert_eq!(estimate_experience_years("Intermediate analyst"), 3);
        assert_eq!(estimate_experience_years("Graduate looking for roles"), 1);
    }
}
