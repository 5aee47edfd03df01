//! Fuzzy name correction against a reference set

use strsim::normalized_levenshtein;

/// Default similarity a candidate must reach to replace the original
const DEFAULT_CUTOFF: f64 = 0.7;

/// Corrects free-text values against a set of known-good values
///
/// Returns the closest reference value whose normalized similarity is at or
/// above the cutoff, otherwise the original value unchanged.
#[derive(Debug, Clone)]
pub struct NameCorrector {
    valid: Vec<String>,
    cutoff: f64,
}

impl NameCorrector {
    pub fn new<I, S>(valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameCorrector {
            valid: valid.into_iter().map(Into::into).collect(),
            cutoff: DEFAULT_CUTOFF,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Correct a single value; empty input comes back unchanged
    pub fn correct(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return raw.to_string();
        }

        let mut best: Option<(f64, &str)> = None;
        for candidate in &self.valid {
            let score = normalized_levenshtein(trimmed, candidate);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, candidate));
            }
        }

        match best {
            Some((score, candidate)) if score >= self.cutoff => candidate.to_string(),
            _ => raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> NameCorrector {
        NameCorrector::new(["CHICAGO", "EVANSTON", "CICERO"])
    }

    #[test]
    fn test_close_match_is_corrected() {
        assert_eq!(cities().correct("CHICGO"), "CHICAGO");
        assert_eq!(cities().correct("EVANSTUN"), "EVANSTON");
    }

    #[test]
    fn test_exact_match_stays() {
        assert_eq!(cities().correct("CICERO"), "CICERO");
    }

    #[test]
    fn test_below_cutoff_keeps_original() {
        assert_eq!(cities().correct("SPRINGFIELD"), "SPRINGFIELD");
        assert_eq!(cities().correct("XX"), "XX");
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(cities().correct(""), "");
        assert_eq!(cities().correct("  "), "  ");
    }

    #[test]
    fn test_cutoff_is_configurable() {
        let lenient = cities().with_cutoff(0.3);
        assert_eq!(lenient.correct("CHGO"), "CHICAGO");
    }
}
