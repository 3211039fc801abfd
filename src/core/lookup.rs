//! Static lookup tables for the education scorer
//!
//! Both tables are ordered `(key, label, points)` slices so a new level or GPA
//! bucket is a one-line addition and the scorer never changes.

/// Points for a `highest_level` label that is not in the table
pub const UNKNOWN_LEVEL_SCORE: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    JurisDoctor,
    Doctorate,
    PhD,
}

const EDUCATION_LEVELS: &[(EducationLevel, &str, f64)] = &[
    (EducationLevel::HighSchool, "High School Diploma", 20.0),
    (EducationLevel::Associate, "Associate Degree", 30.0),
    (EducationLevel::Bachelor, "Bachelor's Degree", 50.0),
    (EducationLevel::Master, "Master's Degree", 70.0),
    (EducationLevel::JurisDoctor, "Juris Doctor (J.D)", 75.0),
    (EducationLevel::Doctorate, "Doctorate", 80.0),
    (EducationLevel::PhD, "PhD", 85.0),
];

impl EducationLevel {
    /// Look up a level by its dataset label (surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        EDUCATION_LEVELS
            .iter()
            .find(|(_, known, _)| *known == label)
            .map(|(level, _, _)| *level)
    }

    pub fn label(&self) -> &'static str {
        self.entry().1
    }

    pub fn score(&self) -> f64 {
        self.entry().2
    }

    fn entry(&self) -> &'static (EducationLevel, &'static str, f64) {
        EDUCATION_LEVELS
            .iter()
            .find(|(level, _, _)| level == self)
            .unwrap_or(&EDUCATION_LEVELS[0])
    }
}

/// Level points for a raw `highest_level` string
pub fn education_level_score(label: &str) -> f64 {
    EducationLevel::from_label(label)
        .map(|level| level.score())
        .unwrap_or(UNKNOWN_LEVEL_SCORE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpaBucket {
    Perfect,
    High,
    Mid,
    Low,
}

/// `(bucket, label, lower bound, points)`, highest bucket first
const GPA_BUCKETS: &[(GpaBucket, &str, f64, f64)] = &[
    (GpaBucket::Perfect, "GPA 4.0", 4.0, 20.0),
    (GpaBucket::High, "GPA 3.5-3.9", 3.5, 15.0),
    (GpaBucket::Mid, "GPA 3.0-3.4", 3.0, 10.0),
    (GpaBucket::Low, "GPA 2.5-2.9", 2.5, 5.0),
];

impl GpaBucket {
    /// Classify a GPA string.
    ///
    /// Dataset bucket labels match directly. Anything else is bucketed by the
    /// first number it contains, so `"3.7"` and `"GPA: 3.7/4"` both land in
    /// `High`. Strings without a number, or below 2.5, have no bucket.
    pub fn classify(gpa: &str) -> Option<Self> {
        let gpa = gpa.trim();
        if let Some((bucket, ..)) = GPA_BUCKETS.iter().find(|(_, label, ..)| *label == gpa) {
            return Some(*bucket);
        }

        let value = leading_number(gpa)?;
        GPA_BUCKETS
            .iter()
            .find(|(_, _, lower, _)| value >= *lower)
            .map(|(bucket, ..)| *bucket)
    }

    pub fn label(&self) -> &'static str {
        self.entry().1
    }

    pub fn score(&self) -> f64 {
        self.entry().3
    }

    fn entry(&self) -> &'static (GpaBucket, &'static str, f64, f64) {
        GPA_BUCKETS
            .iter()
            .find(|(bucket, ..)| bucket == self)
            .unwrap_or(&GPA_BUCKETS[0])
    }
}

/// GPA points for a raw GPA string, 0 when it has no bucket
pub fn gpa_score(gpa: &str) -> f64 {
    GpaBucket::classify(gpa).map(|b| b.score()).unwrap_or(0.0)
}

/// First decimal number in `text`, e.g. `3.5` from `"GPA 3.5-3.9"`
fn leading_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let mut seen_dot = false;
    let end = rest
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    rest[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_level_table() {
        assert_eq!(education_level_score("High School Diploma"), 20.0);
        assert_eq!(education_level_score("Associate Degree"), 30.0);
        assert_eq!(education_level_score("Bachelor's Degree"), 50.0);
        assert_eq!(education_level_score("Master's Degree"), 70.0);
        assert_eq!(education_level_score("Juris Doctor (J.D)"), 75.0);
        assert_eq!(education_level_score("Doctorate"), 80.0);
        assert_eq!(education_level_score("PhD"), 85.0);
    }

    #[test]
    fn test_unknown_level() {
        assert_eq!(education_level_score("Bootcamp"), UNKNOWN_LEVEL_SCORE);
        assert_eq!(education_level_score(""), UNKNOWN_LEVEL_SCORE);
        assert_eq!(education_level_score("  PhD "), 85.0);
    }

    #[test]
    fn test_level_label_roundtrip() {
        for (level, label, _) in EDUCATION_LEVELS {
            assert_eq!(EducationLevel::from_label(label), Some(*level));
            assert_eq!(level.label(), *label);
        }
    }

    #[test]
    fn test_gpa_labels() {
        assert_eq!(gpa_score("GPA 4.0"), 20.0);
        assert_eq!(gpa_score("GPA 3.5-3.9"), 15.0);
        assert_eq!(gpa_score("GPA 3.0-3.4"), 10.0);
        assert_eq!(gpa_score("GPA 2.5-2.9"), 5.0);
    }

    #[test]
    fn test_gpa_numeric_values() {
        assert_eq!(GpaBucket::classify("3.7"), Some(GpaBucket::High));
        assert_eq!(GpaBucket::classify("GPA: 3.2/4"), Some(GpaBucket::Mid));
        assert_eq!(GpaBucket::classify("4"), Some(GpaBucket::Perfect));
        assert_eq!(GpaBucket::classify("2.0"), None);
    }

    #[test]
    fn test_gpa_without_number() {
        assert_eq!(GpaBucket::classify("excellent"), None);
        assert_eq!(gpa_score(""), 0.0);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("GPA 3.5-3.9"), Some(3.5));
        assert_eq!(leading_number("3."), Some(3.0));
        assert_eq!(leading_number("none"), None);
    }
}
