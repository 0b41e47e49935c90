//! Validation of `CRUDFORGE_*` override values
//!
//! A bad override never aborts a run: the previous value is kept and a
//! warning, with a typo suggestion when one is close enough, goes to the log.

use std::fmt;

use tracing::warn;

/// Largest edit distance still offered as a "did you mean" suggestion
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// An override value that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnvValue {
    pub var: String,
    pub value: String,
    pub expected: String,
    pub suggestion: Option<String>,
}

impl fmt::Display for InvalidEnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value '{}'", self.var, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        write!(f, ", expected {}", self.expected)
    }
}

/// Parser for one environment variable with a known set of spellings
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    accepted: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, accepted: &'a [&'a str]) -> Self {
        Self { var_name, accepted }
    }

    /// Parse `value`, describing the failure when `parser` rejects it
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, InvalidEnvValue>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| InvalidEnvValue {
            var: self.var_name.to_string(),
            value: value.to_string(),
            expected: self.accepted.join(", "),
            suggestion: closest(&value.to_lowercase(), self.accepted, MAX_SUGGESTION_DISTANCE)
                .map(str::to_string),
        })
    }

    /// Parse `value`, keeping `fallback` (and logging why) when it is invalid
    pub fn parse_or<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse(value, parser).unwrap_or_else(|invalid| {
            warn!(var = %invalid.var, "{invalid}; keeping the configured value");
            fallback
        })
    }
}

/// Candidate nearest to `input`, if within `max_distance` edits and not equal
pub fn closest<'c>(input: &str, candidates: &[&'c str], max_distance: usize) -> Option<&'c str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .filter(|&(_, dist)| dist > 0 && dist <= max_distance)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate)
}

/// Edit distance between two strings, counted in chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
