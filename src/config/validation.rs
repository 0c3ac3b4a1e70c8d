//! Config validation: unknown-key detection with edit-distance suggestions
//! and run-range checks.
//!
//! Unknown keys are found by walking the raw TOML tree and comparing each
//! dotted path against the paths of the default config. They only warn.
//! Range checks split into errors (the run cannot be generated) and
//! warnings (legal but probably not intended).

use std::collections::BTreeSet;

use super::SimConfig;

/// Maximum edit distance for a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `SimConfig`.
///
/// Taken from the serialized default config, so new fields are picked up
/// automatically. Optional fields that serialize to nothing when unset are
/// added by hand.
pub fn known_config_keys() -> BTreeSet<String> {
    let mut keys: BTreeSet<String> = toml::Value::try_from(SimConfig::default())
        .map(|value| walk_toml_keys(&value, "").into_iter().collect())
        .unwrap_or_default();
    keys.insert("run.start".to_string());
    keys
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collects the dotted key paths of a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };

    let mut keys = Vec::with_capacity(table.len());
    for (k, v) in table {
        let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
        if v.is_table() {
            let nested = walk_toml_keys(v, &path);
            keys.push(path);
            keys.extend(nested);
        } else {
            keys.push(path);
        }
    }
    keys
}

// ============================================================================
// Edit Distance
// ============================================================================

/// Levenshtein distance over chars, single-row formulation.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Closest known key within `MAX_SUGGESTION_DISTANCE` edits, if any.
///
/// Ties resolve to the lexicographically first key.
pub fn suggest_correction(unknown: &str, known: &BTreeSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (edit_distance(unknown, k), k))
        .filter(|(d, _)| *d <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(d, _)| *d)
        .map(|(_, k)| k.clone())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: syntax errors are left to the serde pass.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key))
        .map(|key| ValidationWarning {
            message: format!("Unknown config key '{key}'"),
            suggestion: suggest_correction(&key, &known),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate run ranges on a parsed `SimConfig`.
///
/// Returns (errors, warnings): errors must stop the run before any sample
/// is generated; warnings are suspicious but not fatal.
pub fn validate_ranges(config: &SimConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // [run]
    let run = &config.run;
    if run.samples < 2 {
        errors.push(format!(
            "run.samples = {} is too short: a run needs at least 2 samples",
            run.samples
        ));
    }
    if !run.interval_secs.is_finite() || run.interval_secs <= 0.0 {
        errors.push(format!(
            "run.interval_secs = {} must be a positive, finite number of seconds",
            run.interval_secs
        ));
    }

    // [cycle]
    let cycle = &config.cycle;
    if cycle.length == 0 {
        errors.push("cycle.length must be at least 1 sample".to_string());
    }
    if !(0.0..1.0).contains(&cycle.idle_fraction) {
        errors.push(format!(
            "cycle.idle_fraction = {} is outside [0, 1)",
            cycle.idle_fraction
        ));
    }
    if cycle.length > 0 && run.samples >= 2 && cycle.length > run.samples {
        warnings.push(ValidationWarning {
            field: "cycle.length".to_string(),
            message: format!(
                "cycle.length = {} exceeds run.samples = {}: the run never completes a cycle",
                cycle.length, run.samples
            ),
            suggestion: None,
        });
    }

    // [degradation]
    let d = &config.degradation;
    let thresholds = [
        ("degradation.minor_wear_at", d.minor_wear_at),
        ("degradation.major_wear_at", d.major_wear_at),
        ("degradation.crack_at", d.crack_at),
    ];
    for (name, value) in thresholds {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            errors.push(format!("{name} = {value} must lie strictly inside (0, 1)"));
        }
    }
    if !(d.minor_wear_at < d.major_wear_at && d.major_wear_at < d.crack_at) {
        errors.push(format!(
            "degradation thresholds must be strictly increasing (got minor={}, major={}, crack={})",
            d.minor_wear_at, d.major_wear_at, d.crack_at
        ));
    }

    // [blade]
    if config.blade.types.is_empty() {
        errors.push("blade.types must name at least one blade type".to_string());
    }

    // [events]
    for (name, process) in [
        ("events.bearing", &config.events.bearing),
        ("events.electrical", &config.events.electrical),
    ] {
        if !process.period.is_finite() || process.period <= 0.0 {
            errors.push(format!("{name}.period = {} must be positive", process.period));
        }
        if !process.noise_std.is_finite() || process.noise_std < 0.0 {
            errors.push(format!("{name}.noise_std = {} must be >= 0", process.noise_std));
        }
        if !process.phase.is_finite() || !process.threshold.is_finite() {
            errors.push(format!("{name}: phase and threshold must be finite"));
        }
        // sin() never exceeds 1, so without noise a threshold >= 1 can never fire
        if process.noise_std == 0.0 && process.threshold >= 1.0 {
            warnings.push(ValidationWarning {
                field: format!("{name}.threshold"),
                message: format!(
                    "{name}.threshold = {} with zero noise: the event never fires",
                    process.threshold
                ),
                suggestion: None,
            });
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("seed", "seed"), 0);
    }

    #[test]
    fn test_known_keys_cover_nested_sections() {
        let keys = known_config_keys();
        for key in [
            "run",
            "run.samples",
            "run.start",
            "cycle.idle_fraction",
            "degradation.crack_at",
            "blade.types",
            "events.bearing.period",
            "events.electrical.threshold",
            "output.format",
        ] {
            assert!(keys.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn test_default_config_has_no_range_findings() {
        let (errors, warnings) = validate_ranges(&SimConfig::default());
        assert!(errors.is_empty(), "{errors:?}");
        assert!(warnings.is_empty(), "{warnings:?}");
    }
}
