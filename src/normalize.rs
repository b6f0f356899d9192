//! Pure field clean-up functions applied to individual cells before the
//! rows are grouped into import records. None of these reject data: an
//! unparseable value passes through unchanged so nothing is silently lost.

use std::fmt;

/// Result of normalising a raw progress cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// The cell was missing or empty.
    Empty,
    /// The cell parsed as a number, now expressed on the 0–100 scale.
    Percent(f64),
    /// The cell did not parse as a number and is kept verbatim.
    Raw(String),
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Empty => Ok(()),
            Progress::Percent(value) => write!(f, "{value}"),
            Progress::Raw(value) => f.write_str(value),
        }
    }
}

/// Normalises a progress cell to a percentage. Values at or below 1 are
/// treated as a 0–1 fraction and scaled by 100; larger values are assumed
/// to already be percentages. Either way the result is rounded to two
/// decimal places.
pub fn normalize_progress(value: &str) -> Progress {
    if value.is_empty() {
        return Progress::Empty;
    }
    let Ok(mut number) = value.parse::<f64>() else {
        return Progress::Raw(value.to_string());
    };
    if number <= 1.0 {
        number *= 100.0;
    }
    Progress::Percent((number * 100.0).round() / 100.0)
}

/// Splits an owner cell of the form `department: team` on the first colon.
/// Without a colon the whole trimmed value is the department and the team
/// is empty.
pub fn split_owner(owner: &str) -> (String, String) {
    match owner.split_once(':') {
        Some((department, team)) => (department.trim().to_string(), team.trim().to_string()),
        None => (owner.trim().to_string(), String::new()),
    }
}

/// Combines the baseline/stretch marker and the free-form comments into a
/// single status string, joined with `"; "` when both are present.
pub fn build_status(baseline_type: &str, comments: &str) -> String {
    let baseline_type = baseline_type.trim();
    let comments = comments.trim();
    if !baseline_type.is_empty() && !comments.is_empty() {
        format!("{baseline_type}; {comments}")
    } else if baseline_type.is_empty() {
        comments.to_string()
    } else {
        baseline_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fraction_is_scaled_to_percent() {
        assert_eq!(normalize_progress("0.5"), Progress::Percent(50.0));
        assert_eq!(normalize_progress("1"), Progress::Percent(100.0));
    }

    #[test]
    fn progress_above_one_is_only_rounded() {
        assert_eq!(normalize_progress("75"), Progress::Percent(75.0));
        assert_eq!(normalize_progress("33.3333"), Progress::Percent(33.33));
    }

    #[test]
    fn progress_keeps_unparseable_values_verbatim() {
        assert_eq!(normalize_progress("abc"), Progress::Raw("abc".to_string()));
        assert_eq!(normalize_progress("abc").to_string(), "abc");
    }

    #[test]
    fn progress_empty_cell_stays_empty() {
        assert_eq!(normalize_progress(""), Progress::Empty);
        assert_eq!(normalize_progress("").to_string(), "");
    }

    #[test]
    fn owner_splits_on_first_colon_only() {
        assert_eq!(
            split_owner("Eng: Platform"),
            ("Eng".to_string(), "Platform".to_string())
        );
        assert_eq!(
            split_owner("Eng: Platform: Infra"),
            ("Eng".to_string(), "Platform: Infra".to_string())
        );
    }

    #[test]
    fn owner_without_colon_has_no_team() {
        assert_eq!(split_owner("Eng"), ("Eng".to_string(), String::new()));
        assert_eq!(split_owner(""), (String::new(), String::new()));
    }

    #[test]
    fn status_joins_both_parts_when_present() {
        assert_eq!(build_status("Baseline", "on track"), "Baseline; on track");
    }

    #[test]
    fn status_falls_back_to_whichever_part_is_present() {
        assert_eq!(build_status("", "on track"), "on track");
        assert_eq!(build_status("Stretch", ""), "Stretch");
        assert_eq!(build_status("", ""), "");
        assert_eq!(build_status("  Stretch  ", "  "), "Stretch");
    }
}
