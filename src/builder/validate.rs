//! Row validation: required fields and category/source compatibility.
//!
//! Violations are collected across all rows and reported as a batch; the
//! caller decides whether to proceed. Nothing is written while any issue
//! is outstanding.

use std::fmt;

use crate::model::{Category, Column, PartRow};

/// One validation problem on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Required columns are blank.
    MissingFields {
        part_no: String,
        fields: Vec<Column>,
    },
    /// Category paired with an incompatible source code.
    CategoryRule {
        part_no: String,
        category: Category,
        source: Option<String>,
    },
}

impl ValidationIssue {
    /// The part number of the offending row (may be blank).
    #[must_use]
    pub fn part_no(&self) -> &str {
        match self {
            ValidationIssue::MissingFields { part_no, .. }
            | ValidationIssue::CategoryRule { part_no, .. } => part_no,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingFields { part_no, fields } => {
                let names: Vec<&str> = fields.iter().map(|c| c.name()).collect();
                write!(f, "part {part_no:?}: missing {}", names.join(", "))
            }
            ValidationIssue::CategoryRule {
                part_no,
                category: Category::Exclude,
                source,
            } => write!(
                f,
                "part {part_no:?}: Exclude must have Source of Purchase to Stock (P), got {:?}",
                source.as_deref().unwrap_or("")
            ),
            ValidationIssue::CategoryRule {
                part_no, source, ..
            } => write!(
                f,
                "part {part_no:?}: Phantom must have Source of Manufactured to Stock (M) \
                 or Manufactured to Job (F), got {:?}",
                source.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Check one row's category/source compatibility.
///
/// Phantom ("P") requires source M or F; Exclude ("X") requires source P.
/// Other category values, including codes outside the dropdown table,
/// impose no constraint.
#[must_use]
pub fn category_source_issue(row: &PartRow) -> Option<ValidationIssue> {
    let category = Category::from_code(row.category.as_deref().unwrap_or(""))?;
    let source = row.source.as_deref();
    let violated = match category {
        Category::Phantom => !matches!(source, Some("M") | Some("F")),
        Category::Exclude => source != Some("P"),
        _ => false,
    };
    violated.then(|| ValidationIssue::CategoryRule {
        part_no: row.part_no_or_blank().to_string(),
        category,
        source: row.source.clone(),
    })
}

/// Validate every row, collecting all violations rather than stopping at
/// the first. A row missing required fields is not additionally checked
/// against the category rule.
#[must_use]
pub fn validate_rows(rows: &[PartRow]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for row in rows {
        let missing = row.missing_required();
        if missing.is_empty() {
            if let Some(issue) = category_source_issue(row) {
                issues.push(issue);
            }
        } else {
            issues.push(ValidationIssue::MissingFields {
                part_no: row.part_no_or_blank().to_string(),
                fields: missing,
            });
        }
    }
    issues
}
