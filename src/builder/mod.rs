//! Row assembly: turns a plain-data BOM specification tree into the flat,
//! ordered row sequence ready for writing.
//!
//! The specification tree is fully formed before building starts — there is
//! no interactive collection here. Output order is fixed: top-level row,
//! then Level 1 in entry order, then Level 2 in group-then-entry order,
//! then Level 3 the same way.

mod validate;

pub use validate::{category_source_issue, validate_rows, ValidationIssue};

use serde::{Deserialize, Serialize};

use crate::error::{BomError, Result};
use crate::generate::{FieldSet, RandomRowGenerator};
use crate::model::{is_manufactured, Column, PartRow, SEQUENCE_INCREMENTS};

/// Specification for one randomly generated group of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomGroup {
    /// Number of rows to generate.
    pub count: usize,
    /// Columns to fill with random data; empty means all.
    #[serde(default)]
    pub fields: FieldSet,
    /// How many leading rows get Source "F" (Manufactured to Job); the rest
    /// get "J".
    #[serde(default)]
    pub manufactured_count: usize,
    /// Use 20-50 character long-form part numbers.
    #[serde(default)]
    pub long_part_numbers: bool,
}

/// Rows for one level or group: listed manually or generated randomly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupRows {
    Manual(Vec<PartRow>),
    Random(RandomGroup),
}

/// A Level 2 or Level 3 group bound to a specific parent part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Part number of the parent row one level up. Must be Manufactured.
    pub parent: String,
    pub rows: GroupRows,
}

fn default_increment() -> u32 {
    100
}

/// Complete input for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomSpec {
    /// The top-level (Level 0) row. Its part number is required.
    pub parent: PartRow,
    /// Level 1 components under the top-level part.
    pub level1: GroupRows,
    /// Optionally generate this group under every Manufactured Level 1 part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_parent_level2: Option<RandomGroup>,
    /// Level 2 groups, each bound to a Manufactured Level 1 parent.
    #[serde(default)]
    pub level2: Vec<GroupSpec>,
    /// Optionally generate this group under every Manufactured Level 2 part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_parent_level3: Option<RandomGroup>,
    /// Level 3 groups, each bound to a Manufactured Level 2 parent.
    #[serde(default)]
    pub level3: Vec<GroupSpec>,
    /// Per-level sequence spacing; one of 1, 10, 100, 1000, 10000.
    #[serde(default = "default_increment")]
    pub sequence_increment: u32,
    /// Overwrite every child row's Revision with the top-level row's value.
    #[serde(default)]
    pub propagate_revision: bool,
    /// Overwrite every child row's Location with the top-level row's value.
    #[serde(default)]
    pub propagate_location: bool,
}

impl Default for BomSpec {
    fn default() -> Self {
        Self {
            parent: PartRow::default(),
            level1: GroupRows::Manual(Vec::new()),
            per_parent_level2: None,
            level2: Vec::new(),
            per_parent_level3: None,
            level3: Vec::new(),
            sequence_increment: default_increment(),
            propagate_revision: false,
            propagate_location: false,
        }
    }
}

/// Result of a build: the ordered rows plus any validation issues.
///
/// Rows are returned even when issues exist so the caller can inspect
/// them, but output must only be written once the issue list is empty.
#[derive(Debug)]
pub struct BuildOutcome {
    pub rows: Vec<PartRow>,
    pub issues: Vec<ValidationIssue>,
}

/// Assembles row sequences from a [`BomSpec`].
#[derive(Debug, Default)]
pub struct BomBuilder {
    generator: RandomRowGenerator,
}

impl BomBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: RandomRowGenerator::new(),
        }
    }

    /// Builder with a deterministic generator, for tests.
    #[must_use]
    pub fn with_generator(generator: RandomRowGenerator) -> Self {
        Self { generator }
    }

    /// Build the flat row sequence for `spec`.
    ///
    /// Hard errors (bad increment, gating, allocator exhaustion) abort the
    /// build; per-row validation problems are collected into the outcome.
    pub fn build(&mut self, spec: &BomSpec) -> Result<BuildOutcome> {
        if !SEQUENCE_INCREMENTS.contains(&spec.sequence_increment) {
            return Err(BomError::InvalidIncrement(spec.sequence_increment));
        }
        let parent_part = spec
            .parent
            .part_no
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(BomError::ParentPartRequired)?
            .to_string();

        self.generator.reset_counter();

        let mut level1 = self.materialize(&spec.level1, &parent_part, 1, spec)?;

        let eligible_l1 = manufactured_part_nos(&level1);
        let wants_level2 = spec.per_parent_level2.is_some() || !spec.level2.is_empty();
        if wants_level2 && eligible_l1.is_empty() {
            return Err(BomError::GatingBlocked { level: 2 });
        }
        let mut level2 = Vec::new();
        if let Some(group) = &spec.per_parent_level2 {
            for parent in &eligible_l1 {
                level2.extend(self.random_rows(group, parent, 2, spec)?);
            }
        }
        for group_spec in &spec.level2 {
            if !eligible_l1.contains(&group_spec.parent) {
                return Err(BomError::IneligibleParent {
                    level: 2,
                    parent: group_spec.parent.clone(),
                });
            }
            level2.extend(self.materialize(&group_spec.rows, &group_spec.parent, 2, spec)?);
        }

        let eligible_l2 = manufactured_part_nos(&level2);
        let wants_level3 = spec.per_parent_level3.is_some() || !spec.level3.is_empty();
        if wants_level3 && eligible_l2.is_empty() {
            return Err(BomError::GatingBlocked { level: 3 });
        }
        let mut level3 = Vec::new();
        if let Some(group) = &spec.per_parent_level3 {
            for parent in &eligible_l2 {
                level3.extend(self.random_rows(group, parent, 3, spec)?);
            }
        }
        for group_spec in &spec.level3 {
            if !eligible_l2.contains(&group_spec.parent) {
                return Err(BomError::IneligibleParent {
                    level: 3,
                    parent: group_spec.parent.clone(),
                });
            }
            level3.extend(self.materialize(&group_spec.rows, &group_spec.parent, 3, spec)?);
        }

        // Final sequence numbers supersede anything provisional; each level
        // restarts at 1 * increment.
        let increment = i64::from(spec.sequence_increment);
        for level_rows in [&mut level1, &mut level2, &mut level3] {
            for (idx, row) in level_rows.iter_mut().enumerate() {
                row.sequence = Some((idx as i64 + 1) * increment);
            }
        }

        if spec.propagate_revision {
            let revision = spec.parent.revision.clone();
            for row in level1.iter_mut().chain(&mut level2).chain(&mut level3) {
                row.revision = revision.clone();
            }
        }
        if spec.propagate_location {
            let location = spec.parent.location.clone();
            for row in level1.iter_mut().chain(&mut level2).chain(&mut level3) {
                row.location = location.clone();
            }
        }

        // The top-level row carries its own part number as Parent, per the
        // import format convention; child rows that ended up referencing
        // themselves get Parent cleared instead of being rejected.
        let mut top = spec.parent.clone();
        top.level = Some(0);
        top.sequence = Some(0);
        top.parent = Some(parent_part);

        let mut rows = Vec::with_capacity(1 + level1.len() + level2.len() + level3.len());
        rows.push(top);
        for mut row in level1.into_iter().chain(level2).chain(level3) {
            if row.is_self_parent() {
                row.parent = Some(String::new());
            }
            rows.push(row);
        }

        let issues = validate_rows(&rows);
        Ok(BuildOutcome { rows, issues })
    }

    fn materialize(
        &mut self,
        rows: &GroupRows,
        parent: &str,
        level: u8,
        spec: &BomSpec,
    ) -> Result<Vec<PartRow>> {
        match rows {
            GroupRows::Manual(manual) => Ok(manual
                .iter()
                .map(|r| {
                    let mut row = r.clone();
                    row.level = Some(level);
                    row.parent = Some(parent.to_string());
                    row
                })
                .collect()),
            GroupRows::Random(group) => self.random_rows(group, parent, level, spec),
        }
    }

    fn random_rows(
        &mut self,
        group: &RandomGroup,
        parent: &str,
        level: u8,
        spec: &BomSpec,
    ) -> Result<Vec<PartRow>> {
        // Structural columns are always populated for generated rows.
        let mut fields = group.fields.clone();
        if !fields.is_empty() {
            fields.extend([
                Column::PartNo,
                Column::Quantity,
                Column::Parent,
                Column::Sequence,
                Column::Level,
            ]);
        }
        let mut rows = self.generator.generate_batch(
            parent,
            group.count,
            &fields,
            level,
            group.long_part_numbers,
        )?;
        apply_group_defaults(&mut rows, group.manufactured_count, spec);
        Ok(rows)
    }
}

/// Group defaults for randomly generated rows: UM "EA", Normal category,
/// the first `manufactured_count` rows Manufactured to Job ("F", product
/// line "CP"), the rest Purchase to Job ("J", product line "CM"), with
/// Revision/Location seeded from the top-level row when propagation is on.
fn apply_group_defaults(rows: &mut [PartRow], manufactured_count: usize, spec: &BomSpec) {
    for (idx, row) in rows.iter_mut().enumerate() {
        row.um = Some("EA".to_string());
        row.location = if spec.propagate_location {
            spec.parent.location.clone()
        } else {
            None
        };
        row.revision = if spec.propagate_revision {
            spec.parent.revision.clone()
        } else {
            None
        };
        row.category = Some(String::new());
        let manufactured = idx < manufactured_count;
        row.source = Some(if manufactured { "F" } else { "J" }.to_string());
        row.productline = Some(if manufactured { "CP" } else { "CM" }.to_string());
    }
}

fn manufactured_part_nos(rows: &[PartRow]) -> Vec<String> {
    rows.iter()
        .filter(|r| is_manufactured(r.source.as_deref().unwrap_or("")))
        .filter_map(|r| r.part_no.clone())
        .filter(|p| !p.is_empty())
        .collect()
}
