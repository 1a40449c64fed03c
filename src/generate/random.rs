//! Random part row generation.
//!
//! Produces synthetic rows with domain-plausible values. Only columns in
//! the caller's field set are populated; everything else stays absent and
//! comes out blank in the file. Sequence values written here are
//! provisional — the row builder reassigns them in final order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

use super::allocator::PartNumberAllocator;
use crate::error::Result;
use crate::model::{Column, PartRow};

/// Set of columns to populate during random generation. Empty means all.
pub type FieldSet = BTreeSet<Column>;

/// Stock location codes used for random rows.
pub const LOCATIONS: [&str; 6] = ["GS", "WH", "FL", "RM", "WS", "DC"];

/// Product line codes used for random rows.
pub const PRODUCTLINES: [&str; 5] = ["JM", "FG", "RM", "CM", "CP"];

/// Source codes drawn for random rows. Intentionally wider than the
/// dropdown table; the import format accepts free codes.
pub const RANDOM_SOURCES: [&str; 4] = ["M", "P", "B", "C"];

/// Sort codes used for random rows.
pub const SORT_CODES: [&str; 9] = [
    "COMPBX", "HARDWARE", "LEVEL-1", "LEVEL-2", "ELECTRIC", "ELWR", "SHTCRS", "BARSS", "SHTALUM",
];

const UNITS: [&str; 10] = ["EA", "FT", "M", "KG", "L", "P", "J", "F", "SF", "SI"];

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates random part rows against a per-run allocator.
#[derive(Debug)]
pub struct RandomRowGenerator {
    allocator: PartNumberAllocator,
    rng: StdRng,
}

impl RandomRowGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: PartNumberAllocator::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            allocator: PartNumberAllocator::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart part numbering at A001. Call once per generation run.
    pub fn reset_counter(&mut self) {
        self.allocator.reset();
    }

    /// Generate one random child row under `parent_part_no`.
    ///
    /// The allocated part number is guaranteed different from the parent.
    /// `sequence_index` of zero or less still yields sequence 100.
    pub fn generate_row(
        &mut self,
        parent_part_no: &str,
        sequence_index: i64,
        level: u8,
        fields: &FieldSet,
        long_part_numbers: bool,
    ) -> Result<PartRow> {
        let part_no =
            self.allocator
                .next_for_parent(parent_part_no, long_part_numbers, &mut self.rng)?;
        let populate = |col: Column| fields.is_empty() || fields.contains(&col);
        let rng = &mut self.rng;

        let mut row = PartRow::new();
        if populate(Column::PartNo) {
            row.part_no = Some(part_no.clone());
        }
        if populate(Column::Revision) {
            row.revision = Some(format!("R{:02}", rng.gen_range(1..=5)));
        }
        if populate(Column::Description) {
            row.description = Some(format!("{part_no} Desc"));
        }
        if populate(Column::AltDescription1) {
            row.alt_description1 = Some(format!("ALT-DESC-{}", rng.gen_range(1..=3)));
        }
        if populate(Column::AltDescription2) {
            row.alt_description2 = Some(format!("ALT-DESC-{}", rng.gen_range(1..=3)));
        }
        if populate(Column::DescExtra) {
            row.desc_extra = Some(pick(rng, &["EXTRA", "OPTION", "VARIANT"]).to_string());
        }
        if populate(Column::Quantity) {
            row.quantity = Some(f64::from(rng.gen_range(1..=10u32)));
        }
        if populate(Column::IssueUM) {
            row.issue_um = Some("EA".to_string());
        }
        if populate(Column::ConsumptionConv) {
            row.consumption_conv = Some(round2(rng.gen_range(0.25..=2.0)));
        }
        if populate(Column::UM) {
            row.um = Some(pick(rng, &UNITS).to_string());
        }
        if populate(Column::Cost) {
            row.cost = Some(round2(rng.gen_range(0.5..=250.0)));
        }
        if populate(Column::Source) {
            row.source = Some(pick(rng, &RANDOM_SOURCES).to_string());
        }
        if populate(Column::Drawing) {
            row.drawing = Some(format!("DRAW{}", rng.gen_range(1..=99)));
        }
        if populate(Column::Leadtime) {
            row.leadtime = Some(rng.gen_range(1..=21));
        }
        if populate(Column::Level) {
            row.level = Some(level);
        }
        if populate(Column::Location) {
            row.location = Some(pick(rng, &LOCATIONS).to_string());
        }
        if populate(Column::Memo1) {
            row.memo1 = Some(format!("MEM{}", rng.gen_range(1..=3)));
        }
        if populate(Column::Memo2) {
            row.memo2 = Some(format!("MEM{}", rng.gen_range(1..=3)));
        }
        if populate(Column::Parent) {
            row.parent = Some(parent_part_no.to_string());
        }
        if populate(Column::Productline) {
            row.productline = Some(pick(rng, &PRODUCTLINES).to_string());
        }
        if populate(Column::Sequence) {
            row.sequence = Some(sequence_index.max(1) * 100);
        }
        if populate(Column::SortCode) {
            row.sort_code = Some(pick(rng, &SORT_CODES).to_string());
        }
        if populate(Column::Tag) {
            row.tag = Some(pick(rng, &["TG", "TAG1", "TAG2"]).to_string());
        }
        if populate(Column::Category) {
            row.category = Some(if rng.gen_bool(0.8) {
                "Y".to_string()
            } else {
                String::new()
            });
        }
        if populate(Column::BomComplete) {
            row.bom_complete = Some(String::new());
        }
        if populate(Column::BomComments) {
            row.bom_comments = Some(format!("BOMCOMMENTS-{}", rng.gen_range(1..=5)));
        }
        if populate(Column::Router) {
            row.router = Some(String::new());
        }

        Ok(row)
    }

    /// Generate `count` random child rows, sequence indices 1..=count.
    pub fn generate_batch(
        &mut self,
        parent_part_no: &str,
        count: usize,
        fields: &FieldSet,
        level: u8,
        long_part_numbers: bool,
    ) -> Result<Vec<PartRow>> {
        (1..=count)
            .map(|i| self.generate_row(parent_part_no, i as i64, level, fields, long_part_numbers))
            .collect()
    }
}

impl Default for RandomRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}
