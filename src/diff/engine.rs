//! BOM comparison engine.
//!
//! Partitions two BOMs' items into added/removed/modified/unchanged sets
//! keyed on part number. Order is deterministic: removed, modified, and
//! unchanged follow the old BOM's item order; added follows the new BOM's.

use indexmap::IndexMap;

use super::result::{BomComparison, ModifiedPair};
use crate::model::{Bom, BomItem};

/// Compare two BOMs into a [`BomComparison`] snapshot.
pub fn compare(old: &Bom, new: &Bom) -> BomComparison {
    let old_items = index_by_part_number(old);
    let new_items = index_by_part_number(new);

    let mut removed = Vec::new();
    let mut modified = Vec::new();
    let mut unchanged = Vec::new();
    for (part_number, old_item) in &old_items {
        match new_items.get(part_number) {
            None => removed.push((*old_item).clone()),
            Some(new_item) if is_modified(old_item, new_item) => modified.push(ModifiedPair {
                old: (*old_item).clone(),
                new: (*new_item).clone(),
            }),
            Some(_) => unchanged.push((*old_item).clone()),
        }
    }

    let added = new_items
        .iter()
        .filter(|(part_number, _)| !old_items.contains_key(*part_number))
        .map(|(_, item)| (*item).clone())
        .collect();

    BomComparison {
        old_name: old.name.clone(),
        new_name: new.name.clone(),
        added,
        removed,
        modified,
        unchanged,
    }
}

/// Part-number lookup preserving first-occurrence order. Duplicate part
/// numbers within one BOM resolve last-write-wins and are not deduplicated
/// further.
fn index_by_part_number(bom: &Bom) -> IndexMap<&str, &BomItem> {
    let mut map = IndexMap::with_capacity(bom.items.len());
    for item in &bom.items {
        map.insert(item.part_number.as_str(), item);
    }
    map
}

/// Any one difference in quantity, description, or unit qualifies.
/// Quantities compare by exact numeric equality — no tolerance.
fn is_modified(old: &BomItem, new: &BomItem) -> bool {
    old.quantity != new.quantity || old.description != new.description || old.unit != new.unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bom(name: &str, items: Vec<BomItem>) -> Bom {
        let mut bom = Bom::new(
            name,
            "1",
            NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"),
        );
        for item in items {
            bom.add_item(item);
        }
        bom
    }

    #[test]
    fn disjoint_partitions() {
        let old = bom(
            "old",
            vec![BomItem::new("P1", "Bracket", 2.0), BomItem::new("P2", "Screw", 5.0)],
        );
        let new = bom(
            "new",
            vec![BomItem::new("P2", "Screw", 5.0), BomItem::new("P3", "Washer", 1.0)],
        );

        let cmp = compare(&old, &new);
        assert_eq!(
            cmp.removed.iter().map(|i| i.part_number.as_str()).collect::<Vec<_>>(),
            vec!["P1"]
        );
        assert_eq!(
            cmp.added.iter().map(|i| i.part_number.as_str()).collect::<Vec<_>>(),
            vec!["P3"]
        );
        assert_eq!(
            cmp.unchanged.iter().map(|i| i.part_number.as_str()).collect::<Vec<_>>(),
            vec!["P2"]
        );
        assert!(cmp.modified.is_empty());
    }

    #[test]
    fn duplicate_part_numbers_resolve_last_write_wins() {
        let old = bom(
            "old",
            vec![
                BomItem::new("P1", "First", 1.0),
                BomItem::new("P1", "Second", 9.0),
            ],
        );
        let new = bom("new", vec![BomItem::new("P1", "Second", 9.0)]);

        let cmp = compare(&old, &new);
        assert!(cmp.modified.is_empty());
        assert_eq!(cmp.unchanged.len(), 1);
        assert_eq!(cmp.unchanged[0].description, "Second");
    }

    #[test]
    fn unit_difference_is_a_modification() {
        let old = bom("old", vec![BomItem::new("P1", "Cable", 3.0).with_unit("FT")]);
        let new = bom("new", vec![BomItem::new("P1", "Cable", 3.0).with_unit("M")]);

        let cmp = compare(&old, &new);
        assert_eq!(cmp.modified.len(), 1);
        assert!(cmp.unchanged.is_empty());
    }

    #[test]
    fn comparison_is_a_snapshot() {
        let old = bom("old", vec![BomItem::new("P1", "Bracket", 2.0)]);
        let mut new = bom("new", vec![BomItem::new("P1", "Bracket", 2.0)]);

        let cmp = compare(&old, &new);
        new.add_item(BomItem::new("P2", "Screw", 4.0));
        assert!(cmp.added.is_empty());
        assert!(!cmp.has_changes());
    }
}
