//! Round-trip tests for the spreadsheet adapter.

use bom_tools::{
    builder::{BomSpec, GroupRows},
    compare, headers_match, Bom, BomBuilder, BomError, BomItem, PartRow, RandomRowGenerator,
    TEMPLATE_HEADERS,
};
use calamine::{open_workbook, Reader, Xlsx};
use chrono::NaiveDate;
use std::path::Path;
use tempfile::tempdir;

fn manual_row(part_no: &str, quantity: f64, source: &str) -> PartRow {
    PartRow {
        part_no: Some(part_no.to_string()),
        description: Some(format!("{part_no} Desc")),
        quantity: Some(quantity),
        source: Some(source.to_string()),
        um: Some("EA".to_string()),
        ..PartRow::default()
    }
}

fn build_rows() -> Vec<PartRow> {
    let spec = BomSpec {
        parent: PartRow {
            part_no: Some("TOP".to_string()),
            description: Some("Top assembly".to_string()),
            quantity: Some(1.0),
            source: Some("M".to_string()),
            ..PartRow::default()
        },
        level1: GroupRows::Manual(vec![
            manual_row("C1", 2.0, "M"),
            manual_row("C2", 4.0, "P"),
        ]),
        ..BomSpec::default()
    };
    let outcome = BomBuilder::with_generator(RandomRowGenerator::seeded(9))
        .build(&spec)
        .expect("build succeeds");
    assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    outcome.rows
}

#[test]
fn template_header_row_round_trips() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("template.xlsx");

    bom_tools::xlsx::write_template(&path).expect("template written");
    let headers = bom_tools::xlsx::read_template_headers(&path).expect("headers read");
    assert!(headers_match(&headers));
    assert_eq!(headers.len(), TEMPLATE_HEADERS.len());
}

#[test]
fn bom_file_round_trips_headers_and_items() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("output_bom.xlsx");

    let rows = build_rows();
    bom_tools::xlsx::write_bom_file(&rows, &path).expect("bom written");

    let headers = bom_tools::xlsx::read_template_headers(&path).expect("headers read");
    assert!(headers_match(&headers));

    let bom = bom_tools::xlsx::read_bom(&path).expect("bom read");
    assert_eq!(bom.item_count(), 3);
    let child = bom.get_item_by_part_number("C2").expect("C2 present");
    assert_eq!(child.quantity, 4.0);
    assert_eq!(child.unit, "EA");
    assert_eq!(child.description, "C2 Desc");
}

#[test]
fn generated_files_diff_cleanly() {
    let dir = tempdir().expect("temp dir");
    let old_path = dir.path().join("old.xlsx");
    let new_path = dir.path().join("new.xlsx");

    let old_rows = build_rows();
    let mut new_rows = build_rows();
    // Bump one quantity so the diff sees a modification
    for row in &mut new_rows {
        if row.part_no.as_deref() == Some("C1") {
            row.quantity = Some(7.0);
        }
    }
    bom_tools::xlsx::write_bom_file(&old_rows, &old_path).expect("old written");
    bom_tools::xlsx::write_bom_file(&new_rows, &new_path).expect("new written");

    let old = bom_tools::xlsx::read_bom(&old_path).expect("old read");
    let new = bom_tools::xlsx::read_bom(&new_path).expect("new read");
    let cmp = compare(&old, &new);
    assert_eq!(cmp.modified.len(), 1);
    assert_eq!(cmp.unchanged.len(), 2);
}

#[test]
fn comparison_report_has_expected_sheets() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("comparison.xlsx");
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let mut old = Bom::new("old", "1", date);
    old.add_item(BomItem::new("P1", "Bracket", 2.0));
    old.add_item(BomItem::new("P2", "Screw", 5.0));
    let mut new = Bom::new("new", "1", date);
    new.add_item(BomItem::new("P2", "Screw", 9.0));
    new.add_item(BomItem::new("P3", "Washer", 1.0));

    let cmp = compare(&old, &new);
    bom_tools::xlsx::write_comparison(&cmp, &path).expect("report written");

    let workbook: Xlsx<_> = open_workbook(&path).expect("report opens");
    let sheets = workbook.sheet_names();
    for expected in ["Summary", "Added Items", "Removed Items", "Modified Items"] {
        assert!(sheets.contains(&expected.to_string()), "{sheets:?}");
    }

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("report opens");
    let range = workbook
        .worksheet_range("Modified Items")
        .expect("modified sheet readable");
    // Header row plus one changed-field triple for P2's quantity
    assert_eq!(range.rows().count(), 2);
}

#[test]
fn empty_categories_get_no_sheet() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("comparison.xlsx");
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let mut old = Bom::new("old", "1", date);
    old.add_item(BomItem::new("P1", "Bracket", 2.0));
    let new = old.clone();

    let cmp = compare(&old, &new);
    bom_tools::xlsx::write_comparison(&cmp, &path).expect("report written");

    let workbook: Xlsx<_> = open_workbook(&path).expect("report opens");
    let sheets = workbook.sheet_names();
    assert_eq!(sheets, vec!["Summary".to_string()]);
}

#[test]
fn simple_six_column_layout_is_recognized() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("simple_bom.xlsx");
    write_simple_bom(&path);

    let bom = bom_tools::xlsx::read_bom(&path).expect("bom read");
    assert_eq!(bom.item_count(), 2);
    let item = bom.get_item_by_part_number("P1").expect("P1 present");
    assert_eq!(item.reference_designator.as_deref(), Some("R1"));
    assert_eq!(item.notes.as_deref(), Some("check torque"));
}

#[test]
fn drifted_template_headers_are_a_schema_mismatch() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("drifted.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Template").expect("sheet named");
    sheet.write_string(0, 0, "PartNo").expect("cell written");
    sheet.write_string(0, 1, "Qty").expect("cell written");
    workbook.save(&path).expect("workbook saved");

    let err = bom_tools::xlsx::read_bom(&path).expect_err("must mismatch");
    assert!(matches!(err, BomError::SchemaMismatch { .. }));
}

fn write_simple_bom(path: &Path) {
    let headers = [
        "Part Number",
        "Description",
        "Quantity",
        "Unit",
        "Reference Designator",
        "Notes",
    ];
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("BOM").expect("sheet named");
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .expect("header written");
    }
    for (row, (part, desc, qty, unit, reference, notes)) in [
        ("P1", "Bracket", 2.0, "EA", "R1", "check torque"),
        ("P2", "Screw", 8.0, "EA", "", ""),
    ]
    .iter()
    .enumerate()
    {
        let r = row as u32 + 1;
        sheet.write_string(r, 0, *part).expect("cell");
        sheet.write_string(r, 1, *desc).expect("cell");
        sheet.write_number(r, 2, *qty).expect("cell");
        sheet.write_string(r, 3, *unit).expect("cell");
        sheet.write_string(r, 4, *reference).expect("cell");
        sheet.write_string(r, 5, *notes).expect("cell");
    }
    workbook.save(path).expect("workbook saved");
}
