//! Workbook writing: BOM output files, blank templates, and comparison
//! reports.

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

use super::ITEM_HEADERS;
use crate::diff::BomComparison;
use crate::error::Result;
use crate::model::{BomItem, CellValue, Column, PartRow, TEMPLATE_HEADERS, TEMPLATE_SHEET};

const HEADER_FILL: u32 = 0x36_60_92;
const HEADER_COLUMN_WIDTH: f64 = 15.0;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Write a blank template: the styled 27-column header row on a sheet
/// named "Template".
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TEMPLATE_SHEET)?;
    write_template_header(sheet)?;
    workbook.save(path)?;
    Ok(())
}

/// Write a validated row sequence as a BOM output file.
///
/// Data rows start at row 2 in header order; absent fields become empty
/// string cells, never holes.
pub fn write_bom_file(rows: &[PartRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TEMPLATE_SHEET)?;
    write_template_header(sheet)?;

    for (row_idx, row) in rows.iter().enumerate() {
        let out_row = row_idx as u32 + 1;
        for column in Column::ALL {
            let out_col = column.index() as u16;
            match row.value(column) {
                Some(CellValue::Text(s)) => {
                    sheet.write_string(out_row, out_col, s)?;
                }
                Some(CellValue::Int(i)) => {
                    sheet.write_number(out_row, out_col, i as f64)?;
                }
                Some(CellValue::Float(f)) => {
                    sheet.write_number(out_row, out_col, f)?;
                }
                None => {
                    sheet.write_string(out_row, out_col, "")?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Write a multi-sheet comparison report: a Summary sheet, Added/Removed
/// item sheets when non-empty, and a Modified Items sheet listing one row
/// per changed field.
pub fn write_comparison(comparison: &BomComparison, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14);
    let summary = comparison.summary();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;
    sheet.write_string_with_format(0, 0, "BOM Comparison Summary", &title_format)?;
    sheet.write_string(2, 0, "BOM 1:")?;
    sheet.write_string(2, 1, &comparison.old_name)?;
    sheet.write_string(3, 0, "BOM 2:")?;
    sheet.write_string(3, 1, &comparison.new_name)?;
    sheet.write_string(5, 0, "Added Items:")?;
    sheet.write_number(5, 1, summary.added as f64)?;
    sheet.write_string(6, 0, "Removed Items:")?;
    sheet.write_number(6, 1, summary.removed as f64)?;
    sheet.write_string(7, 0, "Modified Items:")?;
    sheet.write_number(7, 1, summary.modified as f64)?;
    sheet.write_string(8, 0, "Unchanged Items:")?;
    sheet.write_number(8, 1, summary.unchanged as f64)?;

    if !comparison.added.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Added Items")?;
        write_items_sheet(sheet, &comparison.added)?;
    }
    if !comparison.removed.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Removed Items")?;
        write_items_sheet(sheet, &comparison.removed)?;
    }
    if !comparison.modified.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Modified Items")?;
        let format = header_format();
        for (col, header) in ["Part Number", "Field", "Old Value", "New Value"]
            .iter()
            .enumerate()
        {
            sheet.write_string_with_format(0, col as u16, *header, &format)?;
            sheet.set_column_width(col as u16, HEADER_COLUMN_WIDTH)?;
        }
        for (row_idx, change) in comparison.field_changes().iter().enumerate() {
            let out_row = row_idx as u32 + 1;
            sheet.write_string(out_row, 0, &change.part_number)?;
            sheet.write_string(out_row, 1, change.field.name())?;
            sheet.write_string(out_row, 2, &change.old_value)?;
            sheet.write_string(out_row, 3, &change.new_value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_template_header(sheet: &mut Worksheet) -> Result<()> {
    let format = header_format();
    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &format)?;
        sheet.set_column_width(col as u16, HEADER_COLUMN_WIDTH)?;
    }
    Ok(())
}

fn write_items_sheet(sheet: &mut Worksheet, items: &[BomItem]) -> Result<()> {
    let format = header_format();
    for (col, header) in ITEM_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &format)?;
        sheet.set_column_width(col as u16, HEADER_COLUMN_WIDTH)?;
    }
    for (row_idx, item) in items.iter().enumerate() {
        let out_row = row_idx as u32 + 1;
        sheet.write_string(out_row, 0, &item.part_number)?;
        sheet.write_string(out_row, 1, &item.description)?;
        sheet.write_number(out_row, 2, item.quantity)?;
        sheet.write_string(out_row, 3, &item.unit)?;
        sheet.write_string(out_row, 4, item.reference_designator.as_deref().unwrap_or(""))?;
        sheet.write_string(out_row, 5, item.notes.as_deref().unwrap_or(""))?;
    }
    Ok(())
}
