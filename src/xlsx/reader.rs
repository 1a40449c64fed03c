//! Workbook reading: template headers and BOM files.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

use super::ITEM_HEADERS;
use crate::error::{BomError, Result};
use crate::model::{headers_match, Bom, BomItem, Column, TEMPLATE_HEADERS, TEMPLATE_SHEET};

/// Read the header row from a template's "Template" sheet.
///
/// Rows past the first are ignored; the template is only a header source.
pub fn read_template_headers(path: &Path) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(TEMPLATE_SHEET)?;
    Ok(header_row(&range))
}

/// Read a BOM file into the comparison domain model.
///
/// Two layouts are recognized: the 27-column "Template" sheet this tool
/// generates, and the six-column item sheet (Part Number, Description,
/// Quantity, Unit, Reference Designator, Notes). A "Template" sheet with
/// drifted headers is a schema mismatch, not a silent fallback.
pub fn read_bom(path: &Path) -> Result<Bom> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "BOM".to_string());
    let date = chrono::Local::now().date_naive();
    let mut bom = Bom::new(name, "1", date);

    match workbook.worksheet_range(TEMPLATE_SHEET) {
        Ok(range) => {
            let headers = header_row(&range);
            if !headers_match(&headers) {
                return Err(BomError::SchemaMismatch {
                    found: headers,
                    expected: TEMPLATE_HEADERS.iter().map(|h| (*h).to_string()).collect(),
                });
            }
            for row in range.rows().skip(1) {
                if let Some(item) = template_row_item(row) {
                    bom.add_item(item);
                }
            }
            return Ok(bom);
        }
        Err(calamine::XlsxError::WorksheetNotFound(_)) => {}
        Err(other) => return Err(other.into()),
    }

    // No Template sheet: look for a six-column item sheet.
    let sheet_names = workbook.sheet_names();
    for sheet in sheet_names {
        let Ok(range) = workbook.worksheet_range(&sheet) else {
            continue;
        };
        let headers = header_row(&range);
        if headers.len() == ITEM_HEADERS.len()
            && headers.iter().zip(ITEM_HEADERS.iter()).all(|(f, e)| f == e)
        {
            for row in range.rows().skip(1) {
                if let Some(item) = simple_row_item(row) {
                    bom.add_item(item);
                }
            }
            return Ok(bom);
        }
    }

    Err(BomError::SheetNotFound {
        name: TEMPLATE_SHEET.to_string(),
    })
}

fn header_row(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default()
}

/// Item from a 27-column template row; rows with a blank PartNo are skipped.
fn template_row_item(row: &[Data]) -> Option<BomItem> {
    let cell = |col: Column| row.get(col.index());
    let part_number = cell(Column::PartNo).map(cell_to_string)?;
    if part_number.is_empty() {
        return None;
    }
    let description = cell(Column::Description)
        .map(cell_to_string)
        .unwrap_or_default();
    let quantity = cell(Column::Quantity).and_then(cell_to_f64).unwrap_or(0.0);
    let unit = cell(Column::UM)
        .map(cell_to_string)
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "EA".to_string());
    let notes = cell(Column::BomComments)
        .map(cell_to_string)
        .filter(|n| !n.is_empty());
    Some(BomItem {
        part_number,
        description,
        quantity,
        unit,
        reference_designator: None,
        notes,
    })
}

/// Item from a six-column row; rows with a blank part number are skipped.
fn simple_row_item(row: &[Data]) -> Option<BomItem> {
    let text = |idx: usize| row.get(idx).map(cell_to_string).unwrap_or_default();
    let part_number = text(0);
    if part_number.is_empty() {
        return None;
    }
    let reference_designator = Some(text(4)).filter(|s| !s.is_empty());
    let notes = Some(text(5)).filter(|s| !s.is_empty());
    Some(BomItem {
        part_number,
        description: text(1),
        quantity: row.get(2).and_then(cell_to_f64).unwrap_or(0.0),
        unit: Some(text(3))
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "EA".to_string()),
        reference_designator,
        notes,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
