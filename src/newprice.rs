//! Derives a "New Price" column from a price list and embeds a bar chart.
//!
//! The pipeline runs in two phases: a read-only scan with calamine that
//! validates the sheet and computes every derived value, then a mutating pass
//! with umya-spreadsheet that writes the header, the derived column and the
//! chart before saving the workbook back in place. The on-disk file is only
//! touched by the final save, so any earlier failure leaves it unchanged.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use calamine::{Data, Reader, open_workbook_auto};

use crate::config::TransformConfig;
use crate::error::TransformError;

fn column_name(mut col: u32) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        name.push((b'A' + rem) as char);
        col = (col - 1) / 26;
    }
    name.chars().rev().collect()
}

fn cell_ref(col: u32, row: u32) -> String {
    format!("{}{}", column_name(col), row)
}

/// Numeric reading of a scanned cell. Text that parses as a number counts;
/// booleans, error values and blanks do not.
fn numeric_value(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(n)) => Some(*n),
        Some(Data::Int(n)) => Some(*n as f64),
        Some(Data::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_display(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => "an empty cell".to_string(),
        Some(Data::String(s)) => format!("'{s}'"),
        Some(other) => format!("{other:?}"),
    }
}

struct ScanResult {
    /// Last populated row of the sheet, 1-based.
    last_row: u32,
    /// `(row, derived value)` for every data row.
    derived: Vec<(u32, f64)>,
}

fn scan_workbook(path: &Path, cfg: &TransformConfig) -> Result<ScanResult, TransformError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| TransformError::Open {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    if !workbook.sheet_names().iter().any(|n| n == &cfg.sheet_name) {
        return Err(TransformError::SheetNotFound {
            name: cfg.sheet_name.clone(),
        });
    }

    let range = workbook
        .worksheet_range(&cfg.sheet_name)
        .map_err(|source| TransformError::Open {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

    let last_row = range.end().map_or(0, |(row, _)| row + 1);

    let mut derived = Vec::new();
    for row in cfg.first_data_row..=last_row {
        let cell = range.get_value((row - 1, cfg.source_column - 1));
        let Some(price) = numeric_value(cell) else {
            return Err(TransformError::InvalidCellValue {
                cell: cell_ref(cfg.source_column, row),
                found: cell_display(cell),
            });
        };
        derived.push((row, price * cfg.multiplier));
    }

    Ok(ScanResult { last_row, derived })
}

/// A1 reference for the chart series, e.g. `Sheet1!$D$2:$D$3`.
fn series_ref(cfg: &TransformConfig, last_row: u32) -> String {
    let column = column_name(cfg.derived_column);
    format!(
        "{}!${column}${first}:${column}${last_row}",
        cfg.sheet_name,
        first = cfg.first_data_row,
    )
}

fn build_bar_chart(cfg: &TransformConfig, last_row: u32) -> umya_spreadsheet::structs::Chart {
    let (anchor_col, anchor_row) = cfg.chart_anchor;
    let (span_cols, span_rows) = cfg.chart_span;

    let mut from_marker = umya_spreadsheet::structs::drawing::spreadsheet::MarkerType::default();
    from_marker.set_coordinate(cell_ref(anchor_col, anchor_row));
    let mut to_marker = umya_spreadsheet::structs::drawing::spreadsheet::MarkerType::default();
    to_marker.set_coordinate(cell_ref(anchor_col + span_cols, anchor_row + span_rows));

    let series = series_ref(cfg, last_row);

    let mut chart = umya_spreadsheet::structs::Chart::default();
    chart.new_chart(
        umya_spreadsheet::structs::ChartType::BarChart,
        from_marker,
        to_marker,
        vec![series.as_str()],
    );
    chart
}

fn apply_updates(
    path: &Path,
    cfg: &TransformConfig,
    scan: &ScanResult,
) -> Result<(), TransformError> {
    let mut book =
        umya_spreadsheet::reader::xlsx::read(path).map_err(|source| TransformError::Open {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

    let sheet =
        book.get_sheet_by_name_mut(&cfg.sheet_name)
            .ok_or_else(|| TransformError::SheetNotFound {
                name: cfg.sheet_name.clone(),
            })?;

    sheet
        .get_cell_mut(cell_ref(cfg.derived_column, cfg.header_row).as_str())
        .set_value(cfg.header_label.as_str());

    for &(row, value) in &scan.derived {
        sheet
            .get_cell_mut(cell_ref(cfg.derived_column, row).as_str())
            .set_value_number(value);
    }

    // A chart over zero data rows would reference an empty range.
    if scan.last_row >= cfg.first_data_row {
        sheet.add_chart(build_bar_chart(cfg, scan.last_row));
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(|source| TransformError::Save {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Runs the transformation on `path` with the stock layout: prices in column
/// C, derived values (price × 3) in column D under a "New Price" header, and
/// a bar chart over the derived values anchored at E2.
pub fn process(path: impl AsRef<Path>) -> Result<(), TransformError> {
    process_with(path, &TransformConfig::default())
}

/// Same pipeline under an overridden layout.
pub fn process_with(path: impl AsRef<Path>, cfg: &TransformConfig) -> Result<(), TransformError> {
    let path = path.as_ref();
    let scan = scan_workbook(path, cfg)?;
    apply_updates(path, cfg, &scan)
}

pub fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let Some(input) = args.next() else {
        println!("usage: newprice <workbook.xlsx>");
        return Ok(());
    };

    let path = PathBuf::from(input);
    process(&path)?;
    println!("updated {}", path.display());
    Ok(())
}
