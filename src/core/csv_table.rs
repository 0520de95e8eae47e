//! Reader for uploaded airfoil coordinate CSV files.
//!
//! Understands the airfoiltools.com export (a `Name` row, `key,value`
//! metadata, then `Airfoil surface` / `Camber line` / `Chord line` sections)
//! and plain `x,y` tables. Rows are returned in file order.

use crate::domain::model::{AirfoilName, AirfoilProfile, CoordinateTable, Point};
use crate::utils::error::{AirfoilError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const UNKNOWN_AIRFOIL: &str = "Unknown Airfoil";

/// Above this chord extent the data is assumed to be in mm or similar.
const UNIT_NORMALIZATION_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Surface,
    Other,
}

#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Name used when the file has no `Name` row.
    pub fallback_name: Option<String>,
    /// Rescale to chord fractions when x exceeds the mm threshold.
    pub normalize_units: bool,
}

pub fn parse_csv_file<P: AsRef<Path>>(path: P, normalize_units: bool) -> Result<AirfoilProfile> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let options = CsvOptions {
        fallback_name: path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string),
        normalize_units,
    };
    parse_csv(file, &options)
}

pub fn parse_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<AirfoilProfile> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut embedded_name: Option<String> = None;
    let mut metadata = BTreeMap::new();
    let mut table = CoordinateTable::new();
    let mut section = Section::Preamble;
    let mut section_has_data = false;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let first = record.get(0).unwrap_or("");
        let second = record.get(1).unwrap_or("");
        let line = record.iter().collect::<Vec<_>>().join(",").to_ascii_lowercase();

        // Name 列優先於區段標題，名稱本身可能含有 "camber line" 等字樣
        if first.eq_ignore_ascii_case("name") {
            let value = rest_of_row(&record);
            if !value.is_empty() {
                embedded_name = Some(value);
            }
            continue;
        }

        if line.contains("airfoil surface") {
            section = Section::Surface;
            section_has_data = false;
            continue;
        }
        if line.contains("camber line") || line.contains("chord line") {
            section = Section::Other;
            continue;
        }

        match section {
            Section::Preamble => {
                if let Some(point) = parse_point(first, second) {
                    // 沒有區段標題：當作純 x,y 表格
                    section = Section::Surface;
                    section_has_data = true;
                    table.push(point);
                } else if is_column_header(first, second) {
                    continue;
                } else if !first.is_empty() && !second.is_empty() {
                    metadata.insert(first.to_string(), rest_of_row(&record));
                }
            }
            Section::Surface => {
                if let Some(point) = parse_point(first, second) {
                    section_has_data = true;
                    table.push(point);
                } else if section_has_data {
                    return Err(AirfoilError::MalformedRow {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                        content: record.iter().collect::<Vec<_>>().join(","),
                    });
                }
            }
            Section::Other => {}
        }
    }

    if options.normalize_units {
        let max_x = table.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        if max_x > UNIT_NORMALIZATION_THRESHOLD {
            table = table.scaled_down(max_x);
        }
    }

    let name = embedded_name
        .or_else(|| options.fallback_name.clone())
        .unwrap_or_else(|| UNKNOWN_AIRFOIL.to_string());

    Ok(AirfoilProfile {
        name: AirfoilName::new(name),
        table,
        metadata,
    })
}

fn parse_point(x: &str, y: &str) -> Option<Point> {
    let x = x.parse::<f64>().ok()?;
    let y = y.parse::<f64>().ok()?;
    if x.is_finite() && y.is_finite() {
        Some(Point::new(x, y))
    } else {
        None
    }
}

fn is_column_header(first: &str, second: &str) -> bool {
    let first = first.to_ascii_lowercase();
    let second = second.to_ascii_lowercase();
    first.starts_with('x') && second.starts_with('y')
}

fn rest_of_row(record: &StringRecord) -> String {
    record
        .iter()
        .skip(1)
        .collect::<Vec<_>>()
        .join(",")
        .trim()
        .to_string()
}
