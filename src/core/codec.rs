//! CSV codec for the record list.
//!
//! The canonical layout is six semicolon-separated columns with no quoting,
//! matching the files the tool has always produced. Decoding is forgiving:
//! it detects the delimiter, recognizes several header spellings, falls back
//! to positional columns when a six-column header is unrecognizable, and
//! degrades malformed cells to zeros/empties instead of failing.

use crate::errors::AppResult;
use crate::models::record::{UsageRecord, new_record_id};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use regex::Regex;
use std::sync::OnceLock;

/// Canonical export header. "KM/h Trabalhadas" carries hours worked; the
/// column name is kept for compatibility with the historical files.
pub const CSV_HEADER: [&str; 6] = [
    "Equipamento",
    "Modelo",
    "Unidade",
    "KM/h Trabalhadas",
    "Combustivel Consumido",
    "Km/l / L/h",
];

/// Encode the record list with the canonical header and `;` delimiter.
///
/// Fields are written verbatim, without quoting or escaping: a field that
/// itself contains the delimiter will corrupt its row on the next decode.
/// That is a known limitation of the format, not something to guard here.
pub fn to_csv(records: &[UsageRecord]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for rec in records {
        wtr.write_record(&[
            rec.equipment.clone(),
            rec.model.clone(),
            rec.unit.clone(),
            format_cell(rec.hours_worked),
            format_cell(rec.fuel_used),
            rec.efficiency.map(format_cell).unwrap_or_default(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::errors::AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::errors::AppError::Export(e.to_string()))
}

/// Decode raw CSV text into fresh records.
///
/// Fewer than two non-empty lines (header only, or nothing) yields an empty
/// list. Every decoded row gets a newly minted id: importing never preserves
/// the ids of the source file.
pub fn from_csv(text: &str) -> Vec<UsageRecord> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let delimiter = detect_delimiter(lines[0]);
    let joined = lines.join("\n");
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(joined.as_bytes());

    let mut rows = reader.records().flatten();
    let header = match rows.next() {
        Some(h) => h,
        None => return Vec::new(),
    };
    let columns = ColumnMap::resolve(&header);

    let mut out = Vec::new();
    for row in rows {
        let efficiency_raw = cell(&row, columns.efficiency);
        let efficiency = if efficiency_raw.is_empty() {
            None
        } else {
            Some(parse_decimal(efficiency_raw))
        };

        out.push(UsageRecord {
            id: new_record_id(),
            equipment: cell(&row, columns.equipment).to_string(),
            model: cell(&row, columns.model).to_string(),
            unit: cell(&row, columns.unit).to_string(),
            // The CSV layout carries hours only; speed is never imported.
            speed_kmh: 0.0,
            hours_worked: parse_decimal(cell(&row, columns.hours)),
            fuel_used: parse_decimal(cell(&row, columns.fuel)),
            efficiency,
            date: None,
        });
    }
    out
}

/// Cell at a resolved column index; missing or unmapped columns read as "".
fn cell<'r>(row: &'r csv::StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| row.get(i)).unwrap_or("").trim()
}

/// Parse a decimal that may use `.` as thousands separator and `,` as the
/// decimal mark ("1.234,56"). Empty or unparsable input yields 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    let sanitized = raw.replace('.', "").replace(',', ".");
    sanitized.parse::<f64>().unwrap_or(0.0)
}

/// Numeric cells are written with a decimal comma and no thousands
/// separator, the one form `parse_decimal` reads back without loss.
fn format_cell(v: f64) -> String {
    v.to_string().replace('.', ",")
}

fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains(';') {
        b';'
    } else if header_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Resolved column indexes for one header row.
struct ColumnMap {
    equipment: Option<usize>,
    model: Option<usize>,
    unit: Option<usize>,
    hours: Option<usize>,
    fuel: Option<usize>,
    efficiency: Option<usize>,
}

impl ColumnMap {
    fn resolve(header: &csv::StringRecord) -> Self {
        let names: Vec<String> = header.iter().map(normalize_header).collect();
        let find = |aliases: &[&str]| -> Option<usize> {
            aliases
                .iter()
                .find_map(|a| names.iter().position(|n| n == a))
        };

        let mut map = Self {
            equipment: find(&["equipamento"]),
            model: find(&["modelo"]),
            unit: find(&["unidade"]),
            hours: find(&["km/h trabalhadas", "trabalhadas", "horas trabalhadas"]),
            fuel: find(&["combustivel consumido", "combustivel", "consumo"]),
            efficiency: find(&["km/l / l/h", "km/l", "l/h"]),
        };

        // Unrecognizable names in an exactly-six-column header fall back to
        // the canonical positional layout.
        if header.len() == 6 {
            map.equipment = map.equipment.or(Some(0));
            map.model = map.model.or(Some(1));
            map.unit = map.unit.or(Some(2));
            map.hours = map.hours.or(Some(3));
            map.fuel = map.fuel.or(Some(4));
            map.efficiency = map.efficiency.or(Some(5));
        }
        map
    }
}

/// Normalize a header cell: lowercase, fold accents, keep only
/// alphanumerics, spaces and slashes, collapse runs of whitespace.
fn normalize_header(name: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let strip = STRIP.get_or_init(|| Regex::new(r"[^a-z0-9/ ]+").unwrap());
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").unwrap());

    let folded: String = name.to_lowercase().chars().map(fold_accent).collect();
    let stripped = strip.replace_all(&folded, "");
    spaces.replace_all(&stripped, " ").trim().to_string()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}
