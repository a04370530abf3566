//! CSV dataset storage.
//!
//! Loads the lead dataset into typed records and writes the annotated
//! dataset back out. The loader keeps every row's verbatim fields alongside
//! the typed record, so identifier and other passthrough columns the scoring
//! core does not model survive the round trip untouched.
//!
//! All validation happens here, before any scoring runs: a missing modeled
//! column, an unparseable flag, or a negative count aborts the batch.

use crate::errors::AppError;
use crate::models::{CompanySize, LeadRecord, ScoredLead, Sector};
use std::io;
use std::path::Path;

// Modeled input columns, named as in the source dataset.
const COL_JOB_TITLE: &str = "cargo";
// The original export spells this with the eñe; an ASCII-transliterated
// export is accepted as well.
const COL_COMPANY_SIZE: [&str; 2] = ["tamaño_empresa", "tamano_empresa"];
const COL_SECTOR: &str = "sector";
const COL_REQUESTED_DEMO: &str = "pidio_demo";
const COL_DOWNLOADED_WHITEPAPER: &str = "descargo_whitepaper";
const COL_WEB_VISITS: &str = "visitas_web";
const COL_EMAILS_OPENED: &str = "emails_abiertos";
const COL_CONVERSION_STATUS: &str = "status_final";

// Derived columns appended to the output.
const OUT_COLUMNS: [&str; 4] = ["score_perfil", "score_comportamiento", "lead_score", "segmento"];

/// A loaded lead dataset.
///
/// `records` and `raw_rows` are parallel: index `i` holds the typed view and
/// the verbatim fields of the same row, preserving the record↔row
/// association through scoring and persistence.
#[derive(Debug, Clone)]
pub struct LeadDataset {
    /// Header row exactly as read from the file.
    pub headers: csv::StringRecord,
    /// Typed records, one per data row, in file order.
    pub records: Vec<LeadRecord>,
    /// Verbatim data rows, in file order.
    pub raw_rows: Vec<csv::StringRecord>,
}

/// Positions of the modeled columns within the header.
struct ColumnIndex {
    job_title: usize,
    company_size: usize,
    sector: usize,
    requested_demo: usize,
    downloaded_whitepaper: usize,
    web_visits: usize,
    emails_opened: usize,
    conversion_status: usize,
}

impl ColumnIndex {
    /// Resolves every modeled column by name, or fails with the first
    /// missing column.
    fn resolve(headers: &csv::StringRecord) -> Result<Self, AppError> {
        Ok(ColumnIndex {
            job_title: find_column(headers, &[COL_JOB_TITLE])?,
            company_size: find_column(headers, &COL_COMPANY_SIZE)?,
            sector: find_column(headers, &[COL_SECTOR])?,
            requested_demo: find_column(headers, &[COL_REQUESTED_DEMO])?,
            downloaded_whitepaper: find_column(headers, &[COL_DOWNLOADED_WHITEPAPER])?,
            web_visits: find_column(headers, &[COL_WEB_VISITS])?,
            emails_opened: find_column(headers, &[COL_EMAILS_OPENED])?,
            conversion_status: find_column(headers, &[COL_CONVERSION_STATUS])?,
        })
    }
}

/// Finds a column by any of its accepted names.
///
/// Header cells are compared after stripping a UTF-8 BOM (the original
/// export is `utf-8-sig`) and surrounding whitespace.
fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize, AppError> {
    for (idx, cell) in headers.iter().enumerate() {
        let cell = cell.trim_start_matches('\u{feff}').trim();
        if names.iter().any(|name| cell == *name) {
            return Ok(idx);
        }
    }
    Err(AppError::MissingColumn(names[0].to_string()))
}

/// Parses a boolean cell.
///
/// Accepts the spellings that show up in real exports (`true/false`,
/// `True/False`, `1/0`, `si/sí/no`, `yes/no`); an empty cell reads as
/// "no signal observed". Anything else is a validation error.
fn parse_flag(raw: &str, row: usize, column: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "si" | "sí" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(AppError::InvalidField {
            row,
            column: column.to_string(),
            message: format!("'{}' is not a recognized boolean value", other),
        }),
    }
}

/// Parses a non-negative count cell.
///
/// A negative value signals upstream data corruption, not zero engagement,
/// so it fails the batch instead of being clamped. Empty and non-numeric
/// cells fail for the same reason.
fn parse_count(raw: &str, row: usize, column: &str) -> Result<u32, AppError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| AppError::InvalidField {
        row,
        column: column.to_string(),
        message: format!("'{}' is not an integer", trimmed),
    })?;
    if value < 0 {
        return Err(AppError::InvalidField {
            row,
            column: column.to_string(),
            message: format!("negative count {}", value),
        });
    }
    u32::try_from(value).map_err(|_| AppError::InvalidField {
        row,
        column: column.to_string(),
        message: format!("count {} out of range", value),
    })
}

/// Loads a lead dataset from any CSV reader.
///
/// The first row must be a header naming the eight modeled columns (plus any
/// passthrough columns, which are preserved). Every data row is validated
/// here; scoring never sees a malformed record.
pub fn load_leads<R: io::Read>(reader: R) -> Result<LeadDataset, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut raw_rows = Vec::new();

    for (index, row_result) in csv_reader.records().enumerate() {
        let raw = row_result?;
        let row = index + 1;
        let cell = |idx: usize| raw.get(idx).unwrap_or("");

        let record = LeadRecord {
            job_title: cell(columns.job_title).trim().to_string(),
            company_size: CompanySize::parse(cell(columns.company_size)),
            sector: Sector::parse(cell(columns.sector)),
            requested_demo: parse_flag(cell(columns.requested_demo), row, COL_REQUESTED_DEMO)?,
            downloaded_whitepaper: parse_flag(
                cell(columns.downloaded_whitepaper),
                row,
                COL_DOWNLOADED_WHITEPAPER,
            )?,
            web_visits: parse_count(cell(columns.web_visits), row, COL_WEB_VISITS)?,
            emails_opened: parse_count(cell(columns.emails_opened), row, COL_EMAILS_OPENED)?,
            conversion_status: cell(columns.conversion_status).trim().to_string(),
        };

        records.push(record);
        raw_rows.push(raw);
    }

    tracing::debug!("Parsed {} data rows", records.len());

    Ok(LeadDataset {
        headers,
        records,
        raw_rows,
    })
}

/// Loads a lead dataset from a CSV file.
pub fn load_leads_from_path(path: impl AsRef<Path>) -> Result<LeadDataset, AppError> {
    let file = std::fs::File::open(path.as_ref())?;
    load_leads(io::BufReader::new(file))
}

/// Writes the annotated dataset to any CSV writer.
///
/// Emits the original header followed by the four derived columns, then each
/// verbatim row followed by that lead's scores and segment label. `scored`
/// must be the scoring output for `dataset`, in order.
pub fn write_scored<W: io::Write>(
    writer: W,
    dataset: &LeadDataset,
    scored: &[ScoredLead],
) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = dataset.headers.iter().collect();
    header.extend(OUT_COLUMNS);
    csv_writer.write_record(&header)?;

    for (raw, lead) in dataset.raw_rows.iter().zip(scored) {
        let mut fields: Vec<String> = raw.iter().map(str::to_string).collect();
        fields.push(lead.profile_score.to_string());
        fields.push(lead.behavior_score.to_string());
        fields.push(lead.lead_score.to_string());
        fields.push(lead.segment.as_label().to_string());
        csv_writer.write_record(&fields)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes the annotated dataset to a CSV file.
pub fn write_scored_to_path(
    path: impl AsRef<Path>,
    dataset: &LeadDataset,
    scored: &[ScoredLead],
) -> Result<(), AppError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_scored(io::BufWriter::new(file), dataset, scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_spellings() {
        assert!(parse_flag("True", 1, "pidio_demo").unwrap());
        assert!(parse_flag("1", 1, "pidio_demo").unwrap());
        assert!(parse_flag("sí", 1, "pidio_demo").unwrap());
        assert!(!parse_flag("False", 1, "pidio_demo").unwrap());
        assert!(!parse_flag("0", 1, "pidio_demo").unwrap());
        assert!(!parse_flag("", 1, "pidio_demo").unwrap());
        assert!(parse_flag("maybe", 1, "pidio_demo").is_err());
    }

    #[test]
    fn test_parse_count_rejects_negative() {
        assert_eq!(parse_count("7", 3, "visitas_web").unwrap(), 7);
        assert_eq!(parse_count(" 0 ", 3, "visitas_web").unwrap(), 0);

        let err = parse_count("-2", 3, "visitas_web").unwrap_err();
        match err {
            AppError::InvalidField { row, column, message } => {
                assert_eq!(row, 3);
                assert_eq!(column, "visitas_web");
                assert!(message.contains("negative"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(parse_count("", 3, "visitas_web").is_err());
        assert!(parse_count("many", 3, "visitas_web").is_err());
    }

    #[test]
    fn test_find_column_strips_bom() {
        let headers = csv::StringRecord::from(vec!["\u{feff}cargo", "sector"]);
        assert_eq!(find_column(&headers, &["cargo"]).unwrap(), 0);
        assert_eq!(find_column(&headers, &["sector"]).unwrap(), 1);
        assert!(matches!(
            find_column(&headers, &["visitas_web"]),
            Err(AppError::MissingColumn(_))
        ));
    }
}
