//! CSV loader for vessel sheets
//!
//! The first row names the columns. Headers are matched ignoring case,
//! spaces and underscores, so `hire_per_day`, `hirePerDay` and
//! `Hire Per Day` all map to the same field. Blank cells are absent values.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tripcost_domain::model::VesselRecord;

#[derive(Error, Debug)]
pub enum VesselCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Empty vessel name in row {0}")]
    EmptyName(usize),
}

impl From<VesselCsvError> for tripcost_types::Error {
    fn from(err: VesselCsvError) -> Self {
        tripcost_types::Error::Import(err.to_string())
    }
}

fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

/// Load vessel documents from a CSV file
pub fn load_vessels<P: AsRef<Path>>(path: P) -> Result<Vec<VesselRecord>, VesselCsvError> {
    let content = std::fs::read_to_string(path)?;
    parse_vessels(&content)
}

/// Parse vessel documents from CSV text
pub fn parse_vessels(content: &str) -> Result<Vec<VesselRecord>, VesselCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (header_key(h), i))
        .collect();
    if !columns.contains_key("name") {
        return Err(VesselCsvError::MissingColumn("name".to_string()));
    }

    let mut vessels = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // +2: row_idx is 0-based and the header is row 1
        let row = row_idx + 2;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        vessels.push(parse_record(&record, &columns, row)?);
    }
    Ok(vessels)
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    row: usize,
) -> Result<VesselRecord, VesselCsvError> {
    let text = |key: &str| -> Option<String> {
        columns
            .get(key)
            .and_then(|&i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    };
    let number = |key: &str| -> Result<Option<f64>, VesselCsvError> {
        match text(key) {
            None => Ok(None),
            Some(raw) => raw
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or(VesselCsvError::InvalidNumber {
                    row,
                    column: key.to_string(),
                    value: raw,
                }),
        }
    };

    let name = text("name").ok_or(VesselCsvError::EmptyName(row))?;
    let mut vessel = VesselRecord::new(name);
    if let Some(id) = text("id") {
        vessel.id = id;
    }
    vessel.imo_number = text("imonumber").or_else(|| text("imo"));
    vessel.vessel_type = text("vesseltype");
    vessel.flag = text("flag");
    vessel.do_price = number("doprice")?;
    vessel.do_standby = number("dostandby")?;
    vessel.do_at_sea = number("doatsea")?;
    vessel.do_discharge = number("dodischarge")?;
    vessel.do_idle = number("doidle")?;
    vessel.loading = number("loading")?;
    vessel.idle = number("idle")?;
    vessel.hire = number("hire")?;
    vessel.hire_per_day = number("hireperday")?;
    // Capacity stays free text
    vessel.vessel_capacity = text("vesselcapacity");
    vessel.sea_ballast_with_cargo_temp = number("seaballastwithcargotemp")?;
    vessel.discharging = number("discharging")?;
    vessel.notes = text("notes");
    Ok(vessel)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,doPrice,do_standby,doAtSea,doDischarge,doIdle,loading,idle,hire,Hire Per Day,vesselCapacity,seaBallastWithCargoTemp,discharging";

    #[test]
    fn test_parse_complete_row() {
        let csv = format!("{}\nv1,MV Ocean Star,500,1,3,2.5,2,20,5,0,\"10,000\",50000 MT,1,18\n", HEADER);
        let vessels = parse_vessels(&csv).unwrap();
        assert_eq!(vessels.len(), 1);
        let v = &vessels[0];
        assert_eq!(v.id, "v1");
        assert_eq!(v.hire_per_day, Some(10000.0));
        assert_eq!(v.vessel_capacity.as_deref(), Some("50000 MT"));
        assert!(v.is_trip_eligible());
    }

    #[test]
    fn test_blank_cells_are_missing() {
        let csv = format!("{}\n,MV Partial,500,,3,2.5,2,20,5,,10000,50000,1,18\n", HEADER);
        let vessels = parse_vessels(&csv).unwrap();
        let v = &vessels[0];
        assert!(!v.id.is_empty());
        assert_eq!(v.missing_trip_fields(), vec!["doStandby", "hire"]);
    }

    #[test]
    fn test_garbage_number_reports_row_and_column() {
        let csv = format!(
            "{}\nv1,MV A,500,1,3,2.5,2,20,5,0,10000,50000,1,18\nv2,MV B,lots,1,3,2.5,2,20,5,0,10000,50000,1,18\n",
            HEADER
        );
        match parse_vessels(&csv) {
            Err(VesselCsvError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 3);
                assert_eq!(column, "doprice");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name_column() {
        let result = parse_vessels("id,doPrice\nv1,500\n");
        assert!(matches!(result, Err(VesselCsvError::MissingColumn(_))));
    }

    #[test]
    fn test_empty_rows_skipped() {
        let csv = "name,doPrice\nMV A,500\n,\nMV B,\n";
        let vessels = parse_vessels(csv).unwrap();
        assert_eq!(vessels.len(), 2);
        assert!(vessels[1].do_price.is_none());
    }
}
