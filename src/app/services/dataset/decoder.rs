//! Row decoding from munrotab CSV data
//!
//! This module turns one raw CSV row plus the header row into a typed
//! [`Munro`] record. Decoding is tolerant by design: columns are located by
//! name rather than position, missing columns yield field defaults, and a
//! numeric cell that fails to parse leaves its zero default in place rather
//! than rejecting the row.

use crate::app::models::{Classification, Munro};
use crate::app::services::geodesy;
use crate::constants::columns;
use csv::StringRecord;
use std::collections::HashMap;

/// Case-insensitive mapping from header name to column index
///
/// Built once per load and queried per field, which keeps decoding robust to
/// column reordering without any positional assumptions. Matching is literal
/// string equality after trimming and lowercasing; embedded line breaks in a
/// header (the published table carries one inside the height-in-feet header)
/// are preserved and must match.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    name_to_index: HashMap<String, usize>,
    column_count: usize,
}

impl ColumnMap {
    /// Build the mapping from the header row
    ///
    /// If a header name repeats, the first occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index
                .entry(header.trim().to_lowercase())
                .or_insert(index);
        }
        Self {
            name_to_index,
            column_count: headers.len(),
        }
    }

    /// Look up the index for a column name, case-insensitively
    pub fn get(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(&name.trim().to_lowercase()).copied()
    }

    /// Check whether a column exists in the mapping
    pub fn has_column(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of columns in the header row
    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

/// Decode one data row into a summit record
///
/// Returns `None` when the row is structurally unusable and must be skipped:
/// either every cell is empty/whitespace, or the row carries more cells than
/// the header row. Anything else decodes, with absent or unparseable fields
/// falling back to their defaults.
pub fn decode_row(record: &StringRecord, columns_map: &ColumnMap) -> Option<Munro> {
    if record.len() > columns_map.column_count() {
        return None;
    }
    if record.iter().all(|cell| cell.trim().is_empty()) {
        return None;
    }

    let mut munro = Munro {
        running_no: int_field(record, columns_map, columns::RUNNING_NO),
        dobih_no: int_field(record, columns_map, columns::DOBIH_NUMBER),
        name: str_field(record, columns_map, columns::NAME),
        smc_section: str_field(record, columns_map, columns::SMC_SECTION),
        rhb_section: str_field(record, columns_map, columns::RHB_SECTION),
        height_m: float_field(record, columns_map, columns::HEIGHT_M),
        height_ft: int_field(record, columns_map, columns::HEIGHT_FT),
        map_50k: str_field(record, columns_map, columns::MAP_50K),
        map_25k: str_field(record, columns_map, columns::MAP_25K),
        grid_ref: str_field(record, columns_map, columns::GRID_REF),
        grid_ref_xy: str_field(record, columns_map, columns::GRID_REF_XY),
        easting: float_field(record, columns_map, columns::EASTING),
        northing: float_field(record, columns_map, columns::NORTHING),
        comments: str_field(record, columns_map, columns::COMMENTS),
        streetmap_url: str_field(record, columns_map, columns::STREETMAP),
        geograph_url: str_field(record, columns_map, columns::GEOGRAPH),
        hillbagging_url: str_field(record, columns_map, columns::HILL_BAGGING),
        ..Default::default()
    };

    // Coordinate derivation is skipped entirely unless both grid coordinates
    // are present; 0,0 is not an on-grid point for this dataset's domain.
    if munro.has_grid_coords() {
        let (lat, lon) = geodesy::osgrid_to_lat_lon(munro.easting, munro.northing);
        munro.latitude = Some(lat);
        munro.longitude = Some(lon);
    }

    // Classification derives from the survey column after all other fields
    munro.classification =
        Classification::from_survey_code(&str_field(record, columns_map, columns::SURVEY_2021));

    Some(munro)
}

/// Get a trimmed string cell by column name, defaulting to empty
fn str_field(record: &StringRecord, columns_map: &ColumnMap, name: &str) -> String {
    raw_field(record, columns_map, name).to_string()
}

/// Parse an integer cell by column name, defaulting to zero
fn int_field(record: &StringRecord, columns_map: &ColumnMap, name: &str) -> i32 {
    raw_field(record, columns_map, name).parse().unwrap_or(0)
}

/// Parse a float cell by column name, defaulting to zero
fn float_field(record: &StringRecord, columns_map: &ColumnMap, name: &str) -> f64 {
    raw_field(record, columns_map, name).parse().unwrap_or(0.0)
}

fn raw_field<'a>(record: &'a StringRecord, columns_map: &ColumnMap, name: &str) -> &'a str {
    columns_map
        .get(name)
        .and_then(|index| record.get(index))
        .map(str::trim)
        .unwrap_or("")
}
