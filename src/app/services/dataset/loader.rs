//! Dataset loading from the munrotab CSV
//!
//! This module drives the row decoder over the backing CSV in one sequential
//! pass. Failure handling follows a strict taxonomy: failure to open the file
//! or to read the header row is terminal, as is a structural read failure
//! mid-stream; a row the decoder cannot use is skipped; a single bad numeric
//! cell merely defaults its field.

use super::Dataset;
use super::decoder::{ColumnMap, decode_row};
use crate::{Error, Result};
use csv::StringRecord;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Statistics from one load pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows read from the source (excluding the header)
    pub rows_read: usize,

    /// Rows decoded into records
    pub records_loaded: usize,

    /// Rows skipped as structurally unusable
    pub rows_skipped: usize,
}

impl Dataset {
    /// Load a dataset from a munrotab CSV file
    ///
    /// Reads the header row first, then decodes every data row in order,
    /// accumulating the records that decode. The returned dataset preserves
    /// row order and is valid (possibly empty) whenever header parsing
    /// succeeded, even if every data row was skipped.
    ///
    /// # Errors
    /// * [`Error::DatasetNotFound`] if the path does not exist
    /// * [`Error::CsvParsing`] if the file cannot be opened or a structural
    ///   read failure occurs mid-stream
    /// * [`Error::MissingHeader`] if the file holds no header row
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let (dataset, _) = Self::load_with_stats(path)?;
        Ok(dataset)
    }

    /// Load a dataset and report per-row statistics alongside it
    pub fn load_with_stats(path: impl AsRef<Path>) -> Result<(Self, LoadStats)> {
        let path = path.as_ref();
        debug!("Loading munro dataset from {}", path.display());

        if !path.exists() {
            return Err(Error::dataset_not_found(path));
        }

        // flexible: the published table carries ragged rows, and row-length
        // tolerance is the decoder's decision, not the reader's
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                Error::csv_parsing(
                    path.to_string_lossy().to_string(),
                    "Failed to open CSV file".to_string(),
                    Some(e),
                )
            })?;

        let mut record = StringRecord::new();

        // Exactly one header row; failing to read it is terminal
        let has_header = reader.read_record(&mut record).map_err(|e| {
            Error::csv_parsing(
                path.to_string_lossy().to_string(),
                "Failed to read CSV header row".to_string(),
                Some(e),
            )
        })?;
        if !has_header {
            return Err(Error::missing_header(path.to_string_lossy().to_string()));
        }

        let columns_map = ColumnMap::from_headers(&record);
        debug!("Mapped {} header columns", columns_map.column_count());

        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        // Structural read failures propagate immediately; decode failures skip
        // the row and continue
        while reader.read_record(&mut record).map_err(|e| {
            Error::csv_parsing(
                path.to_string_lossy().to_string(),
                "Failed to read CSV record".to_string(),
                Some(e),
            )
        })? {
            stats.rows_read += 1;
            match decode_row(&record, &columns_map) {
                Some(munro) => {
                    records.push(munro);
                    stats.records_loaded += 1;
                }
                None => {
                    debug!(
                        "Skipping unusable row {} ({} cells)",
                        stats.rows_read,
                        record.len()
                    );
                    stats.rows_skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} munro records from {} ({} rows read, {} skipped)",
            stats.records_loaded,
            path.display(),
            stats.rows_read,
            stats.rows_skipped
        );

        Ok((Dataset::new(records), stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Classification;
    use std::fs;
    use tempfile::TempDir;

    /// Write a CSV fixture and return its path inside the temp dir
    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// A munrotab-shaped fixture, including the quoted embedded-newline
    /// height-in-feet header the published table uses
    fn munrotab_fixture() -> String {
        concat!(
            "Running No,DoBIH Number,Name,SMC Section,Height (m),\"Height\n(ft)\",",
            "Grid Ref,xcoord,ycoord,2021\n",
            "1,278,Ben Nevis,4.B,1344.5,4411,NN166712,216666,771288,MUN\n",
            "2,279,Carn Dearg,4.B,1221,4006,NN158719,215800,771900,TOP\n",
            "3,512,Ben Lawers,2.A,1214,3983,NN635414,263500,741400,MUN\n",
        )
        .to_string()
    }

    #[test]
    fn test_load_full_fixture() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "munrotab.csv", &munrotab_fixture());

        let (dataset, stats) = Dataset::load_with_stats(&path).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.records_loaded, 3);
        assert_eq!(stats.rows_skipped, 0);

        // Row order is preserved
        let names: Vec<&str> = dataset.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ben Nevis", "Carn Dearg", "Ben Lawers"]);

        let ben_nevis = &dataset.records()[0];
        assert_eq!(ben_nevis.height_ft, 4411);
        assert_eq!(ben_nevis.classification, Classification::Munro);
        assert!(ben_nevis.latitude.is_some());
    }

    #[test]
    fn test_load_nonexistent_path_is_terminal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-file.csv");

        let result = Dataset::load(&missing);
        assert!(matches!(result, Err(Error::DatasetNotFound { .. })));
    }

    #[test]
    fn test_header_only_file_yields_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.csv", "Running No,Name,Height (m)\n");

        let (dataset, stats) = Dataset::load_with_stats(&path).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(stats.rows_read, 0);
    }

    #[test]
    fn test_empty_file_is_missing_header() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "empty.csv", "");

        let result = Dataset::load(&path);
        assert!(matches!(result, Err(Error::MissingHeader { .. })));
    }

    #[test]
    fn test_unusable_rows_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let content = concat!(
            "Running No,Name,Height (m)\n",
            "1,Ben Nevis,1344.5\n",
            ",,\n",                            // blank cells: skipped
            "2,Ben Macdui,1309,extra,cells\n", // wider than the header: skipped
            "3,Braeriach,1296\n",
        );
        let path = write_fixture(&dir, "ragged.csv", content);

        let (dataset, stats) = Dataset::load_with_stats(&path).unwrap();
        assert_eq!(stats.rows_read, 4);
        assert_eq!(stats.records_loaded, 2);
        assert_eq!(stats.rows_skipped, 2);

        let names: Vec<&str> = dataset.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ben Nevis", "Braeriach"]);
    }

    #[test]
    fn test_every_row_skipped_still_yields_valid_dataset() {
        let dir = TempDir::new().unwrap();
        let content = concat!(
            "Running No,Name,Height (m)\n",
            ",,\n",
            "1,Ben Nevis,1344.5,extra\n",
        );
        let path = write_fixture(&dir, "all_skipped.csv", content);

        let (dataset, stats) = Dataset::load_with_stats(&path).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(stats.rows_skipped, 2);
    }

    #[test]
    fn test_reordered_and_recased_columns_load() {
        let dir = TempDir::new().unwrap();
        let content = concat!(
            "name,YCOORD,xcoord,height (m),2021\n",
            "Slioch,819187,200568,980.8,MUN\n",
        );
        let path = write_fixture(&dir, "reordered.csv", content);

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 1);

        let slioch = &dataset.records()[0];
        assert_eq!(slioch.name, "Slioch");
        assert_eq!(slioch.height_m, 980.8);
        assert_eq!(slioch.easting, 200568.0);
        assert_eq!(slioch.northing, 819187.0);
        assert!(slioch.latitude.is_some());
    }

    #[test]
    fn test_quoted_cells_with_leading_whitespace() {
        let dir = TempDir::new().unwrap();
        let content = concat!(
            "Running No,Name,Comments\n",
            "1, Ben Vorlich ,\"Two summits, south top higher\"\n",
        );
        let path = write_fixture(&dir, "quoted.csv", content);

        let dataset = Dataset::load(&path).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.name, "Ben Vorlich");
        assert_eq!(record.comments, "Two summits, south top higher");
    }
}
