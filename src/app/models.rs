//! Data models for the munro catalog
//!
//! This module contains the core data structures representing a single summit
//! entry from the munrotab listing, including its OS National Grid reference
//! and derived WGS84 coordinates.

use crate::constants::survey_codes;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Classification
// =============================================================================

/// Derived listing status of a summit
///
/// A pure function of the survey column: `MUN` maps to [`Classification::Munro`],
/// `TOP` to [`Classification::Top`], and anything else (including an absent
/// column) to [`Classification::Other`]. Never user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Classification {
    /// Distinct mountain over 3000 ft
    Munro,

    /// Subsidiary summit of a Munro
    Top,

    /// Deleted, demoted, or unclassified entry
    #[default]
    Other,
}

impl Classification {
    /// Derive the classification from a survey-column code
    pub fn from_survey_code(code: &str) -> Self {
        match code {
            survey_codes::MUNRO => Self::Munro,
            survey_codes::TOP => Self::Top,
            _ => Self::Other,
        }
    }

    /// Display text of the classification
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Munro => "Munro",
            Self::Top => "Top",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive match against user-supplied criterion text
    pub fn matches(&self, text: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(text.trim())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Summit Record Structure
// =============================================================================

/// One decoded summit entry from the munrotab listing
///
/// Immutable value data after construction. Numeric fields default to zero
/// when the source cell is missing or unparseable; string fields default to
/// empty. The derived coordinates are `Some` exactly when both grid
/// coordinates are nonzero, so "unset" stays distinguishable from the
/// (off-grid) point 0,0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Munro {
    /// Ordinal in the canonical listing
    pub running_no: i32,

    /// Stable identifier in the Database of British and Irish Hills
    pub dobih_no: i32,

    /// Summit name (e.g., "Ben Nevis")
    pub name: String,

    /// Scottish Mountaineering Club section grouping
    pub smc_section: String,

    /// Regional section grouping from the RHB survey
    pub rhb_section: String,

    /// Height above sea level in meters
    pub height_m: f64,

    /// Height above sea level in feet
    pub height_ft: i32,

    /// OS Landranger 1:50000 sheet reference
    pub map_50k: String,

    /// OS Explorer 1:25000 sheet reference
    pub map_25k: String,

    /// OS grid reference (e.g., "NN166712")
    pub grid_ref: String,

    /// Grid reference in letter-pair XY form
    pub grid_ref_xy: String,

    /// Grid easting in meters
    pub easting: f64,

    /// Grid northing in meters
    pub northing: f64,

    /// Derived WGS84 latitude in degrees, present iff both grid coordinates
    /// are nonzero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Derived WGS84 longitude in degrees, present iff both grid coordinates
    /// are nonzero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Derived listing status from the survey column
    pub classification: Classification,

    /// Free-text notes carried from the source table
    pub comments: String,

    /// Streetmap link for the summit
    pub streetmap_url: String,

    /// Geograph link for the summit
    pub geograph_url: String,

    /// Hill-bagging link for the summit
    pub hillbagging_url: String,
}

impl Munro {
    /// Check whether both grid coordinates are present (nonzero)
    pub fn has_grid_coords(&self) -> bool {
        self.easting != 0.0 && self.northing != 0.0
    }

    /// Derived location as (latitude, longitude), if populated
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
