//! Application constants for the munro catalog
//!
//! This module contains the source column vocabulary, classification codes,
//! and the OSGB36 projection constants used throughout the catalog.

// =============================================================================
// Dataset Files
// =============================================================================

/// Default path to the munrotab CSV relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/munrotab_v8.0.1.csv";

// =============================================================================
// Source Column Names
// =============================================================================

/// Column headers as they appear in the munrotab CSV
///
/// Lookup is case-insensitive and order-independent, but matching is literal:
/// the height-in-feet header really does contain an embedded line break in
/// the published table.
pub mod columns {
    pub const RUNNING_NO: &str = "Running No";
    pub const DOBIH_NUMBER: &str = "DoBIH Number";
    pub const NAME: &str = "Name";
    pub const SMC_SECTION: &str = "SMC Section";
    pub const RHB_SECTION: &str = "RHB Section";
    pub const HEIGHT_M: &str = "Height (m)";
    pub const HEIGHT_FT: &str = "Height\n(ft)";
    pub const MAP_50K: &str = "Map 1:50k";
    pub const MAP_25K: &str = "Map 1:25k";
    pub const GRID_REF: &str = "Grid Ref";
    pub const GRID_REF_XY: &str = "GridRefXY";
    pub const EASTING: &str = "xcoord";
    pub const NORTHING: &str = "ycoord";
    pub const STREETMAP: &str = "Streetmap";
    pub const GEOGRAPH: &str = "Geograph";
    pub const HILL_BAGGING: &str = "Hill-bagging";
    pub const COMMENTS: &str = "Comments";

    /// Categorical column carrying the most recent survey's listing status
    pub const SURVEY_2021: &str = "2021";
}

// =============================================================================
// Classification Codes
// =============================================================================

/// Listing-status codes used in the survey column
pub mod survey_codes {
    /// Distinct mountain over 3000 ft
    pub const MUNRO: &str = "MUN";

    /// Subsidiary summit of a Munro
    pub const TOP: &str = "TOP";
}

// =============================================================================
// OSGB36 National Grid Projection Constants
// =============================================================================

/// Constants of the Airy 1830 ellipsoid and the OSGB36 grid definition
///
/// Used by the inverse Redfearn transverse Mercator projection that derives
/// WGS84 latitude/longitude from grid eastings/northings.
pub mod osgb36 {
    /// Semi-major axis of the Airy 1830 ellipsoid (meters)
    pub const AIRY_SEMI_MAJOR: f64 = 6_377_563.396;

    /// Semi-minor axis of the Airy 1830 ellipsoid (meters)
    pub const AIRY_SEMI_MINOR: f64 = 6_356_256.910;

    /// First eccentricity squared of the Airy 1830 ellipsoid
    pub const ECCENTRICITY_SQ: f64 = 0.00667054;

    /// Northing of the grid false origin (meters)
    pub const FALSE_ORIGIN_NORTHING: f64 = -100_000.0;

    /// Easting of the grid false origin (meters)
    pub const FALSE_ORIGIN_EASTING: f64 = 400_000.0;

    /// Scale factor on the central meridian
    pub const CENTRAL_MERIDIAN_SCALE: f64 = 0.9996012717;

    /// Latitude of the true origin, 49 degrees N (radians)
    pub const TRUE_ORIGIN_LAT: f64 = 0.855211333;

    /// Longitude of the true origin, 2 degrees W (radians)
    pub const TRUE_ORIGIN_LON: f64 = -0.034906585;

    /// Meridional arc convergence tolerance (meters)
    pub const ARC_CONVERGENCE_METERS: f64 = 0.01;

    /// Hard cap on meridional arc iterations
    ///
    /// The fixed-point solve converges in 3-4 iterations for on-grid input;
    /// the cap guarantees termination for pathological input, with the last
    /// estimate accepted.
    pub const MAX_ARC_ITERATIONS: usize = 10;
}

// =============================================================================
// National Grid Coverage
// =============================================================================

/// Nominal real-world coverage of the OS National Grid in WGS84 degrees
pub mod grid_coverage {
    pub const MIN_LAT: f64 = 49.0;
    pub const MAX_LAT: f64 = 61.0;
    pub const MIN_LON: f64 = -8.0;
    pub const MAX_LON: f64 = 2.0;
}
