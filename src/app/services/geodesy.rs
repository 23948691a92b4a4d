//! OS National Grid to WGS84 coordinate conversion
//!
//! Implements the inverse Redfearn transverse Mercator projection for the
//! OSGB36 national grid on the Airy 1830 ellipsoid. The meridional arc is
//! solved by a bounded fixed-point iteration, then the standard VII-XII
//! series terms correct latitude (even powers of the easting offset) and
//! longitude (odd powers).

use crate::constants::osgb36::{
    AIRY_SEMI_MAJOR, AIRY_SEMI_MINOR, ARC_CONVERGENCE_METERS, CENTRAL_MERIDIAN_SCALE,
    ECCENTRICITY_SQ, FALSE_ORIGIN_EASTING, FALSE_ORIGIN_NORTHING, MAX_ARC_ITERATIONS,
    TRUE_ORIGIN_LAT, TRUE_ORIGIN_LON,
};

/// Convert OS grid coordinates to latitude and longitude in degrees
///
/// Pure and deterministic: the same input always produces bit-identical
/// output. There is no error path; out-of-domain input yields a geometrically
/// valid but geographically meaningless result, so validity of the grid
/// coordinates is the caller's responsibility.
pub fn osgrid_to_lat_lon(easting: f64, northing: f64) -> (f64, f64) {
    let a = AIRY_SEMI_MAJOR;
    let b = AIRY_SEMI_MINOR;
    let e2 = ECCENTRICITY_SQ;
    let n0 = FALSE_ORIGIN_NORTHING;
    let e0 = FALSE_ORIGIN_EASTING;
    let f0 = CENTRAL_MERIDIAN_SCALE;
    let lat0 = TRUE_ORIGIN_LAT;
    let lon0 = TRUE_ORIGIN_LON;

    let n = (a - b) / (a + b);

    // Solve latitude from the northing by fixed-point iteration over the
    // meridional arc. Terminates on the arc tolerance or the iteration cap,
    // whichever comes first.
    let mut lat = lat0;
    for _ in 0..MAX_ARC_ITERATIONS {
        let arc = meridional_arc(b, f0, n, lat, lat0);
        if (northing - n0 - arc).abs() < ARC_CONVERGENCE_METERS {
            break;
        }
        lat += (northing - n0 - arc) / (a * f0);
    }

    // Radii of curvature at the converged latitude
    let sin_lat = lat.sin();
    let nu = a * f0 / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let rho = a * f0 * (1.0 - e2) / (1.0 - e2 * sin_lat * sin_lat).powf(1.5);
    let eta2 = nu / rho - 1.0;

    let tan_lat = lat.tan();
    let sec_lat = 1.0 / lat.cos();

    // Redfearn series terms
    let vii = tan_lat / (2.0 * rho * nu);
    let viii = tan_lat / (24.0 * rho * nu.powi(3))
        * (5.0 + 3.0 * tan_lat.powi(2) + eta2 - 9.0 * tan_lat.powi(2) * eta2);
    let ix = tan_lat / (720.0 * rho * nu.powi(5))
        * (61.0 + 90.0 * tan_lat.powi(2) + 45.0 * tan_lat.powi(4));
    let x = sec_lat / nu;
    let xi = sec_lat / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan_lat.powi(2));
    let xii = sec_lat / (120.0 * nu.powi(5))
        * (5.0 + 28.0 * tan_lat.powi(2) + 24.0 * tan_lat.powi(4));

    let de = easting - e0;

    let lat_rad = lat - vii * de.powi(2) + viii * de.powi(4) - ix * de.powi(6);
    let lon_rad = lon0 + x * de - xi * de.powi(3) + xii * de.powi(5);

    (lat_rad.to_degrees(), lon_rad.to_degrees())
}

/// Meridional arc length from the true origin to `lat`
///
/// Standard four-term series expansion in `n = (a-b)/(a+b)`.
fn meridional_arc(b: f64, f0: f64, n: f64, lat: f64, lat0: f64) -> f64 {
    b * f0
        * ((1.0 + n + (5.0 / 4.0) * n * n + (5.0 / 4.0) * n * n * n) * (lat - lat0)
            - (3.0 * n + 3.0 * n * n + (21.0 / 8.0) * n * n * n)
                * (lat - lat0).sin()
                * (lat + lat0).cos()
            + ((15.0 / 8.0) * n * n + (15.0 / 8.0) * n * n * n)
                * (2.0 * (lat - lat0)).sin()
                * (2.0 * (lat + lat0)).cos()
            - (35.0 / 24.0) * n * n * n * (3.0 * (lat - lat0)).sin() * (3.0 * (lat + lat0)).cos())
}
