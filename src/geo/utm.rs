//! WGS84 / UTM conversion
//!
//! Forward and inverse transverse Mercator projection using the USGS
//! (Snyder) series expansion, the same formulation the survey data was
//! produced with. Accuracy is well under a metre across a zone, which is
//! far tighter than the survey data itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// WGS84 Constants
// ============================================================================

/// UTM scale factor at the central meridian
const K0: f64 = 0.9996;

/// WGS84 equatorial radius (m)
const R: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared
const E: f64 = 0.006_694_38;

const E2: f64 = E * E;
const E3: f64 = E2 * E;
/// e'^2, second eccentricity squared
const E_P2: f64 = E / (1.0 - E);

const M1: f64 = 1.0 - E / 4.0 - 3.0 * E2 / 64.0 - 5.0 * E3 / 256.0;
const M2: f64 = 3.0 * E / 8.0 + 3.0 * E2 / 32.0 + 45.0 * E3 / 1024.0;
const M3: f64 = 15.0 * E2 / 256.0 + 45.0 * E3 / 1024.0;
const M4: f64 = 35.0 * E3 / 3072.0;

/// Latitude bands from 80S to 84N
const BAND_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWXX";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum UtmError {
    #[error("latitude {0} outside UTM range (-80.0 to 84.0)")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside range (-180.0 to 180.0)")]
    LongitudeOutOfRange(f64),
    #[error("easting {0} outside range (100000 to 999999)")]
    EastingOutOfRange(f64),
    #[error("northing {0} outside range (0 to 10000000)")]
    NorthingOutOfRange(f64),
    #[error("zone number {0} outside range (1 to 60)")]
    ZoneOutOfRange(u8),
}

// ============================================================================
// Coordinate type
// ============================================================================

/// A projected UTM coordinate with its zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmCoord {
    pub easting: f64,
    pub northing: f64,
    pub zone: u8,
    pub band: char,
}

impl UtmCoord {
    pub fn is_northern(&self) -> bool {
        self.band >= 'N'
    }
}

// ============================================================================
// Forward projection
// ============================================================================

/// Project a WGS84 lat/lon to UTM easting/northing.
///
/// Zone selection follows the standard 6 degree grid with the Norway and
/// Svalbard exceptions.
pub fn from_latlon(lat: f64, lon: f64) -> Result<UtmCoord, UtmError> {
    if !(-80.0..=84.0).contains(&lat) {
        return Err(UtmError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(UtmError::LongitudeOutOfRange(lon));
    }

    let zone = zone_number(lat, lon);
    let band = band_letter(lat);

    let lat_rad = lat.to_radians();
    let lat_sin = lat_rad.sin();
    let lat_cos = lat_rad.cos();
    let lat_tan = lat_rad.tan();
    let t = lat_tan * lat_tan;

    let lon_rad = lon.to_radians();
    let central = central_meridian(zone).to_radians();
    // Wrap the meridian offset into (-pi, pi]
    let a = lat_cos * mod_angle(lon_rad - central);

    let n = R / (1.0 - E * lat_sin * lat_sin).sqrt();
    let c = E_P2 * lat_cos * lat_cos;

    let m = R
        * (M1 * lat_rad - M2 * (2.0 * lat_rad).sin() + M3 * (4.0 * lat_rad).sin()
            - M4 * (6.0 * lat_rad).sin());

    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let easting = K0 * n * (a + a3 / 6.0 * (1.0 - t + c)
        + a5 / 120.0 * (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * E_P2))
        + 500_000.0;

    let mut northing = K0
        * (m + n * lat_tan
            * (a2 / 2.0
                + a4 / 24.0 * (5.0 - t + 9.0 * c + 4.0 * c * c)
                + a6 / 720.0 * (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * E_P2)));
    if lat < 0.0 {
        northing += 10_000_000.0;
    }

    Ok(UtmCoord {
        easting,
        northing,
        zone,
        band,
    })
}

// ============================================================================
// Inverse projection
// ============================================================================

/// Unproject a UTM coordinate back to WGS84 lat/lon degrees.
pub fn to_latlon(coord: UtmCoord) -> Result<(f64, f64), UtmError> {
    if !(100_000.0..1_000_000.0).contains(&coord.easting) {
        return Err(UtmError::EastingOutOfRange(coord.easting));
    }
    if !(0.0..=10_000_000.0).contains(&coord.northing) {
        return Err(UtmError::NorthingOutOfRange(coord.northing));
    }
    if coord.zone == 0 || coord.zone > 60 {
        return Err(UtmError::ZoneOutOfRange(coord.zone));
    }

    let x = coord.easting - 500_000.0;
    let y = if coord.is_northern() {
        coord.northing
    } else {
        coord.northing - 10_000_000.0
    };

    // Footpoint latitude series
    let sqrt_e = (1.0 - E).sqrt();
    let e_ = (1.0 - sqrt_e) / (1.0 + sqrt_e);
    let e2 = e_ * e_;
    let e3 = e2 * e_;
    let e4 = e3 * e_;
    let e5 = e4 * e_;

    let p2 = 3.0 / 2.0 * e_ - 27.0 / 32.0 * e3 + 269.0 / 512.0 * e5;
    let p3 = 21.0 / 16.0 * e2 - 55.0 / 32.0 * e4;
    let p4 = 151.0 / 96.0 * e3 - 417.0 / 128.0 * e5;
    let p5 = 1097.0 / 512.0 * e4;

    let m = y / K0;
    let mu = m / (R * M1);

    let p_rad = mu
        + p2 * (2.0 * mu).sin()
        + p3 * (4.0 * mu).sin()
        + p4 * (6.0 * mu).sin()
        + p5 * (8.0 * mu).sin();

    let p_sin = p_rad.sin();
    let p_cos = p_rad.cos();
    let p_tan = p_rad.tan();
    let t = p_tan * p_tan;

    let ep_sin = 1.0 - E * p_sin * p_sin;
    let ep_sin_sqrt = ep_sin.sqrt();

    let n = R / ep_sin_sqrt;
    let r = (1.0 - E) / ep_sin;

    let c = E_P2 * p_cos * p_cos;
    let c2 = c * c;

    let d = x / (n * K0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let lat = p_rad
        - (p_tan / r)
            * (d2 / 2.0 - d4 / 24.0 * (5.0 + 3.0 * t + 10.0 * c - 4.0 * c2 - 9.0 * E_P2)
                + d6 / 720.0 * (61.0 + 90.0 * t + 298.0 * c + 45.0 * t * t - 252.0 * E_P2
                    - 3.0 * c2));

    let lon = mod_angle(
        (d - d3 / 6.0 * (1.0 + 2.0 * t + c)
            + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * t - 3.0 * c2 + 8.0 * E_P2 + 24.0 * t * t))
            / p_cos
            + central_meridian(coord.zone).to_radians(),
    );

    Ok((lat.to_degrees(), lon.to_degrees()))
}

// ============================================================================
// Zone helpers
// ============================================================================

/// Standard zone grid with the Norway and Svalbard exceptions.
fn zone_number(lat: f64, lon: f64) -> u8 {
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }
    if (72.0..=84.0).contains(&lat) && lon >= 0.0 {
        if lon < 9.0 {
            return 31;
        } else if lon < 21.0 {
            return 33;
        } else if lon < 33.0 {
            return 35;
        } else if lon < 42.0 {
            return 37;
        }
    }
    (((lon + 180.0) / 6.0) as u8 % 60) + 1
}

fn band_letter(lat: f64) -> char {
    let idx = ((lat + 80.0) / 8.0) as usize;
    BAND_LETTERS[idx.min(BAND_LETTERS.len() - 1)] as char
}

/// Central meridian of a zone, in degrees.
fn central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

/// Wrap an angle into (-pi, pi].
fn mod_angle(value: f64) -> f64 {
    use std::f64::consts::PI;
    (value + PI).rem_euclid(2.0 * PI) - PI
}
