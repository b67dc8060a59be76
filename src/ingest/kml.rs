//! Field boundary import from KML / KMZ files
//!
//! Boundary updates from the GIS group arrive as KML placemarks, one
//! polygon per field, with `lon,lat[,alt]` coordinate tuples. KMZ files
//! are zip archives holding a single KML document.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::geo;
use crate::types::FieldBoundary;

use super::IngestError;

/// Load field boundaries from a `.kml` or `.kmz` file.
pub fn load_boundary_file(path: &Path) -> Result<Vec<FieldBoundary>, IngestError> {
    let is_kmz = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("kmz"));

    let xml = if is_kmz {
        read_kmz(path)?
    } else {
        std::fs::read_to_string(path)?
    };

    parse_kml(&xml)
}

/// Pull the KML document out of a KMZ archive.
fn read_kmz(path: &Path) -> Result<String, IngestError> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.name().to_ascii_lowercase().ends_with(".kml") {
            let mut xml = String::new();
            entry.read_to_string(&mut xml)?;
            return Ok(xml);
        }
    }
    Err(IngestError::NoKmlEntry(path.to_path_buf()))
}

/// Parse placemark polygons from a KML document.
///
/// Placemarks without a name or with fewer than three vertices are skipped
/// with a warning rather than failing the whole import.
pub fn parse_kml(xml: &str) -> Result<Vec<FieldBoundary>, IngestError> {
    let mut reader = Reader::from_str(xml);

    let mut boundaries = Vec::new();
    let mut in_placemark = false;
    let mut in_name = false;
    let mut in_coordinates = false;
    let mut name = String::new();
    let mut ring: Vec<[f64; 2]> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"Placemark" => {
                    in_placemark = true;
                    name.clear();
                    ring.clear();
                }
                b"name" if in_placemark => in_name = true,
                b"coordinates" if in_placemark => in_coordinates = true,
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape()?;
                if in_name && name.is_empty() {
                    name = text.trim().to_string();
                } else if in_coordinates {
                    ring.extend(parse_coordinates(&text)?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"name" => in_name = false,
                b"coordinates" => in_coordinates = false,
                b"Placemark" => {
                    in_placemark = false;
                    if name.is_empty() {
                        warn!("Skipping unnamed placemark with {} vertices", ring.len());
                    } else if ring.len() < 3 {
                        warn!(field = %name, "Skipping placemark with fewer than 3 vertices");
                    } else {
                        // KML repeats the first vertex to close the ring
                        if ring.len() > 3 && ring.first() == ring.last() {
                            ring.pop();
                        }
                        let centroid = geo::ring_centroid(&ring)
                            .unwrap_or([0.0, 0.0]);
                        debug!(field = %name, vertices = ring.len(), "Parsed boundary placemark");
                        boundaries.push(FieldBoundary {
                            name: std::mem::take(&mut name),
                            ring: std::mem::take(&mut ring),
                            centroid,
                        });
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(boundaries)
}

/// Parse whitespace-separated `lon,lat[,alt]` tuples, projecting each to
/// UTM metres.
fn parse_coordinates(text: &str) -> Result<Vec<[f64; 2]>, IngestError> {
    let mut points = Vec::new();
    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let lon: f64 = parts
            .next()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| IngestError::MalformedCoordinates(tuple.to_string()))?;
        let lat: f64 = parts
            .next()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| IngestError::MalformedCoordinates(tuple.to_string()))?;
        let coord = geo::from_latlon(lat, lon)?;
        points.push([coord.easting, coord.northing]);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>BIG FLAT FIELD</name>
      <Polygon><outerBoundaryIs><LinearRing>
        <coordinates>
          -109.90,38.50,0
          -109.88,38.50,0
          -109.88,38.52,0
          -109.90,38.52,0
          -109.90,38.50,0
        </coordinates>
      </LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
    <Placemark>
      <name>DEGENERATE</name>
      <Polygon><outerBoundaryIs><LinearRing>
        <coordinates>-109.5,38.5,0 -109.4,38.5,0</coordinates>
      </LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
  </Document>
</kml>"#;

    #[test]
    fn parses_named_polygon_and_drops_closing_vertex() {
        let boundaries = parse_kml(SAMPLE).unwrap();
        assert_eq!(boundaries.len(), 1);
        let field = &boundaries[0];
        assert_eq!(field.name, "BIG FLAT FIELD");
        assert_eq!(field.ring.len(), 4);
        // Centroid lands inside the ring
        assert!(geo::ring_contains(&field.ring, field.centroid));
    }

    #[test]
    fn malformed_tuple_is_an_error() {
        let xml = r#"<kml><Placemark><name>X</name><coordinates>not-a-tuple</coordinates></Placemark></kml>"#;
        assert!(parse_kml(xml).is_err());
    }
}
