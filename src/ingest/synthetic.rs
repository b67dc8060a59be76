//! Synthetic basin generator
//!
//! Produces a small, plausible basin for demos and integration tests:
//! a 6x6 section grid, two field boundaries, a few dozen wells with
//! deviated/planned/vertical trajectories, production histories for the
//! producers, and a couple of board matters. Deterministic for a given
//! seed.

use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use rusqlite::Connection;
use std::path::Path;

use crate::geo;

use super::db::{
    RawBoardLinkRow, RawBoardRow, RawFieldRow, RawOwnerRow, RawPlatRow, RawProductionRow,
    RawSurveyRow, RawWellInfo, RawTables,
};
use super::IngestError;

// ============================================================================
// Basin Constants
// ============================================================================

/// Basin centre (Uinta basin, zone 12T)
const CENTER_LAT: f64 = 40.25;
const CENTER_LON: f64 = -109.55;

/// Section edge length (m); one mile
const SECTION_EDGE_M: f64 = 1609.34;

/// Grid dimension: 6x6 sections, numbered 1..=36
const GRID: usize = 6;

const OPERATORS: [&str; 4] = [
    "ACME ENERGY LLC",
    "UINTA RESOURCES INC",
    "CASTLE PEAK OPERATING",
    "GREEN RIVER PETROLEUM",
];

const NAME_STEMS: [&str; 4] = ["FEDERAL", "STATE", "UTE TRIBAL", "BONANZA"];

const MONTHS: [&str; 4] = ["February", "March", "June", "September"];

/// Oil and gas price assumptions for potential profit columns
const OIL_PRICE_USD: f64 = 75.0;
const GAS_PRICE_USD: f64 = 3.4;

// ============================================================================
// Configuration
// ============================================================================

/// Knobs for the generated basin.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub well_count: usize,
    pub seed: u64,
    pub board_year: i32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            well_count: 40,
            seed: 47,
            board_year: 2024,
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate raw tables for a synthetic basin.
pub fn generate(config: &SyntheticConfig) -> RawTables {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let origin = geo::from_latlon(CENTER_LAT, CENTER_LON)
        .expect("basin centre is a valid coordinate");
    let origin_x = origin.easting - (GRID as f64 / 2.0) * SECTION_EDGE_M;
    let origin_y = origin.northing - (GRID as f64 / 2.0) * SECTION_EDGE_M;

    let mut tables = RawTables::default();

    generate_plats(&mut tables, origin_x, origin_y, origin.zone, origin.band);
    generate_fields(&mut tables, origin_x, origin_y);
    generate_owners(&mut tables, &mut rng);
    generate_wells(&mut tables, config, &mut rng, origin_x, origin_y);
    generate_board_matters(&mut tables, config.board_year);

    tables
}

/// Section grid as plat vertices in lat/lon, the shape the state publishes.
fn generate_plats(tables: &mut RawTables, origin_x: f64, origin_y: f64, zone: u8, band: char) {
    for row in 0..GRID {
        for col in 0..GRID {
            let sec = (row * GRID + col + 1) as i64;
            let conc = super::normalize::pack_conc_code(sec, 23, "S", 2, "W", "B");
            let x0 = origin_x + col as f64 * SECTION_EDGE_M;
            let y0 = origin_y + row as f64 * SECTION_EDGE_M;
            let corners = [
                [x0, y0],
                [x0 + SECTION_EDGE_M, y0],
                [x0 + SECTION_EDGE_M, y0 + SECTION_EDGE_M],
                [x0, y0 + SECTION_EDGE_M],
            ];
            for corner in corners {
                let (lat, lon) = geo::to_latlon(geo::UtmCoord {
                    easting: corner[0],
                    northing: corner[1],
                    zone,
                    band,
                })
                .expect("grid corner stays inside the zone");
                tables.plats.push(RawPlatRow {
                    lat: Some(lat),
                    lon: Some(lon),
                    conc: conc.clone(),
                });
            }
        }
    }
}

/// Two rectangular field boundaries over the west and east halves.
fn generate_fields(tables: &mut RawTables, origin_x: f64, origin_y: f64) {
    let half = GRID as f64 / 2.0 * SECTION_EDGE_M;
    let full = GRID as f64 * SECTION_EDGE_M;
    let fields = [
        ("BIG FLAT FIELD", origin_x, origin_y, half, full),
        ("NATURAL BUTTES FIELD", origin_x + half, origin_y, half, full),
    ];
    for (name, x0, y0, w, h) in fields {
        let corners = [[x0, y0], [x0 + w, y0], [x0 + w, y0 + h], [x0, y0 + h]];
        for corner in corners {
            tables.fields.push(RawFieldRow {
                field_name: name.to_string(),
                easting: corner[0],
                northing: corner[1],
            });
        }
    }
}

fn generate_owners(tables: &mut RawTables, rng: &mut StdRng) {
    let agencies = ["Federal", "State", "Fee", "Tribal"];
    let owners = ["BLM", "SITLA", "PRIVATE HOLDINGS", "UTE INDIAN TRIBE"];
    for sec in 1..=(GRID * GRID) as i64 {
        let idx = rng.gen_range(0..agencies.len());
        tables.owners.push(RawOwnerRow {
            conc: super::normalize::pack_conc_code(sec, 23, "S", 2, "W", "B"),
            owner: owners[idx].to_string(),
            agency: agencies[idx].to_string(),
        });
    }
}

fn generate_wells(
    tables: &mut RawTables,
    config: &SyntheticConfig,
    rng: &mut StdRng,
    origin_x: f64,
    origin_y: f64,
) {
    let elevation_dist = Normal::new(5200.0, 150.0).expect("valid distribution");
    let lateral_dist = Normal::<f64>::new(4500.0, 900.0).expect("valid distribution");
    let extent = GRID as f64 * SECTION_EDGE_M;

    for i in 0..config.well_count {
        let api = format!("43013{:05}", 10_000 + i);
        let stem = NAME_STEMS[i % NAME_STEMS.len()];
        let name = format!("{} {}-{}", stem, 1 + i % 16, 1 + i % 36);
        let operator = OPERATORS[i % OPERATORS.len()].to_string();

        // Weighted status mix: mostly producing, some shut-in, a few
        // drilling and abandoned, the rest permit tail
        let status = match rng.gen_range(0..10) {
            0..=4 => "Producing",
            5..=6 => "Shut-in",
            7 => "Drilling",
            8 => "Plugged & Abandoned",
            _ => "Approved Permit",
        };
        let well_type = match rng.gen_range(0..10) {
            0..=4 => "Oil Well",
            5..=7 => "Gas Well",
            8 => "Water Disposal Well",
            _ => "Dry Hole",
        };

        let elevation = elevation_dist.sample(rng);
        let spud = if status == "Approved Permit" {
            None
        } else {
            Some(format!(
                "{}-{:02}-15",
                config.board_year - 1 - rng.gen_range(0..6),
                rng.gen_range(1..=12)
            ))
        };

        let sec = 1 + (i % (GRID * GRID)) as i64;
        let month = MONTHS[i % MONTHS.len()];
        let docket = format!(
            "{}-{:02} Docket",
            config.board_year,
            super::normalize::month_number(month).unwrap_or(1)
        );

        tables.wells.push(RawWellInfo {
            well_id: api.clone(),
            well_name: name,
            operator,
            work_type: "DRILL".to_string(),
            status: status.to_string(),
            well_type: well_type.to_string(),
            field_name: Some(if i % 2 == 0 { "BIG FLAT" } else { "NATURAL BUTTES" }.to_string()),
            elevation: Some(elevation),
            dry_spud: spud,
            board_year: config.board_year,
            docket_month: month.to_string(),
            board_docket: docket,
            conc_code: Some(super::normalize::pack_conc_code(sec, 23, "S", 2, "W", "B")),
            mineral_lease: Some(format!("ML-{:05}", 40_000 + i)),
        });

        // Surface location anywhere on the grid
        let shl_x = origin_x + rng.gen::<f64>() * extent;
        let shl_y = origin_y + rng.gen::<f64>() * extent;

        let vertical = i % 3 == 0;
        if vertical {
            push_vertical_survey(tables, &api, shl_x, shl_y, 8000.0);
        } else {
            let lateral: f64 = lateral_dist.sample(rng).max(1000.0);
            let azimuth = rng.gen::<f64>() * std::f64::consts::TAU;
            push_deviated_survey(tables, &api, "asdrilled", shl_x, shl_y, lateral, azimuth);
            // Permitted path diverges slightly from what got drilled
            push_deviated_survey(tables, &api, "planned", shl_x, shl_y, lateral * 1.05, azimuth + 0.03);
        }

        if status == "Producing" || status == "Shut-in" {
            push_production(tables, &api, well_type, config.board_year, rng);
        }
    }
}

fn push_vertical_survey(tables: &mut RawTables, api: &str, x: f64, y: f64, td: f64) {
    let mut md = 0.0;
    while md <= td {
        tables.surveys.push(RawSurveyRow {
            api_number: api.to_string(),
            x,
            y,
            measured_depth: Some(md),
            true_vertical_depth: Some(md),
            citing_type: "vertical".to_string(),
        });
        md += 500.0;
    }
}

/// Build-and-hold profile: vertical to kickoff, curve, then a flat lateral.
fn push_deviated_survey(
    tables: &mut RawTables,
    api: &str,
    citing_type: &str,
    shl_x: f64,
    shl_y: f64,
    lateral_ft: f64,
    azimuth: f64,
) {
    let kickoff_ft = 6500.0;
    let build_ft = 1500.0;
    let tvd_target = kickoff_ft + build_ft * 0.64;
    let step_ft = 250.0;
    let (dx, dy) = (azimuth.cos(), azimuth.sin());

    let mut md = 0.0;
    let total = kickoff_ft + build_ft + lateral_ft;
    while md <= total {
        let (offset_ft, tvd) = if md <= kickoff_ft {
            (0.0, md)
        } else if md <= kickoff_ft + build_ft {
            // Quarter-circle build section
            let frac = (md - kickoff_ft) / build_ft;
            let angle = frac * std::f64::consts::FRAC_PI_2;
            (
                build_ft * (1.0 - angle.cos()) * 0.64,
                kickoff_ft + build_ft * angle.sin() * 0.64,
            )
        } else {
            (build_ft * 0.64 + (md - kickoff_ft - build_ft), tvd_target)
        };
        let offset_m = offset_ft * 0.3048;
        tables.surveys.push(RawSurveyRow {
            api_number: api.to_string(),
            x: shl_x + dx * offset_m,
            y: shl_y + dy * offset_m,
            measured_depth: Some(md),
            true_vertical_depth: Some(tvd),
            citing_type: citing_type.to_string(),
        });
        md += step_ft;
    }
}

/// Two years of declining monthly production with price-based profit.
fn push_production(
    tables: &mut RawTables,
    api: &str,
    well_type: &str,
    board_year: i32,
    rng: &mut StdRng,
) {
    let oil_heavy = well_type == "Oil Well";
    let base_oil = if oil_heavy { 3200.0 } else { 250.0 };
    let base_gas = if oil_heavy { 1800.0 } else { 9500.0 };

    for m in 0..24u32 {
        let year = board_year - 2 + (m / 12) as i32;
        let month = 1 + m % 12;
        let decline = 0.97_f64.powi(m as i32);
        let noise = 0.9 + rng.gen::<f64>() * 0.2;
        let oil = base_oil * decline * noise;
        let gas = base_gas * decline * noise;
        tables.production.push(RawProductionRow {
            well_id: api.to_string(),
            date: format!("{year}-{month:02}-01"),
            oil_bbl: oil,
            gas_mcf: gas,
            oil_profit: oil * OIL_PRICE_USD,
            gas_profit: gas * GAS_PRICE_USD,
        });
    }
}

fn generate_board_matters(tables: &mut RawTables, board_year: i32) {
    let causes = [
        ("139-32", "Spacing for the Big Flat drilling unit", "Spacing", [1_i64, 2, 7, 8]),
        ("142-07", "Pooling of interests in the Natural Buttes unit", "Pooling", [21, 22, 27, 28]),
    ];
    for (cause, quip, order_type, sections) in causes {
        for sec in sections {
            tables.board.push(RawBoardRow {
                cause_number: cause.to_string(),
                quip: quip.to_string(),
                order_type: order_type.to_string(),
                effective_date: Some(format!("{board_year}-03-01")),
                end_date: None,
                board_year,
                docket_month: "March".to_string(),
                sec,
                township: 23,
                township_dir: "S".to_string(),
                range: 2,
                range_dir: "W".to_string(),
                pm: "B".to_string(),
            });
        }
        tables.board_links.push(RawBoardLinkRow {
            cause: cause.to_string(),
            description: "Final order".to_string(),
            filepath: format!("https://ogm.example.gov/orders/{cause}.pdf"),
            document_date: Some(format!("{board_year}-03-10")),
        });
    }
}

// ============================================================================
// Database writer
// ============================================================================

/// Write raw tables into a fresh SQLite database at `path`.
///
/// Used by the `demo` subcommand and by integration tests to produce a
/// store the normal ingest path can load.
pub fn write_database(tables: &RawTables, path: &Path) -> Result<(), IngestError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = Connection::open(path)?;
    write_into(tables, &mut conn)
}

/// Schema + insert pass against an open connection.
pub fn write_into(tables: &RawTables, conn: &mut Connection) -> Result<(), IngestError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS WellInfo (
          WellID TEXT NOT NULL,
          WellName TEXT NOT NULL,
          entityname TEXT NOT NULL,
          WorkType TEXT NOT NULL,
          CurrentWellStatus TEXT NOT NULL,
          CurrentWellType TEXT NOT NULL,
          FieldName TEXT,
          Elevation REAL,
          DrySpud TEXT,
          Board_Year INTEGER NOT NULL,
          Docket_Month TEXT NOT NULL,
          Board_Docket TEXT NOT NULL,
          ConcCode TEXT,
          "Mineral Lease" TEXT
        );
        CREATE TABLE IF NOT EXISTS DX (
          APINumber TEXT NOT NULL,
          X REAL NOT NULL,
          Y REAL NOT NULL,
          MeasuredDepth REAL,
          TrueVerticalDepth REAL,
          CitingType TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS PlatData (
          Lat REAL,
          Lon REAL,
          Conc TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS Field (
          Field_Name TEXT NOT NULL,
          Easting REAL NOT NULL,
          Northing REAL NOT NULL
        );
        CREATE TABLE IF NOT EXISTS Owner (
          Conc TEXT NOT NULL,
          Owner TEXT NOT NULL,
          Agency TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS Production (
          WellID TEXT NOT NULL,
          Date TEXT NOT NULL,
          "Oil Volume (bbl)" REAL,
          "Gas Volume (mcf)" REAL,
          "Potential Oil Profit" REAL,
          "Potential Gas Profit" REAL
        );
        CREATE TABLE IF NOT EXISTS BoardData (
          CauseNumber TEXT NOT NULL,
          Quip TEXT NOT NULL,
          OrderType TEXT NOT NULL,
          EffectiveDate TEXT,
          EndDate TEXT,
          Board_Year INTEGER NOT NULL,
          Docket_Month TEXT NOT NULL,
          Sec INTEGER NOT NULL,
          Township INTEGER NOT NULL,
          TownshipDir TEXT NOT NULL,
          "Range" INTEGER NOT NULL,
          RangeDir TEXT NOT NULL,
          PM TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS BoardDataLinks (
          Cause TEXT NOT NULL,
          Description TEXT NOT NULL,
          Filepath TEXT NOT NULL,
          DocumentDate TEXT
        );
        "#,
    )?;

    let tx = conn.transaction()?;
    for w in &tables.wells {
        tx.execute(
            "INSERT INTO WellInfo VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14)",
            rusqlite::params![
                w.well_id,
                w.well_name,
                w.operator,
                w.work_type,
                w.status,
                w.well_type,
                w.field_name,
                w.elevation,
                w.dry_spud,
                w.board_year,
                w.docket_month,
                w.board_docket,
                w.conc_code,
                w.mineral_lease,
            ],
        )?;
    }
    for s in &tables.surveys {
        tx.execute(
            "INSERT INTO DX VALUES (?1,?2,?3,?4,?5,?6)",
            rusqlite::params![
                s.api_number,
                s.x,
                s.y,
                s.measured_depth,
                s.true_vertical_depth,
                s.citing_type
            ],
        )?;
    }
    for p in &tables.plats {
        tx.execute(
            "INSERT INTO PlatData VALUES (?1,?2,?3)",
            rusqlite::params![p.lat, p.lon, p.conc],
        )?;
    }
    for f in &tables.fields {
        tx.execute(
            "INSERT INTO Field VALUES (?1,?2,?3)",
            rusqlite::params![f.field_name, f.easting, f.northing],
        )?;
    }
    for o in &tables.owners {
        tx.execute(
            "INSERT INTO Owner VALUES (?1,?2,?3)",
            rusqlite::params![o.conc, o.owner, o.agency],
        )?;
    }
    for p in &tables.production {
        tx.execute(
            "INSERT INTO Production VALUES (?1,?2,?3,?4,?5,?6)",
            rusqlite::params![p.well_id, p.date, p.oil_bbl, p.gas_mcf, p.oil_profit, p.gas_profit],
        )?;
    }
    for b in &tables.board {
        tx.execute(
            "INSERT INTO BoardData VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
            rusqlite::params![
                b.cause_number,
                b.quip,
                b.order_type,
                b.effective_date,
                b.end_date,
                b.board_year,
                b.docket_month,
                b.sec,
                b.township,
                b.township_dir,
                b.range,
                b.range_dir,
                b.pm
            ],
        )?;
    }
    for l in &tables.board_links {
        tx.execute(
            "INSERT INTO BoardDataLinks VALUES (?1,?2,?3,?4)",
            rusqlite::params![l.cause, l.description, l.filepath, l.document_date],
        )?;
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let config = SyntheticConfig::default();
        let a = generate(&config);
        let b = generate(&config);
        assert_eq!(a.wells.len(), b.wells.len());
        assert_eq!(a.wells[0], b.wells[0]);
        assert_eq!(a.surveys.len(), b.surveys.len());
    }

    #[test]
    fn basin_has_all_layers() {
        let tables = generate(&SyntheticConfig::default());
        assert_eq!(tables.wells.len(), 40);
        // 36 sections, 4 corners each
        assert_eq!(tables.plats.len(), 144);
        assert_eq!(tables.fields.len(), 8);
        assert_eq!(tables.board.len(), 8);
        assert!(!tables.production.is_empty());
        // Every survey row carries a parseable citing type
        assert!(tables
            .surveys
            .iter()
            .all(|s| crate::types::TrajectoryKind::from_label(&s.citing_type).is_some()));
    }
}
