//! SQLite table readers for the well database
//!
//! The loader pipeline writes a flat relational schema; this module reads
//! each table into raw row structs with no interpretation beyond typing.
//! All normalization (dedup, canonical names, projections) happens in
//! [`super::normalize`].

use rusqlite::Connection;
use std::path::Path;

use super::IngestError;

/// Raw row from the `WellInfo` table: one row per docket citation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWellInfo {
    pub well_id: String,
    pub well_name: String,
    pub operator: String,
    pub work_type: String,
    pub status: String,
    pub well_type: String,
    pub field_name: Option<String>,
    pub elevation: Option<f64>,
    pub dry_spud: Option<String>,
    pub board_year: i32,
    pub docket_month: String,
    pub board_docket: String,
    pub conc_code: Option<String>,
    pub mineral_lease: Option<String>,
}

/// Raw row from the `DX` directional survey table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSurveyRow {
    pub api_number: String,
    pub x: f64,
    pub y: f64,
    pub measured_depth: Option<f64>,
    pub true_vertical_depth: Option<f64>,
    pub citing_type: String,
}

/// Raw row from the `PlatData` table: one vertex of a section boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlatRow {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub conc: String,
}

/// Raw row from the `Field` table: one vertex of a field boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFieldRow {
    pub field_name: String,
    pub easting: f64,
    pub northing: f64,
}

/// Raw row from the `Owner` table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOwnerRow {
    pub conc: String,
    pub owner: String,
    pub agency: String,
}

/// Raw row from the `Production` table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProductionRow {
    pub well_id: String,
    pub date: String,
    pub oil_bbl: f64,
    pub gas_mcf: f64,
    pub oil_profit: f64,
    pub gas_profit: f64,
}

/// Raw row from the `BoardData` table: one section citation of a cause.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBoardRow {
    pub cause_number: String,
    pub quip: String,
    pub order_type: String,
    pub effective_date: Option<String>,
    pub end_date: Option<String>,
    pub board_year: i32,
    pub docket_month: String,
    pub sec: i64,
    pub township: i64,
    pub township_dir: String,
    pub range: i64,
    pub range_dir: String,
    pub pm: String,
}

/// Raw row from the `BoardDataLinks` table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBoardLinkRow {
    pub cause: String,
    pub description: String,
    pub filepath: String,
    pub document_date: Option<String>,
}

/// Everything read from the store in one pass.
#[derive(Debug, Default)]
pub struct RawTables {
    pub wells: Vec<RawWellInfo>,
    pub surveys: Vec<RawSurveyRow>,
    pub plats: Vec<RawPlatRow>,
    pub fields: Vec<RawFieldRow>,
    pub owners: Vec<RawOwnerRow>,
    pub production: Vec<RawProductionRow>,
    pub board: Vec<RawBoardRow>,
    pub board_links: Vec<RawBoardLinkRow>,
}

/// Read-only handle on the well database.
pub struct WellDatabase {
    conn: Connection,
}

impl WellDatabase {
    pub fn open(path: &Path) -> Result<Self, IngestError> {
        if !path.exists() {
            return Err(IngestError::DatabaseMissing(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Read every table the visualizer consumes.
    pub fn read_all(&self) -> Result<RawTables, IngestError> {
        Ok(RawTables {
            wells: self.read_well_info()?,
            surveys: self.read_surveys()?,
            plats: self.read_plats()?,
            fields: self.read_fields()?,
            owners: self.read_owners()?,
            production: self.read_production()?,
            board: self.read_board()?,
            board_links: self.read_board_links()?,
        })
    }

    fn read_well_info(&self) -> Result<Vec<RawWellInfo>, IngestError> {
        let mut stmt = self.conn.prepare(
            "SELECT WellID, WellName, entityname, WorkType, CurrentWellStatus, \
             CurrentWellType, FieldName, Elevation, DrySpud, Board_Year, \
             Docket_Month, Board_Docket, ConcCode, \"Mineral Lease\" \
             FROM WellInfo",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawWellInfo {
                well_id: row.get(0)?,
                well_name: row.get(1)?,
                operator: row.get(2)?,
                work_type: row.get(3)?,
                status: row.get(4)?,
                well_type: row.get(5)?,
                field_name: row.get(6)?,
                elevation: row.get(7)?,
                dry_spud: row.get(8)?,
                board_year: row.get(9)?,
                docket_month: row.get(10)?,
                board_docket: row.get(11)?,
                conc_code: row.get(12)?,
                mineral_lease: row.get(13)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_surveys(&self) -> Result<Vec<RawSurveyRow>, IngestError> {
        let mut stmt = self.conn.prepare(
            "SELECT APINumber, X, Y, MeasuredDepth, TrueVerticalDepth, CitingType FROM DX",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawSurveyRow {
                api_number: row.get(0)?,
                x: row.get(1)?,
                y: row.get(2)?,
                measured_depth: row.get(3)?,
                true_vertical_depth: row.get(4)?,
                citing_type: row.get(5)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_plats(&self) -> Result<Vec<RawPlatRow>, IngestError> {
        let mut stmt = self.conn.prepare("SELECT Lat, Lon, Conc FROM PlatData")?;
        let rows = stmt.query_map([], |row| {
            Ok(RawPlatRow {
                lat: row.get(0)?,
                lon: row.get(1)?,
                conc: row.get(2)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_fields(&self) -> Result<Vec<RawFieldRow>, IngestError> {
        let mut stmt = self
            .conn
            .prepare("SELECT Field_Name, Easting, Northing FROM Field")?;
        let rows = stmt.query_map([], |row| {
            Ok(RawFieldRow {
                field_name: row.get(0)?,
                easting: row.get(1)?,
                northing: row.get(2)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_owners(&self) -> Result<Vec<RawOwnerRow>, IngestError> {
        let mut stmt = self.conn.prepare("SELECT Conc, Owner, Agency FROM Owner")?;
        let rows = stmt.query_map([], |row| {
            Ok(RawOwnerRow {
                conc: row.get(0)?,
                owner: row.get(1)?,
                agency: row.get(2)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_production(&self) -> Result<Vec<RawProductionRow>, IngestError> {
        let mut stmt = self.conn.prepare(
            "SELECT WellID, Date, \"Oil Volume (bbl)\", \"Gas Volume (mcf)\", \
             \"Potential Oil Profit\", \"Potential Gas Profit\" FROM Production",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawProductionRow {
                well_id: row.get(0)?,
                date: row.get(1)?,
                oil_bbl: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
                gas_mcf: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
                oil_profit: row.get::<_, Option<f64>>(4)?.unwrap_or(0.0),
                gas_profit: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_board(&self) -> Result<Vec<RawBoardRow>, IngestError> {
        let mut stmt = self.conn.prepare(
            "SELECT CauseNumber, Quip, OrderType, EffectiveDate, EndDate, \
             Board_Year, Docket_Month, Sec, Township, TownshipDir, \"Range\", \
             RangeDir, PM FROM BoardData",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawBoardRow {
                cause_number: row.get(0)?,
                quip: row.get(1)?,
                order_type: row.get(2)?,
                effective_date: row.get(3)?,
                end_date: row.get(4)?,
                board_year: row.get(5)?,
                docket_month: row.get(6)?,
                sec: row.get(7)?,
                township: row.get(8)?,
                township_dir: row.get(9)?,
                range: row.get(10)?,
                range_dir: row.get(11)?,
                pm: row.get(12)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }

    fn read_board_links(&self) -> Result<Vec<RawBoardLinkRow>, IngestError> {
        let mut stmt = self.conn.prepare(
            "SELECT Cause, Description, Filepath, DocumentDate FROM BoardDataLinks",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RawBoardLinkRow {
                cause: row.get(0)?,
                description: row.get(1)?,
                filepath: row.get(2)?,
                document_date: row.get(3)?,
            })
        })?;
        rows.collect::<Result<_, _>>().map_err(IngestError::from)
    }
}
