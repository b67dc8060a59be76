//! Normalization of raw store rows into the domain model
//!
//! Carries the loader semantics the visualizer depends on: plug-work rows
//! dropped, duplicates removed keeping first occurrence, display names
//! assembled, well ages computed in months, field names canonicalized,
//! dockets ordered calendar-wise, and survey rows turned into projected
//! trajectories.

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use crate::geo;
use crate::types::{
    BoardDocLink, BoardMatter, FieldAdjacency, FieldBoundary, OwnerAgency, OwnershipRecord,
    PlatSection, ProductionRecord, SurveyStation, Trajectory, TrajectoryKind, WellRecord,
    WellStatus, WellType,
};

use super::db::{
    RawBoardLinkRow, RawBoardRow, RawFieldRow, RawOwnerRow, RawPlatRow, RawProductionRow,
    RawSurveyRow, RawWellInfo,
};

/// Feet per metre divisor for state plane conversion
const FT_PER_M: f64 = 0.3048;

/// Work type excluded from the working set
const PLUG_WORK_TYPE: &str = "PLUG";

// ============================================================================
// Field name canonicalization
// ============================================================================

/// Field designations as they appear in permit records, mapped to the
/// official field names carried by the boundary layer. Representative
/// subset of the authority's list; unknown names pass through unchanged.
static FIELD_NAME_CANON: &[(&str, &str)] = &[
    ("AAGARD RANCH", "AAGARD RANCH FIELD"),
    ("ALTAMONT", "ALTAMONT FIELD"),
    ("ANETH", "ANETH FIELD"),
    ("ASHLEY VALLEY", "ASHLEY VALLEY FIELD"),
    ("BAR X", "BAR X FIELD"),
    ("BIG FLAT", "BIG FLAT FIELD"),
    ("BIG FLAT WEST", "BIG FLAT WEST FIELD"),
    ("BIG INDIAN NORTH", "BIG INDIAN (NORTH) FIELD"),
    ("BIG INDIAN SOUTH", "BIG INDIAN (SOUTH) FIELD"),
    ("BLUEBELL", "BLUEBELL FIELD"),
    ("BONANZA", "BONANZA FIELD"),
    ("BOUNDARY BUTTE", "BOUNDARY BUTTE FIELD"),
    ("BRADFORD CYN", "BRADFORD CANYON FIELD"),
    ("BRUNDAGE CANYON", "BRUNDAGE CANYON FIELD"),
    ("CANE CREEK", "KANE CREEK FIELD"),
    ("CHOKECHERRY CYN", "CHOKECHERRY CANYON FIELD"),
    ("CLAY BASIN", "CLAY BASIN FIELD"),
    ("COVENANT", "COVENANT FIELD"),
    ("DEAD MAN CANYON", "DEADMAN CANYON FIELD"),
    ("DEADMAN-ISMY", "DEADMAN (ISMAY) FIELD"),
    ("DEVILS PLAYGROUND", "DEVIL'S PLAYGROUND FIELD"),
    ("DRUNKARDS WASH", "DRUNKARDS WASH FIELD"),
    ("EIGHT MILE FLAT", "EIGHT MILE FLAT FIELD"),
    ("8 MILE FLAT NORTH", "EIGHT MILE FLAT NORTH FIELD"),
    ("FARNHAM DOME", "FARNHAM DOME FIELD"),
    ("GREATER ANETH", "GREATER ANETH FIELD"),
    ("GREATER CISCO", "GREATER CISCO FIELD"),
    ("HELL'S HOLE", "HELL'S HOLE FIELD"),
    ("ICE CANYON (DK-MR)", "ICE CANYON FIELD"),
    ("LIGHTNING DRAW SE", "LIGHTNING DRAW FIELD"),
    ("MC CRACKEN SPRING", "MCCRACKEN SPRING FIELD"),
    ("MONUMENT BUTTE", "MONUMENT BUTTE FIELD"),
    ("NATURAL BUTTES", "NATURAL BUTTES FIELD"),
    ("RED WASH", "RED WASH FIELD"),
    ("SCOFIELD", "UCOLO FIELD"),
    ("SOUTH MYTON BENCH", "NORTH MYTON BENCH"),
    ("STATELINE", "STATE LINE FIELD"),
    ("SWEET WATER RIDGE", "SWEETWATER RIDGE FIELD"),
    ("12 MILE WASH", "TWELVE MILE WASH FIELD"),
    ("UTELAND BUTTE", "UTELAND BUTTE FIELD"),
    ("WONSITS VALLEY", "WONSITS VALLEY FIELD"),
];

/// Canonical field name for a permit-record designation.
pub fn canonical_field_name(raw: &str) -> String {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    let table = TABLE.get_or_init(|| FIELD_NAME_CANON.iter().copied().collect());
    let trimmed = raw.trim();
    table
        .get(trimmed)
        .map_or_else(|| trimmed.to_string(), |s| (*s).to_string())
}

// ============================================================================
// Calendar helpers
// ============================================================================

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Calendar position of a docket month name, 1-based.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u32 + 1)
}

/// Whole months elapsed between the spud date and `today`.
pub fn months_between(spud: NaiveDate, today: NaiveDate) -> u32 {
    let months = (today.year() - spud.year()) * 12 + today.month() as i32 - spud.month() as i32;
    months.max(0) as u32
}

/// Spud dates arrive as `YYYY-MM-DD` or full timestamps; only the date
/// prefix matters.
fn parse_spud(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

// ============================================================================
// TRS concentration codes
// ============================================================================

/// Pack section/township/range/meridian components into the store's
/// concentration code, e.g. (1, 23, "S", 2, "W", "B") -> `"01235S02WB"`.
pub fn pack_conc_code(
    sec: i64,
    township: i64,
    township_dir: &str,
    range: i64,
    range_dir: &str,
    pm: &str,
) -> String {
    format!(
        "{:02}{:02}{}{:02}{}{}",
        sec,
        township,
        township_dir.to_ascii_uppercase(),
        range,
        range_dir.to_ascii_uppercase(),
        pm.to_ascii_uppercase()
    )
}

/// Expand a packed concentration code into the readable plat label:
/// `"01235S02WB"` -> `"1 23S 2W B"`. Codes that do not match the packed
/// layout come back unchanged.
pub fn format_plat_label(conc: &str) -> String {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        regex::Regex::new(r"^(\d{2})(\d{2})([NS])(\d{2})([EW])([A-Z])$")
            .expect("plat label pattern is valid")
    });

    match re.captures(conc.trim()) {
        Some(caps) => {
            let sec: u32 = caps[1].parse().unwrap_or(0);
            let township: u32 = caps[2].parse().unwrap_or(0);
            let range: u32 = caps[4].parse().unwrap_or(0);
            format!(
                "{} {}{} {}{} {}",
                sec,
                township,
                &caps[3],
                range,
                &caps[5],
                &caps[6]
            )
        }
        None => conc.trim().to_string(),
    }
}

// ============================================================================
// Well records
// ============================================================================

/// Normalize `WellInfo` rows into the docket working set.
///
/// Mirrors the loader: plug rows dropped, exact docket-citation duplicates
/// removed keeping first, display names built, ages computed against
/// `today`, field names canonicalized, rows ordered by board year and
/// calendar month.
pub fn normalize_wells(raw: Vec<RawWellInfo>, today: NaiveDate) -> Vec<WellRecord> {
    let mut seen = HashSet::new();
    let mut wells: Vec<WellRecord> = raw
        .into_iter()
        .filter(|r| r.work_type != PLUG_WORK_TYPE)
        .filter(|r| {
            seen.insert((
                r.well_id.clone(),
                r.board_year,
                r.docket_month.clone(),
                r.board_docket.clone(),
            ))
        })
        .map(|r| {
            let status = WellStatus::from_label(&r.status);
            let spud = r.dry_spud.as_deref().and_then(parse_spud);
            // Missing spud dates age as 0; that marks planned/permitted wells
            let age_months = spud.map_or(0, |d| months_between(d, today));
            WellRecord {
                display_name: format!("{} - {}", r.well_id, r.well_name),
                api_number: r.well_id,
                name: r.well_name,
                operator: r.operator,
                work_type: r.work_type,
                status,
                well_type: WellType::from_label(&r.well_type),
                field_name: r.field_name.as_deref().map(canonical_field_name).unwrap_or_default(),
                elevation: r.elevation.unwrap_or(0.0),
                spud_date: spud.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                age_months,
                board_year: r.board_year,
                docket_month: r.docket_month,
                board_docket: r.board_docket,
                conc_code: r.conc_code.unwrap_or_default(),
                mineral_lease: r.mineral_lease.unwrap_or_default(),
            }
        })
        .collect();

    wells.sort_by_key(|w| (w.board_year, month_number(&w.docket_month).unwrap_or(13)));
    wells
}

// ============================================================================
// Trajectories
// ============================================================================

/// Build projected trajectories from raw survey rows.
///
/// Stations sort by measured depth; rows with unparseable citing types or
/// missing depths are skipped. Vertical wells get a per-station northing
/// jitter so their polyline is drawable. Elevations come from the first
/// docket record of the same API number.
pub fn build_trajectories(
    surveys: Vec<RawSurveyRow>,
    wells: &[WellRecord],
    vertical_jitter_m: f64,
) -> HashMap<String, Vec<Trajectory>> {
    let elevations: HashMap<&str, f64> = {
        let mut map = HashMap::new();
        for well in wells {
            map.entry(well.api_number.as_str()).or_insert(well.elevation);
        }
        map
    };

    // Group rows by (api, kind) preserving input order before the depth sort
    let mut grouped: BTreeMap<(String, TrajectoryKind), Vec<RawSurveyRow>> = BTreeMap::new();
    for row in surveys {
        let Some(kind) = TrajectoryKind::from_label(&row.citing_type) else {
            continue;
        };
        if row.measured_depth.is_none() || row.true_vertical_depth.is_none() {
            continue;
        }
        grouped.entry((row.api_number.clone(), kind)).or_default().push(row);
    }

    let trajectories: Vec<Trajectory> = grouped
        .into_par_iter()
        .map(|((api_number, kind), mut rows)| {
            rows.sort_by(|a, b| {
                a.measured_depth
                    .partial_cmp(&b.measured_depth)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            rows.dedup();

            let elevation = elevations.get(api_number.as_str()).copied().unwrap_or(0.0);
            let stations = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let jitter = if kind == TrajectoryKind::Vertical {
                        i as f64 * vertical_jitter_m
                    } else {
                        0.0
                    };
                    let y = row.y + jitter;
                    let md = row.measured_depth.unwrap_or(0.0);
                    let tvd = row.true_vertical_depth.unwrap_or(0.0);
                    SurveyStation {
                        md,
                        x: row.x,
                        y,
                        tvd,
                        true_elevation: elevation - tvd,
                        spx: row.x / FT_PER_M,
                        spy: y / FT_PER_M,
                    }
                })
                .collect();

            Trajectory {
                api_number,
                kind,
                stations,
            }
        })
        .collect();

    let mut by_api: HashMap<String, Vec<Trajectory>> = HashMap::new();
    for traj in trajectories {
        by_api.entry(traj.api_number.clone()).or_default().push(traj);
    }
    by_api
}

// ============================================================================
// Plats and fields
// ============================================================================

/// Project plat vertices to UTM and group consecutive rows by section code.
///
/// Rows with missing coordinates are dropped; sections reduced below three
/// vertices are discarded as undrawable.
pub fn project_plats(plats: Vec<RawPlatRow>) -> Result<Vec<PlatSection>, geo::UtmError> {
    let mut sections: Vec<PlatSection> = Vec::new();
    let mut current: Option<PlatSection> = None;

    for row in plats {
        let (Some(lat), Some(lon)) = (row.lat, row.lon) else {
            continue;
        };
        let coord = geo::from_latlon(lat, lon)?;

        let start_new = current.as_ref().map_or(true, |s| s.conc != row.conc);
        if start_new {
            if let Some(done) = current.take() {
                if done.ring.len() >= 3 {
                    sections.push(done);
                }
            }
            current = Some(PlatSection {
                label: format_plat_label(&row.conc),
                conc: row.conc,
                ring: Vec::new(),
            });
        }
        if let Some(section) = current.as_mut() {
            section.ring.push([coord.easting, coord.northing]);
        }
    }
    if let Some(done) = current.take() {
        if done.ring.len() >= 3 {
            sections.push(done);
        }
    }
    Ok(sections)
}

/// Group field vertices into boundary polygons and detect adjacency within
/// the buffer distance.
pub fn build_fields(
    rows: Vec<RawFieldRow>,
    adjacency_buffer_m: f64,
) -> (Vec<FieldBoundary>, Vec<FieldAdjacency>) {
    // Preserve first-seen order so adjacency output is stable
    let mut order: Vec<String> = Vec::new();
    let mut rings: HashMap<String, Vec<[f64; 2]>> = HashMap::new();
    for row in rows {
        if !rings.contains_key(&row.field_name) {
            order.push(row.field_name.clone());
        }
        rings
            .entry(row.field_name)
            .or_default()
            .push([row.easting, row.northing]);
    }

    let fields: Vec<FieldBoundary> = order
        .into_iter()
        .filter_map(|name| {
            let ring = rings.remove(&name)?;
            if ring.len() < 3 {
                return None;
            }
            let centroid = geo::ring_centroid(&ring)?;
            Some(FieldBoundary {
                name,
                ring,
                centroid,
            })
        })
        .collect();

    let mut adjacency = Vec::new();
    for a in &fields {
        for b in &fields {
            if a.name != b.name && geo::polygons_adjacent(&a.ring, &b.ring, adjacency_buffer_m) {
                adjacency.push(FieldAdjacency {
                    field: a.name.clone(),
                    adjacent: b.name.clone(),
                });
            }
        }
    }

    (fields, adjacency)
}

/// Ownership rows map directly; agencies parse into the fixed vocabulary.
pub fn build_ownership(rows: Vec<RawOwnerRow>) -> Vec<OwnershipRecord> {
    rows.into_iter()
        .map(|row| OwnershipRecord {
            agency: OwnerAgency::from_label(&row.agency),
            conc: row.conc,
            owner: row.owner,
        })
        .collect()
}

// ============================================================================
// Board matters
// ============================================================================

/// Group per-section board rows into one matter per cause number, with the
/// cause's document links sorted by filing date.
pub fn build_board_matters(
    rows: Vec<RawBoardRow>,
    links: Vec<RawBoardLinkRow>,
) -> Vec<BoardMatter> {
    let mut links_by_cause: HashMap<String, Vec<RawBoardLinkRow>> = HashMap::new();
    for link in links {
        links_by_cause.entry(link.cause.clone()).or_default().push(link);
    }

    let mut matters: BTreeMap<String, BoardMatter> = BTreeMap::new();
    for row in rows {
        let conc = pack_conc_code(
            row.sec,
            row.township,
            &row.township_dir,
            row.range,
            &row.range_dir,
            &row.pm,
        );
        let matter = matters
            .entry(row.cause_number.clone())
            .or_insert_with(|| BoardMatter {
                cause_number: row.cause_number.clone(),
                quip: row.quip.clone(),
                order_type: row.order_type.clone(),
                effective_date: row.effective_date.clone().unwrap_or_default(),
                end_date: row.end_date.clone().unwrap_or_default(),
                board_year: row.board_year,
                docket_month: row.docket_month.clone(),
                sections: Vec::new(),
                links: Vec::new(),
            });
        if !matter.sections.contains(&conc) {
            matter.sections.push(conc);
        }
    }

    let mut result: Vec<BoardMatter> = matters.into_values().collect();
    for matter in &mut result {
        if let Some(mut cause_links) = links_by_cause.remove(&matter.cause_number) {
            cause_links.sort_by(|a, b| a.document_date.cmp(&b.document_date));
            matter.links = cause_links
                .into_iter()
                .map(|l| BoardDocLink {
                    description: l.description,
                    url: l.filepath,
                    filed: l.document_date.unwrap_or_default(),
                })
                .collect();
        }
    }
    result
}

// ============================================================================
// Production
// ============================================================================

/// Group production rows per well, truncating dates to `YYYY-MM` and
/// dropping duplicate months keeping the first report.
pub fn group_production(rows: Vec<RawProductionRow>) -> HashMap<String, Vec<ProductionRecord>> {
    let mut seen = HashSet::new();
    let mut by_well: HashMap<String, Vec<ProductionRecord>> = HashMap::new();
    for row in rows {
        let month = row.date.get(..7).unwrap_or(&row.date).to_string();
        if !seen.insert((row.well_id.clone(), month.clone())) {
            continue;
        }
        by_well.entry(row.well_id.clone()).or_default().push(ProductionRecord {
            api_number: row.well_id,
            month,
            oil_bbl: row.oil_bbl,
            gas_mcf: row.gas_mcf,
            oil_profit: row.oil_profit,
            gas_profit: row.gas_profit,
        });
    }
    for records in by_well.values_mut() {
        records.sort_by(|a, b| a.month.cmp(&b.month));
    }
    by_well
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn well_row(id: &str, work_type: &str) -> RawWellInfo {
        RawWellInfo {
            well_id: id.to_string(),
            well_name: "FEDERAL 1-23".to_string(),
            operator: "ACME ENERGY".to_string(),
            work_type: work_type.to_string(),
            status: "Producing".to_string(),
            well_type: "Oil Well".to_string(),
            field_name: Some("BIG FLAT".to_string()),
            elevation: Some(5230.0),
            dry_spud: Some("2020-06-01".to_string()),
            board_year: 2024,
            docket_month: "March".to_string(),
            board_docket: "2024-03 Docket".to_string(),
            conc_code: Some("01235S02WB".to_string()),
            mineral_lease: None,
        }
    }

    #[test]
    fn plug_rows_are_dropped() {
        let wells = normalize_wells(vec![well_row("A", "DRILL"), well_row("B", "PLUG")], today());
        assert_eq!(wells.len(), 1);
        assert_eq!(wells[0].api_number, "A");
    }

    #[test]
    fn duplicates_keep_first() {
        let wells = normalize_wells(vec![well_row("A", "DRILL"), well_row("A", "DRILL")], today());
        assert_eq!(wells.len(), 1);
    }

    #[test]
    fn age_and_display_name() {
        let wells = normalize_wells(vec![well_row("4301311111", "DRILL")], today());
        assert_eq!(wells[0].age_months, 60);
        assert_eq!(wells[0].display_name, "4301311111 - FEDERAL 1-23");
        assert_eq!(wells[0].field_name, "BIG FLAT FIELD");
    }

    #[test]
    fn missing_spud_ages_zero() {
        let mut row = well_row("A", "DRILL");
        row.dry_spud = None;
        row.status = "Approved Permit".to_string();
        let wells = normalize_wells(vec![row], today());
        assert_eq!(wells[0].age_months, 0);
        assert_eq!(wells[0].spud_date, "");
    }

    #[test]
    fn dockets_sort_calendar_wise() {
        let mut june = well_row("A", "DRILL");
        june.docket_month = "June".to_string();
        let mut feb = well_row("B", "DRILL");
        feb.docket_month = "February".to_string();
        let wells = normalize_wells(vec![june, feb], today());
        assert_eq!(wells[0].docket_month, "February");
    }

    #[test]
    fn plat_label_formatting() {
        assert_eq!(format_plat_label("01235S02WB"), "1 23S 2W B");
        assert_eq!(format_plat_label("12345S67WN"), "12 34S 67W N");
        assert_eq!(format_plat_label("invalid"), "invalid");
    }

    #[test]
    fn conc_code_packing_round_trips() {
        let conc = pack_conc_code(1, 23, "s", 2, "w", "b");
        assert_eq!(conc, "01235S02WB");
        assert_eq!(format_plat_label(&conc), "1 23S 2W B");
    }

    #[test]
    fn vertical_trajectory_gets_jitter() {
        let wells = normalize_wells(vec![well_row("A", "DRILL")], today());
        let surveys = vec![
            RawSurveyRow {
                api_number: "A".to_string(),
                x: 500_000.0,
                y: 4_400_000.0,
                measured_depth: Some(0.0),
                true_vertical_depth: Some(0.0),
                citing_type: "Vertical".to_string(),
            },
            RawSurveyRow {
                api_number: "A".to_string(),
                x: 500_000.0,
                y: 4_400_000.0,
                measured_depth: Some(100.0),
                true_vertical_depth: Some(100.0),
                citing_type: "Vertical".to_string(),
            },
        ];
        let map = build_trajectories(surveys, &wells, 1e-3);
        let traj = &map["A"][0];
        assert_eq!(traj.kind, TrajectoryKind::Vertical);
        assert!((traj.stations[1].y - traj.stations[0].y - 1e-3).abs() < 1e-9);
        // True elevation references the wellhead elevation
        assert!((traj.stations[1].true_elevation - 5130.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_citing_types_are_skipped() {
        let surveys = vec![RawSurveyRow {
            api_number: "A".to_string(),
            x: 0.0,
            y: 0.0,
            measured_depth: Some(0.0),
            true_vertical_depth: Some(0.0),
            citing_type: "sidetrack".to_string(),
        }];
        let map = build_trajectories(surveys, &[], 1e-3);
        assert!(map.is_empty());
    }

    #[test]
    fn consecutive_plat_grouping() {
        let rows = vec![
            RawPlatRow { lat: Some(40.0), lon: Some(-109.5), conc: "01235S02WB".to_string() },
            RawPlatRow { lat: Some(40.01), lon: Some(-109.5), conc: "01235S02WB".to_string() },
            RawPlatRow { lat: Some(40.01), lon: Some(-109.49), conc: "01235S02WB".to_string() },
            RawPlatRow { lat: Some(40.1), lon: Some(-109.6), conc: "02235S02WB".to_string() },
        ];
        let sections = project_plats(rows).unwrap();
        // Second section has a single vertex and is dropped
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "1 23S 2W B");
        assert_eq!(sections[0].ring.len(), 3);
    }

    #[test]
    fn board_rows_group_by_cause() {
        let row = |sec: i64| RawBoardRow {
            cause_number: "139-32".to_string(),
            quip: "Spacing request".to_string(),
            order_type: "Spacing".to_string(),
            effective_date: Some("2024-03-01".to_string()),
            end_date: None,
            board_year: 2024,
            docket_month: "March".to_string(),
            sec,
            township: 23,
            township_dir: "S".to_string(),
            range: 2,
            range_dir: "W".to_string(),
            pm: "B".to_string(),
        };
        let links = vec![RawBoardLinkRow {
            cause: "139-32".to_string(),
            description: "Order".to_string(),
            filepath: "https://example.gov/order.pdf".to_string(),
            document_date: Some("2024-03-10".to_string()),
        }];
        let matters = build_board_matters(vec![row(1), row(2), row(1)], links);
        assert_eq!(matters.len(), 1);
        assert_eq!(matters[0].sections, vec!["01235S02WB", "02235S02WB"]);
        assert_eq!(matters[0].links.len(), 1);
    }

    #[test]
    fn production_dedups_and_sorts() {
        let row = |date: &str, oil: f64| RawProductionRow {
            well_id: "A".to_string(),
            date: date.to_string(),
            oil_bbl: oil,
            gas_mcf: 0.0,
            oil_profit: 0.0,
            gas_profit: 0.0,
        };
        let map = group_production(vec![
            row("2024-02-01", 100.0),
            row("2024-01-01", 50.0),
            row("2024-02-15", 999.0),
        ]);
        let series = &map["A"];
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "2024-01");
        // Duplicate month keeps the first report
        assert_eq!(series[1].oil_bbl, 100.0);
    }
}
