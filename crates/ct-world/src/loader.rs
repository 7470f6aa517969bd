//! CSV location loader.
//!
//! # CSV format
//!
//! One row per location:
//!
//! ```csv
//! name,kind,lat,lon,capacity,contamination_probability
//! house-0,household,45.501,-73.567,,0.1
//! acme,workplace,45.510,-73.560,200,0.02
//! safeway,store,45.505,-73.570,25,0.05
//! mount-royal,park,45.507,-73.587,inf,0.0
//! ```
//!
//! **`capacity`** field:
//!
//! | Value                    | Meaning                  |
//! |--------------------------|--------------------------|
//! | empty, `inf`, `unbounded`| `Capacity::Unbounded`    |
//! | *u32*                    | `Capacity::Limited(n)`   |
//!
//! `kind` is parsed into the closed [`LocationKind`] set; an unknown label
//! fails the whole load.

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use ct_core::{GeoPoint, LocationKind};

use crate::{Capacity, LocationSpec, LocationStore, WorldError, WorldResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name:                      String,
    kind:                      String,
    lat:                       f64,
    lon:                       f64,
    #[serde(default)]
    capacity:                  String,
    #[serde(default)]
    contamination_probability: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every location in a CSV file into a fresh [`LocationStore`].
pub fn load_locations_csv(path: &Path) -> WorldResult<LocationStore> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> WorldResult<LocationStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut store = LocationStore::new();

    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result?;
        let kind: LocationKind = row.kind.parse()?;
        let spec = LocationSpec::new(row.name, kind, GeoPoint::new(row.lat, row.lon))
            .capacity(parse_capacity(&row.capacity)?)
            .contamination(row.contamination_probability);
        store.add(spec)?;
    }

    info!(
        "loaded {} locations ({} households, {} workplaces, {} stores, {} parks, {} misc)",
        store.len(),
        store.ids_of(LocationKind::Household).len(),
        store.ids_of(LocationKind::Workplace).len(),
        store.ids_of(LocationKind::Store).len(),
        store.ids_of(LocationKind::Park).len(),
        store.ids_of(LocationKind::Misc).len(),
    );
    Ok(store)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_capacity(s: &str) -> WorldResult<Capacity> {
    match s.trim() {
        "" | "inf" | "unbounded" => Ok(Capacity::Unbounded),
        n => n.parse::<u32>().map(Capacity::Limited).map_err(|_| {
            WorldError::Parse(format!(
                "invalid capacity {n:?}: expected empty, \"inf\", or a positive integer"
            ))
        }),
    }
}
