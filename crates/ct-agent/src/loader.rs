//! CSV resident loader.
//!
//! # CSV format
//!
//! ```csv
//! name,household,workplace,infected_at_tick
//! alice,house-0,acme,
//! bob,house-0,acme,0
//! ```
//!
//! `household` and `workplace` are location names resolved against a
//! [`LocationStore`]; an empty `infected_at_tick` means healthy.  A
//! non-empty one must be `0`: [`PopulationBuilder::build`] rejects later
//! ticks, since an infection tick counts from the start of the run.
//!
//! [`PopulationBuilder::build`]: crate::PopulationBuilder::build

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use ct_core::Tick;
use ct_world::LocationStore;

use crate::{AgentError, AgentResult, ResidentSpec};

#[derive(Deserialize)]
struct ResidentRecord {
    name:             String,
    household:        String,
    workplace:        String,
    #[serde(default)]
    infected_at_tick: Option<u64>,
}

/// Load residents from a CSV file, resolving location names in `locations`.
pub fn load_residents_csv(path: &Path, locations: &LocationStore) -> AgentResult<Vec<ResidentSpec>> {
    let file = std::fs::File::open(path)?;
    load_residents_reader(file, locations)
}

/// Like [`load_residents_csv`] but accepts any `Read` source.
pub fn load_residents_reader<R: Read>(reader: R, locations: &LocationStore) -> AgentResult<Vec<ResidentSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut residents = Vec::new();

    for result in csv_reader.deserialize::<ResidentRecord>() {
        let row = result?;
        let resolve = |loc: &str| {
            locations.find(loc).ok_or_else(|| AgentError::UnknownLocation {
                resident: row.name.clone(),
                name:     loc.to_owned(),
            })
        };
        let household = resolve(&row.household)?;
        let workplace = resolve(&row.workplace)?;
        residents.push(ResidentSpec {
            infected_at: row.infected_at_tick.map(Tick),
            name: row.name,
            household,
            workplace,
        });
    }

    info!("loaded {} residents", residents.len());
    Ok(residents)
}
