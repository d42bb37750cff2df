// src/specs/game.rs
// One row per game: both teams with their final score, quarter partials,
// date/time, the three referees and the venue.

use crate::core::Document;
use crate::error::ExtractError;

use super::boxscore::{Side, TEAM_NAME, TEAM_RESULT, side_block};

const PARTIALS: &str = "fila parciales";
const DATE: &str = "fecha";
const REFEREES: &str = "arbitros";
const REFEREE: &str = "txt referee";
const VENUE: &str = "pista";
const VENUE_NAME: &str = "txt pabellon";
const VENUE_ADDRESS: &str = "txt direccion";

/// Quarter scores per side; the partials row holds 4 local then 4 visiting.
const QUARTERS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub local_name: String,
    pub local_score: String,
    pub visiting_name: String,
    pub visiting_score: String,
    /// Quarter scores joined with ',' ("20,18,25,22").
    pub local_partials: String,
    pub visiting_partials: String,
    /// Date and time exactly as shown, not split.
    pub date_time: String,
    /// In page order; unlabeled on the site.
    pub referees: [String; 3],
    pub venue: String,
    pub address: String,
}

impl GameRecord {
    /// Column order of `to_row`.
    pub const FIELDS: [&'static str; 12] = [
        "local_name",
        "local_score",
        "visiting_name",
        "visiting_score",
        "local_partials",
        "visiting_partials",
        "date_time",
        "referee_1",
        "referee_2",
        "referee_3",
        "venue",
        "address",
    ];

    pub fn to_row(&self) -> Vec<String> {
        let [r1, r2, r3] = &self.referees;
        row![
            &self.local_name,
            &self.local_score,
            &self.visiting_name,
            &self.visiting_score,
            &self.local_partials,
            &self.visiting_partials,
            &self.date_time,
            r1,
            r2,
            r3,
            &self.venue,
            &self.address,
        ]
    }
}

pub fn extract_game(doc: &Document) -> Result<GameRecord, ExtractError> {
    let root = doc.root();

    let local = side_block(doc, Side::Local)?;
    let visiting = side_block(doc, Side::Visiting)?;

    let partials = root
        .require(PARTIALS, "partial scores row")?
        .find_all_tag("span")?;
    if partials.len() < 2 * QUARTERS {
        return Err(ExtractError::PartialScores { found: partials.len() });
    }
    let quarters = |range: std::ops::Range<usize>| {
        partials[range]
            .iter()
            .map(|n| n.stripped_text())
            .collect::<Vec<_>>()
            .join(",")
    };

    let date_time = root
        .require(DATE, "date block")?
        .require("txt", "date text")?
        .stripped_text();

    let referees = root.require(REFEREES, "referees block")?.find_all(REFEREE)?;
    let [r1, r2, r3] = referees.as_slice() else {
        return Err(ExtractError::RefereeCount { found: referees.len() });
    };

    let venue = root.require(VENUE, "venue block")?;

    Ok(GameRecord {
        local_name: local.require(TEAM_NAME, "local team name")?.stripped_text(),
        local_score: local.require(TEAM_RESULT, "local result")?.stripped_text(),
        visiting_name: visiting.require(TEAM_NAME, "visiting team name")?.stripped_text(),
        visiting_score: visiting.require(TEAM_RESULT, "visiting result")?.stripped_text(),
        local_partials: quarters(0..QUARTERS),
        visiting_partials: quarters(QUARTERS..2 * QUARTERS),
        date_time,
        referees: [r1.stripped_text(), r2.stripped_text(), r3.stripped_text()],
        venue: venue.require(VENUE_NAME, "venue name")?.stripped_text(),
        address: venue.require(VENUE_ADDRESS, "venue address")?.stripped_text(),
    })
}
