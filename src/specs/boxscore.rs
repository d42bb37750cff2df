// src/specs/boxscore.rs
// Page layout shared by the extractors: the two team header blocks and the
// two scrollable stat tables. Local comes first, visiting second, always by
// position in the markup.

use crate::core::{Document, Node};
use crate::error::ExtractError;

use super::cells::Cell;

pub const LOCAL_BLOCK: &str = "columna equipo local";
pub const VISITING_BLOCK: &str = "columna equipo visitante";
pub const TEAM_NAME: &str = "nombre";
pub const TEAM_RESULT: &str = "resultado";
pub const STAT_BLOCK: &str = "responsive-scroll";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Local,
    Visiting,
}

impl Side {
    /// Block 0 is the local team; anything after it is the visitor.
    pub fn from_index(i: usize) -> Self {
        if i == 0 { Side::Local } else { Side::Visiting }
    }
}

pub struct TeamNames {
    pub local: String,
    pub visiting: String,
}

impl TeamNames {
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Local => &self.local,
            Side::Visiting => &self.visiting,
        }
    }
}

pub fn side_block<'a>(doc: &'a Document, side: Side) -> Result<Node<'a>, ExtractError> {
    match side {
        Side::Local => doc.root().require(LOCAL_BLOCK, "local team block"),
        Side::Visiting => doc.root().require(VISITING_BLOCK, "visiting team block"),
    }
}

pub fn team_names(doc: &Document) -> Result<TeamNames, ExtractError> {
    let name = |side| -> Result<String, ExtractError> {
        Ok(side_block(doc, side)?.require(TEAM_NAME, "team name")?.stripped_text())
    };
    Ok(TeamNames {
        local: name(Side::Local)?,
        visiting: name(Side::Visiting)?,
    })
}

/// Rows (`tr`) of the first table inside one stat block.
pub struct StatTable<'a> {
    pub side: Side,
    pub rows: Vec<Node<'a>>,
}

impl<'a> StatTable<'a> {
    /// Player rows: everything between the two header rows and the totals row.
    pub fn player_rows(&self) -> &[Node<'a>] {
        let end = self.rows.len().saturating_sub(1);
        self.rows.get(2..end).unwrap_or(&[])
    }

    pub fn totals_row(&self, block: usize) -> Result<Node<'a>, ExtractError> {
        self.rows
            .last()
            .copied()
            .ok_or(ExtractError::MissingTotalsRow { block })
    }
}

pub fn stat_tables(doc: &Document) -> Result<Vec<StatTable<'_>>, ExtractError> {
    let blocks = doc.root().find_all(STAT_BLOCK)?;
    if blocks.len() > 2 {
        return Err(ExtractError::TooManyStatBlocks { found: blocks.len() });
    }

    let mut tables = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let table = block
            .find_tag("table")?
            .ok_or(ExtractError::MissingTable { block: i })?;
        tables.push(StatTable {
            side: Side::from_index(i),
            rows: table.find_all_tag("tr")?,
        });
    }
    Ok(tables)
}

/// Data cells of one row (`td` only; header `th` cells are ignored).
pub fn row_cells<'a>(row: &Node<'a>) -> Result<Vec<Node<'a>>, ExtractError> {
    row.find_all_tag("td")
}

/// One output row of the player or team table, before the game id prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct StatLine {
    pub team: String,
    pub side: Side,
    pub cells: Vec<Cell>,
}

impl StatLine {
    /// Team name followed by every decoded cell, flattened.
    pub fn fields(&self) -> Vec<String> {
        let width = 1 + self.cells.iter().map(Cell::width).sum::<usize>();
        let mut out = Vec::with_capacity(width);
        out.push(self.team.clone());
        for cell in &self.cells {
            cell.push_fields(&mut out);
        }
        out
    }
}
