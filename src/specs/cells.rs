// src/specs/cells.rs
// Stat cells are either a plain token ("23", "N´Guessan") or a shot
// composite "<made>/<attempted> <pct>%" with a comma decimal separator.

use crate::core::Node;
use crate::core::sanitize::clean_token;
use crate::error::ExtractError;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Token(String),
    Shot { made: String, attempted: String, pct: f64 },
}

impl Cell {
    /// Number of output columns this cell occupies.
    pub fn width(&self) -> usize {
        match self {
            Cell::Token(_) => 1,
            Cell::Shot { .. } => 3,
        }
    }

    /// Append this cell's output columns to `out`.
    pub fn push_fields(&self, out: &mut Vec<String>) {
        match self {
            Cell::Token(t) => out.push(t.clone()),
            Cell::Shot { made, attempted, pct } => {
                out.push(made.clone());
                out.push(attempted.clone());
                out.push(render_pct(*pct));
            }
        }
    }
}

/// Whole percentages keep their ".0" ("100.0"), the way the historic
/// output files were written.
pub fn render_pct(pct: f64) -> String {
    if pct.is_finite() && pct.fract() == 0.0 {
        format!("{pct:.1}")
    } else {
        pct.to_string()
    }
}

pub fn decode_cell(raw: &str) -> Result<Cell, ExtractError> {
    if !raw.contains('/') {
        return Ok(Cell::Token(clean_token(raw)));
    }

    let text = raw.trim();
    let malformed = || ExtractError::MalformedCell(s!(text));

    let mut parts = text.split(' ');
    let (Some(ratio), Some(pct), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let mut ratio = ratio.split('/');
    let (Some(made), Some(attempted), None) = (ratio.next(), ratio.next(), ratio.next()) else {
        return Err(malformed());
    };
    if !is_count(made) || !is_count(attempted) {
        return Err(malformed());
    }

    let pct = pct
        .trim_matches('%')
        .replace(',', ".")
        .trim()
        .parse::<f64>()
        .map_err(|_| malformed())?;

    Ok(Cell::Shot {
        made: s!(made),
        attempted: s!(attempted),
        pct,
    })
}

/// Decode every `td` of a row, skipping the given column positions.
pub fn decode_row(cells: &[Node<'_>], skip: &[usize]) -> Result<Vec<Cell>, ExtractError> {
    cells
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip.contains(i))
        .map(|(_, td)| decode_cell(&td.text()))
        .collect()
}

fn is_count(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
