// src/specs/teams.rs

use crate::core::Document;
use crate::error::ExtractError;

use super::boxscore::{StatLine, row_cells, stat_tables, team_names};
use super::cells::decode_row;

/// Totals-row positions that are structurally empty on the site: the three
/// leading label cells and the blank spacer at 21.
pub const TEAM_TOTALS_SKIPPED_COLUMNS: [usize; 4] = [0, 1, 2, 21];

/// One line per stat block, read from the table's last (totals) row.
pub fn extract_team_stats(doc: &Document) -> Result<Vec<StatLine>, ExtractError> {
    let names = team_names(doc)?;
    let tables = stat_tables(doc)?;
    let mut out = Vec::with_capacity(tables.len());

    for (i, table) in tables.iter().enumerate() {
        let totals = table.totals_row(i)?;
        out.push(StatLine {
            team: s!(names.get(table.side)),
            side: table.side,
            cells: decode_row(&row_cells(&totals)?, &TEAM_TOTALS_SKIPPED_COLUMNS)?,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::boxscore::Side;
    use crate::specs::cells::Cell;

    const PAGE: &str = include_str!("../../tests/fixtures/boxscore.html");

    #[test]
    fn exactly_one_line_per_block() {
        let doc = Document::parse(PAGE);
        let lines = extract_team_stats(&doc).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].side, lines[0].team.as_str()), (Side::Local, "Valencia Basket"));
        assert_eq!((lines[1].side, lines[1].team.as_str()), (Side::Visiting, "Baskonia"));
    }

    #[test]
    fn skipped_columns_are_dropped() {
        let doc = Document::parse(PAGE);
        let lines = extract_team_stats(&doc).unwrap();
        // 23 cells in the totals row, 4 skipped
        assert_eq!(lines[0].cells.len(), 19);
        assert_eq!(lines[0].cells[0], Cell::Token(s!("200:00")));
        assert_eq!(lines[0].cells[1], Cell::Token(s!("88")));
        assert_eq!(
            lines[0].cells[2],
            Cell::Shot { made: s!("25"), attempted: s!("48"), pct: 52.1 }
        );
        assert_eq!(lines[0].cells.last(), Some(&Cell::Token(s!("97"))));
    }

    #[test]
    fn fields_prefix_team_and_flatten_shots() {
        let doc = Document::parse(PAGE);
        let fields = extract_team_stats(&doc).unwrap()[1].fields();
        assert_eq!(fields[0], "Baskonia");
        assert_eq!(&fields[3..6], ["22", "50", "44.0"]);
        // 1 team + 16 plain + 3 shots * 3
        assert_eq!(fields.len(), 1 + 16 + 9);
    }
}
