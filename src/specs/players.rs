// src/specs/players.rs

use crate::core::Document;
use crate::error::ExtractError;

use super::boxscore::{StatLine, row_cells, stat_tables, team_names};
use super::cells::decode_row;

/// One line per listed player, local block first. The team comes from the
/// block's position, not from any column.
pub fn extract_player_stats(doc: &Document) -> Result<Vec<StatLine>, ExtractError> {
    let names = team_names(doc)?;
    let mut out = Vec::new();

    for table in stat_tables(doc)? {
        let team = names.get(table.side);
        for row in table.player_rows() {
            out.push(StatLine {
                team: s!(team),
                side: table.side,
                cells: decode_row(&row_cells(row)?, &[])?,
            });
        }
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
    fn one_line_per_player_row() {
        let doc = Document::parse(PAGE);
        let lines = extract_player_stats(&doc).unwrap();
        // 3 local players, 2 visiting
        assert_eq!(lines.len(), 5);
        assert!(lines[..3].iter().all(|l| l.side == Side::Local && l.team == "Valencia Basket"));
        assert!(lines[3..].iter().all(|l| l.side == Side::Visiting && l.team == "Baskonia"));
    }

    #[test]
    fn cells_are_decoded() {
        let doc = Document::parse(PAGE);
        let lines = extract_player_stats(&doc).unwrap();
        let first = &lines[0];
        assert_eq!(first.cells[1], Cell::Token(s!("5")));
        assert_eq!(first.cells[2], Cell::Token(s!("Jones")));
        assert_eq!(
            first.cells[5],
            Cell::Shot { made: s!("7"), attempted: s!("12"), pct: 58.3 }
        );
        // the name with an acute accent in place of an apostrophe
        assert_eq!(lines[3].cells[2], Cell::Token(s!("N'Guessan")));
    }

    #[test]
    fn malformed_shot_cell_fails_the_page() {
        let page = PAGE.replacen("7/12 58,3%", "7/12 --", 1);
        let doc = Document::parse(&page);
        assert!(matches!(
            extract_player_stats(&doc),
            Err(ExtractError::MalformedCell(_))
        ));
    }

    #[test]
    fn missing_team_header_fails_the_page() {
        let page = PAGE.replace("columna equipo visitante", "columna equipo");
        let doc = Document::parse(&page);
        assert!(matches!(
            extract_player_stats(&doc),
            Err(ExtractError::MissingElement("visiting team block"))
        ));
    }
}
