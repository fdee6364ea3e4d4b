//! Plain-text rendering of riddles for the console.

use std::fmt::Write as _;

use riddle_core::Board;
use riddle_generator::GeneratedRiddle;

const SEPARATOR: &str = " | ";

/// Renders the board as a table.
///
/// The header row holds the 1-based positions. Each following row starts with
/// a kind label and holds `"<counter>: <value>"` for every position. Columns
/// are padded to the width of their widest cell.
///
/// # Examples
///
/// ```
/// use riddle_cli::table;
/// use riddle_core::{Board, Kind};
///
/// let board = Board::new(vec![Kind::Pet], vec![vec!["dog", "cat"]]);
/// assert_eq!(table::render_board(&board), "    | 1      | 2\npet | 0: dog | 0: cat\n");
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut rows = Vec::with_capacity(board.categories().len() + 1);
    rows.push(
        std::iter::once(String::new())
            .chain((1..=board.size()).map(|position| position.to_string()))
            .collect::<Vec<_>>(),
    );
    for (kind_index, kind) in board.categories().iter().enumerate() {
        let values = board.items_of(kind_index);
        let cells = values.iter().enumerate().map(|(position, value)| {
            let counter = board.counter_at(board.cell_index(kind_index, position));
            format!("{counter}: {value}")
        });
        rows.push(std::iter::once(kind.label().to_owned()).chain(cells).collect());
    }

    let columns = board.size() + 1;
    let widths: Vec<usize> = (0..columns)
        .map(|column| rows.iter().map(|row| row[column].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (column, (cell, width)) in row.iter().zip(&widths).enumerate() {
            if column > 0 {
                line.push_str(SEPARATOR);
            }
            let _ = write!(line, "{cell:<width$}");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders a riddle: the board table (unless `show_board` is false), the facts
/// and the questions.
#[must_use]
pub fn render_riddle(riddle: &GeneratedRiddle, show_board: bool) -> String {
    let mut out = String::new();
    if show_board {
        out.push_str(&render_board(&riddle.board));
        out.push('\n');
    }
    for fact in riddle.facts() {
        let _ = writeln!(out, "- {fact}");
    }
    out.push('\n');
    for question in riddle.questions() {
        let _ = writeln!(out, "- {question}");
    }
    out
}

#[cfg(test)]
mod tests {
    use riddle_core::{CellIndex, Kind};
    use riddle_generator::{RiddleGenerator, RiddleOptions, RiddleSeed};

    use super::*;

    #[test]
    fn test_render_board_pads_columns() {
        let mut board = Board::new(
            vec![Kind::Nationality, Kind::Pet],
            vec![vec!["french", "english"], vec!["dog", "cat"]],
        );
        board.increment(CellIndex::new(1));
        board.increment(CellIndex::new(1));
        board.increment(CellIndex::new(2));

        let expected = [
            "            | 1         | 2",
            "nationality | 0: french | 2: english",
            "pet         | 1: dog    | 0: cat",
        ];
        assert_eq!(render_board(&board), expected.map(|line| format!("{line}\n")).concat());
    }

    #[test]
    fn test_render_riddle_sections() {
        let generator = RiddleGenerator::new(RiddleOptions::default()).unwrap();
        let riddle = (0..100)
            .find_map(|seed| generator.generate_with_seed(RiddleSeed::from(seed)).ok())
            .unwrap();

        let text = render_riddle(&riddle, false);
        let (facts, questions) = text.split_once("\n\n").unwrap();
        assert_eq!(facts.lines().count(), riddle.groups.len());
        assert!(facts.lines().all(|line| line.starts_with("- ")));
        assert_eq!(
            questions.lines().collect::<Vec<_>>(),
            riddle
                .questions()
                .iter()
                .map(|q| format!("- {q}"))
                .collect::<Vec<_>>()
        );

        let with_board = render_riddle(&riddle, true);
        assert!(with_board.starts_with(&render_board(&riddle.board)));
        assert!(with_board.ends_with(&text));
    }
}
