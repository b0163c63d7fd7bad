//! Plain-text rendering of the outcome table.

use fair_game_core::OutcomeTable;

const CORNER: &str = "You \\ PC";

/// Render the table with one row and one column per move.
///
/// Cell (row, col) is the result for a user playing the row move against a
/// computer playing the column move.
pub fn render_table(table: &OutcomeTable<'_>) -> String {
    let names = table.moves().names();

    let mut widths = Vec::with_capacity(names.len() + 1);
    widths.push(
        names
            .iter()
            .map(|n| n.chars().count())
            .chain(std::iter::once(CORNER.len()))
            .max()
            .unwrap_or(0),
    );
    // "Lose" and "Draw" are the widest cells.
    widths.extend(names.iter().map(|n| n.chars().count().max(4)));

    let separator = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let row = |cells: Vec<&str>| {
        let mut line = String::from("|");
        for (cell, w) in cells.iter().zip(&widths) {
            let pad = w - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line
    };

    let mut lines = vec![separator.clone()];
    lines.push(row(
        std::iter::once(CORNER)
            .chain(names.iter().map(String::as_str))
            .collect(),
    ));
    lines.push(separator.clone());
    for (name, outcomes) in table.rows() {
        lines.push(row(
            std::iter::once(name)
                .chain(outcomes.iter().map(|o| o.as_str()))
                .collect(),
        ));
    }
    lines.push(separator);

    lines.join("\n")
}
