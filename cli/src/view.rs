use std::fmt::Write;

use wordmatch_core::{CellState, CellView, GameState, Outcome, Snapshot};

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", hud(&snapshot.state));

    let width = snapshot
        .cells
        .iter()
        .filter_map(|cell| cell.word.as_ref())
        .map(|word| word.as_str().chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut index = 0;
    for row in snapshot.rows() {
        for cell in row {
            let _ = write!(out, "{index:>3} {:<width$}", label(cell));
            index += 1;
        }
        out.push('\n');
    }
    out
}

fn hud(state: &GameState) -> String {
    let (minutes, seconds) = state.clock();
    let status = match state.outcome {
        Outcome::InProgress => "",
        Outcome::Won => "  [won]",
        Outcome::Lost => "  [game over]",
    };
    format!(
        "Score: {} / {}    Time Left: {minutes:02}:{seconds:02}{status}",
        state.matched, state.max_score
    )
}

fn label(cell: &CellView) -> String {
    let word = cell.word.as_ref().map_or("", |word| word.as_str());
    match cell.state {
        CellState::Selected => format!("[{word}]"),
        CellState::Hidden | CellState::Matched => format!(" {word} "),
    }
}
