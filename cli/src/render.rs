use std::fmt::Write;

use sweeper_core::{BoardGenerator, CellView, GameStatus, Session};

fn glyph(view: CellView) -> char {
    use CellView::*;
    match view {
        Hidden => '#',
        Flagged => 'F',
        Mine => '*',
        Empty => '.',
        Number(count) => char::from(b'0' + count),
    }
}

/// Text rendition of the board with row and column labels, plus a status line.
pub fn render<G: BoardGenerator>(session: &Session<G>) -> String {
    let (rows, cols) = session.board().size();
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..cols {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>3} ", row);
        for col in 0..cols {
            let _ = write!(out, "{:>3}", glyph(session.view_at((row, col))));
        }
        out.push('\n');
    }

    let status = match session.status() {
        GameStatus::InProgress => "in progress",
        GameStatus::Won => "you won!",
        GameStatus::Lost => "boom! you lost",
    };
    let _ = write!(
        out,
        "remaining mines: {}  status: {}",
        session.remaining_mines(),
        status
    );
    out
}
