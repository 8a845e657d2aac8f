use crate::catalog::{GRID_COLS, GRID_ROWS, GridPosition};
use crate::ui::board::Card;
use crate::ui::model::{CELL_WIDTH, Model};
use crate::ui::render::styles::{STYLE_HIDDEN, card_style};
use crate::ui::render::util::screen_width;

fn render_cell(m: &Model, card: Option<&Card>) -> String {
    let Some(card) = card else {
        return " ".repeat(CELL_WIDTH);
    };
    if !card.visible {
        return STYLE_HIDDEN.render(" ·  ");
    }
    let symbol = card.record.symbol;
    let style = card_style(card.record.category, m.board().dark());
    if m.cursor == Some(card.position) {
        return style.bold(true).render(&format!("[{symbol:<2}]"));
    }
    if m.board().highlighted() == Some(card.record.atomic_number) {
        return style.bold(true).render(&format!("<{symbol:<2}>"));
    }
    style.render(&format!(" {symbol:<2} "))
}

/// One line per grid row. Columns that do not fit the terminal are dropped
/// from the right.
pub fn render_grid(m: &Model) -> Vec<String> {
    let max_cols = (screen_width(m.screen_width) / CELL_WIDTH).min(GRID_COLS as usize) as u16;
    (1..=GRID_ROWS)
        .map(|row| {
            (1..=max_cols)
                .map(|col| render_cell(m, m.board().card_at(GridPosition { row, col })))
                .collect::<String>()
        })
        .collect()
}
