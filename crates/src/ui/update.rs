use crate::catalog::GridPosition;
use crate::controller::Event;
use crate::ui::model::Model;

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::KeyBackspace => handle_key_backspace(m),
        crate::ui::Msg::KeyEnter => handle_key_enter(m),
        crate::ui::Msg::KeyEsc => handle_key_esc(m),
        crate::ui::Msg::KeyTab => handle_filter_step(m, true),
        crate::ui::Msg::KeyBackTab => handle_filter_step(m, false),
        crate::ui::Msg::Rune(r) => handle_rune(m, r),
        crate::ui::Msg::KeyUp => move_vertical(m, false),
        crate::ui::Msg::KeyDown => move_vertical(m, true),
        crate::ui::Msg::KeyLeft => move_horizontal(m, false),
        crate::ui::Msg::KeyRight => move_horizontal(m, true),
        crate::ui::Msg::ClearSearch => set_search(m, String::new()),
        crate::ui::Msg::ToggleTheme => m.controller.dispatch(Event::ToggleTheme),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
}

fn set_search(m: &mut Model, text: String) {
    m.controller.dispatch(Event::Search(text));
    m.snap_cursor();
}

fn handle_rune(m: &mut Model, r: char) {
    if r.is_control() {
        return;
    }
    let mut text = m.search_text().to_string();
    text.push(r);
    set_search(m, text);
}

fn handle_key_backspace(m: &mut Model) {
    let mut text = m.search_text().to_string();
    if text.pop().is_none() {
        return;
    }
    set_search(m, text);
}

fn handle_key_enter(m: &mut Model) {
    let Some(record) = m.cursor_record() else {
        return;
    };
    let number = record.atomic_number;
    m.controller.dispatch(Event::Select(number));
}

fn handle_key_esc(m: &mut Model) {
    m.controller.dispatch(Event::Close);
}

fn handle_filter_step(m: &mut Model, forward: bool) {
    let current = m.controller.state().active_filter;
    let filter = if forward {
        current.next()
    } else {
        current.prev()
    };
    m.controller.dispatch(Event::Filter(filter));
    m.snap_cursor();
}

// Nearest visible card in the same row, strictly left or right of the cursor.
fn move_horizontal(m: &mut Model, right: bool) {
    let Some(cur) = m.cursor else {
        m.snap_cursor();
        return;
    };
    let target = m
        .board()
        .visible_positions()
        .into_iter()
        .filter(|p| p.row == cur.row)
        .filter(|p| if right { p.col > cur.col } else { p.col < cur.col })
        .min_by_key(|p| p.col.abs_diff(cur.col));
    if let Some(pos) = target {
        m.cursor = Some(pos);
    }
}

// Closest occupied row in the direction of travel, then the closest column
// within it. Ties go to the left-hand card.
fn move_vertical(m: &mut Model, down: bool) {
    let Some(cur) = m.cursor else {
        m.snap_cursor();
        return;
    };
    let candidates: Vec<GridPosition> = m
        .board()
        .visible_positions()
        .into_iter()
        .filter(|p| if down { p.row > cur.row } else { p.row < cur.row })
        .collect();
    let Some(row) = candidates
        .iter()
        .map(|p| p.row)
        .min_by_key(|r| r.abs_diff(cur.row))
    else {
        return;
    };
    let target = candidates
        .into_iter()
        .filter(|p| p.row == row)
        .min_by_key(|p| (p.col.abs_diff(cur.col), p.col));
    if let Some(pos) = target {
        m.cursor = Some(pos);
    }
}
