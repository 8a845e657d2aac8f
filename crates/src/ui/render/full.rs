use crate::ui::model::{DEFAULT_HEIGHT, MODELINE_LINES, Model};
use crate::ui::render::util::{normalize_and_pad, screen_width};

/// Whole frame: search box, filter bar, grid, lower panel and the modeline as
/// the last of exactly `screen_height` lines.
pub fn render_full(m: &Model) -> String {
    let width = screen_width(m.screen_width);
    let height = if m.screen_height > 0 {
        m.screen_height
    } else {
        DEFAULT_HEIGHT
    };
    let body_height = height.saturating_sub(MODELINE_LINES);

    let mut body = m.render_search_block();
    body.push(m.render_filter_bar());
    body.push(String::new());
    body.extend(m.render_grid());
    body.push(String::new());
    body.extend(m.render_lower_panel());

    // a rendered line may wrap; flatten before fixing the height
    let flat: Vec<String> = normalize_and_pad(body, width, body_height)
        .iter()
        .flat_map(|l| l.lines().map(str::to_string).collect::<Vec<_>>())
        .collect();
    let mut lines = normalize_and_pad(flat, width, body_height);

    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}
