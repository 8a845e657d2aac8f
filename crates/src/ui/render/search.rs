use crate::ui::model::{Model, SEARCH_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_DESC, STYLE_SEARCH, STYLE_SEARCH_BOX, STYLE_TYPED};
use crate::ui::render::util::screen_width;

pub fn render_search_block(m: &Model) -> Vec<String> {
    let text = m.search_text();
    let inner = if text.is_empty() {
        format!(
            "{} {}",
            STYLE_SEARCH.render("Search:"),
            STYLE_DESC.render("type a name, symbol or number")
        )
    } else {
        format!(
            "{} {}{}",
            STYLE_SEARCH.render("Search:"),
            STYLE_TYPED.render(text),
            STYLE_SEARCH.render("_")
        )
    };
    let box_width = screen_width(m.screen_width).saturating_sub(2).max(1);
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_SEARCH_BOX.clone().width(w_i32).render(&inner);
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    // Box is always exactly SEARCH_BLOCK_LINES tall.
    out.truncate(SEARCH_BLOCK_LINES);
    while out.len() < SEARCH_BLOCK_LINES {
        out.push(String::new());
    }
    out
}
