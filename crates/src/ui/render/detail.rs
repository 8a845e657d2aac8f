use crate::details;
use crate::ui::model::Model;
use crate::ui::render::decorate::highlight_match;
use crate::ui::render::styles::{STYLE_DESC, STYLE_LABEL, card_style, category_rgb, text_style};
use crate::ui::render::util::{clip, screen_width, wrap_words};
use lipgloss::{Color, Style};

const DESCRIPTION_LINES: usize = 2;

fn field_cell(label: &str, value: &str, width: usize) -> String {
    let plain = format!("{label}: {value}");
    let used = plain.chars().count();
    if used >= width {
        return clip(&plain, width);
    }
    format!(
        "{} {value}{}",
        STYLE_LABEL.render(&format!("{label}:")),
        " ".repeat(width - used)
    )
}

/// Detail panel for the selected element, empty when nothing is selected.
pub fn render_detail_panel(m: &Model) -> Vec<String> {
    let Some(record) = m.board().detail() else {
        return Vec::new();
    };
    let width = screen_width(m.screen_width);
    let dark = m.board().dark();
    let style = card_style(record.category, dark);

    let mut out = vec![format!(
        "{} {}",
        style.bold(true).render(&format!(" {} ", record.symbol)),
        text_style(dark)
            .bold(true)
            .render(&clip(&details::header(record), width.saturating_sub(5)))
    )];

    let column = width / 2;
    let fields = details::detail_fields(record);
    for pair in fields.chunks(2) {
        let line: String = pair
            .iter()
            .map(|(label, value)| field_cell(label, value, column))
            .collect();
        out.push(line);
    }

    out.extend(
        wrap_words(record.description, width, DESCRIPTION_LINES)
            .into_iter()
            .map(|l| STYLE_DESC.render(&l)),
    );
    out.push(STYLE_DESC.render(&clip("Esc closes the panel", width)));
    out
}

/// Colour key for the categories, flowed over as many lines as needed.
pub fn render_legend(m: &Model) -> Vec<String> {
    let width = screen_width(m.screen_width);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut used = 0usize;
    for category in crate::category::Category::ALL {
        let name = category.display_name();
        let entry_width = name.chars().count() + 2;
        if used > 0 && used + 2 + entry_width > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push_str("  ");
            used += 2;
        }
        let (r, g, b) = category_rgb(category);
        let swatch = Style::new().foreground(Color::from_rgb(r, g, b)).render("■");
        current.push_str(&format!("{swatch} {name}"));
        used += entry_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// Element under the cursor, with the search text marked in its name.
fn render_cursor_line(m: &Model) -> String {
    let width = screen_width(m.screen_width);
    let Some(record) = m.cursor_record() else {
        return STYLE_DESC.render(&clip("No elements match", width));
    };
    let plain = format!(
        "{}  {}  {}  ·  Enter for details",
        record.atomic_number, record.symbol, record.name
    );
    if plain.chars().count() > width {
        return clip(&plain, width);
    }
    format!(
        "{}  {}  {}  {}",
        text_style(m.board().dark()).render(&record.atomic_number.to_string()),
        highlight_match(record.symbol, m.search_text()),
        highlight_match(record.name, m.search_text()),
        STYLE_DESC.render("·  Enter for details")
    )
}

/// Below the grid: the detail panel when open, otherwise the cursor line and
/// the legend.
pub fn render_lower_panel(m: &Model) -> Vec<String> {
    if m.detail_open() {
        return render_detail_panel(m);
    }
    let mut out = vec![render_cursor_line(m), String::new()];
    out.extend(render_legend(m));
    out
}
