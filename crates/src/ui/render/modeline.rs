use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize, mode: &str) -> String {
    let board = m.board();
    let theme = if board.dark() { "dark" } else { "light" };

    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let status_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    let esc_action = if m.detail_open() { "close" } else { "quit" };
    let pairs_def: Vec<(&str, &str)> = vec![
        ("⇥", "filter"),
        ("⏎", "details"),
        ("^T", "theme"),
        ("⎋", esc_action),
    ];

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    let status_plain = format!(
        "{}/{} shown · {theme}",
        board.visible_count(),
        board.total()
    );
    let mut status_width = status_plain.chars().count();
    let mut status_rendered = status_style.render(&status_plain);

    let joined = |count: usize| -> (String, usize) {
        if count == 0 {
            return (String::new(), 0);
        }
        let rendered = pairs
            .iter()
            .take(count)
            .map(|(r, _)| r.clone())
            .collect::<Vec<_>>()
            .join(&pair_sep_rendered);
        let width =
            pairs.iter().take(count).map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (count - 1);
        (rendered, width)
    };

    let mode_w = mode.chars().count() + 2;
    let sep_w = " | ".chars().count();
    let avail = inner_max.saturating_sub(mode_w + sep_w);

    // drop rightmost pairs until left + status fits into avail
    let mut pairs_count = pairs.len();
    let (mut left_rendered, mut left_width) = joined(pairs_count);
    while pairs_count > 0 && left_width + status_width > avail {
        pairs_count -= 1;
        (left_rendered, left_width) = joined(pairs_count);
    }

    // still too wide: keep only the counts
    if left_width + status_width > avail {
        let short = format!("{}/{}", board.visible_count(), board.total());
        status_width = short.chars().count();
        status_rendered = status_style.render(&short);
    }

    // compute filler width (subtract 2 to keep spacing consistent)
    let pad = avail.saturating_sub(left_width + status_width + 2);
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let footer_inner = format!("{left_rendered}{filler}{status_rendered}");

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);

    let sep_styled = inner_style.render(" | ");
    let trailing_pad = STYLE_MODELINE.render(" ");

    format!("{mode_styled}{sep_styled}{footer_inner}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = total_width.saturating_sub(3);
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}
