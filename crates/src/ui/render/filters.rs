use crate::category::Filter;
use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_DESC, STYLE_LABEL, card_style, text_style};

pub fn render_filter_bar(m: &Model) -> String {
    let filter = m.controller.state().active_filter;
    let dark = m.board().dark();
    let label = match filter {
        Filter::All => text_style(dark).bold(true).render(&filter.label()),
        Filter::Category(c) => card_style(c, dark).bold(true).render(&filter.label()),
    };
    format!(
        "{} ◂ {} ▸ {}  {}",
        STYLE_LABEL.render("Filter"),
        label,
        STYLE_DESC.render("(Tab/Shift-Tab)"),
        STYLE_DESC.render(&format!(
            "{}/{} shown",
            m.board().visible_count(),
            m.board().total()
        )),
    )
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn shows_active_filter_and_count() {
        let mut m = crate::ui::initial_model(
            crate::catalog::Catalog::builtin(),
            Box::new(crate::prefs::MemoryStore::new()),
            crate::controller::ThemeStart::Override(true),
        );
        let bar = strip_ansi(&m.render_filter_bar());
        assert!(bar.contains("◂ All ▸"), "got `{bar}`");
        assert!(bar.contains("118/118 shown"));

        for _ in 0..8 {
            m.update(crate::ui::Msg::KeyTab);
        }
        let bar = strip_ansi(&m.render_filter_bar());
        assert!(bar.contains("◂ Noble Gas ▸"), "got `{bar}`");
        assert!(bar.contains("7/118 shown"));
    }
}
