use crate::catalog::{Catalog, ElementRecord, GridPosition};
use crate::controller::{Controller, ThemeStart};
use crate::prefs::FlagStore;
use crate::ui::board::Board;

// small constants reused by rendering code
pub const SEARCH_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;
pub const CELL_WIDTH: usize = 4;

pub struct Model {
    pub controller: Controller<Board>,
    /// Grid cell the arrow keys move; always a visible card when any exists.
    pub cursor: Option<GridPosition>,
    pub screen_width: usize,
    pub screen_height: usize,
}

pub fn initial_model(
    catalog: Catalog,
    store: Box<dyn FlagStore>,
    theme_start: ThemeStart,
) -> Model {
    let mut controller = Controller::new(catalog, Board::default(), store);
    controller.start(theme_start);
    let mut m = Model {
        controller,
        cursor: None,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
    };
    m.snap_cursor();
    m
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    pub fn board(&self) -> &Board {
        self.controller.surface()
    }

    pub fn search_text(&self) -> &str {
        &self.controller.state().search_text
    }

    pub fn detail_open(&self) -> bool {
        self.controller.state().selected.is_some()
    }

    pub fn cursor_record(&self) -> Option<&ElementRecord> {
        self.cursor
            .and_then(|pos| self.board().card_at(pos))
            .map(|card| &card.record)
    }

    pub fn mode(&self) -> String {
        let search = self.search_text();
        if !search.is_empty() {
            return format!("Search: {search}");
        }
        "ptable".to_string()
    }

    /// Keeps the cursor on a visible card: stays put if possible, otherwise
    /// jumps to the first visible card in grid order.
    pub fn snap_cursor(&mut self) {
        let board = self.controller.surface();
        let still_visible = self
            .cursor
            .and_then(|pos| board.card_at(pos))
            .is_some_and(|card| card.visible);
        if !still_visible {
            self.cursor = board.visible_positions().first().copied();
        }
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_search_block(&self) -> Vec<String> {
        crate::ui::render::render_search_block(self)
    }
    pub fn render_filter_bar(&self) -> String {
        crate::ui::render::render_filter_bar(self)
    }
    pub fn render_grid(&self) -> Vec<String> {
        crate::ui::render::render_grid(self)
    }
    pub fn render_lower_panel(&self) -> Vec<String> {
        crate::ui::render::render_lower_panel(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, Filter};
    use crate::prefs::MemoryStore;
    use crate::theme::ColorScheme;
    use crate::ui::Msg;

    fn model() -> Model {
        initial_model(
            Catalog::builtin(),
            Box::new(MemoryStore::new()),
            ThemeStart::Restore(ColorScheme::Light),
        )
    }

    fn type_text(m: &mut Model, text: &str) {
        for ch in text.chars() {
            m.update(Msg::Rune(ch));
        }
    }

    #[test]
    fn initial_cursor_is_hydrogen() {
        let m = model();
        assert_eq!(m.cursor, Some(GridPosition { row: 1, col: 1 }));
        assert_eq!(m.cursor_record().map(|r| r.symbol), Some("H"));
        assert_eq!(m.mode(), "ptable");
        assert!(!m.detail_open());
        assert!(!m.board().dark());
    }

    #[test]
    fn typing_searches_and_backspace_edits() {
        let mut m = model();
        type_text(&mut m, "neo");
        assert_eq!(m.search_text(), "neo");
        assert_eq!(m.mode(), "Search: neo");
        let visible: Vec<&str> = m
            .controller
            .visible_elements()
            .iter()
            .map(|r| r.symbol)
            .collect();
        assert_eq!(visible, vec!["Ne", "Nd"]);
        // cursor followed the filter onto the first match
        assert_eq!(m.cursor_record().map(|r| r.symbol), Some("Ne"));

        m.update(Msg::KeyBackspace);
        assert_eq!(m.search_text(), "ne");
        m.update(Msg::ClearSearch);
        assert_eq!(m.search_text(), "");
        assert_eq!(m.board().visible_count(), 118);
    }

    #[test]
    fn enter_selects_cursor_card_and_esc_closes() {
        let mut m = model();
        m.update(Msg::KeyRight);
        assert_eq!(m.cursor_record().map(|r| r.symbol), Some("He"));
        m.update(Msg::KeyEnter);
        assert!(m.detail_open());
        assert_eq!(m.board().detail().map(|r| r.symbol), Some("He"));
        assert_eq!(m.board().highlighted(), Some(2));

        m.update(Msg::KeyEsc);
        assert!(!m.detail_open());
        assert_eq!(m.board().detail(), None);
        assert_eq!(m.board().highlighted(), None);
    }

    #[test]
    fn selecting_another_card_replaces_the_selection() {
        let mut m = model();
        m.update(Msg::KeyEnter);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyEnter);
        assert_eq!(m.controller.state().selected, Some(3));
        assert_eq!(m.board().highlighted(), Some(3));
    }

    #[test]
    fn tab_cycles_filters_both_ways() {
        let mut m = model();
        m.update(Msg::KeyTab);
        assert_eq!(
            m.controller.state().active_filter,
            Filter::Category(Category::AlkaliMetal)
        );
        assert_eq!(m.cursor_record().map(|r| r.symbol), Some("Li"));
        m.update(Msg::KeyBackTab);
        m.update(Msg::KeyBackTab);
        assert_eq!(
            m.controller.state().active_filter,
            Filter::Category(Category::Actinide)
        );
        assert_eq!(m.board().visible_count(), 15);
    }

    #[test]
    fn toggle_theme_flips_board_and_store() {
        let mut m = model();
        m.update(Msg::ToggleTheme);
        assert!(m.board().dark());
        assert_eq!(
            m.controller.store().get(crate::theme::STORAGE_KEY).as_deref(),
            Some("true")
        );
        m.update(Msg::ToggleTheme);
        assert!(!m.board().dark());
    }

    #[test]
    fn no_matches_leaves_no_cursor_and_enter_is_harmless() {
        let mut m = model();
        type_text(&mut m, "zzz");
        assert_eq!(m.board().visible_count(), 0);
        assert_eq!(m.cursor, None);
        m.update(Msg::KeyEnter);
        m.update(Msg::KeyDown);
        assert!(!m.detail_open());
    }
}
