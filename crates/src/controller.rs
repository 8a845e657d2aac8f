//! View controller: owns the UI state and drives a rendering surface.
//!
//! Every input is turned into an [`Event`] and handled by [`Controller::dispatch`]
//! to completion before the next one arrives. The controller is the only
//! writer of [`UiState`]; surfaces only receive the resulting changes.

use crate::catalog::{Catalog, ElementRecord, GridPosition};
use crate::category::Filter;
use crate::prefs::FlagStore;
use crate::theme::{self, ColorScheme};

/// Rendering collaborator. The terminal UI implements it with `ui::Board`.
pub trait Surface {
    fn render_card(&mut self, record: &ElementRecord, position: GridPosition);
    fn update_detail_panel(&mut self, record: &ElementRecord);
    fn close_detail_panel(&mut self);
    fn set_card_visibility(&mut self, atomic_number: u32, visible: bool);
    fn highlight_card(&mut self, atomic_number: u32);
    fn clear_highlight(&mut self, atomic_number: u32);
    fn apply_theme(&mut self, dark: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub selected: Option<u32>,
    pub active_filter: Filter,
    pub search_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Search(String),
    Filter(Filter),
    Select(u32),
    Close,
    ToggleTheme,
}

/// How the theme flag is chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeStart {
    /// Stored preference, else the ambient scheme.
    Restore(ColorScheme),
    /// Fixed for this session; nothing is written to the store.
    Override(bool),
}

/// Case-insensitive substring match on name, symbol or atomic number.
/// Empty search text matches every record.
pub fn matches_search(record: &ElementRecord, search_text: &str) -> bool {
    let needle = search_text.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.symbol.to_lowercase().contains(&needle)
        || record.atomic_number.to_string().contains(&needle)
}

pub fn is_visible(record: &ElementRecord, state: &UiState) -> bool {
    state.active_filter.admits(record.category) && matches_search(record, &state.search_text)
}

pub struct Controller<S: Surface> {
    catalog: Catalog,
    state: UiState,
    dark: bool,
    store: Box<dyn FlagStore>,
    surface: S,
}

impl<S: Surface> Controller<S> {
    pub fn new(catalog: Catalog, surface: S, store: Box<dyn FlagStore>) -> Self {
        Controller {
            catalog,
            state: UiState::default(),
            dark: false,
            store,
            surface,
        }
    }

    /// Resets UI state, lays out every positioned card and applies the theme.
    pub fn start(&mut self, theme_start: ThemeStart) {
        self.state = UiState::default();
        for record in self.catalog.elements() {
            let Some(position) = self.catalog.position(record.atomic_number) else {
                tracing::debug!(
                    atomic_number = record.atomic_number,
                    "no grid position, card skipped"
                );
                continue;
            };
            self.surface.render_card(record, position);
        }
        self.refresh_visibility();

        self.dark = match theme_start {
            ThemeStart::Restore(ambient) => theme::restore(self.store.as_ref(), ambient),
            ThemeStart::Override(dark) => dark,
        };
        self.surface.apply_theme(self.dark);
        tracing::info!(cards = self.catalog.len(), dark = self.dark, "controller started");
    }

    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "dispatch");
        match event {
            Event::Search(text) => self.set_search_text(&text),
            Event::Filter(filter) => self.set_filter(filter),
            Event::Select(atomic_number) => self.select_element(atomic_number),
            Event::Close => self.close_details(),
            Event::ToggleTheme => {
                self.toggle_theme();
            }
        }
    }

    pub fn select_element(&mut self, atomic_number: u32) {
        let Some(record) = self.catalog.get(atomic_number).copied() else {
            tracing::debug!(atomic_number, "select ignored: not in catalog");
            return;
        };
        if let Some(previous) = self.state.selected.take() {
            self.surface.clear_highlight(previous);
        }
        self.state.selected = Some(atomic_number);
        self.surface.update_detail_panel(&record);
        self.surface.highlight_card(atomic_number);
        tracing::debug!(symbol = record.symbol, "element selected");
    }

    pub fn close_details(&mut self) {
        let Some(previous) = self.state.selected.take() else {
            return;
        };
        self.surface.close_detail_panel();
        self.surface.clear_highlight(previous);
        tracing::debug!(atomic_number = previous, "details closed");
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.active_filter = filter;
        self.refresh_visibility();
        tracing::debug!(%filter, "filter changed");
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.state.search_text = text.to_string();
        self.refresh_visibility();
    }

    /// Flips the theme flag and persists it. Returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark = !self.dark;
        self.surface.apply_theme(self.dark);
        if let Err(e) = self.store.set(theme::STORAGE_KEY, theme::encode(self.dark)) {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
        tracing::info!(dark = self.dark, "theme toggled");
        self.dark
    }

    fn refresh_visibility(&mut self) {
        for record in self.catalog.elements() {
            let visible = is_visible(record, &self.state);
            self.surface.set_card_visibility(record.atomic_number, visible);
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &dyn FlagStore {
        self.store.as_ref()
    }

    pub fn is_visible(&self, atomic_number: u32) -> bool {
        self.catalog
            .get(atomic_number)
            .is_some_and(|record| is_visible(record, &self.state))
    }

    pub fn visible_elements(&self) -> Vec<&ElementRecord> {
        self.catalog
            .elements()
            .iter()
            .filter(|record| is_visible(record, &self.state))
            .collect()
    }

    pub fn selected_record(&self) -> Option<&ElementRecord> {
        self.state.selected.and_then(|n| self.catalog.get(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ElementRecord, PositionMap};
    use crate::category::Category;
    use crate::prefs::MemoryStore;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, Default)]
    struct RecordingSurface {
        cards: BTreeMap<u32, GridPosition>,
        visible: BTreeMap<u32, bool>,
        highlighted: BTreeSet<u32>,
        detail: Option<u32>,
        detail_closes: usize,
        dark: Option<bool>,
    }

    impl Surface for RecordingSurface {
        fn render_card(&mut self, record: &ElementRecord, position: GridPosition) {
            self.cards.insert(record.atomic_number, position);
        }
        fn update_detail_panel(&mut self, record: &ElementRecord) {
            self.detail = Some(record.atomic_number);
        }
        fn close_detail_panel(&mut self) {
            self.detail = None;
            self.detail_closes += 1;
        }
        fn set_card_visibility(&mut self, atomic_number: u32, visible: bool) {
            self.visible.insert(atomic_number, visible);
        }
        fn highlight_card(&mut self, atomic_number: u32) {
            self.highlighted.insert(atomic_number);
        }
        fn clear_highlight(&mut self, atomic_number: u32) {
            self.highlighted.remove(&atomic_number);
        }
        fn apply_theme(&mut self, dark: bool) {
            self.dark = Some(dark);
        }
    }

    fn hydrogen_helium() -> Catalog {
        let builtin = Catalog::builtin();
        let elements: Vec<ElementRecord> = builtin.elements()[..2].to_vec();
        let positions: PositionMap = elements
            .iter()
            .map(|e| (e.atomic_number, builtin.position(e.atomic_number).unwrap()))
            .collect();
        Catalog::new(elements, positions)
    }

    fn started(catalog: Catalog) -> Controller<RecordingSurface> {
        let mut c = Controller::new(
            catalog,
            RecordingSurface::default(),
            Box::new(MemoryStore::new()),
        );
        c.start(ThemeStart::Restore(ColorScheme::Unknown));
        c
    }

    fn visible_symbols(c: &Controller<RecordingSurface>) -> Vec<&'static str> {
        c.visible_elements().iter().map(|e| e.symbol).collect()
    }

    #[test]
    fn startup_state_is_reset() {
        let c = started(hydrogen_helium());
        assert_eq!(c.state(), &UiState::default());
        assert_eq!(c.state().active_filter, Filter::All);
        assert_eq!(c.surface().cards.len(), 2);
        assert!(c.surface().visible.values().all(|v| *v));
    }

    #[test]
    fn noble_gas_filter_shows_only_helium() {
        let mut c = started(hydrogen_helium());
        c.set_filter(Filter::Category(Category::NobleGas));
        assert_eq!(visible_symbols(&c), vec!["He"]);
        assert_eq!(c.surface().visible.get(&1), Some(&false));
        assert_eq!(c.surface().visible.get(&2), Some(&true));
    }

    #[test]
    fn search_he_matches_helium_not_hydrogen() {
        let mut c = started(hydrogen_helium());
        c.set_search_text("he");
        assert_eq!(visible_symbols(&c), vec!["He"]);
        c.set_search_text("h");
        assert_eq!(visible_symbols(&c), vec!["H", "He"]);
    }

    #[test]
    fn search_is_case_insensitive_and_matches_numbers() {
        let mut c = started(Catalog::builtin());
        c.set_search_text("IRON");
        assert_eq!(visible_symbols(&c), vec!["Fe"]);
        c.set_search_text("118");
        assert_eq!(visible_symbols(&c), vec!["Og"]);
        c.set_search_text("");
        assert_eq!(c.visible_elements().len(), 118);
    }

    #[test]
    fn filter_and_search_combine() {
        let mut c = started(Catalog::builtin());
        c.set_search_text("ium");
        c.set_filter(Filter::Category(Category::AlkaliMetal));
        assert_eq!(visible_symbols(&c), vec!["Li", "Na", "K", "Rb", "Cs", "Fr"]);
        // search still applies after switching the filter back
        c.set_filter(Filter::All);
        assert!(!c.is_visible(26));
        assert!(c.is_visible(2));
    }

    #[test]
    fn selection_is_exclusive_and_replaceable() {
        let mut c = started(hydrogen_helium());
        c.select_element(1);
        assert_eq!(c.state().selected, Some(1));
        assert_eq!(c.surface().detail, Some(1));
        assert_eq!(c.surface().highlighted, BTreeSet::from([1]));

        c.select_element(2);
        assert_eq!(c.state().selected, Some(2));
        assert_eq!(c.surface().detail, Some(2));
        assert_eq!(c.surface().highlighted, BTreeSet::from([2]));
        assert_eq!(c.selected_record().map(|e| e.symbol), Some("He"));

        c.close_details();
        assert_eq!(c.state().selected, None);
        assert_eq!(c.surface().detail, None);
        assert!(c.surface().highlighted.is_empty());
    }

    #[test]
    fn close_without_selection_is_a_no_op() {
        let mut c = started(hydrogen_helium());
        c.close_details();
        assert_eq!(c.surface().detail_closes, 0);
    }

    #[test]
    fn selecting_unknown_atomic_number_changes_nothing() {
        let mut c = started(hydrogen_helium());
        c.select_element(1);
        c.select_element(99);
        assert_eq!(c.state().selected, Some(1));
        assert_eq!(c.surface().detail, Some(1));
    }

    #[test]
    fn toggle_theme_twice_restores_and_persists_each_step() {
        let mut c = started(hydrogen_helium());
        let original = c.is_dark();
        let after_first = c.toggle_theme();
        assert_ne!(after_first, original);
        assert_eq!(
            c.store().get(theme::STORAGE_KEY).as_deref(),
            Some(theme::encode(after_first))
        );
        assert_eq!(c.surface().dark, Some(after_first));

        let after_second = c.toggle_theme();
        assert_eq!(after_second, original);
        assert_eq!(
            c.store().get(theme::STORAGE_KEY).as_deref(),
            Some(theme::encode(original))
        );
    }

    #[test]
    fn ambient_dark_without_saved_preference_starts_dark() {
        let mut c = Controller::new(
            hydrogen_helium(),
            RecordingSurface::default(),
            Box::new(MemoryStore::new()),
        );
        c.start(ThemeStart::Restore(ColorScheme::Dark));
        assert!(c.is_dark());
        assert_eq!(c.surface().dark, Some(true));
    }

    #[test]
    fn theme_override_is_not_persisted() {
        let mut c = Controller::new(
            hydrogen_helium(),
            RecordingSurface::default(),
            Box::new(MemoryStore::with(theme::STORAGE_KEY, "false")),
        );
        c.start(ThemeStart::Override(true));
        assert!(c.is_dark());
        assert_eq!(c.store().get(theme::STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn cards_without_position_are_not_rendered() {
        let builtin = Catalog::builtin();
        let elements = builtin.elements()[..3].to_vec();
        let positions: PositionMap = [(1, builtin.position(1).unwrap())].into_iter().collect();
        let c = started(Catalog::new(elements, positions));
        assert_eq!(c.surface().cards.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn dispatch_routes_every_event_kind() {
        let mut c = started(hydrogen_helium());
        c.dispatch(Event::Filter(Filter::Category(Category::Nonmetal)));
        c.dispatch(Event::Search("hyd".to_string()));
        assert_eq!(visible_symbols(&c), vec!["H"]);
        c.dispatch(Event::Select(1));
        assert_eq!(c.state().selected, Some(1));
        c.dispatch(Event::Close);
        assert_eq!(c.state().selected, None);
        let before = c.is_dark();
        c.dispatch(Event::ToggleTheme);
        assert_ne!(c.is_dark(), before);
    }

    // Store whose writes always fail, like a read-only config directory.
    struct ReadOnlyStore;

    impl FlagStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), crate::PrefsError> {
            Err(crate::PrefsError::NoConfigDir)
        }
    }

    #[test]
    fn toggle_survives_a_failed_write() {
        let mut c = Controller::new(
            hydrogen_helium(),
            RecordingSurface::default(),
            Box::new(ReadOnlyStore),
        );
        c.start(ThemeStart::Restore(ColorScheme::Light));
        assert!(!c.is_dark());
        assert_eq!(c.surface().dark, Some(false));

        assert!(c.toggle_theme());
        assert!(c.is_dark());
        assert_eq!(c.surface().dark, Some(true));
        // nothing was stored, the session keeps the new flag anyway
        assert_eq!(c.store().get(theme::STORAGE_KEY), None);

        assert!(!c.toggle_theme());
        assert_eq!(c.surface().dark, Some(false));
    }

    fn filter_strategy() -> impl Strategy<Value = Filter> {
        (0..Filter::cycle().len()).prop_map(|i| Filter::cycle()[i])
    }

    proptest! {
        #[test]
        fn visible_set_matches_predicate(
            filter in filter_strategy(),
            search in "[a-zA-Z0-9]{0,3}",
        ) {
            let mut c = started(Catalog::builtin());
            c.set_filter(filter);
            c.set_search_text(&search);

            let needle = search.to_lowercase();
            let expected: BTreeSet<u32> = Catalog::builtin()
                .elements()
                .iter()
                .filter(|e| filter == Filter::All || Filter::Category(e.category) == filter)
                .filter(|e| {
                    e.name.to_lowercase().contains(&needle)
                        || e.symbol.to_lowercase().contains(&needle)
                        || e.atomic_number.to_string().contains(&needle)
                })
                .map(|e| e.atomic_number)
                .collect();
            let actual: BTreeSet<u32> =
                c.visible_elements().iter().map(|e| e.atomic_number).collect();
            prop_assert_eq!(&actual, &expected);

            let on_surface: BTreeSet<u32> = c
                .surface()
                .visible
                .iter()
                .filter(|(_, v)| **v)
                .map(|(n, _)| *n)
                .collect();
            prop_assert_eq!(on_surface, expected);
        }
    }
}
