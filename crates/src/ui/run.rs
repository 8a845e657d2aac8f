use crate::catalog::Catalog;
use crate::config::LaunchOptions;
use crate::controller::Event;
use crate::error::Error;
use crate::theme::ColorScheme;
use crate::ui::model::{Model, initial_model};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;

// bubbletea-rs builds the model through `TeaModel::init`, which takes no
// arguments, so launch options are parked here first.
static LAUNCH: OnceCell<LaunchOptions> = OnceCell::new();

/// Builds the session model from launch options: restores the theme and
/// applies the initial filter and search.
pub fn model_from_options(options: &LaunchOptions, ambient: ColorScheme) -> Model {
    let mut m = initial_model(
        Catalog::builtin(),
        options.open_store(),
        options.theme_start(ambient),
    );
    m.controller.dispatch(Event::Filter(options.filter));
    m.controller.dispatch(Event::Search(options.search.clone()));
    m.snap_cursor();
    m
}

struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    fn handle_key(&mut self, code: &KeyCode, modifiers: KeyModifiers) -> Option<Cmd> {
        // Normalize and handle global quit keys first for reliability across terminals:
        match code {
            KeyCode::Esc => return self.escape(),
            KeyCode::Char('\u{1b}') => return self.escape(),
            KeyCode::Char('\u{03}') => return Some(bubbletea_rs::quit()),
            KeyCode::Char(ch) if modifiers.contains(KeyModifiers::CONTROL) => {
                match ch {
                    'c' | 'C' => return Some(bubbletea_rs::quit()),
                    't' | 'T' => self.inner.update(crate::ui::Msg::ToggleTheme),
                    'u' | 'U' => self.inner.update(crate::ui::Msg::ClearSearch),
                    'n' | 'N' => self.inner.update(crate::ui::Msg::KeyDown),
                    'p' | 'P' => self.inner.update(crate::ui::Msg::KeyUp),
                    _ => {}
                }
                return None;
            }
            _ => {}
        }

        let msg = match code {
            KeyCode::Enter => crate::ui::Msg::KeyEnter,
            KeyCode::Backspace => crate::ui::Msg::KeyBackspace,
            KeyCode::Tab => crate::ui::Msg::KeyTab,
            KeyCode::BackTab => crate::ui::Msg::KeyBackTab,
            KeyCode::Up => crate::ui::Msg::KeyUp,
            KeyCode::Down => crate::ui::Msg::KeyDown,
            KeyCode::Left => crate::ui::Msg::KeyLeft,
            KeyCode::Right => crate::ui::Msg::KeyRight,
            KeyCode::Char(ch) => crate::ui::Msg::Rune(*ch),
            _ => return None,
        };
        self.inner.update(msg);
        None
    }

    // Esc closes an open panel; with nothing open it quits.
    fn escape(&mut self) -> Option<Cmd> {
        if !self.inner.detail_open() {
            return Some(bubbletea_rs::quit());
        }
        self.inner.update(crate::ui::Msg::KeyEsc);
        None
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let options = LAUNCH.get().cloned().unwrap_or_default();
        let mut adapter = TeaAdapter {
            inner: model_from_options(&options, ColorScheme::detect()),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(crate::ui::Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(&km.key, km.modifiers);
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(crate::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the interactive table until the user quits.
pub async fn run(options: LaunchOptions) -> Result<(), Error> {
    if LAUNCH.set(options).is_err() {
        tracing::warn!("interactive session already configured, keeping the first options");
    }
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| Error::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;
    tracing::info!(
        dark = final_adapter.inner.controller.is_dark(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, Filter};
    use crate::theme::STORAGE_KEY;

    fn adapter() -> TeaAdapter {
        let options = LaunchOptions {
            persist: false,
            ..LaunchOptions::default()
        };
        TeaAdapter {
            inner: model_from_options(&options, ColorScheme::Light),
        }
    }

    #[test]
    fn options_seed_filter_and_search() {
        let options = LaunchOptions {
            persist: false,
            filter: Filter::Category(Category::Halogen),
            search: "in".to_string(),
            ..LaunchOptions::default()
        };
        let m = model_from_options(&options, ColorScheme::Dark);
        let symbols: Vec<&str> = m
            .controller
            .visible_elements()
            .iter()
            .map(|r| r.symbol)
            .collect();
        assert_eq!(symbols, vec!["F", "Cl", "Br", "I", "At", "Ts"]);
        assert_eq!(m.cursor_record().map(|r| r.symbol), Some("F"));
        assert!(m.board().dark());
    }

    #[test]
    fn theme_override_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let options = LaunchOptions {
            prefs_path: Some(path.clone()),
            theme_override: Some(true),
            ..LaunchOptions::default()
        };
        let m = model_from_options(&options, ColorScheme::Light);
        assert!(m.board().dark());
        assert_eq!(m.controller.store().get(STORAGE_KEY), None);
        assert!(!path.exists());
    }

    #[test]
    fn esc_closes_panel_before_quitting() {
        let mut a = adapter();
        assert!(a.handle_key(&KeyCode::Enter, KeyModifiers::NONE).is_none());
        assert!(a.inner.detail_open());
        assert!(a.handle_key(&KeyCode::Esc, KeyModifiers::NONE).is_none());
        assert!(!a.inner.detail_open());
        assert!(a.handle_key(&KeyCode::Esc, KeyModifiers::NONE).is_some());
    }

    #[test]
    fn control_keys_map_to_actions() {
        let mut a = adapter();
        a.handle_key(&KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(a.inner.board().dark());
        a.handle_key(&KeyCode::Char('f'), KeyModifiers::NONE);
        a.handle_key(&KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(a.inner.search_text(), "fe");
        a.handle_key(&KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(a.inner.search_text(), "");
        assert!(
            a.handle_key(&KeyCode::Char('c'), KeyModifiers::CONTROL)
                .is_some()
        );
    }

    #[test]
    fn tab_keys_cycle_filters() {
        let mut a = adapter();
        a.handle_key(&KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(
            a.inner.controller.state().active_filter,
            Filter::Category(Category::AlkaliMetal)
        );
        a.handle_key(&KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(a.inner.controller.state().active_filter, Filter::All);
    }
}
