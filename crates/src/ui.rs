// UI module root: split implementation into focused submodules under `ui/`

pub mod board;
pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::initial_model` etc.
pub use board::{Board, Card};
pub use model::{Model, initial_model};
pub use render::{
    render_detail_panel, render_filter_bar, render_full, render_grid, render_legend,
    render_lower_panel, render_modeline, render_modeline_padded, render_search_block,
};
pub use run::run;
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyBackspace,
    KeyEnter,
    KeyEsc,
    KeyTab,
    KeyBackTab,
    Rune(char),
    KeyUp,
    KeyDown,
    KeyLeft,
    KeyRight,
    ClearSearch,
    ToggleTheme,
}
