// Render module split into focused submodules, one per frame region.

pub mod decorate;
pub mod detail;
pub mod filters;
pub mod full;
pub mod grid;
pub mod modeline;
pub mod search;
pub mod styles;
pub mod util;

pub use decorate::highlight_match;
pub use detail::{render_detail_panel, render_legend, render_lower_panel};
pub use filters::render_filter_bar;
pub use full::render_full;
pub use grid::render_grid;
pub use modeline::{render_modeline, render_modeline_padded};
pub use search::render_search_block;
