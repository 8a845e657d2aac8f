use crate::category::Category;
use lipgloss::{Color, Style, rounded_border};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_TYPED: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 0, 238))
        .bold(true)
});
pub static STYLE_MATCH: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_SEARCH: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_DESC: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_HIDDEN: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});
pub static STYLE_SEARCH_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));

/// Text and card colours for each theme.
pub struct Palette {
    pub text: Color,
    pub card_background: Color,
}

pub fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            text: Color::from_rgb(230, 230, 230),
            card_background: Color::from_rgb(38, 38, 38),
        }
    } else {
        Palette {
            text: Color::from_rgb(30, 30, 30),
            card_background: Color::from_rgb(255, 255, 255),
        }
    }
}

pub fn category_rgb(category: Category) -> (u8, u8, u8) {
    match category {
        Category::AlkaliMetal => (244, 114, 114),
        Category::AlkalineEarthMetal => (246, 173, 85),
        Category::TransitionMetal => (240, 200, 100),
        Category::PostTransitionMetal => (150, 190, 150),
        Category::Metalloid => (120, 190, 180),
        Category::Nonmetal => (120, 170, 230),
        Category::Halogen => (170, 140, 230),
        Category::NobleGas => (220, 130, 220),
        Category::Lanthanide => (230, 150, 180),
        Category::Actinide => (200, 120, 140),
    }
}

/// Card colours: category hue as text on a dark card, or as the fill of a
/// light card.
pub fn card_style(category: Category, dark: bool) -> Style {
    let (r, g, b) = category_rgb(category);
    let hue = Color::from_rgb(r, g, b);
    if dark {
        Style::new()
            .foreground(hue)
            .background(palette(true).card_background)
    } else {
        Style::new().foreground(palette(false).text).background(hue)
    }
}

/// Foreground for plain frame text in the current theme.
pub fn text_style(dark: bool) -> Style {
    Style::new().foreground(palette(dark).text)
}
