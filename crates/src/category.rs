use std::fmt;
use std::str::FromStr;

/// Chemical classification used for filtering and card colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali-metal",
            Category::AlkalineEarthMetal => "alkaline-earth-metal",
            Category::TransitionMetal => "transition-metal",
            Category::PostTransitionMetal => "post-transition-metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble-gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
        }
    }

    /// Title-cased label built from the slug: `noble-gas` -> `Noble Gas`.
    pub fn display_name(self) -> String {
        format_category_name(self.slug())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| crate::Error::UnknownCategory(s.to_string()))
    }
}

pub fn format_category_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Active category constraint: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }

    /// Filter cycle order used by the filter bar: `All` first, then each category.
    pub fn cycle() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(Category::ALL.iter().copied().map(Filter::Category))
            .collect()
    }

    pub fn next(self) -> Filter {
        let order = Filter::cycle();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    pub fn prev(self) -> Filter {
        let order = Filter::cycle();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }

    pub fn label(self) -> String {
        match self {
            Filter::All => "All".to_string(),
            Filter::Category(c) => c.display_name(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for Filter {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse::<Category>().map(Filter::Category)
    }
}
