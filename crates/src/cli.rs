//! Command-line definitions and the non-interactive subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::Catalog;
use crate::category::{Category, Filter};
use crate::config::LaunchOptions;
use crate::controller::{UiState, is_visible};
use crate::details;
use crate::error::Error;

#[derive(Parser, Debug)]
#[command(
    name = "ptable",
    version,
    about = "Interactive periodic table for the terminal",
    long_about = "Browse the periodic table in the terminal.\n\n\
                  Type to search by name, symbol or atomic number, Tab through the\n\
                  category filters and press Enter for element details."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Preference file (default: the per-user config directory).
    #[arg(long = "prefs", value_name = "PATH", env = "PTABLE_PREFS", global = true)]
    pub prefs: Option<PathBuf>,

    /// Keep theme changes for this session only.
    #[arg(long = "no-persist", global = true)]
    pub no_persist: bool,

    /// Start in this theme without saving it.
    #[arg(long = "theme", value_enum, global = true)]
    pub theme: Option<ThemeArg>,

    /// Write logs to a file (the terminal is used by the table).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Initial category filter: `all` or a slug such as `noble-gas`.
    #[arg(long = "filter", value_name = "CATEGORY", default_value = "all")]
    pub filter: Filter,

    /// Initial search text.
    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the elements that pass a filter and search.
    List {
        #[arg(long = "filter", value_name = "CATEGORY", default_value = "all")]
        filter: Filter,

        #[arg(long = "search", value_name = "TEXT", default_value = "")]
        search: String,
    },

    /// Print the details of one element, by symbol, name or atomic number.
    Show {
        #[arg(value_name = "ELEMENT")]
        query: String,
    },

    /// List category slugs and their display names.
    Categories,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl Cli {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            prefs_path: self.prefs.clone(),
            persist: !self.no_persist,
            theme_override: self.theme.map(|t| t == ThemeArg::Dark),
            filter: self.filter,
            search: self.search.clone(),
        }
    }
}

/// `ptable list`: one line per visible element, in catalog order.
pub fn list_lines(catalog: &Catalog, filter: Filter, search: &str) -> Vec<String> {
    let state = UiState {
        selected: None,
        active_filter: filter,
        search_text: search.to_string(),
    };
    catalog
        .elements()
        .iter()
        .filter(|record| is_visible(record, &state))
        .map(|record| {
            format!(
                "{:>3}  {:<2}  {:<14} {}",
                record.atomic_number,
                record.symbol,
                record.name,
                record.category.display_name()
            )
        })
        .collect()
}

/// `ptable show`: detail text, or `UnknownElement` when nothing matches.
pub fn show_text(catalog: &Catalog, query: &str) -> Result<String, Error> {
    catalog
        .find(query)
        .map(details::detail_text)
        .ok_or_else(|| Error::UnknownElement(query.to_string()))
}

pub fn categories_lines() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|c| format!("{:<22} {}", c.slug(), c.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ptable").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_runs_the_table() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        let opts = cli.launch_options();
        assert!(opts.persist);
        assert_eq!(opts.theme_override, None);
        assert_eq!(opts.filter, Filter::All);
    }

    #[test]
    fn launch_flags_map_to_options() {
        let cli = parse(&[
            "--theme",
            "dark",
            "--no-persist",
            "--filter",
            "Noble-Gas",
            "--search",
            "ne",
        ]);
        let opts = cli.launch_options();
        assert_eq!(opts.theme_override, Some(true));
        assert!(!opts.persist);
        assert_eq!(opts.filter, Filter::Category(Category::NobleGas));
        assert_eq!(opts.search, "ne");
    }

    #[test]
    fn bad_filter_is_rejected() {
        let err = Cli::try_parse_from(["ptable", "list", "--filter", "gases"]).unwrap_err();
        assert!(err.to_string().contains("gases"));
    }

    #[test]
    fn list_uses_the_visibility_rule() {
        let catalog = Catalog::builtin();
        let lines = list_lines(
            &catalog,
            Filter::Category(Category::AlkaliMetal),
            "ium",
        );
        let symbols: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.split_whitespace().nth(1))
            .collect();
        assert_eq!(symbols, vec!["Li", "Na", "K", "Rb", "Cs", "Fr"]);
        assert!(lines[0].starts_with("  3  Li  Lithium"));
        assert!(lines[0].ends_with("Alkali Metal"));
        assert_eq!(list_lines(&catalog, Filter::All, "").len(), 118);
    }

    #[test]
    fn show_finds_by_symbol_name_or_number() {
        let catalog = Catalog::builtin();
        for query in ["fe", "Iron", "26"] {
            let text = show_text(&catalog, query).unwrap();
            assert!(text.starts_with("26  Fe  Iron"), "query {query}: {text}");
        }
        let err = show_text(&catalog, "unobtainium").unwrap_err();
        assert!(matches!(err, Error::UnknownElement(q) if q == "unobtainium"));
    }

    #[test]
    fn categories_cover_every_slug() {
        let lines = categories_lines();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("alkali-metal"));
        assert!(lines[7].ends_with("Noble Gas"));
    }
}
