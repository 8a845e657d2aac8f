//! ptable - interactive periodic table for the terminal
//!
//! Library crate exposing the catalog, the view controller and the terminal
//! UI used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod catalog;
pub mod category;
pub mod cli;
pub mod config;
pub mod controller;
pub mod details;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod theme;

pub mod ui;

pub use error::{Error, PrefsError};
