//! Text for the element detail panel.

use crate::catalog::ElementRecord;

pub const NOT_AVAILABLE: &str = "N/A";

fn or_na(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v}{unit}"))
}

pub fn atomic_mass(record: &ElementRecord) -> String {
    format!("{} u", record.atomic_weight)
}

pub fn electronegativity(record: &ElementRecord) -> String {
    or_na(record.electronegativity, "")
}

pub fn density(record: &ElementRecord) -> String {
    or_na(record.density, " g/cm³")
}

pub fn melting_point(record: &ElementRecord) -> String {
    or_na(record.melting_point, "°C")
}

pub fn boiling_point(record: &ElementRecord) -> String {
    or_na(record.boiling_point, "°C")
}

pub fn discovery_year(record: &ElementRecord) -> String {
    record
        .discovery_year
        .map_or_else(|| "Ancient".to_string(), |y| y.to_string())
}

/// Labelled fields in panel order (the header line is rendered separately).
pub fn detail_fields(record: &ElementRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Category", record.category.display_name()),
        ("Atomic mass", atomic_mass(record)),
        ("Electron configuration", record.electron_configuration.to_string()),
        ("Electronegativity", electronegativity(record)),
        ("Density", density(record)),
        ("Melting point", melting_point(record)),
        ("Boiling point", boiling_point(record)),
        ("Discovered", discovery_year(record)),
    ]
}

pub fn header(record: &ElementRecord) -> String {
    format!(
        "{}  {}  {}  ({})",
        record.atomic_number, record.symbol, record.name, record.atomic_weight
    )
}

/// Plain multi-line detail text, used by `ptable show`.
pub fn detail_text(record: &ElementRecord) -> String {
    let fields = detail_fields(record);
    let label_width = fields.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut out = vec![header(record), String::new()];
    out.extend(
        fields
            .iter()
            .map(|(label, value)| format!("{label:<label_width$}  {value}")),
    );
    out.push(String::new());
    out.push(record.description.to_string());
    out.join("\n")
}
