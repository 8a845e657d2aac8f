use crate::ui::render::styles::STYLE_MATCH;

/// Styles the first case-insensitive occurrence of `needle` inside `text`.
pub fn highlight_match(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    let lower = text.to_lowercase();
    // byte offsets only line up when lowercasing kept the length
    if lower.len() != text.len() {
        return text.to_string();
    }
    let needle = needle.to_lowercase();
    let Some(start) = lower.find(&needle) else {
        return text.to_string();
    };
    let end = start + needle.len();
    if !text.is_char_boundary(end) {
        return text.to_string();
    }
    format!(
        "{}{}{}",
        &text[..start],
        STYLE_MATCH.render(&text[start..end]),
        &text[end..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_styled_in_place() {
        let out = highlight_match("Neodymium", "DYM");
        assert!(out.starts_with("Neo"));
        assert!(out.contains(&STYLE_MATCH.render("dym")));
        assert!(out.ends_with("ium"));
    }

    #[test]
    fn no_match_or_empty_needle_is_untouched() {
        assert_eq!(highlight_match("Helium", ""), "Helium");
        assert_eq!(highlight_match("Helium", "xe"), "Helium");
    }
}
