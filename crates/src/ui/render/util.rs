use lipgloss::Style;

/// Renders every line at `total_width` and forces exactly `per` lines.
pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> Vec<String> {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > per {
        normalized.truncate(per);
    } else {
        while normalized.len() < per {
            normalized.push(line_style.render(""));
        }
    }
    normalized
}

// plain-text cut on char boundaries; styling is applied after
pub fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Greedy word wrap, cut to `max_lines`; the last kept line ends in `…` when
/// text was dropped.
pub fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    let mut lines: Vec<String> = lines.into_iter().map(|l| clip(&l, width)).collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(1).min(last.chars().count());
            *last = format!("{}…", clip(last, keep));
        }
    }
    lines
}

pub fn screen_width(w: usize) -> usize {
    if w > 0 { w } else { crate::ui::model::DEFAULT_WIDTH }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_counts_chars_not_bytes() {
        assert_eq!(clip("g/cm³ and more", 5), "g/cm³");
        assert_eq!(clip("abc", 10), "abc");
    }

    #[test]
    fn wrap_breaks_on_words_and_marks_overflow() {
        let lines = wrap_words("a noble gas that glows orange red", 12, 2);
        assert_eq!(lines, vec!["a noble gas".to_string(), "that glows…".to_string()]);
        assert_eq!(wrap_words("short", 12, 2), vec!["short".to_string()]);
        assert!(wrap_words("", 12, 2).is_empty());
    }

    #[test]
    fn pad_and_truncate_to_height() {
        assert_eq!(normalize_and_pad(vec!["a".into()], 10, 3).len(), 3);
        assert_eq!(
            normalize_and_pad(vec!["a".into(), "b".into(), "c".into()], 10, 2).len(),
            2
        );
    }
}
