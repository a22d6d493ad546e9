use crate::layout::Attribution;

pub(super) const INDENT: &str = "    ";
pub(super) const OR_DIVIDER: &str = "── OR ──";
pub(super) const CONNECTOR_STEM: &str = "  │";
pub(super) const LOOP_BACK_LABEL: &str = "↺ loops back to an earlier phase";

pub(super) fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub(super) fn copy_label(copied: bool) -> &'static str {
    if copied {
        "[copied!]"
    } else {
        "[copy]"
    }
}

/// Steps are numbered from one.
pub(super) fn step_number(position: usize) -> String {
    format!("{}.", position + 1)
}

pub(super) fn attribution_text(attribution: &Attribution) -> String {
    match attribution.url.as_deref() {
        Some(url) => format!("— {} ({url})", attribution.text),
        None => format!("— {}", attribution.text),
    }
}

pub(super) fn badge_text(badge: bool, loop_back: bool) -> Option<String> {
    let mut parts = Vec::new();
    if badge {
        parts.push(format!("[{}]", crate::layout::MARKER));
    }
    if loop_back {
        parts.push(LOOP_BACK_LABEL.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

pub(super) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len || max_len <= 3 {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Greedy word wrap. Explicit newlines are kept; overlong words are split.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
