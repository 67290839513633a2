//! Readable labels derived from case names.

/// Split a case name into words.
///
/// Words break on `_`, `-`, `.` and whitespace, on lower-to-upper camel-case
/// boundaries, and before the last capital of an acronym followed by a
/// lowercase letter (`HTTPServer` -> `HTTP`, `Server`).
pub fn words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let chars: Vec<(usize, char)> = name.char_indices().collect();

    for (i, &(idx, ch)) in chars.iter().enumerate() {
        if is_separator(ch) {
            if let Some(s) = start.take() {
                words.push(&name[s..idx]);
            }
            continue;
        }

        if let Some(s) = start {
            if s < idx && is_boundary(&chars, i) {
                words.push(&name[s..idx]);
                start = Some(idx);
            }
        } else {
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        words.push(&name[s..]);
    }
    words
}

/// Render a case name as a title-cased, space-separated label.
///
/// `PENDING_APPROVAL` -> `Pending Approval`, `InProgress` -> `In Progress`.
pub fn readable_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    for word in words(name) {
        if !label.is_empty() {
            label.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            for ch in chars {
                label.extend(ch.to_lowercase());
            }
        }
    }
    label
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '_' | '-' | '.') || ch.is_whitespace()
}

fn is_boundary(chars: &[(usize, char)], i: usize) -> bool {
    let ch = chars[i].1;
    if !ch.is_uppercase() || i == 0 {
        return false;
    }
    let prev = chars[i - 1].1;
    if prev.is_lowercase() || prev.is_ascii_digit() {
        return true;
    }
    let next_is_lower = chars.get(i + 1).map_or(false, |&(_, c)| c.is_lowercase());
    prev.is_uppercase() && next_is_lower
}
