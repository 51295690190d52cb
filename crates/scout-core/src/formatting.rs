use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a row count with thousands separators.
///
/// # Examples
///
/// ```
/// use scout_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(950), "950");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

/// Insert a `,` between every group of three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}

/// Truncate `text` to at most `width` terminal columns, appending an
/// ellipsis when anything was cut, then pad with spaces to exactly `width`.
///
/// Widths are measured in display columns via `unicode-width`, so CJK and
/// other wide characters line up in the preview table.
///
/// # Examples
///
/// ```
/// use scout_core::formatting::truncate_pad;
///
/// assert_eq!(truncate_pad("Data Analyst", 16), "Data Analyst    ");
/// assert_eq!(truncate_pad("Senior Backend Engineer", 10), "Senior Ba…");
/// ```
pub fn truncate_pad(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    if text.width() <= width {
        out.push_str(text);
    } else {
        // Leave one column for the ellipsis.
        let mut used = 0;
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
    }

    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}
