//! Pretty-printed rendering of an ordered sequence of entry names.
//!
//! The output grammar is fixed: each name is quoted, the sequence is
//! bracketed, and listings wider than [`WIDTH`] columns break one item per
//! line with continuation lines aligned under the first item:
//!
//! ```text
//! ['first-entry.txt',
//!  'second-entry.txt']
//! ```

/// Column budget for the single-line form.
pub const WIDTH: usize = 80;

/// Render `names` in the fixed listing grammar.
///
/// An empty sequence renders as `[]`. A sequence whose single-line form fits
/// in [`WIDTH`] columns stays on one line; anything wider breaks one item per
/// line, separated by commas, with a one-space indent aligning items under
/// the opening bracket.
pub fn pformat(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote(name)).collect();
    let flat = format!("[{}]", quoted.join(", "));
    if quoted.len() <= 1 || flat.chars().count() <= WIDTH {
        return flat;
    }

    let mut out = String::new();
    out.push('[');
    for (index, item) in quoted.iter().enumerate() {
        if index > 0 {
            out.push_str(",\n ");
        }
        out.push_str(item);
    }
    out.push(']');
    out
}

/// Quote a single name.
///
/// Single quotes by default; double quotes when the name contains a single
/// quote but no double quote. Backslash and the active quote are escaped,
/// newline/carriage-return/tab render as `\n`/`\r`/`\t`, and remaining ASCII
/// control characters render as `\xHH`. Everything else passes through.
fn quote(name: &str) -> String {
    let use_double = name.contains('\'') && !name.contains('"');
    let delimiter = if use_double { '"' } else { '\'' };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(delimiter);
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch == delimiter => {
                out.push('\\');
                out.push(ch);
            }
            ch if ch.is_ascii_control() => {
                out.push_str(&format!("\\x{:02x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push(delimiter);
    out
}
