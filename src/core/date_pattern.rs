//! Date-pattern formatting for log file names
//!
//! Name patterns carry their date component in `DateTime.ToString` style
//! (`yyyyMMdd`, `yyyy-MM-dd_HH`), not strftime. This module translates such
//! a pattern into a `chrono` format string and applies it to the wall clock.
//!
//! Translation is total: recognized tokens map to their chrono equivalent,
//! single-quoted sections are emitted literally, and any other character
//! passes through verbatim (with `%` escaped so chrono does not interpret
//! it). A malformed pattern therefore degrades to literal text instead of
//! failing.

use chrono::{DateTime, Local};

/// Translate a `DateTime.ToString`-style pattern into a chrono format string.
#[must_use]
pub fn to_chrono_format(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Quoted sections are literal; '' yields a single quote.
        if c == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        match c {
            'y' => out.push_str(if run <= 2 { "%y" } else { "%Y" }),
            'M' => out.push_str(match run {
                1 => "%-m",
                2 => "%m",
                3 => "%b",
                _ => "%B",
            }),
            'd' => out.push_str(match run {
                1 => "%-d",
                2 => "%d",
                3 => "%a",
                _ => "%A",
            }),
            'H' => out.push_str(if run == 1 { "%-H" } else { "%H" }),
            'h' => out.push_str(if run == 1 { "%-I" } else { "%I" }),
            'm' => out.push_str(if run == 1 { "%-M" } else { "%M" }),
            's' => out.push_str(if run == 1 { "%-S" } else { "%S" }),
            // Fractional seconds normalize to milliseconds unless the run
            // asks for micro- or nanosecond width exactly.
            'f' => out.push_str(match run {
                6 => "%6f",
                9 => "%9f",
                _ => "%3f",
            }),
            't' => out.push_str("%p"),
            _ => {
                for _ in 0..run {
                    push_literal(&mut out, c);
                }
            }
        }
        i += run;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Format a local wall-clock time with a `DateTime.ToString`-style pattern.
#[must_use]
pub fn format_local(datetime: &DateTime<Local>, pattern: &str) -> String {
    datetime.format(&to_chrono_format(pattern)).to_string()
}
