use std::io::{self, Write};

use crate::BrainfuckError;

/// Pretty-print a [`BrainfuckError`] with a caret under the offending
/// instruction. If `program` is `Some("bf")`, messages are prefixed with
/// "bf: ...".
pub fn print_error(program: Option<&str>, code: &[u8], err: &BrainfuckError) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    let msg = match err {
        BrainfuckError::UnmatchedBracket { kind, .. } => {
            prefix_program(&format!("Parse error: unmatched bracket {kind}"))
        }
        BrainfuckError::ScanOutOfBounds { kind, .. } => {
            prefix_program(&format!("Runtime error: no bracket matches {kind}"))
        }
        BrainfuckError::Io { source, .. } => prefix_program(&format!("I/O error: {source}")),
    };
    eprint!("{}", render_error_with_context(&msg, code, err.ip()));
    let _ = io::stderr().flush();
}

/// Render `prefix` with the instruction index, a short window of source
/// around `pos`, and a caret line. Non-UTF-8 bytes render as `?`.
pub fn render_error_with_context(prefix: &str, code: &[u8], pos: usize) -> String {
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW);
    let end = (pos + WINDOW + 1).min(code.len());
    let window: String = code
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|&b| printable(b))
        .collect();

    let caret_offset = pos.saturating_sub(start);
    format!(
        "{prefix} at instruction {pos}\n  {window}\n  {}^\n",
        " ".repeat(caret_offset)
    )
}

/// One display column per source byte so the caret lines up.
fn printable(b: u8) -> char {
    match b {
        b' '..=b'~' => b as char,
        b'\t' | b'\n' | b'\r' => ' ',
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BracketKind;

    #[test]
    fn caret_points_at_position() {
        let out = render_error_with_context("oops", b"++]--", 2);
        assert_eq!(out, "oops at instruction 2\n  ++]--\n    ^\n");
    }

    #[test]
    fn window_is_clipped_around_position() {
        let code = "+".repeat(100);
        let out = render_error_with_context("e", code.as_bytes(), 60);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1].len(), 2 + 65);
        assert_eq!(lines[2], format!("  {}^", " ".repeat(32)));
    }

    #[test]
    fn newlines_and_binary_do_not_break_alignment() {
        let out = render_error_with_context("e", b"+\n\xff]", 3);
        assert_eq!(out, "e at instruction 3\n  + ?]\n     ^\n");
    }

    #[test]
    fn bracket_kind_displays_quoted() {
        let err = BrainfuckError::UnmatchedBracket { ip: 0, kind: BracketKind::Open };
        assert_eq!(err.to_string(), "Unmatched bracket '[' at instruction 0");
    }
}
