//! Comment stripping for CCSS source lines.
//!
//! CCSS supports two comment forms:
//!
//! - Line comments: `// ...` to end of line, unless the `//` immediately
//!   follows a `:` (so `url('http://...')` survives).
//! - Block comments: `/* ... */`, possibly spanning several physical
//!   lines.
//!
//! [`CommentStripper`] carries the "inside a block comment" state from one
//! line to the next; everything else is per-line.

/// Strips comments from physical lines, tracking block-comment state
/// across lines.
#[derive(Debug, Default)]
pub struct CommentStripper {
    in_block: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `line` with comments removed, carrying block-comment state
    /// over from previous lines.
    ///
    /// A line wholly inside an unterminated block comment comes back
    /// empty; the caller skips blank results.
    pub fn strip_line(&mut self, line: &str) -> String {
        let mut line = line;
        if self.in_block {
            match line.find("*/") {
                Some(idx) => {
                    self.in_block = false;
                    line = &line[idx + 2..];
                }
                None => return String::new(),
            }
        }

        let mut out = strip_inline(line);
        if let Some(idx) = out.find("/*") {
            out.truncate(idx);
            self.in_block = true;
        }
        out
    }
}

/// Removes terminated block comments and the line comment from a single
/// line, scanning left to right.
///
/// The `//` guard inspects the byte immediately preceding the match in
/// the unprocessed line: only a `:` right before the slashes suppresses a
/// line comment. An unterminated `/*` is left in place for the caller to
/// handle.
fn strip_inline(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'/' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'*' {
                if let Some(end) = line[i + 2..].find("*/") {
                    i += 2 + end + 2;
                    continue;
                }
            } else if bytes[i + 1] == b'/' && (i == 0 || bytes[i - 1] != b':') {
                break;
            }
        }
        let ch = line[i..].chars().next().expect("in-bounds char boundary");
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}
