//! Assignment expression parsing.
//!
//! Expressions take the form `Target = Src1 + Src2 + ...`: one target
//! column left of a single `=`, a `+`-joined list of source columns on the
//! right. Parsing is purely syntactic; whether the named columns exist is
//! checked at evaluation time.

use regex::Regex;

/// A parsed column assignment: `target = sources[0] + sources[1] + ...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub sources: Vec<String>,
}

/// Parse an assignment expression.
/// Returns `None` if the text is not of the form `target = a + b + ...`
/// (missing or repeated `=`, empty target, empty source list).
pub fn parse_assignment(text: &str) -> Option<Assignment> {
    let re = Regex::new(r"^(?<target>[^=]+)=(?<rhs>[^=]+)$").unwrap();
    let caps = re.captures(text)?;

    let target = caps["target"].trim();
    if target.is_empty() {
        return None;
    }

    let mut sources = Vec::new();
    for piece in caps["rhs"].split('+') {
        let piece = piece.trim();
        if piece.is_empty() {
            return None;
        }
        sources.push(piece.to_string());
    }

    Some(Assignment {
        target: target.to_string(),
        sources,
    })
}
