//! Extraction of the structured header carried in a CTL file's leading
//! comment block.
//!
//! The block holds, in any line order, an `<ACEStransformID>` tag, an
//! `<ACESuserName>` tag, and free-form `//` description lines. It ends at
//! the first non-empty line that is none of those.

use crate::Result;
use regex::Regex;
use serde::Serialize;

/// Header fields extracted from the leading comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawHeader {
    pub id: Option<String>,
    pub user_name: Option<String>,
    /// Description lines, comment markers stripped, newline-joined.
    pub description: String,
}

enum State {
    InHeader,
    Done,
}

/// Run the header state machine over full file text.
///
/// Blank lines are skipped before the machine sees them; they do not
/// terminate the header.
pub fn extract_header(code: &str) -> Result<RawHeader> {
    let id_re = Regex::new("<ACEStransformID>(.*)</ACEStransformID>")?;
    let user_name_re = Regex::new("<ACESuserName>(.*)</ACESuserName>")?;

    let mut header = RawHeader::default();
    let mut description: Vec<String> = Vec::new();
    let mut state = State::InHeader;

    for line in code.lines().map(str::trim).filter(|line| !line.is_empty()) {
        state = match state {
            State::Done => break,
            State::InHeader => {
                if let Some(caps) = id_re.captures(line) {
                    header.id = Some(caps[1].to_string());
                    State::InHeader
                } else if let Some(caps) = user_name_re.captures(line) {
                    header.user_name = Some(caps[1].to_string());
                    State::InHeader
                } else if let Some(comment) = line.strip_prefix("//") {
                    description.push(comment.trim().to_string());
                    State::InHeader
                } else {
                    State::Done
                }
            }
        };
    }

    header.description = description.join("\n");

    Ok(header)
}
