//! Argument parsers shared by the report card verbs.

use crate::db::ReportDraft;
use crate::error::{CommandError, MalformedId};

/// A report id parsed from a `#<id>` token, plus anything wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReportId {
    pub id: i64,
    pub issues: Vec<MalformedId>,
}

/// Parse a `#<id>` token.
///
/// A missing `#` is reported but tolerated. Digits that do not parse are
/// reported and the id falls back to 0, which no stored report carries.
pub fn parse_report_id(token: &str) -> ParsedReportId {
    let mut issues = Vec::new();

    let digits = match token.strip_prefix('#') {
        Some(rest) => rest,
        None => {
            issues.push(MalformedId::MissingPrefix);
            token
        }
    };

    let id = match digits.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            issues.push(MalformedId::NotANumber);
            0
        }
    };

    ParsedReportId { id, issues }
}

/// Parse `[points] <player> <reason...>` starting at `args[offset]`.
///
/// Points are optional and detected positionally: if the first token is
/// not an integer it is taken as the player name and points are 0.
pub fn parse_report(
    args: &[&str],
    offset: usize,
    reporter_name: &str,
) -> Result<ReportDraft, CommandError> {
    let missing = |required: usize| CommandError::InsufficientArguments {
        required,
        given: args.len(),
    };

    let mut i = offset;
    let first = args.get(i).ok_or_else(|| missing(i + 1))?;

    let points = match first.parse::<i32>() {
        Ok(points) => {
            i += 1;
            points
        }
        Err(_) => 0,
    };

    let player_name = args.get(i).ok_or_else(|| missing(i + 1))?;
    let reason = args[i + 1..].join(" ").trim().to_string();

    Ok(ReportDraft {
        player_name: player_name.to_string(),
        reporter_name: reporter_name.to_string(),
        points,
        reason,
    })
}
