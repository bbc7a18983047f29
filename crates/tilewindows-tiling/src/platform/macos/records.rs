//! Parses the window records printed by the enumeration scripts.
//!
//! This is the only place script output is interpreted. Field layout is
//! documented in `scripts`.

use tilewindows_common::{AutomationError, LiveWindow, Rect};

use crate::platform::Result;

const FIELDS: usize = 8;
const STANDARD_SUBROLE: &str = "AXStandardWindow";

/// Parse every record in `output`, skipping blank lines.
pub fn parse_records(output: &str) -> Result<Vec<LiveWindow>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_record)
        .collect()
}

/// Parse one tab-separated record.
///
/// Fields are split from the right so an application name containing a tab
/// survives intact.
pub fn parse_record(line: &str) -> Result<LiveWindow> {
    let malformed = || AutomationError::MalformedRecord(line.to_string());

    let mut fields: Vec<&str> = line.trim_end_matches('\r').rsplitn(FIELDS, '\t').collect();
    if fields.len() != FIELDS {
        return Err(malformed());
    }
    fields.reverse();

    let app = fields[0].to_string();
    let index = fields[1].trim().parse::<u32>().map_err(|_| malformed())?;
    let x = parse_coord(fields[2]).ok_or_else(malformed)?;
    let y = parse_coord(fields[3]).ok_or_else(malformed)?;
    let width = parse_coord(fields[4]).ok_or_else(malformed)?;
    let height = parse_coord(fields[5]).ok_or_else(malformed)?;
    let standard = is_standard_subrole(fields[6]);
    let minimized = match fields[7].trim() {
        "true" => true,
        "false" | "" | "missing value" => false,
        _ => return Err(malformed()),
    };

    if app.is_empty() || index == 0 {
        return Err(malformed());
    }

    Ok(LiveWindow {
        app,
        index,
        rect: Rect::new(x, y, width, height),
        standard,
        minimized,
    })
}

/// Whole numbers, or reals rounded to the nearest point.
fn parse_coord(field: &str) -> Option<i32> {
    let field = field.trim();
    field
        .parse::<i32>()
        .ok()
        .or_else(|| field.parse::<f64>().ok().map(|v| v.round() as i32))
}

/// A window whose subrole could not be read counts as standard.
fn is_standard_subrole(subrole: &str) -> bool {
    match subrole.trim() {
        "" | "missing value" => true,
        s => s == STANDARD_SUBROLE,
    }
}

/// Parse the per-request result lines printed by a batched move script.
///
/// Lines that are neither `ok` nor `error TAB ...` continue the previous
/// error message, since AppleScript messages may span lines. Fails unless
/// exactly `expected` results were printed.
pub fn parse_move_results(output: &str, expected: usize) -> Result<Vec<Result<()>>> {
    let mut messages: Vec<Option<String>> = Vec::with_capacity(expected);

    for line in output.lines().map(|l| l.trim_end_matches('\r')) {
        if line == "ok" {
            messages.push(None);
        } else if let Some(message) = line.strip_prefix("error\t") {
            messages.push(Some(message.to_string()));
        } else if let Some(Some(message)) = messages.last_mut() {
            message.push('\n');
            message.push_str(line);
        } else if !line.trim().is_empty() {
            return Err(AutomationError::MalformedRecord(line.to_string()));
        }
    }

    if messages.len() != expected {
        return Err(AutomationError::MalformedRecord(format!(
            "expected {expected} move results, got {}",
            messages.len()
        )));
    }

    Ok(messages
        .into_iter()
        .map(|m| match m {
            None => Ok(()),
            Some(message) => Err(AutomationError::Diagnostic(message)),
        })
        .collect())
}
