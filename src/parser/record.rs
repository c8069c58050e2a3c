//! Record extraction from framed begin/end pairs.
//!
//! Begin lines look like `Name:[ticks]` or `Name: [param.ticks]`, end lines
//! like `[ticks]`. Each must match its pattern exactly once.

use super::framer::FramedPair;
use crate::utils::config::{
    BEGIN_LINE_PATTERN, DEFAULT_PARAMETER_LABEL, END_LINE_PATTERN, PARAMETER_SEPARATOR,
};
use crate::utils::error::ParseError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static BEGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BEGIN_LINE_PATTERN).expect("begin line pattern is valid"));
static END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(END_LINE_PATTERN).expect("end line pattern is valid"));

/// One extracted (function, parameter, cost) record
///
/// **Public** - handed to the cost table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Function name (token before the colon)
    pub function: String,

    /// Parameter label, `"default"` when the begin line has none
    pub parameter: String,

    /// End tick minus begin tick, modulo 2^32
    pub cost: u32,
}

/// Parsed begin line payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginLine {
    pub function: String,
    pub parameter: String,
    pub tick: u32,
}

/// Extract a record from a framed pair
///
/// **Public** - main entry point for record extraction
///
/// # Errors
/// * `ParseError::RecordFormat` - A line does not match its pattern exactly once
/// * `ParseError::NumericFormat` - A tick count is not a valid `u32`
pub fn extract_record(pair: &FramedPair) -> Result<TraceRecord, ParseError> {
    let begin = parse_begin_line(&pair.begin, pair.begin_line)?;
    let end_tick = parse_end_line(&pair.end, pair.end_line)?;

    Ok(TraceRecord {
        function: begin.function,
        parameter: begin.parameter,
        cost: tick_delta(begin.tick, end_tick),
    })
}

/// Parse a begin line into function name, parameter label and begin tick
///
/// **Public** - exposed for tests and the check command
pub fn parse_begin_line(line: &str, line_number: usize) -> Result<BeginLine, ParseError> {
    let caps = single_match(&BEGIN_RE, line, line_number, "begin")?;

    let function = caps[1].to_string();
    let payload = &caps[2];

    let (parameter, tick_str) = match payload.rfind(PARAMETER_SEPARATOR) {
        Some(idx) => (&payload[..idx], &payload[idx + 1..]),
        None => (DEFAULT_PARAMETER_LABEL, payload),
    };

    Ok(BeginLine {
        function,
        parameter: parameter.to_string(),
        tick: parse_tick(tick_str, line_number)?,
    })
}

/// Parse an end line into its tick count
///
/// **Public** - exposed for tests and the check command
pub fn parse_end_line(line: &str, line_number: usize) -> Result<u32, ParseError> {
    let caps = single_match(&END_RE, line, line_number, "end")?;
    parse_tick(&caps[1], line_number)
}

/// Elapsed ticks between two counter readings
///
/// The counter is 32 bits wide. A reading that wrapped between begin and end
/// produces the wrapped difference, matching historical data.
pub fn tick_delta(begin: u32, end: u32) -> u32 {
    end.wrapping_sub(begin)
}

/// Require exactly one pattern match on a line
fn single_match<'a>(
    re: &Regex,
    line: &'a str,
    line_number: usize,
    kind: &str,
) -> Result<Captures<'a>, ParseError> {
    let mut matches = re.captures_iter(line);

    match (matches.next(), matches.next()) {
        (Some(caps), None) => Ok(caps),
        (None, _) => Err(ParseError::RecordFormat {
            line: line_number,
            reason: format!("{} line does not match: '{}'", kind, line),
        }),
        (Some(_), Some(_)) => Err(ParseError::RecordFormat {
            line: line_number,
            reason: format!("{} line matches more than once: '{}'", kind, line),
        }),
    }
}

fn parse_tick(value: &str, line_number: usize) -> Result<u32, ParseError> {
    value.parse::<u32>().map_err(|_| ParseError::NumericFormat {
        line: line_number,
        value: value.to_string(),
    })
}
