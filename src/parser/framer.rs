//! Block framer: pairs begin and end trace lines by indentation.
//!
//! The log prints a begin line at the call's indentation column and the
//! matching end line (tick count only) at the same column once the call
//! returns. Nested calls are indented further and are paired on their own,
//! so the column of the first non-space character works like a bracket.
//!
//! ```text
//! CMainFrame.OnCreate:[35996247]
//!     Page.DataReady:[65535.36866.35997371]
//!     [35997371]
//! [35997417]
//! ```
//!
//! Some loggers print the end line one level deeper than its begin line.
//! An end-only line (`[ticks]`) indented past a pending begin line closes
//! that begin line as well.
//!
//! Lines are only ever compared with the top of the pending stack.

use crate::utils::error::ParseError;

/// A pending line held on the stack
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLine {
    number: usize,
    text: String,
}

/// A matched begin/end pair
///
/// **Public** - consumed by the record extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedPair {
    /// Begin line text (function name, parameters, begin tick)
    pub begin: String,

    /// End line text (end tick)
    pub end: String,

    /// 1-based line number of the begin line
    pub begin_line: usize,

    /// 1-based line number of the end line
    pub end_line: usize,
}

/// Outcome of comparing the incoming line with the top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    /// Content starts at different columns: the incoming line is pending
    Nested,
    /// Content starts at the same column: the pair is complete
    Matched,
}

/// Lazy iterator over matched pairs
///
/// **Public** - created by [`frame`]
///
/// Yields `Ok(FramedPair)` in the order end lines are encountered. On a
/// structural fault it yields a single `Err` and is exhausted afterwards.
/// The stack is a plain `Vec` used only through push and pop.
#[derive(Debug)]
pub struct BlockFramer<I> {
    lines: I,
    stack: Vec<PendingLine>,
    line_number: usize,
    max_depth: usize,
    finished: bool,
}

/// Frame a sequence of lines into begin/end pairs
///
/// **Public** - main entry point for framing
///
/// # Arguments
/// * `lines` - Newline-stripped log lines in file order
///
/// # Returns
/// A one-shot iterator of `Result<FramedPair, ParseError>`
pub fn frame<I, S>(lines: I) -> BlockFramer<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BlockFramer {
        lines: lines.into_iter(),
        stack: Vec::new(),
        line_number: 0,
        max_depth: 0,
        finished: false,
    }
}

impl<I> BlockFramer<I> {
    /// Deepest stack observed so far
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Number of lines still waiting for their end line
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, line: PendingLine) {
        self.stack.push(line);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<FramedPair, ParseError>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<I, S> Iterator for BlockFramer<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    type Item = Result<FramedPair, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(raw) = self.lines.next() {
            self.line_number += 1;
            let current = PendingLine {
                number: self.line_number,
                text: raw.into(),
            };

            let Some(top) = self.stack.last() else {
                self.push(current);
                continue;
            };

            match compare_indentation(&top.text, &current.text) {
                Some(Alignment::Nested) => self.push(current),
                Some(Alignment::Matched) => {
                    let Some(begin) = self.stack.pop() else {
                        continue;
                    };
                    return Some(Ok(FramedPair {
                        begin: begin.text,
                        end: current.text,
                        begin_line: begin.number,
                        end_line: current.number,
                    }));
                }
                None => {
                    let reason = format!(
                        "no indentation decision point against line {}",
                        top.number
                    );
                    return self.fail(ParseError::StructuralMismatch {
                        line: current.number,
                        reason,
                    });
                }
            }
        }

        self.finished = true;

        // Bottom of the stack is the outermost unterminated begin line
        let first = self.stack.first()?;
        let err = ParseError::StructuralMismatch {
            line: first.number,
            reason: format!(
                "{} unterminated begin record(s) at end of input",
                self.stack.len()
            ),
        };
        Some(Err(err))
    }
}

/// Scan both lines while they share a leading space
///
/// Returns `None` when the shorter line runs out before a decision point.
fn compare_indentation(top: &str, current: &str) -> Option<Alignment> {
    let (a, b) = (top.as_bytes(), current.as_bytes());
    let shorter = a.len().min(b.len());

    let idx = a
        .iter()
        .zip(b.iter())
        .take_while(|(x, y)| **x == b' ' && **y == b' ')
        .count();

    if idx == shorter {
        return None;
    }

    if a[idx] != b' ' && b[idx] != b' ' {
        return Some(Alignment::Matched);
    }

    // End line printed deeper than the begin line it closes
    if b[idx] == b' ' && !is_end_line(a) && is_end_line(b) {
        return Some(Alignment::Matched);
    }

    Some(Alignment::Nested)
}

/// First non-space character opens the tick bracket
fn is_end_line(line: &[u8]) -> bool {
    line.iter().find(|c| **c != b' ') == Some(&b'[')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_ok(lines: &[&str]) -> Vec<FramedPair> {
        frame(lines.iter().copied())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_compare_indentation() {
        assert_eq!(compare_indentation("A:[1]", "[2]"), Some(Alignment::Matched));
        assert_eq!(compare_indentation("A:[1]", "    B:[2]"), Some(Alignment::Nested));
        assert_eq!(compare_indentation("    B:[2]", "[3]"), Some(Alignment::Nested));
        assert_eq!(compare_indentation("    [2]", "        [3]"), Some(Alignment::Nested));
        assert_eq!(compare_indentation("  B:[2]", "    [3]"), Some(Alignment::Matched));
        assert_eq!(compare_indentation("  ", "    x"), None);
        assert_eq!(compare_indentation("A:[1]", ""), None);
    }

    #[test]
    fn test_single_pair() {
        let pairs = collect_ok(&["Foo:[10]", "[20]"]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].begin, "Foo:[10]");
        assert_eq!(pairs[0].end, "[20]");
        assert_eq!((pairs[0].begin_line, pairs[0].end_line), (1, 2));
    }

    #[test]
    fn test_nested_pairs_inner_first() {
        let pairs = collect_ok(&[
            "Outer:[1]",
            "    Inner:[2]",
            "    [3]",
            "[4]",
        ]);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].begin, "    Inner:[2]");
        assert_eq!(pairs[1].begin, "Outer:[1]");
        assert_eq!(pairs[1].end, "[4]");
    }

    #[test]
    fn test_end_lines_indented_past_begin() {
        let pairs = collect_ok(&[
            "CMainFrame.OnCreate:[35996247]",
            "    Page.DataReady:[65535.36866.35997371]",
            "        [35997371]",
            "    [35997417]",
        ]);
        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].begin_line, pairs[0].end_line), (2, 3));
        assert_eq!((pairs[1].begin_line, pairs[1].end_line), (1, 4));
    }

    #[test]
    fn test_unterminated_begin() {
        let mut framer = frame(vec!["Foo:[1]", "    Bar:[2]", "    [3]"]);
        assert!(framer.next().unwrap().is_ok());
        let err = framer.next().unwrap().unwrap_err();
        assert!(matches!(err, ParseError::StructuralMismatch { line: 1, .. }));
        assert!(framer.next().is_none());
    }

    #[test]
    fn test_blank_line_is_structural_fault() {
        let results: Vec<_> = frame(vec!["Foo:[1]", "", "[2]"]).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(ParseError::StructuralMismatch { line: 2, .. })
        ));
    }

    #[test]
    fn test_max_depth() {
        let mut framer = frame(vec![
            "A:[1]",
            "  B:[2]",
            "    C:[3]",
            "    [4]",
            "  [5]",
            "[6]",
        ]);
        let count = framer.by_ref().filter(|r| r.is_ok()).count();
        assert_eq!(count, 3);
        assert_eq!(framer.max_depth(), 3);
        assert_eq!(framer.pending(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(frame(Vec::<String>::new()).count(), 0);
    }
}
