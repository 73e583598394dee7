//! Forward field extraction over report lines.
//!
//! A [`ReportScanner`] walks the lines with a single cursor that only moves
//! forward. Two independent passes are run over every report:
//!
//! 1. the headline pass ([`ReportScanner::headline_pass`]) reads the design
//!    name and then the first data path delay after it;
//! 2. the slack pass ([`ReportScanner::slack_pass`]) rewinds to the first line
//!    and reads one [`SlackEntry`] per `Slack:` marker.

use crate::field::{is_slack_marker, FieldKind};
use crate::module::{Headline, SlackEntry};
use gcpa_common::TimeValue;
use std::ops::Range;

/// A forward-only cursor over the lines of one report.
pub struct ReportScanner<'a> {
    lines: &'a [String],
    cursor: usize,
}

impl<'a> ReportScanner<'a> {
    /// Creates a scanner positioned on the first line.
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, cursor: 0 }
    }

    /// Runs the headline pass from the first line.
    pub fn headline_pass(&mut self) -> Headline {
        self.rewind();
        let design_name = self.parse_design_name();
        let critical_path = self.parse_headline_critical_path();
        Headline {
            design_name,
            critical_path,
        }
    }

    /// Runs the slack pass from the first line, one entry per `Slack:` marker.
    pub fn slack_pass(&mut self) -> Vec<SlackEntry> {
        self.rewind();
        let mut slacks = Vec::new();
        while self.next_slack_marker() {
            slacks.push(self.parse_slack_block());
        }
        slacks
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Reads the value of the next `Design` field.
    ///
    /// If there is none, the rest of the report is consumed.
    pub fn parse_design_name(&mut self) -> Option<String> {
        let found = self.find_field(FieldKind::Design, self.cursor..self.lines.len());
        self.consume(found.as_ref().map(|(idx, _)| *idx));
        found.map(|(_, value)| value.to_string())
    }

    /// Reads the next parsable `Data Path Delay` field.
    ///
    /// If there is none, the rest of the report is consumed.
    pub fn parse_headline_critical_path(&mut self) -> Option<TimeValue> {
        let found = self.find_delay(self.cursor..self.lines.len());
        self.consume(found.as_ref().map(|(idx, _)| *idx));
        found.map(|(_, value)| value)
    }

    /// Advances past the next line containing `Slack:`.
    ///
    /// Returns `false` once no marker is left.
    pub fn next_slack_marker(&mut self) -> bool {
        let found = self.next_marker_from(self.cursor);
        self.consume(found);
        found.is_some()
    }

    /// Reads `Source`, `Destination` and `Data Path Delay`, in that order.
    ///
    /// Each field is looked up starting where the previous one was found.
    /// The search never crosses the next `Slack:` marker; a missing field is
    /// left empty and does not move the cursor.
    pub fn parse_slack_block(&mut self) -> SlackEntry {
        let end = self.next_marker_from(self.cursor).unwrap_or(self.lines.len());

        let source = self
            .find_field(FieldKind::Source, self.cursor..end)
            .map(|(idx, value)| {
                self.cursor = idx + 1;
                value.to_string()
            });
        let destination = self
            .find_field(FieldKind::Destination, self.cursor..end)
            .map(|(idx, value)| {
                self.cursor = idx + 1;
                value.to_string()
            });
        let data_path_delay = self.find_delay(self.cursor..end).map(|(idx, value)| {
            self.cursor = idx + 1;
            value
        });

        SlackEntry {
            source,
            destination,
            data_path_delay,
        }
    }

    /// Moves the cursor past `found`, or to the end when nothing was found.
    fn consume(&mut self, found: Option<usize>) {
        self.cursor = found.map_or(self.lines.len(), |idx| idx + 1);
    }

    fn next_marker_from(&self, start: usize) -> Option<usize> {
        self.lines[start..]
            .iter()
            .position(|line| is_slack_marker(line))
            .map(|offset| start + offset)
    }

    fn find_field(&self, kind: FieldKind, mut range: Range<usize>) -> Option<(usize, &'a str)> {
        let lines = self.lines;
        range.find_map(|idx| {
            let value = kind.capture(&lines[idx])?;
            tracing::trace!(line = idx + 1, field = kind.label(), value, "matched field");
            Some((idx, value))
        })
    }

    /// Finds the first `Data Path Delay` whose first token is a time value.
    ///
    /// Lines whose value does not parse are skipped.
    fn find_delay(&self, range: Range<usize>) -> Option<(usize, TimeValue)> {
        let mut start = range.start;
        while let Some((idx, value)) = self.find_field(FieldKind::DataPathDelay, start..range.end) {
            let token = value.split_whitespace().next().unwrap_or("");
            match TimeValue::parse(token) {
                Ok(delay) => return Some((idx, delay)),
                Err(err) => {
                    tracing::debug!(line = idx + 1, %err, "skipping unparsable delay");
                    start = idx + 1;
                }
            }
        }
        None
    }
}
