//! Labeled fields recognized in timing reports.
//!
//! Reports are only loosely structured: a field is any line whose text before
//! the first `:` contains the field's label. This deliberately tolerates
//! prefixes, indentation and vendor decorations (`  Data Path Delay (max):`),
//! at the cost of accepting unrelated lines that happen to contain a label
//! before their first colon.

/// Substring that opens a slack block.
pub const SLACK_MARKER: &str = "Slack:";

/// A field that the scanner knows how to extract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldKind {
    /// Name of the design block the report covers.
    Design,
    /// Start point of a timing path.
    Source,
    /// End point of a timing path.
    Destination,
    /// Data path delay of a timing path, or of the whole block in the headline.
    DataPathDelay,
}

impl FieldKind {
    /// Returns the label text searched for in report lines.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Design => "Design",
            FieldKind::Source => "Source",
            FieldKind::Destination => "Destination",
            FieldKind::DataPathDelay => "Data Path Delay",
        }
    }

    /// Returns the trimmed value after the first `:` if `line` holds this field.
    pub fn capture(self, line: &str) -> Option<&str> {
        let (head, value) = line.split_once(':')?;
        head.contains(self.label()).then(|| value.trim())
    }
}

/// Returns `true` if `line` opens a slack block.
pub fn is_slack_marker(line: &str) -> bool {
    line.contains(SLACK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(FieldKind::Design.label(), "Design");
        assert_eq!(FieldKind::Source.label(), "Source");
        assert_eq!(FieldKind::Destination.label(), "Destination");
        assert_eq!(FieldKind::DataPathDelay.label(), "Data Path Delay");
    }

    #[test]
    fn capture_simple() {
        assert_eq!(FieldKind::Design.capture("Design: alu_top"), Some("alu_top"));
    }

    #[test]
    fn capture_trims_and_keeps_later_colons() {
        assert_eq!(
            FieldKind::Source.capture("  Source:   reg_a/Q (rising edge: clk)  "),
            Some("reg_a/Q (rising edge: clk)")
        );
    }

    #[test]
    fn capture_tolerates_decorated_label() {
        assert_eq!(
            FieldKind::DataPathDelay.capture("  Data Path Delay (max): 4.2ns  (logic 1.1ns)"),
            Some("4.2ns  (logic 1.1ns)")
        );
    }

    #[test]
    fn label_after_first_colon_does_not_match() {
        assert_eq!(FieldKind::Design.capture("Note: see Design section"), None);
    }

    #[test]
    fn line_without_colon_does_not_match() {
        assert_eq!(FieldKind::Design.capture("Design alu_top"), None);
    }

    #[test]
    fn loose_match_accepts_unrelated_line() {
        // Any label text before the first colon counts, even inside other words.
        assert_eq!(
            FieldKind::Design.capture("Top-level Design constraints: relaxed"),
            Some("relaxed")
        );
        assert_eq!(
            FieldKind::Source.capture("Clock Source Latency: 0.3ns"),
            Some("0.3ns")
        );
    }

    #[test]
    fn capture_empty_value() {
        assert_eq!(FieldKind::Destination.capture("Destination:"), Some(""));
    }

    #[test]
    fn label_is_case_sensitive() {
        assert_eq!(FieldKind::Design.capture("design: alu"), None);
    }

    #[test]
    fn slack_marker() {
        assert!(is_slack_marker("Slack: -0.12ns (VIOLATED)"));
        assert!(is_slack_marker("Path 3 Slack: 1.0ns"));
        assert!(!is_slack_marker("Slack (MET) 1.0ns"));
        assert!(!is_slack_marker("slack: 1.0ns"));
    }
}
