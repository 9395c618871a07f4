//! Structured-data header template

use super::interpolate::{escape, Pattern};
use super::severity::Severity;

/// Default header layout.
///
/// The single-`%` verbs take software, version, program and pid once at
/// construction. The doubled `%%` verbs survive that pass and are filled on
/// every call with: severity, sequence, severity, timestamp, message.
pub const DEFAULT_TEMPLATE: &str = "%%s[origin software=\"%s\" swVersion=\"%s\" x-program=\"%s\" x-sequence=\"%%d\" x-pid=\"%d\" x-severity=\"%%s\" x-timestamp=\"%%s\"] %%s";

/// Header template with the process identity already substituted
#[derive(Debug, Clone)]
pub struct HeaderTemplate {
    text: String,
    pattern: Pattern,
}

impl HeaderTemplate {
    /// Compile `template` (or [`DEFAULT_TEMPLATE`] when empty) for one process.
    ///
    /// Identity values are escaped first so a `%` inside them is printed
    /// literally. The template itself is not validated: a wrong number of
    /// verbs shows up as `MISSING`/`EXTRA` markers in rendered lines.
    pub fn compile(template: &str, software: &str, version: &str, program: &str, pid: u32) -> Self {
        let source = if template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            template
        };

        let software = escape(software);
        let version = escape(version);
        let program = escape(program);
        let text = Pattern::parse(source).render(&[&software, &version, &program, &pid]);
        let pattern = Pattern::parse(&text);

        Self { text, pattern }
    }

    /// Fill the per-call slots; the result carries no trailing newline
    pub fn render(&self, severity: Severity, sequence: u64, timestamp: &str, message: &str) -> String {
        let token = severity.token();
        self.pattern
            .render(&[&token, &sequence, &token, &timestamp, &message])
    }

    /// Compiled template text, per-call verbs still in place
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
