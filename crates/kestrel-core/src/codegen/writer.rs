//! Indentation-aware output buffer.

/// Two-space indent unit, matching the formatting of the runtime
/// support text.
const INDENT: &str = "  ";

/// Accumulates emitted text and injects indentation lazily: the prefix
/// for the current depth is written only once actual line content
/// arrives, so blank lines never carry trailing whitespace. A write
/// containing embedded line breaks is reindented as a unit; every
/// non-empty line after the first gets the prefix too.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new() -> Self {
        SourceWriter {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for piece in text.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" && self.indent_level > 0 {
                for _ in 0..self.indent_level {
                    self.output.push_str(INDENT);
                }
            }
            self.output.push_str(piece);
            self.at_line_start = piece.ends_with('\n');
        }
    }

    pub fn writeln(&mut self, text: &str) {
        self.write(text);
        self.write("\n");
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        SourceWriter::new()
    }
}
