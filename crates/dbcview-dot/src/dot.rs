//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Make a string safe to use as a file name stem.
/// Replaces anything but ASCII alphanumerics, '-' and '_' with underscore.
pub fn sanitize_file_stem(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder. Every id and value is written quoted.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT digraph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph \"{}\" {{", escape_label(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add an edge with attributes.
    pub fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(
            self.output,
            "\"{}\" -> \"{}\" [",
            escape_label(from),
            escape_label(to)
        );
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push_str("];\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
