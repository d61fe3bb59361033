//! Output sinks. Renderers write through [`OutputSink`] instead of `println!`
//! so tests and the WebSocket bridge can capture output without intercepting
//! global console state.

/// A line-oriented output capability.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Production sink: writes lines to stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Captures lines in memory. Used by tests and by the WebSocket bridge to
/// turn rendered output into a reply frame.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
