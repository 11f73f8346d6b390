//! Server-Sent Events framing for streamed completions.
//!
//! Events are separated by a blank line; only their `data:` lines carry
//! answer text. Input arrives already UTF-8 decoded and may be
//! cut anywhere, so incomplete lines are buffered across calls.

/// A single parsed SSE event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The `data:` lines joined with `\n`
    pub data: String,
}

/// Incremental SSE parser.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed decoded text. Returns every event completed by it.
    pub fn feed(&mut self, text: &str) -> Vec<SseEvent> {
        self.buffer.push_str(text);
        // A CRLF pair may straddle two calls, so normalize the whole buffer
        if self.buffer.contains('\r') {
            self.buffer = self.buffer.replace("\r\n", "\n");
        }

        let mut events = Vec::new();
        while let Some(boundary) = self.buffer.find("\n\n") {
            let block: String = self.buffer.drain(..boundary + 2).collect();
            if let Some(event) = parse_block(&block) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a final event the server did not terminate with a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        let block = std::mem::take(&mut self.buffer);
        parse_block(&block)
    }
}

fn parse_block(block: &str) -> Option<SseEvent> {
    let data_lines: Vec<&str> = block
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|val| val.strip_prefix(' ').unwrap_or(val))
        .collect();
    // event:, id:, retry: and comment lines carry nothing we use

    if data_lines.is_empty() {
        return None;
    }

    Some(SseEvent {
        data: data_lines.join("\n"),
    })
}
