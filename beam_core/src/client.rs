//! # Completion Client
//!
//! Sends the analysis prompt to the chat-completion endpoint and turns the
//! streamed response into text chunks.
//!
//! ## Wire format
//!
//! ```text
//! POST {base_url}{endpoint_path}
//! Content-Type: application/json
//!
//! {"messages":[{"role":"user","content":"<prompt>"}],"stream":true}
//! ```
//!
//! The response framing belongs to the endpoint, so two are accepted:
//! - `text/event-stream`: each `data:` payload is a chat-completion delta
//!   (`{"choices":[{"delta":{"content":"..."}}]}`), an object with a string
//!   `content`, or bare text. `data: [DONE]` ends the answer.
//! - anything else: the body is the answer text itself.
//!
//! ## Calculation events
//!
//! [`CompletionClient::calculate`] wraps a whole request as a stream of
//! [`CalculationEvent`]s: zero or more `Chunk`s, then exactly one `Finished`
//! or `Failed`. Front-ends can rely on that last event to leave their busy
//! state. Dropping the stream drops the HTTP response, which aborts the
//! request.

use std::collections::VecDeque;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use futures::FutureExt;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{BeamError, BeamResult};
use crate::segmenter::Transcript;
use crate::settings::ClientSettings;
use crate::sse::SseParser;

/// Longest error body excerpt kept from a failed response
const ERROR_BODY_LIMIT: usize = 800;

const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    fn user(prompt: &'a str) -> Self {
        ChatRequest {
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: true,
        }
    }
}

/// One step of a running calculation
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationEvent {
    /// Next piece of the answer, in arrival order
    Chunk(String),
    /// The answer is complete; carries the full text
    Finished(String),
    /// The request or the stream failed
    Failed(BeamError),
}

impl CalculationEvent {
    /// Whether this is the last event of its calculation
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CalculationEvent::Chunk(_))
    }
}

/// How the response body is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Server-Sent Events
    EventStream,
    /// Raw UTF-8 text
    PlainText,
}

impl Framing {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct) if ct.trim().to_ascii_lowercase().starts_with("text/event-stream") => {
                Framing::EventStream
            }
            _ => Framing::PlainText,
        }
    }
}

/// Extract answer text from one SSE `data:` payload.
///
/// JSON objects are searched for `choices[0].delta.content`,
/// `choices[0].message.content`, then `content`; objects without any of
/// those (role-only deltas, usage reports) yield `None`. Anything that is
/// not a JSON object is answer text as-is.
pub fn extract_content(data: &str) -> Option<String> {
    let value = match serde_json::from_str::<serde_json::Value>(data) {
        Ok(value) if value.is_object() => value,
        _ => return Some(data.to_string()),
    };

    let choice = value.get("choices").and_then(|c| c.get(0));
    choice
        .and_then(|c| c.get("delta"))
        .and_then(|d| d.get("content"))
        .or_else(|| choice.and_then(|c| c.get("message")).and_then(|m| m.get("content")))
        .or_else(|| value.get("content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
}

/// Incremental UTF-8 decoder that reassembles characters split across chunks.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much as possible, keeping an incomplete trailing character
    pub fn decode(&mut self, bytes: &[u8]) -> BeamResult<String> {
        self.pending.extend_from_slice(bytes);
        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // Truncated sequence at the end: wait for the next chunk
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(BeamError::stream(format!("invalid UTF-8 in response: {}", e))),
        };

        let rest = self.pending.split_off(valid);
        let complete = std::mem::replace(&mut self.pending, rest);
        String::from_utf8(complete)
            .map_err(|e| BeamError::stream(format!("invalid UTF-8 in response: {}", e)))
    }

    /// Fail if the body ended in the middle of a character
    pub fn finish(&self) -> BeamResult<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(BeamError::stream(format!(
                "response ended inside a UTF-8 sequence ({} dangling bytes)",
                self.pending.len()
            )))
        }
    }
}

/// Text chunks of one streamed response.
pub struct ChunkStream {
    bytes: BoxStream<'static, BeamResult<Vec<u8>>>,
    framing: Framing,
    decoder: Utf8Decoder,
    sse: SseParser,
    ready: VecDeque<String>,
    done: bool,
}

impl ChunkStream {
    /// Wrap a raw body stream
    pub fn new<S>(bytes: S, framing: Framing) -> Self
    where
        S: Stream<Item = BeamResult<Vec<u8>>> + Send + 'static,
    {
        ChunkStream {
            bytes: bytes.boxed(),
            framing,
            decoder: Utf8Decoder::new(),
            sse: SseParser::new(),
            ready: VecDeque::new(),
            done: false,
        }
    }

    /// Next non-empty text chunk; `Ok(None)` once the answer is complete.
    pub async fn next_chunk(&mut self) -> BeamResult<Option<String>> {
        loop {
            if let Some(chunk) = self.ready.pop_front() {
                return Ok(Some(chunk));
            }
            if self.done {
                return Ok(None);
            }

            match self.bytes.next().await {
                Some(Ok(bytes)) => {
                    let text = self.decoder.decode(&bytes)?;
                    self.ingest(&text);
                }
                Some(Err(e)) => return Err(e),
                None => {
                    self.decoder.finish()?;
                    if self.framing == Framing::EventStream {
                        if let Some(event) = self.sse.finish() {
                            self.ingest_event_data(&event.data);
                        }
                    }
                    self.done = true;
                }
            }
        }
    }

    fn ingest(&mut self, text: &str) {
        match self.framing {
            Framing::PlainText => {
                if !text.is_empty() {
                    self.ready.push_back(text.to_string());
                }
            }
            Framing::EventStream => {
                for event in self.sse.feed(text) {
                    self.ingest_event_data(&event.data);
                    if self.done {
                        break;
                    }
                }
            }
        }
    }

    fn ingest_event_data(&mut self, data: &str) {
        if data.trim() == DONE_MARKER {
            self.done = true;
            return;
        }
        if let Some(content) = extract_content(data).filter(|c| !c.is_empty()) {
            self.ready.push_back(content);
        }
    }
}

/// Turn an opening request into calculation events.
///
/// Always ends with exactly one terminal event. A body that ends without
/// `[DONE]` is treated as complete.
pub fn calculation_events<F>(open: F) -> BoxStream<'static, CalculationEvent>
where
    F: std::future::Future<Output = BeamResult<ChunkStream>> + Send + 'static,
{
    enum State {
        Connecting(BoxFuture<'static, BeamResult<ChunkStream>>),
        Streaming(ChunkStream, Transcript),
        Done,
    }

    async fn advance(
        mut chunks: ChunkStream,
        mut transcript: Transcript,
    ) -> (CalculationEvent, State) {
        match chunks.next_chunk().await {
            Ok(Some(chunk)) => {
                transcript.push(&chunk);
                (CalculationEvent::Chunk(chunk), State::Streaming(chunks, transcript))
            }
            Ok(None) => {
                debug!(
                    chunks = transcript.chunk_count(),
                    chars = transcript.text().len(),
                    "analysis stream complete"
                );
                (CalculationEvent::Finished(transcript.into_text()), State::Done)
            }
            Err(e) => {
                warn!(error = %e, chunks = transcript.chunk_count(), "analysis stream failed");
                (CalculationEvent::Failed(e), State::Done)
            }
        }
    }

    stream::unfold(State::Connecting(open.boxed()), |state| async move {
        match state {
            State::Connecting(open) => match open.await {
                Ok(chunks) => Some(advance(chunks, Transcript::new()).await),
                Err(e) => {
                    warn!(error = %e, "analysis request failed");
                    Some((CalculationEvent::Failed(e), State::Done))
                }
            },
            State::Streaming(chunks, transcript) => Some(advance(chunks, transcript).await),
            State::Done => None,
        }
    })
    .boxed()
}

/// Excerpt of a rejected response's body; empty when it could not be read.
fn error_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => body.chars().take(ERROR_BODY_LIMIT).collect(),
        Err(e) => {
            debug!(error = %e, "could not read error response body");
            String::new()
        }
    }
}

/// HTTP client for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    url: String,
}

impl CompletionClient {
    /// Build a client from validated settings
    pub fn new(settings: &ClientSettings) -> BeamResult<Self> {
        settings.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(format!("BeamCee/{}", env!("CARGO_PKG_VERSION")))
            .timeout(settings.request_timeout())
            .connect_timeout(settings.connect_timeout())
            .build()
            .map_err(|e| BeamError::Internal {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(CompletionClient {
            http,
            url: settings.endpoint_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the prompt and return the response's text chunks.
    pub async fn open(&self, prompt: &str) -> BeamResult<ChunkStream> {
        info!(url = %self.url, prompt_chars = prompt.len(), "requesting beam analysis");

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&ChatRequest::user(prompt))
            .send()
            .await
            .map_err(|e| BeamError::http(self.url.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            warn!(status = status.as_u16(), "completion endpoint rejected the request");
            return Err(BeamError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let framing = Framing::from_content_type(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );
        debug!(?framing, "analysis stream opened");

        let bytes = response.bytes_stream().map(|chunk| {
            chunk
                .map(|b| b.to_vec())
                .map_err(|e| BeamError::stream(e.to_string()))
        });

        Ok(ChunkStream::new(bytes, framing))
    }

    /// Run one calculation as an event stream (see module docs).
    pub fn calculate(&self, prompt: impl Into<String>) -> BoxStream<'static, CalculationEvent> {
        let client = self.clone();
        let prompt = prompt.into();
        calculation_events(async move { client.open(&prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::split_steps;

    fn byte_chunks(parts: &[&[u8]]) -> impl Stream<Item = BeamResult<Vec<u8>>> + Send + 'static {
        let owned: Vec<BeamResult<Vec<u8>>> = parts.iter().map(|p| Ok(p.to_vec())).collect();
        stream::iter(owned)
    }

    async fn collect_chunks(mut chunks: ChunkStream) -> BeamResult<Vec<String>> {
        let mut out = Vec::new();
        while let Some(chunk) = chunks.next_chunk().await? {
            out.push(chunk);
        }
        Ok(out)
    }

    fn sse_delta(text: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"delta": {"content": text}}]})
        )
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(ChatRequest::user("Calculate")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "messages": [{"role": "user", "content": "Calculate"}],
                "stream": true
            })
        );
    }

    #[test]
    fn test_framing_detection() {
        assert_eq!(
            Framing::from_content_type(Some("text/event-stream; charset=utf-8")),
            Framing::EventStream
        );
        assert_eq!(Framing::from_content_type(Some("Text/Event-Stream")), Framing::EventStream);
        assert_eq!(Framing::from_content_type(Some("text/plain")), Framing::PlainText);
        assert_eq!(Framing::from_content_type(None), Framing::PlainText);
    }

    #[test]
    fn test_extract_content() {
        assert_eq!(
            extract_content(r#"{"choices":[{"delta":{"content":"Step 1:"}}]}"#).as_deref(),
            Some("Step 1:")
        );
        assert_eq!(
            extract_content(r#"{"choices":[{"message":{"content":"all"}}]}"#).as_deref(),
            Some("all")
        );
        assert_eq!(extract_content(r#"{"content":"x"}"#).as_deref(), Some("x"));
        assert_eq!(extract_content(r#"{"choices":[{"delta":{"role":"assistant"}}]}"#), None);
        assert_eq!(extract_content("plain words").as_deref(), Some("plain words"));
        assert_eq!(extract_content("42").as_deref(), Some("42"));
    }

    #[test]
    fn test_utf8_decoder_reassembles_split_character() {
        let bytes = "δ = 3".as_bytes();
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.decode(&bytes[..1]).unwrap(), "");
        assert_eq!(decoder.decode(&bytes[1..]).unwrap(), "δ = 3");
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_utf8_decoder_errors() {
        let mut decoder = Utf8Decoder::new();
        assert!(decoder.decode(&[0xff, b'a']).is_err());

        let mut decoder = Utf8Decoder::new();
        decoder.decode(&"é".as_bytes()[..1]).unwrap();
        assert!(decoder.finish().is_err());
    }

    #[tokio::test]
    async fn test_plain_text_chunks_in_order() {
        let chunks = ChunkStream::new(
            byte_chunks(&[b"Step 1: A", b"\nStep 2", b": B"]),
            Framing::PlainText,
        );
        let out = collect_chunks(chunks).await.unwrap();
        assert_eq!(out, vec!["Step 1: A", "\nStep 2", ": B"]);
    }

    #[tokio::test]
    async fn test_sse_chunks_stop_at_done() {
        let body = format!(
            "{}{}data: [DONE]\n\n{}",
            sse_delta("Step 1: "),
            sse_delta("A"),
            sse_delta("ignored")
        );
        let chunks = ChunkStream::new(byte_chunks(&[body.as_bytes()]), Framing::EventStream);
        let out = collect_chunks(chunks).await.unwrap();
        assert_eq!(out, vec!["Step 1: ", "A"]);
    }

    #[tokio::test]
    async fn test_sse_event_split_across_byte_chunks() {
        let body = sse_delta("σ max");
        let bytes = body.as_bytes();
        let mid = body.find('σ').unwrap() + 1;
        let chunks =
            ChunkStream::new(byte_chunks(&[&bytes[..mid], &bytes[mid..]]), Framing::EventStream);
        assert_eq!(collect_chunks(chunks).await.unwrap(), vec!["σ max"]);
    }

    #[tokio::test]
    async fn test_events_end_with_finished() {
        let chunks =
            ChunkStream::new(byte_chunks(&[b"Step 1: A\n", b"Step 2: B"]), Framing::PlainText);
        let events: Vec<_> = calculation_events(async move { Ok(chunks) }).collect().await;

        assert_eq!(
            events,
            vec![
                CalculationEvent::Chunk("Step 1: A\n".to_string()),
                CalculationEvent::Chunk("Step 2: B".to_string()),
                CalculationEvent::Finished("Step 1: A\nStep 2: B".to_string()),
            ]
        );
        assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
    }

    #[tokio::test]
    async fn test_connect_failure_is_single_failed_event() {
        let events: Vec<_> =
            calculation_events(async { Err(BeamError::http("http://localhost:1", "refused")) })
                .collect()
                .await;
        assert_eq!(
            events,
            vec![CalculationEvent::Failed(BeamError::http("http://localhost:1", "refused"))]
        );
    }

    #[tokio::test]
    async fn test_mid_stream_failure_is_terminal() {
        let parts: Vec<BeamResult<Vec<u8>>> = vec![
            Ok(b"Step 1: A".to_vec()),
            Err(BeamError::stream("connection reset")),
            Ok(b"never read".to_vec()),
        ];
        let chunks = ChunkStream::new(stream::iter(parts), Framing::PlainText);
        let events: Vec<_> = calculation_events(async move { Ok(chunks) }).collect().await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], CalculationEvent::Chunk("Step 1: A".to_string()));
        assert_eq!(events[1], CalculationEvent::Failed(BeamError::stream("connection reset")));
    }

    #[tokio::test]
    async fn test_five_step_answer_segments_in_source_order() {
        let sections = [
            "Step 1: Initial Setup\nSimply supported, 5 m span.",
            "\nStep 2: Reaction Forces\nR1 = 500 N, R2 = 500 N.",
            "\nStep 3: Shear Force Analysis\nMax shear 500 N.",
            "\nStep 4: Bending Moment Analysis\nMax moment 1250 Nm at 2.5 m.",
            "\nStep 5: Deflection Analysis\nMax deflection 2 mm at midspan.",
        ];
        let body: String =
            sections.iter().map(|s| sse_delta(s)).collect::<String>() + "data: [DONE]\n\n";
        let chunks = ChunkStream::new(byte_chunks(&[body.as_bytes()]), Framing::EventStream);
        let events: Vec<_> = calculation_events(async move { Ok(chunks) }).collect().await;

        let text = match events.last() {
            Some(CalculationEvent::Finished(text)) => text.clone(),
            other => panic!("expected Finished, got {:?}", other),
        };
        let steps = split_steps(&text);
        let labels: Vec<_> = steps.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Step 1", "Step 2", "Step 3", "Step 4", "Step 5"]);
        assert!(steps[0].text.starts_with("Initial Setup"));
        assert!(steps[4].text.starts_with("Deflection Analysis"));
    }

    /// Read one HTTP request (headers plus `Content-Length` body).
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        use tokio::io::AsyncReadExt;

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(request).unwrap()
    }

    /// Serve one canned HTTP response on a local port; resolves to the raw request.
    async fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: String,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::AsyncWriteExt;
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (base_url, server)
    }

    #[tokio::test]
    async fn test_posts_prompt_and_streams_response() {
        let body = format!(
            "{}{}data: [DONE]\n\n",
            sse_delta("Step 1: A\n"),
            sse_delta("Step 2: B")
        );
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", "text/event-stream", body).await;

        let client = CompletionClient::new(&ClientSettings {
            base_url,
            ..Default::default()
        })
        .unwrap();
        let events: Vec<_> = client.calculate("Calculate the beam").collect().await;

        assert_eq!(
            events.last(),
            Some(&CalculationEvent::Finished("Step 1: A\nStep 2: B".to_string()))
        );

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /integrations/chat-gpt/conversationgpt4 HTTP/1.1\r\n"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        let json_body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let parsed: serde_json::Value = serde_json::from_str(json_body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "messages": [{"role": "user", "content": "Calculate the beam"}],
                "stream": true
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_is_failed_event() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            "text/plain",
            "boom".to_string(),
        )
        .await;

        let client = CompletionClient::new(&ClientSettings {
            base_url,
            ..Default::default()
        })
        .unwrap();
        let events: Vec<_> = client.calculate("x").collect().await;
        server.await.unwrap();

        assert_eq!(
            events,
            vec![CalculationEvent::Failed(BeamError::HttpStatus {
                status: 500,
                body: "boom".to_string()
            })]
        );
    }

    #[tokio::test]
    async fn test_plain_text_response() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK",
            "text/plain; charset=utf-8",
            "Step 1: only".to_string(),
        )
        .await;

        let client = CompletionClient::new(&ClientSettings {
            base_url,
            ..Default::default()
        })
        .unwrap();
        let events: Vec<_> = client.calculate("x").collect().await;
        server.await.unwrap();

        assert_eq!(events.last(), Some(&CalculationEvent::Finished("Step 1: only".to_string())));
    }

    #[tokio::test]
    async fn test_dropping_events_closes_connection() {
        use std::time::Duration;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        // Sends one chunk of an unbounded body, then waits for the client to hang up
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\
                      Transfer-Encoding: chunked\r\n\r\n9\r\nStep 1: A\r\n",
                )
                .await
                .unwrap();

            let mut buf = [0u8; 64];
            loop {
                match tokio::time::timeout(Duration::from_secs(5), socket.read(&mut buf)).await {
                    Ok(Ok(0)) | Ok(Err(_)) => return true,
                    Ok(Ok(_)) => continue,
                    Err(_) => return false,
                }
            }
        });

        let client = CompletionClient::new(&ClientSettings {
            base_url,
            ..Default::default()
        })
        .unwrap();
        let mut events = client.calculate("x");
        assert_eq!(events.next().await, Some(CalculationEvent::Chunk("Step 1: A".to_string())));
        drop(events);

        assert!(server.await.unwrap(), "connection stayed open after the stream was dropped");
    }

    #[test]
    fn test_error_body_excerpt() {
        let long = "x".repeat(ERROR_BODY_LIMIT + 50);
        assert_eq!(error_body::<String>(Ok(long)).len(), ERROR_BODY_LIMIT);
        assert_eq!(error_body::<String>(Ok("boom".to_string())), "boom");
        assert_eq!(error_body(Err("connection reset")), "");
    }

    #[test]
    fn test_client_rejects_bad_settings() {
        let settings = ClientSettings {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(CompletionClient::new(&settings).is_err());
    }

    #[test]
    fn test_client_url() {
        let client = CompletionClient::new(&ClientSettings::default()).unwrap();
        assert_eq!(client.url(), "http://localhost:3000/integrations/chat-gpt/conversationgpt4");
    }
}
