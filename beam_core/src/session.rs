//! # Calculator Session
//!
//! All state of one calculator session in a single value, advanced by
//! [`CalculatorState::reduce`]. Front-ends translate user input and stream
//! events into [`Event`]s, store the returned state, and carry out the
//! returned [`Effect`] (start or cancel a request). The reducer itself does
//! no I/O.
//!
//! ```text
//!            OpenLoadModal              Calculate
//!   Idle ───────────────────► ModalOpen     Idle/ShowingResults ──► Calculating
//!    ▲   ◄── ConfirmLoad/CancelLoad ─┘                                  │
//!    │                                       StreamFinished ──► ShowingResults
//!    └──────────── StreamFailed / Reset / Navigate(Home) ◄──────────────┘
//! ```
//!
//! Every request gets a fresh [`RequestId`]. Stream events carry the id they
//! belong to, and events for any id other than the one in flight are
//! dropped, so a cancelled request can never write into a newer session.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::LoadKind;
//! use beam_core::session::{CalculatorState, Effect, Event};
//!
//! let state = CalculatorState::default();
//! let (state, _) = state.reduce(Event::OpenLoadModal(LoadKind::Point));
//! let (state, _) = state.reduce(Event::SetDraftMagnitude("10".into()));
//! let (state, _) = state.reduce(Event::SetDraftPosition("2".into()));
//! let (state, _) = state.reduce(Event::ConfirmLoad);
//! assert_eq!(state.loads.point.len(), 1);
//!
//! let (state, effect) = state.reduce(Event::Calculate);
//! assert!(state.is_calculating());
//! assert!(matches!(effect, Effect::StartCalculation { .. }));
//! ```

use std::fmt;

use tracing::debug;

use crate::beam::{BeamConfiguration, BeamType, SupportType};
use crate::loads::{LoadEntry, LoadKind, LoadSet};
use crate::prompt::build_prompt;
use crate::segmenter::{segment, AnalysisStep, MissingMarkerPolicy};

/// Text shown while the answer streams in
pub const ANALYZING_MESSAGE: &str = "Analyzing beam structure...";

/// Text shown when there is nothing to display yet
pub const PLACEHOLDER_MESSAGE: &str =
    "Enter beam properties and loads, then click Calculate to see the analysis";

/// Logical page of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Calculator,
}

/// Identifies one calculation request within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the calculator is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The add-load dialog is open for this kind
    ModalOpen(LoadKind),
    /// A request is streaming
    Calculating { request: RequestId },
    /// The last request finished and its steps are shown
    ShowingResults,
}

/// Values typed into the add-load dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadDraft {
    pub magnitude: String,
    pub position: String,
}

/// Input to the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Page),
    SetBeamType(BeamType),
    SetSupportType(SupportType),
    SetLength(String),
    SetWidth(String),
    SetHeight(String),
    SetYoungsModulus(String),
    OpenLoadModal(LoadKind),
    SetDraftMagnitude(String),
    SetDraftPosition(String),
    ConfirmLoad,
    CancelLoad,
    Calculate,
    ChunkReceived { request: RequestId, chunk: String },
    StreamFinished { request: RequestId, text: String },
    StreamFailed { request: RequestId, message: String },
    /// "New Calculation"
    Reset,
}

/// Work the front-end must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send `prompt` and feed its events back tagged with `request`
    StartCalculation { request: RequestId, prompt: String },
    /// Abort the stream of `request`
    CancelCalculation { request: RequestId },
}

/// What the results area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    /// Spinner plus the answer so far
    Streaming { transcript: &'a str },
    /// One card per step
    Steps(&'a [AnalysisStep]),
    /// Placeholder, with the last error if any
    Placeholder { error: Option<&'a str> },
}

/// Complete state of a calculator session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub page: Page,
    pub beam: BeamConfiguration,
    pub loads: LoadSet,
    pub phase: Phase,
    pub draft: LoadDraft,
    /// Streamed answer of the current or last request
    pub transcript: String,
    pub steps: Vec<AnalysisStep>,
    pub error: Option<String>,
    /// Applied when an answer has no step markers
    pub policy: MissingMarkerPolicy,
    next_request: u64,
}

impl CalculatorState {
    pub fn new(policy: MissingMarkerPolicy) -> Self {
        CalculatorState {
            policy,
            ..Default::default()
        }
    }

    pub fn is_calculating(&self) -> bool {
        matches!(self.phase, Phase::Calculating { .. })
    }

    /// Request currently streaming, if any
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.phase {
            Phase::Calculating { request } => Some(request),
            _ => None,
        }
    }

    /// Kind of the open add-load dialog, if any
    pub fn modal(&self) -> Option<LoadKind> {
        match self.phase {
            Phase::ModalOpen(kind) => Some(kind),
            _ => None,
        }
    }

    /// Prompt for the current form contents
    pub fn prompt(&self) -> String {
        build_prompt(&self.beam, &self.loads)
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        if self.is_calculating() {
            ResultsView::Streaming {
                transcript: &self.transcript,
            }
        } else if !self.steps.is_empty() {
            ResultsView::Steps(&self.steps)
        } else {
            ResultsView::Placeholder {
                error: self.error.as_deref(),
            }
        }
    }

    /// Apply one event.
    pub fn reduce(mut self, event: Event) -> (Self, Effect) {
        let calculating = self.is_calculating();

        match event {
            Event::Navigate(Page::Home) => {
                let effect = self.clear_form();
                self.page = Page::Home;
                return (self, effect);
            }
            Event::Navigate(page) => self.page = page,

            Event::SetBeamType(value) if !calculating => self.beam.beam_type = value,
            Event::SetSupportType(value) if !calculating => self.beam.support_type = value,
            Event::SetLength(value) if !calculating => self.beam.length = value,
            Event::SetWidth(value) if !calculating => self.beam.width = value,
            Event::SetHeight(value) if !calculating => self.beam.height = value,
            Event::SetYoungsModulus(value) if !calculating => self.beam.youngs_modulus = value,

            Event::OpenLoadModal(kind) => {
                if matches!(self.phase, Phase::Idle | Phase::ShowingResults) {
                    self.draft = LoadDraft::default();
                    self.phase = Phase::ModalOpen(kind);
                }
            }
            Event::SetDraftMagnitude(value) if self.modal().is_some() => {
                self.draft.magnitude = value
            }
            Event::SetDraftPosition(value) if self.modal().is_some() => self.draft.position = value,
            Event::ConfirmLoad => {
                if let Some(kind) = self.modal() {
                    let draft = std::mem::take(&mut self.draft);
                    self.loads.push(kind, LoadEntry::new(draft.magnitude, draft.position));
                    self.phase = Phase::Idle;
                }
            }
            Event::CancelLoad => {
                if self.modal().is_some() {
                    self.draft = LoadDraft::default();
                    self.phase = Phase::Idle;
                }
            }

            Event::Calculate => {
                if matches!(self.phase, Phase::Idle | Phase::ShowingResults) {
                    let request = self.issue_request();
                    self.phase = Phase::Calculating { request };
                    self.steps.clear();
                    self.transcript.clear();
                    self.error = None;
                    let prompt = self.prompt();
                    debug!(%request, loads = self.loads.len(), "calculation started");
                    return (self, Effect::StartCalculation { request, prompt });
                }
            }
            Event::ChunkReceived { request, chunk } => {
                if self.in_flight() == Some(request) {
                    self.transcript.push_str(&chunk);
                }
            }
            Event::StreamFinished { request, text } => {
                if self.in_flight() == Some(request) {
                    match segment(&text, self.policy) {
                        Ok(steps) => {
                            debug!(%request, steps = steps.len(), "calculation finished");
                            self.steps = steps;
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                    self.transcript = text;
                    self.phase = Phase::ShowingResults;
                }
            }
            Event::StreamFailed { request, message } => {
                if self.in_flight() == Some(request) {
                    debug!(%request, %message, "calculation failed");
                    self.error = Some(message);
                    self.phase = Phase::Idle;
                }
            }

            Event::Reset => {
                let effect = self.clear_form();
                return (self, effect);
            }

            // Form edits while a request is streaming, draft edits with no dialog open
            _ => {}
        }

        (self, Effect::None)
    }

    fn issue_request(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    /// Back to an empty form; keeps the page, policy and request counter.
    fn clear_form(&mut self) -> Effect {
        let effect = match self.in_flight() {
            Some(request) => Effect::CancelCalculation { request },
            None => Effect::None,
        };

        *self = CalculatorState {
            page: self.page,
            policy: self.policy,
            next_request: self.next_request,
            ..Default::default()
        };
        effect
    }
}
