//! # beam_core - BeamCee Calculation Session Engine
//!
//! `beam_core` holds everything BeamCee does that is not drawing pixels: the
//! beam form model, the analysis prompt, the streaming completion client, the
//! step segmenter and the calculator session reducer. The GUI and CLI are thin
//! shells over it.
//!
//! ## Design Philosophy
//!
//! - **No UI**: Front-ends feed [`session::Event`]s in and act on [`session::Effect`]s
//! - **JSON-First**: Form data, settings and errors all serialize with serde
//! - **Rich Errors**: Structured error types, not just strings
//! - **Streams all the way**: A calculation is a stream of [`client::CalculationEvent`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::beam::{BeamConfiguration, BeamType};
//! use beam_core::loads::{LoadEntry, LoadKind, LoadSet};
//! use beam_core::prompt::build_prompt;
//! use beam_core::segmenter::split_steps;
//!
//! let beam = BeamConfiguration {
//!     beam_type: BeamType::Cantilever,
//!     length: "3".to_string(),
//!     ..Default::default()
//! };
//! let loads = LoadSet::new().with_load(LoadKind::Point, LoadEntry::new("500", "3"));
//! let prompt = build_prompt(&beam, &loads);
//! assert!(prompt.contains("Beam Type: cantilever"));
//!
//! let steps = split_steps("Step 1: Setup\nStep 2: Reactions");
//! assert_eq!(steps[1].label(), "Step 2");
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam type, support type and the beam form
//! - [`loads`] - Point, moment and distributed load lists
//! - [`prompt`] - Analysis prompt template
//! - [`client`] - Streaming completion client
//! - [`sse`] - Server-Sent Events framing
//! - [`segmenter`] - Splits an answer into numbered steps
//! - [`session`] - Calculator state and reducer
//! - [`settings`] - Endpoint and timeout settings
//! - [`file_io`] - Settings and calculation input files
//! - [`errors`] - Structured error types

pub mod beam;
pub mod client;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod prompt;
pub mod segmenter;
pub mod session;
pub mod settings;
pub mod sse;

// Re-export commonly used types at crate root for convenience
pub use client::{CalculationEvent, CompletionClient};
pub use errors::{BeamError, BeamResult};
pub use session::{CalculatorState, Effect, Event};
pub use settings::ClientSettings;
