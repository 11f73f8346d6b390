//! UI module for BeamCee GUI
//!
//! # Panel Structure
//! - `toolbar` - Header with title and Home button
//! - `home` - Landing page with the Calculator entry
//! - `input_panel` - Left panel: beam properties, loads, Calculate / New Calculation
//! - `results_panel` - Right panel: spinner and live answer, step cards, or placeholder
//! - `modal` - Add-load dialog over a backdrop
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/spinner` - Canvas spinner shown while a request streams

pub mod home;
pub mod input_panel;
pub mod modal;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

pub mod shared;
