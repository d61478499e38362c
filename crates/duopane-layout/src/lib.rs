#![forbid(unsafe_code)]

//! Layout: collapse hysteresis, configuration, and the split controller.
//!
//! # Role in Duopane
//! `duopane-layout` turns raw drag positions and toggle-button presses into
//! a stream of published [`SizePair`](duopane_core::SizePair) values for a
//! primary viewer pane and a secondary content pane.
//!
//! # Data flow
//! ```text
//! drag primitive ──▶ SplitController::on_drag ──▶ hysteresis::decide
//!                                                      │
//!                          SizeAnimator::start ◀───────┘
//!                                  │
//!     host refresh ──▶ SplitController::on_frame ──▶ observer(SizePair)
//! ```
//! Toggle buttons call [`SplitController::collapse`] and
//! [`SplitController::expand`] directly and skip the threshold decision.

pub mod columns;
pub mod config;
pub mod controller;
pub mod hysteresis;

pub use columns::{ColumnSpec, SplitColumns, split_columns};
pub use config::{ConfigError, SplitConfig};
pub use controller::{Motion, PaneState, SplitController, SplitPhase};
pub use hysteresis::{Transition, decide, decide_at};
