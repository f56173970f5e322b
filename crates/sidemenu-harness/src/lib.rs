#![forbid(unsafe_code)]

//! Test harness for sidemenu.
//!
//! - [`recorder`]: capture `on_change` notifications and animator calls.
//! - [`script`]: build and replay gesture sequences.
//! - [`frames`]: drive the frame loop until transitions settle.
//! - [`logging`]: install a test-friendly tracing subscriber.

pub mod frames;
pub mod logging;
pub mod recorder;
pub mod script;

pub use frames::{FrameTrace, settle};
pub use logging::init_test_tracing;
pub use recorder::{ChangeRecorder, RecordingAnimator, Transition};
pub use script::GestureScript;
