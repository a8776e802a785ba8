//! Native host for the slidetrack carousel controller.
//!
//! Reads a scenario (page metrics plus an ordered event script), drives a
//! [`CarouselController`](slidetrack_core::CarouselController) over a
//! [`RecordingSurface`](slidetrack_core::testing::RecordingSurface), and
//! reports every outcome. Resize events go through the tokio debouncer on a
//! real clock, so scripts can exercise the quiet period with `wait` events.
#![allow(missing_docs)]

pub mod error;
pub mod output;
pub mod runner;
pub mod scenario;
pub mod settings;

pub use error::LoadError;
pub use output::Format;
pub use runner::{Outcome, Record, Simulation};
pub use scenario::{Scenario, ScriptEvent};
