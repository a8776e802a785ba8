//! Headless carousel controller.
//!
//! A horizontally scrolling track of equal-width cards with previous/next
//! controls, responsive 1/2/3-card breakpoints, arrow-key and touch-swipe
//! navigation, and debounced relayout on resize. The controller never touches
//! a platform directly: hosts implement [`CarouselSurface`] and forward their
//! events to [`CarouselController`].
//!
//! Notes
//! - All state lives in one owned controller; independent carousels on the
//!   same page are independent controllers.
//! - [`Debouncer`] needs the `runtime` feature (tokio). Browser hosts use
//!   their own timers instead.
#![allow(missing_docs)]

pub mod config;
pub mod constants;
pub mod controller;
#[cfg(feature = "runtime")]
pub mod debounce;
pub mod error;
pub mod focus;
pub mod gap;
pub mod gesture;
pub mod images;
pub mod layout;
pub mod state;
pub mod surface;
pub mod testing;

pub use config::{Breakpoints, CarouselConfig, KeyboardScope, Selectors, StepMode};
pub use controller::CarouselController;
#[cfg(feature = "runtime")]
pub use debounce::Debouncer;
pub use error::{BindError, ConfigError, ElementRole, SurfaceError};
pub use focus::{FocusContext, NavKey};
pub use gesture::{SwipeGesture, SwipeIntent};
pub use images::{GateStatus, ImageGate};
pub use layout::{Layout, visible_count};
pub use state::{CarouselState, Frame};
pub use surface::{CarouselSurface, NavControl};
