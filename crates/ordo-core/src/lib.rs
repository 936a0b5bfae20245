#![forbid(unsafe_code)]

//! Core: logging, layout configuration, and pixel geometry.

pub mod config;
pub mod geometry;
pub mod logging;

pub use config::LayoutConfig;
pub use geometry::Size;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
