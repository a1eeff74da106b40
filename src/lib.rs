//! Typed callbacks for the GLU tessellator and NURBS renderer.
//!
//! GLU reports its output through C callbacks that receive a handful of raw
//! arguments plus one untyped context word. This crate lets a program attach
//! ordinary Rust closures instead: each session keeps one replaceable slot per
//! event kind, registers a monomorphized trampoline with the engine the first
//! time a slot is filled, and turns the context word back into the session on
//! every event.
//!
//! # Thread Safety
//!
//! [`Tessellator`] and [`Nurbs`] are NOT `Send` or `Sync`. Callbacks run
//! synchronously on the thread that drives the session, from inside calls
//! such as [`Tessellator::end_polygon`] or [`Nurbs::end_surface`].
//!
//! # Memory Management
//!
//! - Vertex payloads passed to [`Tessellator::vertex`] and payloads returned
//!   by the combine callback are boxed into the session's [`VertexArena`].
//!   Their addresses never change and they are freed only when the session
//!   is deleted or dropped.
//! - Deleting a session frees the native object first, then the payloads and
//!   callbacks. Any later operation on it panics.
//!
//! # Feature Flags
//!
//! - `glu`: Link the system GLU library and provide the [`Glu`] backend.
//!   Without it the crate has no native dependency and any
//!   [`TessBackend`] / [`NurbsBackend`] implementation can drive it.

#![allow(clippy::missing_safety_doc)]

mod backend;
mod callback;
mod config;
mod error;
mod handle;
mod nurbs;
pub mod sys;
mod tess;
mod types;

#[cfg(test)]
mod testing;

// Re-export the public surface
#[cfg(feature = "glu")]
pub use backend::Glu;
pub use backend::{NurbsBackend, TessBackend};
pub use callback::{
    ArrayHandler, BeginHandler, CombineHandler, EdgeFlagHandler, EndHandler, ErrorHandler,
    VertexHandler,
};
pub use config::{NurbsConfig, TessConfig};
pub use error::{Error, Result, TessErrorCode};
pub use handle::{VertexArena, VertexWrapper};
pub use nurbs::Nurbs;
pub use tess::Tessellator;
pub use types::{
    DisplayMode, ElementType, MapType, NurbsEvent, NurbsMode, SamplingMethod, TessEvent,
    WindingRule,
};

/// Library version string (e.g., "0.1.0").
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
