//! Error handling for the bridge.
//!
//! Two things live here: the crate's own [`Error`] for failures the bridge
//! detects before anything reaches native code, and [`TessErrorCode`], a
//! typed view of the numeric codes the tessellator reports through its error
//! callback.

use crate::sys::*;
use crate::types::MapType;
use std::fmt;
use thiserror::Error;

/// Failures detected by the bridge itself.
#[derive(Error, Debug)]
pub enum Error {
    /// The native engine could not allocate its object.
    #[error("out of memory: native engine refused to allocate a {object}")]
    OutOfMemory { object: &'static str },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Geometry arrays are too short for what they claim to describe.
    #[error("invalid {what}: expected at least {expected} values, got {actual}")]
    InvalidGeometry {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value that does not fit the native integer parameters.
    #[error("{what} out of range for the native engine: {value}")]
    OutOfRange { what: &'static str, value: usize },

    /// A map type handed to a call that evaluates the other kind of geometry.
    #[error("map type {map:?} cannot describe a {usage}")]
    InvalidMapType { map: MapType, usage: &'static str },
}

/// A specialized Result type for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error codes reported by the tessellator error callback.
///
/// These codes are fixed by GLU. Codes outside this table are still delivered
/// to the error callback as raw numbers; [`TessErrorCode::from_raw`] returns
/// `None` for them.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TessErrorCode {
    /// `gluTessBeginPolygon` must precede `gluTessEndPolygon`
    MissingBeginPolygon = GLU_TESS_MISSING_BEGIN_POLYGON,
    /// `gluTessBeginContour` must precede `gluTessEndContour`
    MissingBeginContour = GLU_TESS_MISSING_BEGIN_CONTOUR,
    /// `gluTessEndPolygon` must follow `gluTessBeginPolygon`
    MissingEndPolygon = GLU_TESS_MISSING_END_POLYGON,
    /// `gluTessEndContour` must follow `gluTessBeginContour`
    MissingEndContour = GLU_TESS_MISSING_END_CONTOUR,
    /// A coordinate exceeds `GLU_TESS_MAX_COORD`
    CoordTooLarge = GLU_TESS_COORD_TOO_LARGE,
    /// Intersecting edges need a combine callback
    NeedCombineCallback = GLU_TESS_NEED_COMBINE_CALLBACK,
    InvalidEnum = GLU_INVALID_ENUM,
    InvalidValue = GLU_INVALID_VALUE,
    OutOfMemory = GLU_OUT_OF_MEMORY,
}

impl TessErrorCode {
    pub fn from_raw(code: GLenum) -> Option<Self> {
        use TessErrorCode::*;

        match code {
            GLU_TESS_MISSING_BEGIN_POLYGON => Some(MissingBeginPolygon),
            GLU_TESS_MISSING_BEGIN_CONTOUR => Some(MissingBeginContour),
            GLU_TESS_MISSING_END_POLYGON => Some(MissingEndPolygon),
            GLU_TESS_MISSING_END_CONTOUR => Some(MissingEndContour),
            GLU_TESS_COORD_TOO_LARGE => Some(CoordTooLarge),
            GLU_TESS_NEED_COMBINE_CALLBACK => Some(NeedCombineCallback),
            GLU_INVALID_ENUM => Some(InvalidEnum),
            GLU_INVALID_VALUE => Some(InvalidValue),
            GLU_OUT_OF_MEMORY => Some(OutOfMemory),
            _ => None,
        }
    }

    pub fn raw(self) -> GLenum {
        self as GLenum
    }
}

impl fmt::Display for TessErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TessErrorCode::MissingBeginPolygon => "missing begin polygon",
            TessErrorCode::MissingBeginContour => "missing begin contour",
            TessErrorCode::MissingEndPolygon => "missing end polygon",
            TessErrorCode::MissingEndContour => "missing end contour",
            TessErrorCode::CoordTooLarge => "coordinate too large",
            TessErrorCode::NeedCombineCallback => "need combine callback",
            TessErrorCode::InvalidEnum => "invalid enumerant",
            TessErrorCode::InvalidValue => "invalid value",
            TessErrorCode::OutOfMemory => "out of memory",
        };
        write!(f, "{name} ({})", self.raw())
    }
}
