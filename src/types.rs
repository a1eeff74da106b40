//! Typed views of the fixed GLU enumerations.

use crate::sys::*;
use serde::{Deserialize, Serialize};

/// Primitive type announced by a begin callback.
///
/// The tessellator reports `LineLoop` (boundary-only mode), `Triangles`,
/// `TriangleStrip` or `TriangleFan`; the NURBS renderer can also report
/// `Lines`, `LineStrip` and `QuadStrip`. Codes outside the table are kept
/// verbatim in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
    Unknown(GLenum),
}

impl ElementType {
    pub fn raw(self) -> GLenum {
        match self {
            ElementType::Points => GL_POINTS,
            ElementType::Lines => GL_LINES,
            ElementType::LineLoop => GL_LINE_LOOP,
            ElementType::LineStrip => GL_LINE_STRIP,
            ElementType::Triangles => GL_TRIANGLES,
            ElementType::TriangleStrip => GL_TRIANGLE_STRIP,
            ElementType::TriangleFan => GL_TRIANGLE_FAN,
            ElementType::Quads => GL_QUADS,
            ElementType::QuadStrip => GL_QUAD_STRIP,
            ElementType::Polygon => GL_POLYGON,
            ElementType::Unknown(code) => code,
        }
    }
}

impl From<GLenum> for ElementType {
    fn from(code: GLenum) -> Self {
        match code {
            GL_POINTS => ElementType::Points,
            GL_LINES => ElementType::Lines,
            GL_LINE_LOOP => ElementType::LineLoop,
            GL_LINE_STRIP => ElementType::LineStrip,
            GL_TRIANGLES => ElementType::Triangles,
            GL_TRIANGLE_STRIP => ElementType::TriangleStrip,
            GL_TRIANGLE_FAN => ElementType::TriangleFan,
            GL_QUADS => ElementType::Quads,
            GL_QUAD_STRIP => ElementType::QuadStrip,
            GL_POLYGON => ElementType::Polygon,
            other => ElementType::Unknown(other),
        }
    }
}

/// Winding rule used to decide which regions are interior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindingRule {
    #[default]
    Odd,
    NonZero,
    Positive,
    Negative,
    AbsGeqTwo,
}

impl WindingRule {
    pub fn raw(self) -> GLenum {
        match self {
            WindingRule::Odd => GLU_TESS_WINDING_ODD,
            WindingRule::NonZero => GLU_TESS_WINDING_NONZERO,
            WindingRule::Positive => GLU_TESS_WINDING_POSITIVE,
            WindingRule::Negative => GLU_TESS_WINDING_NEGATIVE,
            WindingRule::AbsGeqTwo => GLU_TESS_WINDING_ABS_GEQ_TWO,
        }
    }

    pub fn from_raw(code: GLenum) -> Option<Self> {
        match code {
            GLU_TESS_WINDING_ODD => Some(WindingRule::Odd),
            GLU_TESS_WINDING_NONZERO => Some(WindingRule::NonZero),
            GLU_TESS_WINDING_POSITIVE => Some(WindingRule::Positive),
            GLU_TESS_WINDING_NEGATIVE => Some(WindingRule::Negative),
            GLU_TESS_WINDING_ABS_GEQ_TWO => Some(WindingRule::AbsGeqTwo),
            _ => None,
        }
    }
}

/// Tessellator event kinds.
///
/// Each kind owns exactly one callback slot on a [`Tessellator`](crate::Tessellator)
/// and one native registration, made the first time the slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TessEvent {
    Begin,
    Vertex,
    End,
    Error,
    EdgeFlag,
    Combine,
}

impl TessEvent {
    pub const ALL: [TessEvent; 6] = [
        TessEvent::Begin,
        TessEvent::Vertex,
        TessEvent::End,
        TessEvent::Error,
        TessEvent::EdgeFlag,
        TessEvent::Combine,
    ];

    /// The `GLU_TESS_*_DATA` selector the trampoline for this kind is registered under.
    pub fn which(self) -> GLenum {
        match self {
            TessEvent::Begin => GLU_TESS_BEGIN_DATA,
            TessEvent::Vertex => GLU_TESS_VERTEX_DATA,
            TessEvent::End => GLU_TESS_END_DATA,
            TessEvent::Error => GLU_TESS_ERROR_DATA,
            TessEvent::EdgeFlag => GLU_TESS_EDGE_FLAG_DATA,
            TessEvent::Combine => GLU_TESS_COMBINE_DATA,
        }
    }

    pub(crate) fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// NURBS renderer event kinds (tessellator mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NurbsEvent {
    Begin,
    Vertex,
    Normal,
    Color,
    TextureCoord,
    End,
    Error,
}

impl NurbsEvent {
    pub const ALL: [NurbsEvent; 7] = [
        NurbsEvent::Begin,
        NurbsEvent::Vertex,
        NurbsEvent::Normal,
        NurbsEvent::Color,
        NurbsEvent::TextureCoord,
        NurbsEvent::End,
        NurbsEvent::Error,
    ];

    /// The selector the trampoline for this kind is registered under.
    ///
    /// `Error` has no `_DATA` flavour in GLU.
    pub fn which(self) -> GLenum {
        match self {
            NurbsEvent::Begin => GLU_NURBS_BEGIN_DATA,
            NurbsEvent::Vertex => GLU_NURBS_VERTEX_DATA,
            NurbsEvent::Normal => GLU_NURBS_NORMAL_DATA,
            NurbsEvent::Color => GLU_NURBS_COLOR_DATA,
            NurbsEvent::TextureCoord => GLU_NURBS_TEXTURE_COORD_DATA,
            NurbsEvent::End => GLU_NURBS_END_DATA,
            NurbsEvent::Error => GLU_NURBS_ERROR,
        }
    }

    pub(crate) fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Evaluator map type of NURBS control data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    Map1Vertex3,
    Map1Vertex4,
    Map1Trim2,
    Map1Trim3,
    Map2Vertex3,
    Map2Vertex4,
    Map2Normal,
    Map2Color4,
    Map2TextureCoord1,
    Map2TextureCoord2,
    Map2TextureCoord3,
    Map2TextureCoord4,
}

impl MapType {
    pub fn raw(self) -> GLenum {
        match self {
            MapType::Map1Vertex3 => GL_MAP1_VERTEX_3,
            MapType::Map1Vertex4 => GL_MAP1_VERTEX_4,
            MapType::Map1Trim2 => GLU_MAP1_TRIM_2,
            MapType::Map1Trim3 => GLU_MAP1_TRIM_3,
            MapType::Map2Vertex3 => GL_MAP2_VERTEX_3,
            MapType::Map2Vertex4 => GL_MAP2_VERTEX_4,
            MapType::Map2Normal => GL_MAP2_NORMAL,
            MapType::Map2Color4 => GL_MAP2_COLOR_4,
            MapType::Map2TextureCoord1 => GL_MAP2_TEXTURE_COORD_1,
            MapType::Map2TextureCoord2 => GL_MAP2_TEXTURE_COORD_2,
            MapType::Map2TextureCoord3 => GL_MAP2_TEXTURE_COORD_3,
            MapType::Map2TextureCoord4 => GL_MAP2_TEXTURE_COORD_4,
        }
    }

    /// Number of floats making up one control point.
    pub fn dimension(self) -> usize {
        match self {
            MapType::Map2TextureCoord1 => 1,
            MapType::Map1Trim2 | MapType::Map2TextureCoord2 => 2,
            MapType::Map1Vertex3
            | MapType::Map1Trim3
            | MapType::Map2Vertex3
            | MapType::Map2Normal
            | MapType::Map2TextureCoord3 => 3,
            MapType::Map1Vertex4
            | MapType::Map2Vertex4
            | MapType::Map2Color4
            | MapType::Map2TextureCoord4 => 4,
        }
    }

    pub fn is_surface(self) -> bool {
        !matches!(
            self,
            MapType::Map1Vertex3 | MapType::Map1Vertex4 | MapType::Map1Trim2 | MapType::Map1Trim3
        )
    }
}

/// Whether the NURBS object renders through GL or reports geometry through callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NurbsMode {
    #[default]
    Tessellator,
    Renderer,
}

impl NurbsMode {
    pub fn raw(self) -> GLenum {
        match self {
            NurbsMode::Tessellator => GLU_NURBS_TESSELLATOR,
            NurbsMode::Renderer => GLU_NURBS_RENDERER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMethod {
    #[default]
    PathLength,
    ParametricError,
    DomainDistance,
    ObjectPathLength,
    ObjectParametricError,
}

impl SamplingMethod {
    pub fn raw(self) -> GLenum {
        match self {
            SamplingMethod::PathLength => GLU_PATH_LENGTH,
            SamplingMethod::ParametricError => GLU_PARAMETRIC_ERROR,
            SamplingMethod::DomainDistance => GLU_DOMAIN_DISTANCE,
            SamplingMethod::ObjectPathLength => GLU_OBJECT_PATH_LENGTH,
            SamplingMethod::ObjectParametricError => GLU_OBJECT_PARAMETRIC_ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Fill,
    OutlinePolygon,
    OutlinePatch,
}

impl DisplayMode {
    pub fn raw(self) -> GLenum {
        match self {
            DisplayMode::Fill => GLU_FILL,
            DisplayMode::OutlinePolygon => GLU_OUTLINE_POLYGON,
            DisplayMode::OutlinePatch => GLU_OUTLINE_PATCH,
        }
    }
}
