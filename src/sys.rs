//! Raw C types, constants and entry points of the GLU tessellator and NURBS renderer.
//!
//! Every numeric value here is part of the fixed GLU contract and must match
//! `<GL/glu.h>` exactly.

#![allow(non_camel_case_types, non_upper_case_globals)]

use libc::{c_double, c_float, c_int, c_uchar, c_uint, c_void};

pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLint = c_int;
pub type GLfloat = c_float;
pub type GLdouble = c_double;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;

/// Opaque tessellator object owned by the native engine.
#[repr(C)]
pub struct GLUtesselator {
    _private: [u8; 0],
}

/// Opaque NURBS object owned by the native engine.
#[repr(C)]
pub struct GLUnurbs {
    _private: [u8; 0],
}

/// Untyped callback pointer accepted by `gluTessCallback`/`gluNurbsCallback`.
///
/// The engine casts it back to the signature implied by the `which` argument.
pub type _GLUfuncptr = Option<unsafe extern "system" fn()>;

// Tessellator callback signatures (the `*_DATA` flavours).
pub type TessBeginDataProc = unsafe extern "system" fn(GLenum, *mut c_void);
pub type TessVertexDataProc = unsafe extern "system" fn(*mut c_void, *mut c_void);
pub type TessEndDataProc = unsafe extern "system" fn(*mut c_void);
pub type TessErrorDataProc = unsafe extern "system" fn(GLenum, *mut c_void);
pub type TessEdgeFlagDataProc = unsafe extern "system" fn(GLboolean, *mut c_void);
pub type TessCombineDataProc = unsafe extern "system" fn(
    *mut GLdouble,
    *mut *mut c_void,
    *mut GLfloat,
    *mut *mut c_void,
    *mut c_void,
);

// NURBS callback signatures. Vertex, normal, color and texture coordinates all
// share the array-plus-context shape.
pub type NurbsBeginDataProc = unsafe extern "system" fn(GLenum, *mut c_void);
pub type NurbsArrayDataProc = unsafe extern "system" fn(*mut GLfloat, *mut c_void);
pub type NurbsEndDataProc = unsafe extern "system" fn(*mut c_void);
pub type NurbsErrorProc = unsafe extern "system" fn(GLenum);

// Primitive types reported by begin callbacks
pub const GL_POINTS: GLenum = 0x0000;
pub const GL_LINES: GLenum = 0x0001;
pub const GL_LINE_LOOP: GLenum = 0x0002;
pub const GL_LINE_STRIP: GLenum = 0x0003;
pub const GL_TRIANGLES: GLenum = 0x0004;
pub const GL_TRIANGLE_STRIP: GLenum = 0x0005;
pub const GL_TRIANGLE_FAN: GLenum = 0x0006;
pub const GL_QUADS: GLenum = 0x0007;
pub const GL_QUAD_STRIP: GLenum = 0x0008;
pub const GL_POLYGON: GLenum = 0x0009;

// Evaluator map types
pub const GL_MAP1_VERTEX_3: GLenum = 0x0D97;
pub const GL_MAP1_VERTEX_4: GLenum = 0x0D98;
pub const GL_MAP2_COLOR_4: GLenum = 0x0DB0;
pub const GL_MAP2_NORMAL: GLenum = 0x0DB2;
pub const GL_MAP2_TEXTURE_COORD_1: GLenum = 0x0DB3;
pub const GL_MAP2_TEXTURE_COORD_2: GLenum = 0x0DB4;
pub const GL_MAP2_TEXTURE_COORD_3: GLenum = 0x0DB5;
pub const GL_MAP2_TEXTURE_COORD_4: GLenum = 0x0DB6;
pub const GL_MAP2_VERTEX_3: GLenum = 0x0DB7;
pub const GL_MAP2_VERTEX_4: GLenum = 0x0DB8;

// Errors
pub const GLU_INVALID_ENUM: GLenum = 100900;
pub const GLU_INVALID_VALUE: GLenum = 100901;
pub const GLU_OUT_OF_MEMORY: GLenum = 100902;

// TessCallback
pub const GLU_TESS_BEGIN: GLenum = 100100;
pub const GLU_TESS_VERTEX: GLenum = 100101;
pub const GLU_TESS_END: GLenum = 100102;
pub const GLU_TESS_ERROR: GLenum = 100103;
pub const GLU_TESS_EDGE_FLAG: GLenum = 100104;
pub const GLU_TESS_COMBINE: GLenum = 100105;
pub const GLU_TESS_BEGIN_DATA: GLenum = 100106;
pub const GLU_TESS_VERTEX_DATA: GLenum = 100107;
pub const GLU_TESS_END_DATA: GLenum = 100108;
pub const GLU_TESS_ERROR_DATA: GLenum = 100109;
pub const GLU_TESS_EDGE_FLAG_DATA: GLenum = 100110;
pub const GLU_TESS_COMBINE_DATA: GLenum = 100111;

// TessProperty
pub const GLU_TESS_WINDING_RULE: GLenum = 100140;
pub const GLU_TESS_BOUNDARY_ONLY: GLenum = 100141;
pub const GLU_TESS_TOLERANCE: GLenum = 100142;

// TessWinding
pub const GLU_TESS_WINDING_ODD: GLenum = 100130;
pub const GLU_TESS_WINDING_NONZERO: GLenum = 100131;
pub const GLU_TESS_WINDING_POSITIVE: GLenum = 100132;
pub const GLU_TESS_WINDING_NEGATIVE: GLenum = 100133;
pub const GLU_TESS_WINDING_ABS_GEQ_TWO: GLenum = 100134;

// TessError
pub const GLU_TESS_ERROR1: GLenum = 100151;
pub const GLU_TESS_ERROR2: GLenum = 100152;
pub const GLU_TESS_ERROR3: GLenum = 100153;
pub const GLU_TESS_ERROR4: GLenum = 100154;
pub const GLU_TESS_ERROR5: GLenum = 100155;
pub const GLU_TESS_ERROR6: GLenum = 100156;
pub const GLU_TESS_ERROR7: GLenum = 100157;
pub const GLU_TESS_ERROR8: GLenum = 100158;
pub const GLU_TESS_MISSING_BEGIN_POLYGON: GLenum = GLU_TESS_ERROR1;
pub const GLU_TESS_MISSING_BEGIN_CONTOUR: GLenum = GLU_TESS_ERROR2;
pub const GLU_TESS_MISSING_END_POLYGON: GLenum = GLU_TESS_ERROR3;
pub const GLU_TESS_MISSING_END_CONTOUR: GLenum = GLU_TESS_ERROR4;
pub const GLU_TESS_COORD_TOO_LARGE: GLenum = GLU_TESS_ERROR5;
pub const GLU_TESS_NEED_COMBINE_CALLBACK: GLenum = GLU_TESS_ERROR6;

pub const GLU_TESS_MAX_COORD: GLdouble = 1.0e150;

// NurbsCallback
pub const GLU_NURBS_ERROR: GLenum = 100103;
pub const GLU_NURBS_BEGIN: GLenum = 100164;
pub const GLU_NURBS_VERTEX: GLenum = 100165;
pub const GLU_NURBS_NORMAL: GLenum = 100166;
pub const GLU_NURBS_COLOR: GLenum = 100167;
pub const GLU_NURBS_TEXTURE_COORD: GLenum = 100168;
pub const GLU_NURBS_END: GLenum = 100169;
pub const GLU_NURBS_BEGIN_DATA: GLenum = 100170;
pub const GLU_NURBS_VERTEX_DATA: GLenum = 100171;
pub const GLU_NURBS_NORMAL_DATA: GLenum = 100172;
pub const GLU_NURBS_COLOR_DATA: GLenum = 100173;
pub const GLU_NURBS_TEXTURE_COORD_DATA: GLenum = 100174;
pub const GLU_NURBS_END_DATA: GLenum = 100175;

// NurbsError
pub const GLU_NURBS_ERROR1: GLenum = 100251;
pub const GLU_NURBS_ERROR37: GLenum = 100287;

// NurbsProperty
pub const GLU_AUTO_LOAD_MATRIX: GLenum = 100200;
pub const GLU_CULLING: GLenum = 100201;
pub const GLU_PARAMETRIC_TOLERANCE: GLenum = 100202;
pub const GLU_SAMPLING_TOLERANCE: GLenum = 100203;
pub const GLU_DISPLAY_MODE: GLenum = 100204;
pub const GLU_SAMPLING_METHOD: GLenum = 100205;
pub const GLU_U_STEP: GLenum = 100206;
pub const GLU_V_STEP: GLenum = 100207;
pub const GLU_NURBS_MODE: GLenum = 100160;

// NurbsMode
pub const GLU_NURBS_TESSELLATOR: GLenum = 100161;
pub const GLU_NURBS_RENDERER: GLenum = 100162;

// NurbsSampling
pub const GLU_OBJECT_PARAMETRIC_ERROR: GLenum = 100208;
pub const GLU_OBJECT_PATH_LENGTH: GLenum = 100209;
pub const GLU_PATH_LENGTH: GLenum = 100215;
pub const GLU_PARAMETRIC_ERROR: GLenum = 100216;
pub const GLU_DOMAIN_DISTANCE: GLenum = 100217;

// NurbsTrim
pub const GLU_MAP1_TRIM_2: GLenum = 100210;
pub const GLU_MAP1_TRIM_3: GLenum = 100211;

// NurbsDisplay
pub const GLU_FILL: GLenum = 100012;
pub const GLU_OUTLINE_POLYGON: GLenum = 100240;
pub const GLU_OUTLINE_PATCH: GLenum = 100241;

#[cfg(feature = "glu")]
unsafe extern "system" {
    pub fn gluNewTess() -> *mut GLUtesselator;
    pub fn gluDeleteTess(tess: *mut GLUtesselator);
    pub fn gluTessCallback(tess: *mut GLUtesselator, which: GLenum, callback: _GLUfuncptr);
    pub fn gluTessProperty(tess: *mut GLUtesselator, which: GLenum, data: GLdouble);
    pub fn gluGetTessProperty(tess: *mut GLUtesselator, which: GLenum, data: *mut GLdouble);
    pub fn gluTessNormal(tess: *mut GLUtesselator, x: GLdouble, y: GLdouble, z: GLdouble);
    pub fn gluTessBeginPolygon(tess: *mut GLUtesselator, data: *mut c_void);
    pub fn gluTessBeginContour(tess: *mut GLUtesselator);
    pub fn gluTessVertex(tess: *mut GLUtesselator, location: *mut GLdouble, data: *mut c_void);
    pub fn gluTessEndContour(tess: *mut GLUtesselator);
    pub fn gluTessEndPolygon(tess: *mut GLUtesselator);

    pub fn gluNewNurbsRenderer() -> *mut GLUnurbs;
    pub fn gluDeleteNurbsRenderer(nurb: *mut GLUnurbs);
    pub fn gluNurbsCallback(nurb: *mut GLUnurbs, which: GLenum, callback: _GLUfuncptr);
    pub fn gluNurbsCallbackData(nurb: *mut GLUnurbs, user_data: *mut c_void);
    pub fn gluNurbsProperty(nurb: *mut GLUnurbs, property: GLenum, value: GLfloat);
    pub fn gluGetNurbsProperty(nurb: *mut GLUnurbs, property: GLenum, data: *mut GLfloat);
    pub fn gluBeginSurface(nurb: *mut GLUnurbs);
    pub fn gluEndSurface(nurb: *mut GLUnurbs);
    pub fn gluBeginCurve(nurb: *mut GLUnurbs);
    pub fn gluEndCurve(nurb: *mut GLUnurbs);
    pub fn gluBeginTrim(nurb: *mut GLUnurbs);
    pub fn gluEndTrim(nurb: *mut GLUnurbs);
    pub fn gluNurbsSurface(
        nurb: *mut GLUnurbs,
        s_knot_count: GLint,
        s_knots: *mut GLfloat,
        t_knot_count: GLint,
        t_knots: *mut GLfloat,
        s_stride: GLint,
        t_stride: GLint,
        control: *mut GLfloat,
        s_order: GLint,
        t_order: GLint,
        type_: GLenum,
    );
    pub fn gluNurbsCurve(
        nurb: *mut GLUnurbs,
        knot_count: GLint,
        knots: *mut GLfloat,
        stride: GLint,
        control: *mut GLfloat,
        order: GLint,
        type_: GLenum,
    );
    pub fn gluPwlCurve(
        nurb: *mut GLUnurbs,
        count: GLint,
        data: *mut GLfloat,
        stride: GLint,
        type_: GLenum,
    );
    pub fn gluLoadSamplingMatrices(
        nurb: *mut GLUnurbs,
        model: *const GLfloat,
        perspective: *const GLfloat,
        view: *const GLint,
    );
}
