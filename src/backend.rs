//! The native engine as an opaque capability.
//!
//! A backend is a set of C entry points with GLU's signatures and semantics.
//! [`Glu`] forwards to the system library (feature `glu`); any other
//! implementation must honour the same contract, in particular: callbacks are
//! invoked synchronously from inside the driving calls, with the context
//! pointer supplied through `tess_begin_polygon` / `nurbs_callback_data`.

use crate::sys::*;
use libc::c_void;

/// Entry points of a tessellator engine.
///
/// # Safety
///
/// Implementors must behave like `gluNewTess` and friends: a non-null object
/// returned by `new_tess` stays valid until `delete_tess`, callback pointers
/// are only cast back to the signature implied by their `which` selector, and
/// vertex data pointers are returned to callbacks untouched.
pub unsafe trait TessBackend {
    /// Returns null when the engine is out of memory.
    unsafe fn new_tess() -> *mut GLUtesselator;
    unsafe fn delete_tess(tess: *mut GLUtesselator);
    unsafe fn tess_callback(tess: *mut GLUtesselator, which: GLenum, callback: _GLUfuncptr);
    unsafe fn tess_property(tess: *mut GLUtesselator, which: GLenum, value: GLdouble);
    unsafe fn get_tess_property(tess: *mut GLUtesselator, which: GLenum, value: *mut GLdouble);
    unsafe fn tess_normal(tess: *mut GLUtesselator, x: GLdouble, y: GLdouble, z: GLdouble);
    unsafe fn tess_begin_polygon(tess: *mut GLUtesselator, polygon_data: *mut c_void);
    unsafe fn tess_begin_contour(tess: *mut GLUtesselator);
    unsafe fn tess_vertex(tess: *mut GLUtesselator, location: *mut GLdouble, data: *mut c_void);
    unsafe fn tess_end_contour(tess: *mut GLUtesselator);
    unsafe fn tess_end_polygon(tess: *mut GLUtesselator);
}

/// Entry points of a NURBS engine.
///
/// # Safety
///
/// Same contract as [`TessBackend`], modelled on `gluNewNurbsRenderer` and
/// friends. Array arguments are only read for as long as the call lasts.
pub unsafe trait NurbsBackend {
    /// Returns null when the engine is out of memory.
    unsafe fn new_nurbs() -> *mut GLUnurbs;
    unsafe fn delete_nurbs(nurbs: *mut GLUnurbs);
    unsafe fn nurbs_callback(nurbs: *mut GLUnurbs, which: GLenum, callback: _GLUfuncptr);
    unsafe fn nurbs_callback_data(nurbs: *mut GLUnurbs, user_data: *mut c_void);
    unsafe fn nurbs_property(nurbs: *mut GLUnurbs, property: GLenum, value: GLfloat);
    unsafe fn get_nurbs_property(nurbs: *mut GLUnurbs, property: GLenum, value: *mut GLfloat);
    unsafe fn begin_surface(nurbs: *mut GLUnurbs);
    unsafe fn end_surface(nurbs: *mut GLUnurbs);
    unsafe fn begin_curve(nurbs: *mut GLUnurbs);
    unsafe fn end_curve(nurbs: *mut GLUnurbs);
    unsafe fn begin_trim(nurbs: *mut GLUnurbs);
    unsafe fn end_trim(nurbs: *mut GLUnurbs);
    #[allow(clippy::too_many_arguments)]
    unsafe fn nurbs_surface(
        nurbs: *mut GLUnurbs,
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
    unsafe fn nurbs_curve(
        nurbs: *mut GLUnurbs,
        knot_count: GLint,
        knots: *mut GLfloat,
        stride: GLint,
        control: *mut GLfloat,
        order: GLint,
        type_: GLenum,
    );
    unsafe fn pwl_curve(
        nurbs: *mut GLUnurbs,
        count: GLint,
        data: *mut GLfloat,
        stride: GLint,
        type_: GLenum,
    );
    unsafe fn load_sampling_matrices(
        nurbs: *mut GLUnurbs,
        model: *const GLfloat,
        perspective: *const GLfloat,
        view: *const GLint,
    );
}

/// The system GLU library.
#[cfg(feature = "glu")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Glu;

#[cfg(feature = "glu")]
unsafe impl TessBackend for Glu {
    unsafe fn new_tess() -> *mut GLUtesselator {
        unsafe { gluNewTess() }
    }

    unsafe fn delete_tess(tess: *mut GLUtesselator) {
        unsafe { gluDeleteTess(tess) }
    }

    unsafe fn tess_callback(tess: *mut GLUtesselator, which: GLenum, callback: _GLUfuncptr) {
        unsafe { gluTessCallback(tess, which, callback) }
    }

    unsafe fn tess_property(tess: *mut GLUtesselator, which: GLenum, value: GLdouble) {
        unsafe { gluTessProperty(tess, which, value) }
    }

    unsafe fn get_tess_property(tess: *mut GLUtesselator, which: GLenum, value: *mut GLdouble) {
        unsafe { gluGetTessProperty(tess, which, value) }
    }

    unsafe fn tess_normal(tess: *mut GLUtesselator, x: GLdouble, y: GLdouble, z: GLdouble) {
        unsafe { gluTessNormal(tess, x, y, z) }
    }

    unsafe fn tess_begin_polygon(tess: *mut GLUtesselator, polygon_data: *mut c_void) {
        unsafe { gluTessBeginPolygon(tess, polygon_data) }
    }

    unsafe fn tess_begin_contour(tess: *mut GLUtesselator) {
        unsafe { gluTessBeginContour(tess) }
    }

    unsafe fn tess_vertex(tess: *mut GLUtesselator, location: *mut GLdouble, data: *mut c_void) {
        unsafe { gluTessVertex(tess, location, data) }
    }

    unsafe fn tess_end_contour(tess: *mut GLUtesselator) {
        unsafe { gluTessEndContour(tess) }
    }

    unsafe fn tess_end_polygon(tess: *mut GLUtesselator) {
        unsafe { gluTessEndPolygon(tess) }
    }
}

#[cfg(feature = "glu")]
unsafe impl NurbsBackend for Glu {
    unsafe fn new_nurbs() -> *mut GLUnurbs {
        unsafe { gluNewNurbsRenderer() }
    }

    unsafe fn delete_nurbs(nurbs: *mut GLUnurbs) {
        unsafe { gluDeleteNurbsRenderer(nurbs) }
    }

    unsafe fn nurbs_callback(nurbs: *mut GLUnurbs, which: GLenum, callback: _GLUfuncptr) {
        unsafe { gluNurbsCallback(nurbs, which, callback) }
    }

    unsafe fn nurbs_callback_data(nurbs: *mut GLUnurbs, user_data: *mut c_void) {
        unsafe { gluNurbsCallbackData(nurbs, user_data) }
    }

    unsafe fn nurbs_property(nurbs: *mut GLUnurbs, property: GLenum, value: GLfloat) {
        unsafe { gluNurbsProperty(nurbs, property, value) }
    }

    unsafe fn get_nurbs_property(nurbs: *mut GLUnurbs, property: GLenum, value: *mut GLfloat) {
        unsafe { gluGetNurbsProperty(nurbs, property, value) }
    }

    unsafe fn begin_surface(nurbs: *mut GLUnurbs) {
        unsafe { gluBeginSurface(nurbs) }
    }

    unsafe fn end_surface(nurbs: *mut GLUnurbs) {
        unsafe { gluEndSurface(nurbs) }
    }

    unsafe fn begin_curve(nurbs: *mut GLUnurbs) {
        unsafe { gluBeginCurve(nurbs) }
    }

    unsafe fn end_curve(nurbs: *mut GLUnurbs) {
        unsafe { gluEndCurve(nurbs) }
    }

    unsafe fn begin_trim(nurbs: *mut GLUnurbs) {
        unsafe { gluBeginTrim(nurbs) }
    }

    unsafe fn end_trim(nurbs: *mut GLUnurbs) {
        unsafe { gluEndTrim(nurbs) }
    }

    unsafe fn nurbs_surface(
        nurbs: *mut GLUnurbs,
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
    ) {
        unsafe {
            gluNurbsSurface(
                nurbs,
                s_knot_count,
                s_knots,
                t_knot_count,
                t_knots,
                s_stride,
                t_stride,
                control,
                s_order,
                t_order,
                type_,
            )
        }
    }

    unsafe fn nurbs_curve(
        nurbs: *mut GLUnurbs,
        knot_count: GLint,
        knots: *mut GLfloat,
        stride: GLint,
        control: *mut GLfloat,
        order: GLint,
        type_: GLenum,
    ) {
        unsafe { gluNurbsCurve(nurbs, knot_count, knots, stride, control, order, type_) }
    }

    unsafe fn pwl_curve(
        nurbs: *mut GLUnurbs,
        count: GLint,
        data: *mut GLfloat,
        stride: GLint,
        type_: GLenum,
    ) {
        unsafe { gluPwlCurve(nurbs, count, data, stride, type_) }
    }

    unsafe fn load_sampling_matrices(
        nurbs: *mut GLUnurbs,
        model: *const GLfloat,
        perspective: *const GLfloat,
        view: *const GLint,
    ) {
        unsafe { gluLoadSamplingMatrices(nurbs, model, perspective, view) }
    }
}
