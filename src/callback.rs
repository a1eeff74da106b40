//! Trampolines invoked by the native engine.
//!
//! Each event kind has one `extern "system"` function that the engine calls
//! with raw arguments plus the opaque context word. The trampoline turns the
//! context back into the session state, rebuilds typed arguments and calls
//! the host callback stored in the session's slot. A null context or an
//! empty slot makes the event a no-op.

use crate::handle::{VertexWrapper, as_opaque};
use crate::nurbs::{NurbsCallbacks, NurbsState};
use crate::sys::*;
use crate::tess::TessState;
use crate::types::{ElementType, NurbsEvent, TessEvent};
use libc::c_void;
use std::cell::Cell;
use std::mem;

/// Called with the primitive type at the start of each output primitive.
pub type BeginHandler<P> = Box<dyn FnMut(ElementType, &P)>;
/// Called with the payload originally submitted for the vertex.
pub type VertexHandler<V, P> = Box<dyn FnMut(&V, &P)>;
pub type EndHandler<P> = Box<dyn FnMut(&P)>;
/// Called with the engine's numeric error code. The engine keeps going.
pub type ErrorHandler<P> = Box<dyn FnMut(GLenum, &P)>;
pub type EdgeFlagHandler<P> = Box<dyn FnMut(bool, &P)>;
/// Builds the payload for a vertex the engine synthesizes.
///
/// Receives the new coordinates, the four contributing payloads and their
/// weights. An empty slot after the first carries slot 0; `None` only shows
/// up where slot 0 itself was empty.
pub type CombineHandler<V, P> = Box<dyn FnMut([f64; 3], [Option<&V>; 4], [f32; 4], &P) -> V>;
/// Called with an inline array evaluated by the NURBS engine.
pub type ArrayHandler<P, const N: usize> = Box<dyn FnMut(&[f32; N], &P)>;

type RawProc = unsafe extern "system" fn();

/// The trampoline to register with the engine for a tessellator event kind.
pub(crate) fn tess_trampoline<V, P>(event: TessEvent) -> _GLUfuncptr {
    // SAFETY: the engine casts the pointer back to the signature implied by
    // `event.which()`, which is the signature transmuted away here.
    let raw: RawProc = unsafe {
        match event {
            TessEvent::Begin => mem::transmute::<TessBeginDataProc, _>(tess_begin_data::<V, P>),
            TessEvent::Vertex => mem::transmute::<TessVertexDataProc, _>(tess_vertex_data::<V, P>),
            TessEvent::End => mem::transmute::<TessEndDataProc, _>(tess_end_data::<V, P>),
            TessEvent::Error => mem::transmute::<TessErrorDataProc, _>(tess_error_data::<V, P>),
            TessEvent::EdgeFlag => {
                mem::transmute::<TessEdgeFlagDataProc, _>(tess_edge_flag_data::<V, P>)
            }
            TessEvent::Combine => {
                mem::transmute::<TessCombineDataProc, _>(tess_combine_data::<V, P>)
            }
        }
    };
    Some(raw)
}

/// The trampoline to register with the engine for a NURBS event kind.
pub(crate) fn nurbs_trampoline<P>(event: NurbsEvent) -> _GLUfuncptr {
    // SAFETY: see `tess_trampoline`.
    let raw: RawProc = unsafe {
        match event {
            NurbsEvent::Begin => mem::transmute::<NurbsBeginDataProc, _>(nurbs_begin_data::<P>),
            NurbsEvent::Vertex => mem::transmute::<NurbsArrayDataProc, _>(nurbs_vertex_data::<P>),
            NurbsEvent::Normal => mem::transmute::<NurbsArrayDataProc, _>(nurbs_normal_data::<P>),
            NurbsEvent::Color => mem::transmute::<NurbsArrayDataProc, _>(nurbs_color_data::<P>),
            NurbsEvent::TextureCoord => {
                mem::transmute::<NurbsArrayDataProc, _>(nurbs_texture_coord_data::<P>)
            }
            NurbsEvent::End => mem::transmute::<NurbsEndDataProc, _>(nurbs_end_data::<P>),
            NurbsEvent::Error => mem::transmute::<NurbsErrorProc, _>(nurbs_error),
        }
    };
    Some(raw)
}

// =============================================================================
// Tessellator
// =============================================================================

unsafe extern "system" fn tess_begin_data<V, P>(type_: GLenum, ctx: *mut c_void) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.begin.as_mut() {
        f(ElementType::from(type_), &state.polygon_data);
    }
}

unsafe extern "system" fn tess_vertex_data<V, P>(vertex: *mut c_void, ctx: *mut c_void) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    let Some(f) = state.callbacks.vertex.as_mut() else {
        return;
    };
    if let Some(wrapper) = unsafe { VertexWrapper::<V>::from_ptr(vertex) } {
        f(wrapper.data(), &state.polygon_data);
    }
}

unsafe extern "system" fn tess_end_data<V, P>(ctx: *mut c_void) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.end.as_mut() {
        f(&state.polygon_data);
    }
}

unsafe extern "system" fn tess_error_data<V, P>(code: GLenum, ctx: *mut c_void) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.error.as_mut() {
        f(code, &state.polygon_data);
    }
}

unsafe extern "system" fn tess_edge_flag_data<V, P>(flag: GLboolean, ctx: *mut c_void) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.edge_flag.as_mut() {
        f(flag != GL_FALSE, &state.polygon_data);
    }
}

unsafe extern "system" fn tess_combine_data<V, P>(
    coords: *mut GLdouble,
    vertex_data: *mut *mut c_void,
    weight: *mut GLfloat,
    out_data: *mut *mut c_void,
    ctx: *mut c_void,
) {
    let state = match unsafe { TessState::<V, P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    let TessState {
        polygon_data,
        callbacks,
        vertices,
    } = state;
    let Some(combine) = callbacks.combine.as_mut() else {
        return;
    };
    if out_data.is_null() {
        return;
    }

    let coords = unsafe { *coords.cast::<[f64; 3]>() };
    let weight = unsafe { *weight.cast::<[f32; 4]>() };
    let slots = unsafe { *vertex_data.cast::<[*mut c_void; 4]>() };
    let slots = slots.map(|ptr| unsafe { VertexWrapper::<V>::from_ptr(ptr) });

    let contributing = fill_missing_slots(slots);
    if contributing[0].is_none() {
        log::warn!("combine at {coords:?} without vertex data in slot 0");
    }

    let data = combine(
        coords,
        contributing.map(|slot| slot.map(VertexWrapper::data)),
        weight,
        &*polygon_data,
    );

    // Lives until the session is deleted; the engine may hand it back any
    // number of times.
    let wrapper = vertices.wrap(coords, data);
    unsafe { *out_data = as_opaque(wrapper) };
}

/// Replace empty contributing slots with slot 0.
///
/// Some GLU builds pass null for slots documented as always valid. Slot 0
/// is kept as it is, even when empty.
fn fill_missing_slots<V>(
    slots: [Option<&VertexWrapper<V>>; 4],
) -> [Option<&VertexWrapper<V>>; 4] {
    let first = slots[0];
    slots.map(|slot| slot.or(first))
}

// =============================================================================
// NURBS
// =============================================================================

unsafe extern "system" fn nurbs_begin_data<P>(type_: GLenum, ctx: *mut c_void) {
    let state = match unsafe { NurbsState::<P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.begin.as_mut() {
        f(ElementType::from(type_), &state.polygon_data);
    }
}

unsafe extern "system" fn nurbs_vertex_data<P>(vertex: *mut GLfloat, ctx: *mut c_void) {
    unsafe { dispatch_array::<P, 3>(vertex, ctx, |c| &mut c.vertex) }
}

unsafe extern "system" fn nurbs_normal_data<P>(normal: *mut GLfloat, ctx: *mut c_void) {
    unsafe { dispatch_array::<P, 3>(normal, ctx, |c| &mut c.normal) }
}

unsafe extern "system" fn nurbs_color_data<P>(color: *mut GLfloat, ctx: *mut c_void) {
    unsafe { dispatch_array::<P, 4>(color, ctx, |c| &mut c.color) }
}

unsafe extern "system" fn nurbs_texture_coord_data<P>(tex_coord: *mut GLfloat, ctx: *mut c_void) {
    unsafe { dispatch_array::<P, 4>(tex_coord, ctx, |c| &mut c.texture_coord) }
}

unsafe extern "system" fn nurbs_end_data<P>(ctx: *mut c_void) {
    let state = match unsafe { NurbsState::<P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.end.as_mut() {
        f(&state.polygon_data);
    }
}

/// Reinterpret an inline engine array as `[f32; N]` and hand it to a slot.
///
/// # Safety
///
/// `array` must be null or point to at least `N` floats; `ctx` must be null
/// or a live `NurbsState<P>`.
unsafe fn dispatch_array<P, const N: usize>(
    array: *mut GLfloat,
    ctx: *mut c_void,
    slot: fn(&mut NurbsCallbacks<P>) -> &mut Option<ArrayHandler<P, N>>,
) {
    let state = match unsafe { NurbsState::<P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    let Some(f) = slot(&mut state.callbacks).as_mut() else {
        return;
    };
    if let Some(values) = unsafe { array.cast::<[f32; N]>().as_ref() } {
        f(values, &state.polygon_data);
    }
}

/// The NURBS session currently inside a driving call on this thread.
#[derive(Clone, Copy)]
struct DrivingNurbs {
    ctx: *mut c_void,
    on_error: unsafe fn(*mut c_void, GLenum),
}

thread_local! {
    static DRIVING_NURBS: Cell<Option<DrivingNurbs>> = const { Cell::new(None) };
}

/// Marks a NURBS session as the target of context-less error events while it
/// drives the engine. Restores the previous target on drop.
pub(crate) struct DrivingGuard {
    previous: Option<DrivingNurbs>,
}

impl DrivingGuard {
    pub(crate) fn enter<P>(ctx: *mut c_void) -> Self {
        let current = DrivingNurbs {
            ctx,
            on_error: nurbs_error_data::<P>,
        };
        let previous = DRIVING_NURBS.with(|d| d.replace(Some(current)));
        Self { previous }
    }
}

impl Drop for DrivingGuard {
    fn drop(&mut self) {
        DRIVING_NURBS.with(|d| d.set(self.previous));
    }
}

// GLU_NURBS_ERROR has no data flavour: the engine passes the code only.
unsafe extern "system" fn nurbs_error(code: GLenum) {
    let driving = match DRIVING_NURBS.with(Cell::get) {
        Some(d) => d,
        None => return,
    };
    unsafe { (driving.on_error)(driving.ctx, code) }
}

unsafe fn nurbs_error_data<P>(ctx: *mut c_void, code: GLenum) {
    let state = match unsafe { NurbsState::<P>::from_ptr_mut(ctx) } {
        Some(s) => s,
        None => return,
    };
    if let Some(f) = state.callbacks.error.as_mut() {
        f(code, &state.polygon_data);
    }
}
