//! NURBS surface-evaluation sessions.
//!
//! The engine evaluates curves and surfaces and, in tessellator mode, reports
//! the resulting primitives through callbacks. Vertex, normal, color and
//! texture coordinate arrays are owned by the engine and only borrowed for the
//! duration of one callback, so no payload arena is needed here.

use crate::backend::NurbsBackend;
use crate::callback::{ArrayHandler, BeginHandler, DrivingGuard, EndHandler, ErrorHandler, nurbs_trampoline};
use crate::config::NurbsConfig;
use crate::error::{Error, Result};
use crate::sys::*;
use crate::types::{ElementType, MapType, NurbsEvent};
use libc::c_void;
use std::marker::PhantomData;
use std::ptr::NonNull;

const UNINITIALISED: &str = "uninitialised Nurbs, see Nurbs::new";

pub(crate) struct NurbsCallbacks<P> {
    pub(crate) begin: Option<BeginHandler<P>>,
    pub(crate) vertex: Option<ArrayHandler<P, 3>>,
    pub(crate) normal: Option<ArrayHandler<P, 3>>,
    pub(crate) color: Option<ArrayHandler<P, 4>>,
    pub(crate) texture_coord: Option<ArrayHandler<P, 4>>,
    pub(crate) end: Option<EndHandler<P>>,
    pub(crate) error: Option<ErrorHandler<P>>,
}

impl<P> Default for NurbsCallbacks<P> {
    fn default() -> Self {
        Self {
            begin: None,
            vertex: None,
            normal: None,
            color: None,
            texture_coord: None,
            end: None,
            error: None,
        }
    }
}

pub(crate) struct NurbsState<P> {
    pub(crate) polygon_data: P,
    pub(crate) callbacks: NurbsCallbacks<P>,
}

impl<P> NurbsState<P> {
    /// Convert the engine's context pointer to a mutable reference.
    ///
    /// # Safety
    ///
    /// The pointer must be null or point to a live `NurbsState<P>` that is not
    /// otherwise borrowed.
    pub(crate) unsafe fn from_ptr_mut<'a>(ptr: *mut c_void) -> Option<&'a mut Self> {
        unsafe { ptr.cast::<Self>().as_mut() }
    }
}

/// A NURBS surface-evaluation session.
///
/// Callbacks only fire when the engine runs in tessellator mode; apply a
/// [`NurbsConfig`] (whose default selects that mode) before drawing.
///
/// Operating on a deleted session panics.
pub struct Nurbs<P, B: NurbsBackend> {
    nurbs: *mut GLUnurbs,
    state: Option<NonNull<NurbsState<P>>>,
    registered: u32,
    _backend: PhantomData<B>,
}

impl<P, B: NurbsBackend> Nurbs<P, B> {
    /// Create a session with its own native NURBS object.
    ///
    /// The session is installed as the object's callback data right away.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] when the engine cannot allocate the object.
    pub fn new(polygon_data: P) -> Result<Self> {
        let nurbs = unsafe { B::new_nurbs() };
        if nurbs.is_null() {
            return Err(Error::OutOfMemory {
                object: "NURBS renderer",
            });
        }

        let state = Box::into_raw(Box::new(NurbsState {
            polygon_data,
            callbacks: NurbsCallbacks::default(),
        }));
        unsafe { B::nurbs_callback_data(nurbs, state.cast()) };
        log::debug!("created NURBS renderer {nurbs:p}");

        Ok(Self {
            nurbs,
            state: NonNull::new(state),
            registered: 0,
            _backend: PhantomData,
        })
    }

    pub fn is_live(&self) -> bool {
        !self.nurbs.is_null()
    }

    pub fn as_raw(&self) -> *mut GLUnurbs {
        self.live().0
    }

    fn live(&self) -> (*mut GLUnurbs, NonNull<NurbsState<P>>) {
        match self.state {
            Some(state) if !self.nurbs.is_null() => (self.nurbs, state),
            _ => panic!("{UNINITIALISED}"),
        }
    }

    fn state(&self) -> &NurbsState<P> {
        let (_, state) = self.live();
        unsafe { state.as_ref() }
    }

    fn state_mut(&mut self) -> &mut NurbsState<P> {
        let (_, mut state) = self.live();
        unsafe { state.as_mut() }
    }

    /// Run one driving call with this session as the target of error events.
    fn drive<R>(&mut self, f: impl FnOnce(*mut GLUnurbs) -> R) -> R {
        let (nurbs, state) = self.live();
        let _guard = DrivingGuard::enter::<P>(state.as_ptr().cast());
        f(nurbs)
    }

    pub fn polygon_data(&self) -> &P {
        &self.state().polygon_data
    }

    /// Replace the polygon data every callback receives. Returns the old value.
    pub fn set_polygon_data(&mut self, polygon_data: P) -> P {
        std::mem::replace(&mut self.state_mut().polygon_data, polygon_data)
    }

    fn register(&mut self, event: NurbsEvent) {
        let (nurbs, _) = self.live();
        if self.registered & event.bit() != 0 {
            return;
        }
        log::trace!("registering {event:?} trampoline on NURBS renderer {nurbs:p}");
        unsafe { B::nurbs_callback(nurbs, event.which(), nurbs_trampoline::<P>(event)) };
        self.registered |= event.bit();
    }

    pub fn set_begin_callback<F>(&mut self, f: F)
    where
        F: FnMut(ElementType, &P) + 'static,
    {
        self.state_mut().callbacks.begin = Some(Box::new(f));
        self.register(NurbsEvent::Begin);
    }

    /// Call `f` with every evaluated vertex position.
    pub fn set_vertex_callback<F>(&mut self, f: F)
    where
        F: FnMut(&[f32; 3], &P) + 'static,
    {
        self.state_mut().callbacks.vertex = Some(Box::new(f));
        self.register(NurbsEvent::Vertex);
    }

    /// Call `f` with every evaluated normal. Needs a `Map2Normal` surface or
    /// automatic normals from the engine.
    pub fn set_normal_callback<F>(&mut self, f: F)
    where
        F: FnMut(&[f32; 3], &P) + 'static,
    {
        self.state_mut().callbacks.normal = Some(Box::new(f));
        self.register(NurbsEvent::Normal);
    }

    /// Call `f` with every evaluated RGBA color.
    pub fn set_color_callback<F>(&mut self, f: F)
    where
        F: FnMut(&[f32; 4], &P) + 'static,
    {
        self.state_mut().callbacks.color = Some(Box::new(f));
        self.register(NurbsEvent::Color);
    }

    /// Call `f` with every evaluated texture coordinate, padded to four values.
    pub fn set_texture_coord_callback<F>(&mut self, f: F)
    where
        F: FnMut(&[f32; 4], &P) + 'static,
    {
        self.state_mut().callbacks.texture_coord = Some(Box::new(f));
        self.register(NurbsEvent::TextureCoord);
    }

    pub fn set_end_callback<F>(&mut self, f: F)
    where
        F: FnMut(&P) + 'static,
    {
        self.state_mut().callbacks.end = Some(Box::new(f));
        self.register(NurbsEvent::End);
    }

    /// Call `f` with every `GLU_NURBS_ERROR*` code raised while this session
    /// drives the engine.
    pub fn set_error_callback<F>(&mut self, f: F)
    where
        F: FnMut(GLenum, &P) + 'static,
    {
        self.state_mut().callbacks.error = Some(Box::new(f));
        self.register(NurbsEvent::Error);
    }

    /// Empty the slot for `event`; the event becomes a no-op.
    pub fn remove_callback(&mut self, event: NurbsEvent) -> bool {
        let callbacks = &mut self.state_mut().callbacks;
        match event {
            NurbsEvent::Begin => callbacks.begin.take().is_some(),
            NurbsEvent::Vertex => callbacks.vertex.take().is_some(),
            NurbsEvent::Normal => callbacks.normal.take().is_some(),
            NurbsEvent::Color => callbacks.color.take().is_some(),
            NurbsEvent::TextureCoord => callbacks.texture_coord.take().is_some(),
            NurbsEvent::End => callbacks.end.take().is_some(),
            NurbsEvent::Error => callbacks.error.take().is_some(),
        }
    }

    pub fn property(&mut self, property: GLenum, value: f32) {
        self.drive(|nurbs| unsafe { B::nurbs_property(nurbs, property, value) });
    }

    /// Read a property back. Errors raised by the engine reach this session.
    pub fn get_property(&mut self, property: GLenum) -> f32 {
        let mut value: GLfloat = 0.0;
        self.drive(|nurbs| unsafe { B::get_nurbs_property(nurbs, property, &mut value) });
        value
    }

    /// Push every property in `config` to the engine.
    pub fn configure(&mut self, config: &NurbsConfig) {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };
        self.property(GLU_NURBS_MODE, config.nurbs_mode.raw() as f32);
        self.property(GLU_SAMPLING_METHOD, config.sampling_method.raw() as f32);
        self.property(GLU_SAMPLING_TOLERANCE, config.sampling_tolerance);
        self.property(GLU_PARAMETRIC_TOLERANCE, config.parametric_tolerance);
        self.property(GLU_U_STEP, config.u_step);
        self.property(GLU_V_STEP, config.v_step);
        self.property(GLU_DISPLAY_MODE, config.display_mode.raw() as f32);
        self.property(GLU_CULLING, flag(config.culling));
        self.property(GLU_AUTO_LOAD_MATRIX, flag(config.auto_load_matrix));
    }

    /// Matrices used for sampling when `auto_load_matrix` is off.
    pub fn load_sampling_matrices(
        &mut self,
        model: &[f32; 16],
        perspective: &[f32; 16],
        viewport: &[i32; 4],
    ) {
        self.drive(|nurbs| unsafe {
            B::load_sampling_matrices(
                nurbs,
                model.as_ptr(),
                perspective.as_ptr(),
                viewport.as_ptr(),
            )
        });
    }

    pub fn begin_surface(&mut self) {
        self.drive(|nurbs| unsafe { B::begin_surface(nurbs) });
    }

    /// End the surface definition. The engine evaluates and every callback
    /// fires from here.
    pub fn end_surface(&mut self) {
        self.drive(|nurbs| unsafe { B::end_surface(nurbs) });
    }

    pub fn begin_curve(&mut self) {
        self.drive(|nurbs| unsafe { B::begin_curve(nurbs) });
    }

    pub fn end_curve(&mut self) {
        self.drive(|nurbs| unsafe { B::end_curve(nurbs) });
    }

    pub fn begin_trim(&mut self) {
        self.drive(|nurbs| unsafe { B::begin_trim(nurbs) });
    }

    pub fn end_trim(&mut self) {
        self.drive(|nurbs| unsafe { B::end_trim(nurbs) });
    }

    /// Define a NURBS surface inside a begin/end surface pair.
    ///
    /// Knot counts come from the slice lengths. `control` must hold every
    /// control point the knots and strides address.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] when `control` is too short or a stride is
    /// smaller than one control point, [`Error::OutOfRange`] when a count or
    /// stride does not fit the native integer type, [`Error::InvalidMapType`]
    /// for a curve map.
    #[allow(clippy::too_many_arguments)]
    pub fn nurbs_surface(
        &mut self,
        s_knots: &[f32],
        t_knots: &[f32],
        s_stride: usize,
        t_stride: usize,
        control: &[f32],
        s_order: usize,
        t_order: usize,
        map: MapType,
    ) -> Result<()> {
        check_map(map, true)?;
        let dim = map.dimension();
        check_stride(s_stride, dim)?;
        check_stride(t_stride, dim)?;
        let s_knot_count = to_glint("s knot count", s_knots.len())?;
        let t_knot_count = to_glint("t knot count", t_knots.len())?;
        let s_stride_raw = to_glint("s stride", s_stride)?;
        let t_stride_raw = to_glint("t stride", t_stride)?;
        let s_order_raw = to_glint("s order", s_order)?;
        let t_order_raw = to_glint("t order", t_order)?;

        let s_points = s_knots.len().saturating_sub(s_order);
        let t_points = t_knots.len().saturating_sub(t_order);
        if s_points > 0 && t_points > 0 {
            let axes = [(s_points, s_stride), (t_points, t_stride)];
            let expected = control_extent(&axes, dim)?;
            check_len("control points", expected, control.len())?;
        }

        self.drive(|nurbs| unsafe {
            B::nurbs_surface(
                nurbs,
                s_knot_count,
                s_knots.as_ptr().cast_mut(),
                t_knot_count,
                t_knots.as_ptr().cast_mut(),
                s_stride_raw,
                t_stride_raw,
                control.as_ptr().cast_mut(),
                s_order_raw,
                t_order_raw,
                map.raw(),
            )
        });
        Ok(())
    }

    /// Define a NURBS curve, either inside a curve pair or as a trim curve.
    ///
    /// Validated like [`Nurbs::nurbs_surface`]; surface maps are rejected.
    pub fn nurbs_curve(
        &mut self,
        knots: &[f32],
        stride: usize,
        control: &[f32],
        order: usize,
        map: MapType,
    ) -> Result<()> {
        check_map(map, false)?;
        let dim = map.dimension();
        check_stride(stride, dim)?;
        let knot_count = to_glint("knot count", knots.len())?;
        let stride_raw = to_glint("stride", stride)?;
        let order_raw = to_glint("order", order)?;

        let points = knots.len().saturating_sub(order);
        if points > 0 {
            let expected = control_extent(&[(points, stride)], dim)?;
            check_len("control points", expected, control.len())?;
        }

        self.drive(|nurbs| unsafe {
            B::nurbs_curve(
                nurbs,
                knot_count,
                knots.as_ptr().cast_mut(),
                stride_raw,
                control.as_ptr().cast_mut(),
                order_raw,
                map.raw(),
            )
        });
        Ok(())
    }

    /// Define a piecewise-linear trim curve. The point count is derived from
    /// `data.len()` and `stride`.
    pub fn pwl_curve(&mut self, data: &[f32], stride: usize, map: MapType) -> Result<()> {
        check_map(map, false)?;
        let dim = map.dimension();
        check_stride(stride, dim)?;
        let count = if data.len() >= dim {
            (data.len() - dim) / stride + 1
        } else {
            0
        };
        let count = to_glint("point count", count)?;
        let stride = to_glint("stride", stride)?;

        self.drive(|nurbs| unsafe {
            B::pwl_curve(nurbs, count, data.as_ptr().cast_mut(), stride, map.raw())
        });
        Ok(())
    }

    /// Free the native object, then the callbacks.
    ///
    /// Every later operation on this session panics.
    pub fn delete(&mut self) {
        self.live();
        self.release();
    }

    fn release(&mut self) {
        if !self.nurbs.is_null() {
            unsafe { B::delete_nurbs(self.nurbs) };
            log::debug!("deleted NURBS renderer {:p}", self.nurbs);
            self.nurbs = std::ptr::null_mut();
        }
        if let Some(state) = self.state.take() {
            // Take ownership and drop
            unsafe { drop(Box::from_raw(state.as_ptr())) };
        }
        self.registered = 0;
    }
}

impl<P, B: NurbsBackend> Drop for Nurbs<P, B> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<P, B: NurbsBackend> std::fmt::Debug for Nurbs<P, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nurbs")
            .field("nurbs", &self.nurbs)
            .field("registered", &self.registered)
            .finish_non_exhaustive()
    }
}

fn check_stride(stride: usize, dim: usize) -> Result<()> {
    if stride < dim {
        return Err(Error::InvalidGeometry {
            what: "stride",
            expected: dim,
            actual: stride,
        });
    }
    Ok(())
}

fn check_map(map: MapType, surface: bool) -> Result<()> {
    if map.is_surface() != surface {
        return Err(Error::InvalidMapType {
            map,
            usage: if surface { "surface" } else { "curve" },
        });
    }
    Ok(())
}

/// One past the last float that a grid of control points reaches.
///
/// Each axis is `(points, stride)` with at least one point.
fn control_extent(axes: &[(usize, usize)], dim: usize) -> Result<usize> {
    axes.iter().try_fold(dim, |reach, &(points, stride)| {
        (points - 1)
            .checked_mul(stride)
            .and_then(|step| reach.checked_add(step))
            .ok_or(Error::OutOfRange {
                what: "control point offset",
                value: stride,
            })
    })
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        return Err(Error::InvalidGeometry {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

fn to_glint(what: &'static str, value: usize) -> Result<GLint> {
    GLint::try_from(value).map_err(|_| Error::OutOfRange { what, value })
}
