//! Tessellation sessions.

use crate::backend::TessBackend;
use crate::callback::{
    BeginHandler, CombineHandler, EdgeFlagHandler, EndHandler, ErrorHandler, VertexHandler,
    tess_trampoline,
};
use crate::config::TessConfig;
use crate::error::{Error, Result};
use crate::handle::{VertexArena, as_opaque, location_ptr};
use crate::sys::*;
use crate::types::{ElementType, TessEvent, WindingRule};
use libc::c_void;
use std::marker::PhantomData;
use std::ptr::NonNull;

const UNINITIALISED: &str = "uninitialised Tessellator, see Tessellator::new";

/// One callback slot per tessellator event kind.
pub(crate) struct TessCallbacks<V, P> {
    pub(crate) begin: Option<BeginHandler<P>>,
    pub(crate) vertex: Option<VertexHandler<V, P>>,
    pub(crate) end: Option<EndHandler<P>>,
    pub(crate) error: Option<ErrorHandler<P>>,
    pub(crate) edge_flag: Option<EdgeFlagHandler<P>>,
    pub(crate) combine: Option<CombineHandler<V, P>>,
}

impl<V, P> Default for TessCallbacks<V, P> {
    fn default() -> Self {
        Self {
            begin: None,
            vertex: None,
            end: None,
            error: None,
            edge_flag: None,
            combine: None,
        }
    }
}

/// Everything a trampoline needs, reachable from the context pointer the
/// engine carries. Its address is fixed for the life of the session.
pub(crate) struct TessState<V, P> {
    pub(crate) polygon_data: P,
    pub(crate) callbacks: TessCallbacks<V, P>,
    pub(crate) vertices: VertexArena<V>,
}

impl<V, P> TessState<V, P> {
    /// Convert the engine's context pointer to a mutable reference.
    ///
    /// # Safety
    ///
    /// The pointer must be null or point to a live `TessState<V, P>` that is
    /// not otherwise borrowed.
    pub(crate) unsafe fn from_ptr_mut<'a>(ptr: *mut c_void) -> Option<&'a mut Self> {
        unsafe { ptr.cast::<Self>().as_mut() }
    }
}

/// A tessellation session.
///
/// `V` is the per-vertex payload type and `P` the polygon data shared by all
/// callbacks of the session. Every submitted payload, and every payload built
/// by the combine callback, stays alive until the session is deleted.
///
/// Operating on a deleted session panics.
///
/// # Thread Safety
///
/// `Tessellator` is neither `Send` nor `Sync`. Independent sessions may live
/// on different threads.
pub struct Tessellator<V, P, B: TessBackend> {
    tess: *mut GLUtesselator,
    state: Option<NonNull<TessState<V, P>>>,
    registered: u32,
    _backend: PhantomData<B>,
}

impl<V, P, B: TessBackend> Tessellator<V, P, B> {
    /// Create a session with its own native tessellator object.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] when the engine cannot allocate the object.
    pub fn new(polygon_data: P) -> Result<Self> {
        let tess = unsafe { B::new_tess() };
        if tess.is_null() {
            return Err(Error::OutOfMemory {
                object: "tessellator",
            });
        }

        let state = Box::new(TessState {
            polygon_data,
            callbacks: TessCallbacks::default(),
            vertices: VertexArena::new(),
        });
        log::debug!("created tessellator {tess:p}");

        Ok(Self {
            tess,
            // SAFETY: Box::into_raw never returns null.
            state: Some(unsafe { NonNull::new_unchecked(Box::into_raw(state)) }),
            registered: 0,
            _backend: PhantomData,
        })
    }

    pub fn is_live(&self) -> bool {
        !self.tess.is_null()
    }

    /// The native object, for driving entry points this type does not wrap.
    pub fn as_raw(&self) -> *mut GLUtesselator {
        self.live().0
    }

    fn live(&self) -> (*mut GLUtesselator, NonNull<TessState<V, P>>) {
        match self.state {
            Some(state) if !self.tess.is_null() => (self.tess, state),
            _ => panic!("{UNINITIALISED}"),
        }
    }

    fn state(&self) -> &TessState<V, P> {
        let (_, state) = self.live();
        unsafe { state.as_ref() }
    }

    fn state_mut(&mut self) -> &mut TessState<V, P> {
        let (_, mut state) = self.live();
        unsafe { state.as_mut() }
    }

    pub fn polygon_data(&self) -> &P {
        &self.state().polygon_data
    }

    /// Replace the polygon data every callback receives. Returns the old value.
    pub fn set_polygon_data(&mut self, polygon_data: P) -> P {
        std::mem::replace(&mut self.state_mut().polygon_data, polygon_data)
    }

    /// Number of payloads the session keeps alive (submitted plus combined).
    pub fn retained_vertices(&self) -> usize {
        self.state().vertices.len()
    }

    /// Register the trampoline for `event` with the engine, once.
    fn register(&mut self, event: TessEvent) {
        let (tess, _) = self.live();
        if self.registered & event.bit() != 0 {
            return;
        }
        log::trace!("registering {event:?} trampoline on tessellator {tess:p}");
        unsafe { B::tess_callback(tess, event.which(), tess_trampoline::<V, P>(event)) };
        self.registered |= event.bit();
    }

    /// Call `f` with the primitive type at the start of every output primitive.
    pub fn set_begin_callback<F>(&mut self, f: F)
    where
        F: FnMut(ElementType, &P) + 'static,
    {
        self.state_mut().callbacks.begin = Some(Box::new(f));
        self.register(TessEvent::Begin);
    }

    /// Call `f` with the submitted (or combined) payload of every output vertex.
    pub fn set_vertex_callback<F>(&mut self, f: F)
    where
        F: FnMut(&V, &P) + 'static,
    {
        self.state_mut().callbacks.vertex = Some(Box::new(f));
        self.register(TessEvent::Vertex);
    }

    /// Call `f` at the end of every output primitive.
    pub fn set_end_callback<F>(&mut self, f: F)
    where
        F: FnMut(&P) + 'static,
    {
        self.state_mut().callbacks.end = Some(Box::new(f));
        self.register(TessEvent::End);
    }

    /// Call `f` with every error code the engine reports.
    pub fn set_error_callback<F>(&mut self, f: F)
    where
        F: FnMut(GLenum, &P) + 'static,
    {
        self.state_mut().callbacks.error = Some(Box::new(f));
        self.register(TessEvent::Error);
    }

    /// Call `f` whenever the boundary flag of the following vertices changes.
    pub fn set_edge_flag_callback<F>(&mut self, f: F)
    where
        F: FnMut(bool, &P) + 'static,
    {
        self.state_mut().callbacks.edge_flag = Some(Box::new(f));
        self.register(TessEvent::EdgeFlag);
    }

    /// Call `f` whenever the engine needs a payload for a vertex it creates.
    ///
    /// Empty contributing slots after the first are filled with slot 0
    /// before the callback sees them. The returned payload is kept alive
    /// until the session is deleted.
    pub fn set_combine_callback<F>(&mut self, f: F)
    where
        F: FnMut([f64; 3], [Option<&V>; 4], [f32; 4], &P) -> V + 'static,
    {
        self.state_mut().callbacks.combine = Some(Box::new(f));
        self.register(TessEvent::Combine);
    }

    /// Empty the slot for `event`. The native registration stays in place and
    /// the event becomes a no-op. Returns whether a callback was removed.
    pub fn remove_callback(&mut self, event: TessEvent) -> bool {
        let callbacks = &mut self.state_mut().callbacks;
        match event {
            TessEvent::Begin => callbacks.begin.take().is_some(),
            TessEvent::Vertex => callbacks.vertex.take().is_some(),
            TessEvent::End => callbacks.end.take().is_some(),
            TessEvent::Error => callbacks.error.take().is_some(),
            TessEvent::EdgeFlag => callbacks.edge_flag.take().is_some(),
            TessEvent::Combine => callbacks.combine.take().is_some(),
        }
    }

    /// Begin a polygon. The session itself is the context of every event.
    pub fn begin_polygon(&mut self) {
        let (tess, state) = self.live();
        unsafe { B::tess_begin_polygon(tess, state.as_ptr().cast()) };
    }

    pub fn begin_contour(&mut self) {
        let (tess, _) = self.live();
        unsafe { B::tess_begin_contour(tess) };
    }

    /// Submit one vertex of the current contour.
    ///
    /// `data` is what the vertex callback reports for this vertex.
    pub fn vertex(&mut self, location: [f64; 3], data: V) {
        let (tess, _) = self.live();
        let wrapper = self.state_mut().vertices.wrap(location, data);
        unsafe { B::tess_vertex(tess, location_ptr(wrapper), as_opaque(wrapper)) };
    }

    pub fn end_contour(&mut self) {
        let (tess, _) = self.live();
        unsafe { B::tess_end_contour(tess) };
    }

    /// Submit a whole contour between begin/end contour calls.
    pub fn contour<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = ([f64; 3], V)>,
    {
        self.begin_contour();
        for (location, data) in vertices {
            self.vertex(location, data);
        }
        self.end_contour();
    }

    /// End the polygon. The engine runs and every callback fires from here.
    pub fn end_polygon(&mut self) {
        let (tess, _) = self.live();
        unsafe { B::tess_end_polygon(tess) };
    }

    pub fn normal(&mut self, x: f64, y: f64, z: f64) {
        let (tess, _) = self.live();
        unsafe { B::tess_normal(tess, x, y, z) };
    }

    pub fn property(&mut self, which: GLenum, value: f64) {
        let (tess, _) = self.live();
        unsafe { B::tess_property(tess, which, value) };
    }

    /// Read a property back. An unknown selector is reported to the error
    /// callback as `GLU_INVALID_ENUM`.
    pub fn get_property(&mut self, which: GLenum) -> f64 {
        let (tess, _) = self.live();
        let mut value: GLdouble = 0.0;
        unsafe { B::get_tess_property(tess, which, &mut value) };
        value
    }

    pub fn set_winding_rule(&mut self, rule: WindingRule) {
        self.property(GLU_TESS_WINDING_RULE, f64::from(rule.raw()));
    }

    /// Push every property in `config` to the engine.
    pub fn configure(&mut self, config: &TessConfig) {
        self.set_winding_rule(config.winding_rule);
        let boundary_only = if config.boundary_only { GL_TRUE } else { GL_FALSE };
        self.property(GLU_TESS_BOUNDARY_ONLY, f64::from(boundary_only));
        self.property(GLU_TESS_TOLERANCE, config.tolerance);
        if let Some([x, y, z]) = config.normal {
            self.normal(x, y, z);
        }
    }

    /// Free the native object, then the payloads and callbacks.
    ///
    /// Every later operation on this session panics.
    pub fn delete(&mut self) {
        self.live();
        self.release();
    }

    fn release(&mut self) {
        if !self.tess.is_null() {
            unsafe { B::delete_tess(self.tess) };
            let retained = self.state.map_or(0, |s| unsafe { s.as_ref() }.vertices.len());
            log::debug!("deleted tessellator {:p} ({retained} retained vertices)", self.tess);
            self.tess = std::ptr::null_mut();
        }
        if let Some(state) = self.state.take() {
            // Take ownership and drop
            unsafe { drop(Box::from_raw(state.as_ptr())) };
        }
        self.registered = 0;
    }
}

impl<V, P, B: TessBackend> Drop for Tessellator<V, P, B> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<V, P, B: TessBackend> std::fmt::Debug for Tessellator<V, P, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tessellator")
            .field("tess", &self.tess)
            .field("registered", &self.registered)
            .finish_non_exhaustive()
    }
}
