//! Opaque wrappers for host values handed to the native engine.
//!
//! The engine only stores one untyped pointer per vertex. Every payload that
//! crosses that boundary is boxed into a [`VertexWrapper`] whose address never
//! changes, and the box is owned by the session's [`VertexArena`] until the
//! session is destroyed.

use libc::c_void;
use std::ptr::NonNull;

/// Address-stable container for one vertex payload.
///
/// The location is kept next to the payload so the coordinate pointer given
/// to the engine stays valid as long as the payload does.
pub struct VertexWrapper<V> {
    location: [f64; 3],
    data: V,
}

impl<V> VertexWrapper<V> {
    pub fn location(&self) -> &[f64; 3] {
        &self.location
    }

    pub fn data(&self) -> &V {
        &self.data
    }

    /// Recover a wrapper from the opaque pointer the engine hands back.
    ///
    /// Returns `None` for null, which the engine uses to mean "no data here".
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must have been produced by [`VertexArena::wrap`] on an
    /// arena with the same `V` that is still alive.
    pub unsafe fn from_ptr<'a>(ptr: *mut c_void) -> Option<&'a Self> {
        unsafe { ptr.cast::<Self>().as_ref() }
    }
}

/// Session-owned accumulation list of wrapped vertex payloads.
///
/// Wrappers are allocated individually and only freed when the arena is
/// dropped, so pointers given to the engine stay valid for the arena's whole
/// lifetime no matter how many entries are added afterwards.
pub struct VertexArena<V> {
    boxes: Vec<NonNull<VertexWrapper<V>>>,
}

impl<V> VertexArena<V> {
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Box `data` and keep it alive until the arena is dropped.
    ///
    /// The returned pointer is the only representation that crosses the
    /// native boundary.
    pub fn wrap(&mut self, location: [f64; 3], data: V) -> NonNull<VertexWrapper<V>> {
        let raw = Box::into_raw(Box::new(VertexWrapper { location, data }));
        // SAFETY: Box::into_raw never returns null.
        let ptr = unsafe { NonNull::new_unchecked(raw) };
        self.boxes.push(ptr);
        ptr
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl<V> Default for VertexArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for VertexArena<V> {
    fn drop(&mut self) {
        for ptr in self.boxes.drain(..) {
            // Take ownership and drop
            unsafe { drop(Box::from_raw(ptr.as_ptr())) };
        }
    }
}

/// The opaque word handed to the engine for a wrapper.
pub(crate) fn as_opaque<V>(ptr: NonNull<VertexWrapper<V>>) -> *mut c_void {
    ptr.as_ptr().cast()
}

/// Pointer to the three coordinates stored in a wrapper.
pub(crate) fn location_ptr<V>(ptr: NonNull<VertexWrapper<V>>) -> *mut f64 {
    // SAFETY: `ptr` comes from `VertexArena::wrap` and is never dangling
    // while the arena is alive; no reference is created here.
    unsafe { (&raw mut (*ptr.as_ptr()).location).cast() }
}
