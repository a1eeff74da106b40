//! A small software engine with GLU's calling conventions.
//!
//! It is nowhere near a real tessellator: simple contours come back as a fan
//! (or as edge-flagged triangles), and a four-vertex contour whose first and
//! last edges cross is split at the crossing through the combine callback.
//! That is enough to drive every trampoline the way GLU does, synchronously
//! from inside the driving calls.

use crate::backend::{NurbsBackend, TessBackend};
use crate::sys::*;
use crate::types::WindingRule;
use libc::c_void;
use std::cell::Cell;
use std::collections::HashMap;
use std::mem;
use std::ptr;

type RawProc = unsafe extern "system" fn();

thread_local! {
    static FAIL_NEXT_ALLOC: Cell<bool> = const { Cell::new(false) };
    static LIVE_OBJECTS: Cell<usize> = const { Cell::new(0) };
}

/// Make the next `new_tess` / `new_nurbs` on this thread return null.
pub(crate) fn fail_next_alloc() {
    FAIL_NEXT_ALLOC.with(|f| f.set(true));
}

/// Native objects created on this thread and not yet deleted.
pub(crate) fn live_objects() -> usize {
    LIVE_OBJECTS.with(Cell::get)
}

fn allocate<T>(object: T) -> *mut T {
    if FAIL_NEXT_ALLOC.with(|f| f.replace(false)) {
        return ptr::null_mut();
    }
    LIVE_OBJECTS.with(|n| n.set(n.get() + 1));
    Box::into_raw(Box::new(object))
}

unsafe fn free<T>(object: *mut T) {
    if object.is_null() {
        return;
    }
    LIVE_OBJECTS.with(|n| n.set(n.get() - 1));
    unsafe { drop(Box::from_raw(object)) };
}

#[derive(Default)]
struct Registry {
    procs: HashMap<GLenum, RawProc>,
    registrations: HashMap<GLenum, usize>,
}

impl Registry {
    fn set(&mut self, which: GLenum, callback: _GLUfuncptr) {
        *self.registrations.entry(which).or_default() += 1;
        match callback {
            Some(f) => self.procs.insert(which, f),
            None => self.procs.remove(&which),
        };
    }

    fn get(&self, which: GLenum) -> Option<RawProc> {
        self.procs.get(&which).copied()
    }

    fn count(&self, which: GLenum) -> usize {
        self.registrations.get(&which).copied().unwrap_or(0)
    }
}

// =============================================================================
// Tessellator
// =============================================================================

#[derive(Clone, Copy)]
struct FakeVertex {
    coords: [f64; 3],
    data: *mut c_void,
}

pub(crate) struct FakeTess {
    registry: Registry,
    winding_rule: GLenum,
    boundary_only: bool,
    tolerance: GLdouble,
    normal: [GLdouble; 3],
    polygon_data: *mut c_void,
    in_polygon: bool,
    contour: Option<Vec<FakeVertex>>,
    contours: Vec<Vec<FakeVertex>>,
    submitted: Vec<*mut c_void>,
}

impl FakeTess {
    fn new() -> Self {
        Self {
            registry: Registry::default(),
            winding_rule: GLU_TESS_WINDING_ODD,
            boundary_only: false,
            tolerance: 0.0,
            normal: [0.0; 3],
            polygon_data: ptr::null_mut(),
            in_polygon: false,
            contour: None,
            contours: Vec::new(),
            submitted: Vec::new(),
        }
    }

    fn begin(&self, type_: GLenum) {
        if let Some(p) = self.registry.get(GLU_TESS_BEGIN_DATA) {
            let f: TessBeginDataProc = unsafe { mem::transmute(p) };
            unsafe { f(type_, self.polygon_data) };
        }
    }

    fn vertex(&self, data: *mut c_void) {
        if let Some(p) = self.registry.get(GLU_TESS_VERTEX_DATA) {
            let f: TessVertexDataProc = unsafe { mem::transmute(p) };
            unsafe { f(data, self.polygon_data) };
        }
    }

    fn end(&self) {
        if let Some(p) = self.registry.get(GLU_TESS_END_DATA) {
            let f: TessEndDataProc = unsafe { mem::transmute(p) };
            unsafe { f(self.polygon_data) };
        }
    }

    fn error(&self, code: GLenum) {
        if let Some(p) = self.registry.get(GLU_TESS_ERROR_DATA) {
            let f: TessErrorDataProc = unsafe { mem::transmute(p) };
            unsafe { f(code, self.polygon_data) };
        }
    }

    fn edge_flag(&self, flag: bool) {
        if let Some(p) = self.registry.get(GLU_TESS_EDGE_FLAG_DATA) {
            let f: TessEdgeFlagDataProc = unsafe { mem::transmute(p) };
            let flag = if flag { GL_TRUE } else { GL_FALSE };
            unsafe { f(flag, self.polygon_data) };
        }
    }

    fn combine(
        &self,
        mut coords: [f64; 3],
        mut slots: [*mut c_void; 4],
        mut weight: [f32; 4],
    ) -> Option<*mut c_void> {
        let p = self.registry.get(GLU_TESS_COMBINE_DATA)?;
        let f: TessCombineDataProc = unsafe { mem::transmute(p) };
        let mut out = ptr::null_mut();
        unsafe {
            f(
                coords.as_mut_ptr(),
                slots.as_mut_ptr(),
                weight.as_mut_ptr(),
                &mut out,
                self.polygon_data,
            )
        };
        Some(out)
    }

    fn property(&mut self, which: GLenum, value: GLdouble) {
        match which {
            GLU_TESS_WINDING_RULE => {
                let rule = value as GLenum;
                if f64::from(rule) == value && WindingRule::from_raw(rule).is_some() {
                    self.winding_rule = rule;
                } else {
                    self.error(GLU_INVALID_VALUE);
                }
            }
            GLU_TESS_BOUNDARY_ONLY => self.boundary_only = value != 0.0,
            GLU_TESS_TOLERANCE if (0.0..=1.0).contains(&value) => self.tolerance = value,
            GLU_TESS_TOLERANCE => self.error(GLU_INVALID_VALUE),
            _ => self.error(GLU_INVALID_ENUM),
        }
    }

    fn get_property(&self, which: GLenum) -> GLdouble {
        match which {
            GLU_TESS_WINDING_RULE => f64::from(self.winding_rule),
            GLU_TESS_BOUNDARY_ONLY => f64::from(u8::from(self.boundary_only)),
            GLU_TESS_TOLERANCE => self.tolerance,
            _ => {
                self.error(GLU_INVALID_ENUM);
                0.0
            }
        }
    }

    fn begin_polygon(&mut self, polygon_data: *mut c_void) {
        if self.in_polygon {
            self.error(GLU_TESS_MISSING_END_POLYGON);
        }
        self.polygon_data = polygon_data;
        self.in_polygon = true;
        self.contour = None;
        self.contours.clear();
    }

    fn begin_contour(&mut self) {
        if !self.in_polygon {
            self.error(GLU_TESS_MISSING_BEGIN_POLYGON);
            return;
        }
        if let Some(open) = self.contour.take() {
            self.error(GLU_TESS_MISSING_END_CONTOUR);
            self.contours.push(open);
        }
        self.contour = Some(Vec::new());
    }

    fn add_vertex(&mut self, location: *mut GLdouble, data: *mut c_void) {
        if self.contour.is_none() {
            self.error(GLU_TESS_MISSING_BEGIN_CONTOUR);
            return;
        }
        let mut coords = unsafe { *location.cast::<[f64; 3]>() };
        if coords.iter().any(|c| c.abs() > GLU_TESS_MAX_COORD) {
            self.error(GLU_TESS_COORD_TOO_LARGE);
            coords = coords.map(|c| c.clamp(-GLU_TESS_MAX_COORD, GLU_TESS_MAX_COORD));
        }
        self.submitted.push(data);
        if let Some(contour) = self.contour.as_mut() {
            contour.push(FakeVertex { coords, data });
        }
    }

    fn end_contour(&mut self) {
        match self.contour.take() {
            Some(contour) => self.contours.push(contour),
            None => self.error(GLU_TESS_MISSING_BEGIN_CONTOUR),
        }
    }

    fn end_polygon(&mut self) {
        if !self.in_polygon {
            self.error(GLU_TESS_MISSING_BEGIN_POLYGON);
            return;
        }
        if let Some(open) = self.contour.take() {
            self.error(GLU_TESS_MISSING_END_CONTOUR);
            self.contours.push(open);
        }
        self.in_polygon = false;

        for contour in mem::take(&mut self.contours) {
            if contour.len() < 3 {
                continue;
            }
            if self.boundary_only {
                self.emit(GL_LINE_LOOP, &contour, &[]);
            } else if let Some((t, u)) = crossing(&contour) {
                self.split(&contour, t, u);
            } else {
                self.fan(&contour);
            }
        }
    }

    fn fan(&self, contour: &[FakeVertex]) {
        if self.registry.get(GLU_TESS_EDGE_FLAG_DATA).is_none() {
            self.emit(GL_TRIANGLE_FAN, contour, &[]);
            return;
        }
        // Edge flags force independent triangles. The flag on a vertex
        // describes the edge that starts there.
        let n = contour.len();
        let mut vertices = Vec::with_capacity(3 * (n - 2));
        let mut flags = Vec::with_capacity(3 * (n - 2));
        for i in 1..n - 1 {
            vertices.extend([contour[0], contour[i], contour[i + 1]]);
            flags.extend([i == 1, true, i + 1 == n - 1]);
        }
        self.emit(GL_TRIANGLES, &vertices, &flags);
    }

    fn split(&self, contour: &[FakeVertex], t: f64, u: f64) {
        let [p0, p1, p2, p3] = [contour[0], contour[1], contour[2], contour[3]];
        let coords = [0, 1, 2].map(|i| p0.coords[i] + t * (p1.coords[i] - p0.coords[i]));
        let weight = [
            (1.0 - t) / 2.0,
            t / 2.0,
            (1.0 - u) / 2.0,
            u / 2.0,
        ]
        .map(|w| w as f32);

        let slots = [p0.data, p1.data, p2.data, p3.data];
        let data = match self.combine(coords, slots, weight) {
            Some(data) if !data.is_null() => data,
            _ => {
                self.error(GLU_TESS_NEED_COMBINE_CALLBACK);
                return;
            }
        };

        let x = FakeVertex { coords, data };
        self.emit(GL_TRIANGLES, &[x, p1, p2, x, p3, p0], &[true; 6]);
    }

    fn emit(&self, type_: GLenum, vertices: &[FakeVertex], flags: &[bool]) {
        self.begin(type_);
        let mut current = None;
        for (i, v) in vertices.iter().enumerate() {
            if let Some(&flag) = flags.get(i) {
                if current != Some(flag) {
                    self.edge_flag(flag);
                    current = Some(flag);
                }
            }
            self.vertex(v.data);
        }
        self.end();
    }
}

/// Parameters along the first and second edges where edge v0-v1 crosses
/// edge v2-v3 of a four-vertex contour, in the xy plane.
fn crossing(contour: &[FakeVertex]) -> Option<(f64, f64)> {
    let [p0, p1, p2, p3] = match contour {
        [a, b, c, d] => [a.coords, b.coords, c.coords, d.coords],
        _ => return None,
    };
    let (rx, ry) = (p1[0] - p0[0], p1[1] - p0[1]);
    let (sx, sy) = (p3[0] - p2[0], p3[1] - p2[1]);
    let denom = rx * sy - ry * sx;
    if denom == 0.0 {
        return None;
    }
    let (qx, qy) = (p2[0] - p0[0], p2[1] - p0[1]);
    let t = (qx * sy - qy * sx) / denom;
    let u = (qx * ry - qy * rx) / denom;
    let inside = |v: f64| v > 0.0 && v < 1.0;
    (inside(t) && inside(u)).then_some((t, u))
}

/// A tessellator engine backed by [`FakeTess`] objects.
pub(crate) struct FakeGlu;

unsafe fn tess<'a>(tess: *mut GLUtesselator) -> &'a mut FakeTess {
    unsafe { &mut *tess.cast::<FakeTess>() }
}

unsafe impl TessBackend for FakeGlu {
    unsafe fn new_tess() -> *mut GLUtesselator {
        allocate(FakeTess::new()).cast()
    }

    unsafe fn delete_tess(t: *mut GLUtesselator) {
        unsafe { free(t.cast::<FakeTess>()) }
    }

    unsafe fn tess_callback(t: *mut GLUtesselator, which: GLenum, callback: _GLUfuncptr) {
        unsafe { tess(t) }.registry.set(which, callback);
    }

    unsafe fn tess_property(t: *mut GLUtesselator, which: GLenum, value: GLdouble) {
        unsafe { tess(t) }.property(which, value);
    }

    unsafe fn get_tess_property(t: *mut GLUtesselator, which: GLenum, value: *mut GLdouble) {
        unsafe { *value = tess(t).get_property(which) };
    }

    unsafe fn tess_normal(t: *mut GLUtesselator, x: GLdouble, y: GLdouble, z: GLdouble) {
        unsafe { tess(t) }.normal = [x, y, z];
    }

    unsafe fn tess_begin_polygon(t: *mut GLUtesselator, polygon_data: *mut c_void) {
        unsafe { tess(t) }.begin_polygon(polygon_data);
    }

    unsafe fn tess_begin_contour(t: *mut GLUtesselator) {
        unsafe { tess(t) }.begin_contour();
    }

    unsafe fn tess_vertex(t: *mut GLUtesselator, location: *mut GLdouble, data: *mut c_void) {
        unsafe { tess(t) }.add_vertex(location, data);
    }

    unsafe fn tess_end_contour(t: *mut GLUtesselator) {
        unsafe { tess(t) }.end_contour();
    }

    unsafe fn tess_end_polygon(t: *mut GLUtesselator) {
        unsafe { tess(t) }.end_polygon();
    }
}

/// How many times `which` was registered on a fake tessellator.
pub(crate) fn tess_registrations(t: *mut GLUtesselator, which: GLenum) -> usize {
    unsafe { tess(t) }.registry.count(which)
}

/// Vertex data words submitted to a fake tessellator, in order.
pub(crate) fn submitted(t: *mut GLUtesselator) -> Vec<*mut c_void> {
    unsafe { tess(t) }.submitted.clone()
}

pub(crate) fn tess_normal(t: *mut GLUtesselator) -> [f64; 3] {
    unsafe { tess(t) }.normal
}

/// Fire the combine event directly with caller-chosen slots, as a GLU build
/// that passes null slots would. Returns the out word.
pub(crate) fn fire_combine(
    t: *mut GLUtesselator,
    coords: [f64; 3],
    slots: [*mut c_void; 4],
    weight: [f32; 4],
) -> *mut c_void {
    unsafe { tess(t) }
        .combine(coords, slots, weight)
        .unwrap_or(ptr::null_mut())
}

// =============================================================================
// NURBS
// =============================================================================

struct Patch {
    map: GLenum,
    points: Vec<Vec<f32>>,
}

pub(crate) struct FakeNurbs {
    registry: Registry,
    user_data: *mut c_void,
    properties: HashMap<GLenum, GLfloat>,
    surface: Option<Vec<Patch>>,
    curve: Option<Vec<Patch>>,
    in_trim: bool,
    trim_curves: usize,
    sampling_matrices: Option<([f32; 16], [f32; 16], [i32; 4])>,
}

impl FakeNurbs {
    fn new() -> Self {
        let properties = HashMap::from([
            (GLU_NURBS_MODE, GLU_NURBS_RENDERER as GLfloat),
            (GLU_AUTO_LOAD_MATRIX, 1.0),
            (GLU_CULLING, 0.0),
            (GLU_SAMPLING_TOLERANCE, 50.0),
            (GLU_PARAMETRIC_TOLERANCE, 0.5),
            (GLU_SAMPLING_METHOD, GLU_PATH_LENGTH as GLfloat),
            (GLU_DISPLAY_MODE, GLU_FILL as GLfloat),
            (GLU_U_STEP, 100.0),
            (GLU_V_STEP, 100.0),
        ]);
        Self {
            registry: Registry::default(),
            user_data: ptr::null_mut(),
            properties,
            surface: None,
            curve: None,
            in_trim: false,
            trim_curves: 0,
            sampling_matrices: None,
        }
    }

    fn error(&self, number: GLenum) {
        if let Some(p) = self.registry.get(GLU_NURBS_ERROR) {
            let f: NurbsErrorProc = unsafe { mem::transmute(p) };
            unsafe { f(GLU_NURBS_ERROR1 + number - 1) };
        }
    }

    fn begin(&self, type_: GLenum) {
        if let Some(p) = self.registry.get(GLU_NURBS_BEGIN_DATA) {
            let f: NurbsBeginDataProc = unsafe { mem::transmute(p) };
            unsafe { f(type_, self.user_data) };
        }
    }

    fn array(&self, which: GLenum, mut values: [f32; 4]) {
        if let Some(p) = self.registry.get(which) {
            let f: NurbsArrayDataProc = unsafe { mem::transmute(p) };
            unsafe { f(values.as_mut_ptr(), self.user_data) };
        }
    }

    fn end(&self) {
        if let Some(p) = self.registry.get(GLU_NURBS_END_DATA) {
            let f: NurbsEndDataProc = unsafe { mem::transmute(p) };
            unsafe { f(self.user_data) };
        }
    }

    fn tessellating(&self) -> bool {
        self.properties.get(&GLU_NURBS_MODE).copied() == Some(GLU_NURBS_TESSELLATOR as GLfloat)
    }

    /// Report every control point of the position patch as an output vertex,
    /// preceded by the matching attributes of the other patches.
    fn emit(&self, type_: GLenum, patches: &[Patch]) {
        if !self.tessellating() {
            return;
        }
        let Some(position) = patches.iter().find(|p| is_position(p.map)) else {
            self.error(8);
            return;
        };
        self.begin(type_);
        for (i, point) in position.points.iter().enumerate() {
            for patch in patches.iter().filter(|p| !is_position(p.map)) {
                let Some(values) = patch.points.get(i) else {
                    continue;
                };
                let which = match patch.map {
                    GL_MAP2_NORMAL => GLU_NURBS_NORMAL_DATA,
                    GL_MAP2_COLOR_4 => GLU_NURBS_COLOR_DATA,
                    _ => GLU_NURBS_TEXTURE_COORD_DATA,
                };
                self.array(which, pad(values, 0.0));
            }
            let mut xyz = pad(point, 1.0);
            if point.len() == 4 && point[3] != 0.0 {
                xyz = [xyz[0] / xyz[3], xyz[1] / xyz[3], xyz[2] / xyz[3], 1.0];
            }
            self.array(GLU_NURBS_VERTEX_DATA, xyz);
        }
        self.end();
    }

    fn begin_surface(&mut self) {
        self.surface = Some(Vec::new());
    }

    fn end_surface(&mut self) {
        if self.in_trim {
            self.error(12);
            self.in_trim = false;
        }
        match self.surface.take() {
            Some(patches) => self.emit(GL_QUAD_STRIP, &patches),
            None => self.error(13),
        }
    }

    fn begin_curve(&mut self) {
        self.curve = Some(Vec::new());
    }

    fn end_curve(&mut self) {
        match self.curve.take() {
            Some(patches) => self.emit(GL_LINE_STRIP, &patches),
            None => self.error(7),
        }
    }

    fn begin_trim(&mut self) {
        if self.surface.is_none() {
            self.error(15);
            return;
        }
        self.in_trim = true;
    }

    fn end_trim(&mut self) {
        if !self.in_trim {
            self.error(17);
            return;
        }
        self.in_trim = false;
    }

    fn add_surface(&mut self, map: GLenum, points: Vec<Vec<f32>>) {
        match self.surface.as_mut() {
            Some(patches) => patches.push(Patch { map, points }),
            None => self.error(8),
        }
    }

    fn add_curve(&mut self, map: GLenum, points: Vec<Vec<f32>>) {
        if self.in_trim {
            if map == GLU_MAP1_TRIM_2 || map == GLU_MAP1_TRIM_3 {
                self.trim_curves += 1;
            } else {
                self.error(14);
            }
            return;
        }
        match self.curve.as_mut() {
            Some(patches) => patches.push(Patch { map, points }),
            None => self.error(8),
        }
    }
}

fn is_position(map: GLenum) -> bool {
    matches!(
        map,
        GL_MAP2_VERTEX_3 | GL_MAP2_VERTEX_4 | GL_MAP1_VERTEX_3 | GL_MAP1_VERTEX_4
    )
}

fn pad(values: &[f32], last: f32) -> [f32; 4] {
    let mut out = [0.0, 0.0, 0.0, last];
    for (o, v) in out.iter_mut().zip(values) {
        *o = *v;
    }
    out
}

fn map_dimension(map: GLenum) -> usize {
    match map {
        GL_MAP2_TEXTURE_COORD_1 => 1,
        GLU_MAP1_TRIM_2 | GL_MAP2_TEXTURE_COORD_2 => 2,
        GL_MAP1_VERTEX_4 | GL_MAP2_VERTEX_4 | GL_MAP2_COLOR_4 | GL_MAP2_TEXTURE_COORD_4 => 4,
        _ => 3,
    }
}

unsafe fn read_point(control: *const GLfloat, offset: usize, dim: usize) -> Vec<f32> {
    unsafe { std::slice::from_raw_parts(control.add(offset), dim) }.to_vec()
}

unsafe fn nurbs<'a>(nurbs: *mut GLUnurbs) -> &'a mut FakeNurbs {
    unsafe { &mut *nurbs.cast::<FakeNurbs>() }
}

unsafe impl NurbsBackend for FakeGlu {
    unsafe fn new_nurbs() -> *mut GLUnurbs {
        allocate(FakeNurbs::new()).cast()
    }

    unsafe fn delete_nurbs(n: *mut GLUnurbs) {
        unsafe { free(n.cast::<FakeNurbs>()) }
    }

    unsafe fn nurbs_callback(n: *mut GLUnurbs, which: GLenum, callback: _GLUfuncptr) {
        unsafe { nurbs(n) }.registry.set(which, callback);
    }

    unsafe fn nurbs_callback_data(n: *mut GLUnurbs, user_data: *mut c_void) {
        unsafe { nurbs(n) }.user_data = user_data;
    }

    unsafe fn nurbs_property(n: *mut GLUnurbs, property: GLenum, value: GLfloat) {
        unsafe { nurbs(n) }.properties.insert(property, value);
    }

    unsafe fn get_nurbs_property(n: *mut GLUnurbs, property: GLenum, value: *mut GLfloat) {
        let stored = unsafe { nurbs(n) }.properties.get(&property).copied();
        unsafe { *value = stored.unwrap_or(0.0) };
    }

    unsafe fn begin_surface(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.begin_surface();
    }

    unsafe fn end_surface(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.end_surface();
    }

    unsafe fn begin_curve(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.begin_curve();
    }

    unsafe fn end_curve(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.end_curve();
    }

    unsafe fn begin_trim(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.begin_trim();
    }

    unsafe fn end_trim(n: *mut GLUnurbs) {
        unsafe { nurbs(n) }.end_trim();
    }

    unsafe fn nurbs_surface(
        n: *mut GLUnurbs,
        s_knot_count: GLint,
        _s_knots: *mut GLfloat,
        t_knot_count: GLint,
        _t_knots: *mut GLfloat,
        s_stride: GLint,
        t_stride: GLint,
        control: *mut GLfloat,
        s_order: GLint,
        t_order: GLint,
        type_: GLenum,
    ) {
        let fake = unsafe { nurbs(n) };
        if s_knot_count < 2 * s_order || t_knot_count < 2 * t_order {
            fake.error(2);
            return;
        }
        let dim = map_dimension(type_);
        let mut points = Vec::new();
        for j in 0..(t_knot_count - t_order) as usize {
            for i in 0..(s_knot_count - s_order) as usize {
                let offset = i * s_stride as usize + j * t_stride as usize;
                points.push(unsafe { read_point(control, offset, dim) });
            }
        }
        fake.add_surface(type_, points);
    }

    unsafe fn nurbs_curve(
        n: *mut GLUnurbs,
        knot_count: GLint,
        _knots: *mut GLfloat,
        stride: GLint,
        control: *mut GLfloat,
        order: GLint,
        type_: GLenum,
    ) {
        let fake = unsafe { nurbs(n) };
        if knot_count < 2 * order {
            fake.error(2);
            return;
        }
        let dim = map_dimension(type_);
        let points = (0..(knot_count - order) as usize)
            .map(|i| unsafe { read_point(control, i * stride as usize, dim) })
            .collect();
        fake.add_curve(type_, points);
    }

    unsafe fn pwl_curve(
        n: *mut GLUnurbs,
        _count: GLint,
        _data: *mut GLfloat,
        _stride: GLint,
        type_: GLenum,
    ) {
        let fake = unsafe { nurbs(n) };
        if !fake.in_trim {
            fake.error(19);
            return;
        }
        fake.add_curve(type_, Vec::new());
    }

    unsafe fn load_sampling_matrices(
        n: *mut GLUnurbs,
        model: *const GLfloat,
        perspective: *const GLfloat,
        view: *const GLint,
    ) {
        let matrices = unsafe {
            (
                *model.cast::<[f32; 16]>(),
                *perspective.cast::<[f32; 16]>(),
                *view.cast::<[i32; 4]>(),
            )
        };
        unsafe { nurbs(n) }.sampling_matrices = Some(matrices);
    }
}

pub(crate) fn nurbs_registrations(n: *mut GLUnurbs, which: GLenum) -> usize {
    unsafe { nurbs(n) }.registry.count(which)
}

pub(crate) fn trim_curves(n: *mut GLUnurbs) -> usize {
    unsafe { nurbs(n) }.trim_curves
}

pub(crate) fn sampling_matrices(n: *mut GLUnurbs) -> Option<([f32; 16], [f32; 16], [i32; 4])> {
    unsafe { nurbs(n) }.sampling_matrices
}
