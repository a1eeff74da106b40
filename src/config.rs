//! Session configuration.
//!
//! Both structs can be built in code or parsed from JSON, so callers can keep
//! tessellation settings next to the rest of their asset configuration. Every
//! field is optional in JSON and falls back to the engine's own default.

use crate::error::Result;
use crate::types::{DisplayMode, NurbsMode, SamplingMethod, WindingRule};
use serde::{Deserialize, Serialize};

/// Tessellator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessConfig {
    /// Which regions count as interior
    pub winding_rule: WindingRule,
    /// Report only the region boundaries as line loops
    pub boundary_only: bool,
    /// Merge tolerance for nearby vertices
    pub tolerance: f64,
    /// Polygon normal; computed by the engine when absent
    pub normal: Option<[f64; 3]>,
}

impl Default for TessConfig {
    fn default() -> Self {
        Self {
            winding_rule: WindingRule::Odd,
            boundary_only: false,
            tolerance: 0.0,
            normal: None,
        }
    }
}

impl TessConfig {
    /// Parse a JSON document such as `{"winding_rule": "non_zero"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// NURBS renderer properties.
///
/// Defaults follow GLU except `nurbs_mode`, which defaults to
/// [`NurbsMode::Tessellator`] so evaluated geometry reaches the callbacks
/// instead of GL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NurbsConfig {
    pub nurbs_mode: NurbsMode,
    pub sampling_method: SamplingMethod,
    /// Maximum edge length in pixels for `PathLength` sampling
    pub sampling_tolerance: f32,
    /// Maximum distance in pixels for `ParametricError` sampling
    pub parametric_tolerance: f32,
    /// Samples per unit in u for `DomainDistance` sampling
    pub u_step: f32,
    /// Samples per unit in v for `DomainDistance` sampling
    pub v_step: f32,
    pub display_mode: DisplayMode,
    /// Discard geometry outside the viewport
    pub culling: bool,
    /// Read sampling matrices from GL instead of `load_sampling_matrices`
    pub auto_load_matrix: bool,
}

impl Default for NurbsConfig {
    fn default() -> Self {
        Self {
            nurbs_mode: NurbsMode::Tessellator,
            sampling_method: SamplingMethod::PathLength,
            sampling_tolerance: 50.0,
            parametric_tolerance: 0.5,
            u_step: 100.0,
            v_step: 100.0,
            display_mode: DisplayMode::Fill,
            culling: false,
            auto_load_matrix: true,
        }
    }
}

impl NurbsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
