//! Editor configuration.
//!
//! All tuning constants of the editor live here and are handed to
//! [`EditorContext::new`](crate::state::EditorContext::new) at startup.
//! Nothing reads them from ambient scope.
//!
//! # Example JSON
//! ```json
//! {
//!   "radius": 70.0,
//!   "move_dist": 40.0,
//!   "scale_increment": 10.0,
//!   "default_color": "#FF0000",
//!   "selection_color": "#0DFF00"
//! }
//! ```
//! Missing fields fall back to their defaults.

use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::color::ShapeColor;
use crate::error::{EditorError, EditorResult};
use crate::shape::MIN_SHAPE_SIZE;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SHAPE_EDITOR_CONFIG";

pub const RADIUS: f64 = 70.0;
pub const MOVE_DIST: f64 = 40.0;
pub const SCALE_INCREMENT: f64 = 10.0;
pub const SECTION_OFFSET: f64 = 50.0;
pub const ELLIPSE_SPREAD: f64 = 20.0;
pub const SECTION_SCALE_FACTOR: f64 = 1.5;
pub const STROKE_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Radius of a freshly created circle
    pub radius: f64,
    /// Distance covered by one arrow key press
    pub move_dist: f64,
    /// Radius change applied by one grow/shrink key press
    pub scale_increment: f64,
    /// Offset of a new section's endpoints from the click, on both axes
    pub section_offset: f64,
    /// A new ellipse gets radii `radius + spread` and `radius - spread`
    pub ellipse_spread: f64,
    /// Multiplicative factor used when resizing a section
    pub section_scale_factor: f64,
    pub stroke_width: f32,
    pub default_color: ShapeColor,
    pub selection_color: ShapeColor,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            radius: RADIUS,
            move_dist: MOVE_DIST,
            scale_increment: SCALE_INCREMENT,
            section_offset: SECTION_OFFSET,
            ellipse_spread: ELLIPSE_SPREAD,
            section_scale_factor: SECTION_SCALE_FACTOR,
            stroke_width: STROKE_WIDTH,
            default_color: ShapeColor::RED,
            selection_color: ShapeColor::LIME,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        debug!("Loading editor config from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;

        info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `SHAPE_EDITOR_CONFIG`, falling back to the
    /// defaults when the variable is unset or the file is unusable
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(&path).unwrap_or_else(|err| {
                warn!("Ignoring config {path}: {err}");
                Self::default()
            }),
            Err(_) => {
                debug!("{CONFIG_ENV_VAR} not set, using default config");
                Self::default()
            }
        }
    }

    /// Checks that every value keeps the shape geometry consistent.
    pub fn validate(&self) -> EditorResult<()> {
        let positive = [
            ("radius", self.radius),
            ("move_dist", self.move_dist),
            ("scale_increment", self.scale_increment),
            ("section_offset", self.section_offset),
            ("stroke_width", f64::from(self.stroke_width)),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(EditorError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        if !self.section_scale_factor.is_finite() || self.section_scale_factor <= 1.0 {
            return Err(EditorError::InvalidConfig(format!(
                "section_scale_factor must be greater than 1, got {}",
                self.section_scale_factor
            )));
        }

        if !self.ellipse_spread.is_finite()
            || self.ellipse_spread < 0.0
            || self.radius - self.ellipse_spread < MIN_SHAPE_SIZE
        {
            return Err(EditorError::InvalidConfig(format!(
                "ellipse_spread {} leaves the minor radius of a new ellipse below {}",
                self.ellipse_spread, MIN_SHAPE_SIZE
            )));
        }

        if self.radius < MIN_SHAPE_SIZE {
            return Err(EditorError::InvalidConfig(format!(
                "radius {} is below the minimum shape size {}",
                self.radius, MIN_SHAPE_SIZE
            )));
        }

        Ok(())
    }
}
