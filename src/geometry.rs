//! Screen geometry helpers for dashboard-style layouts.
//!
//! A dashboard is designed on a fixed stage (1920×1080 by default) and scaled
//! to whatever viewport it is shown in. Widgets are placed in design pixels
//! and emitted as percentage offsets so they follow the stage when it scales.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid size `{0}` (expected WIDTHxHEIGHT, e.g. 1920x1080)")]
    Size(String),

    #[error("invalid rectangle `{0}` (expected LEFT,TOP,WIDTH,HEIGHT)")]
    Rect(String),
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle in design pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check whether two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.bottom() <= other.top
            || self.top >= other.bottom()
            || self.right() <= other.left
            || self.left >= other.right())
    }
}

impl FromStr for Rect {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| GeometryError::Rect(s.to_string()))?;

        match parts[..] {
            [left, top, width, height] if parts.iter().all(|v| v.is_finite()) => {
                Ok(Self::new(left, top, width, height))
            }
            _ => Err(GeometryError::Rect(s.to_string())),
        }
    }
}

/// Index pairs `(i, j)` with `i < j` of all overlapping rectangles.
pub fn overlapping_pairs(rects: &[Rect]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

// ============================================================================
// Stage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl FromStr for Size {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GeometryError::Size(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X', '*']).ok_or_else(err)?;
        let width: f64 = w.trim().parse().map_err(|_| err())?;
        let height: f64 = h.trim().parse().map_err(|_| err())?;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(err());
        }
        Ok(Self::new(width, height))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which viewport axis drives the stage scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleStandard {
    /// Fit both axes (letterbox).
    #[default]
    Contain,
    /// Fill the viewport width; height follows.
    Width,
    /// Fill the viewport height; width follows.
    Height,
}

/// A design stage fitted into a viewport.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub design: Size,
    pub viewport: Size,
    pub standard: ScaleStandard,
    /// Outline every placement (layout debugging).
    pub dev: bool,
}

impl Stage {
    pub fn new(design: Size, viewport: Size, standard: ScaleStandard) -> Self {
        Self {
            design,
            viewport,
            standard,
            dev: false,
        }
    }

    /// Scale factor from design pixels to viewport pixels.
    pub fn scale(&self) -> f64 {
        let by_width = self.viewport.width / self.design.width;
        let by_height = self.viewport.height / self.design.height;
        match self.standard {
            ScaleStandard::Width => by_width,
            ScaleStandard::Height => by_height,
            ScaleStandard::Contain => by_width.min(by_height),
        }
    }

    /// Viewport size expressed in design pixels.
    pub fn standard_size(&self) -> Size {
        let scale = self.scale();
        Size::new(self.viewport.width / scale, self.viewport.height / scale)
    }

    /// Unscaled size of the stage wrapper.
    ///
    /// The free axis grows to fill the viewport when one axis is the standard.
    pub fn wrapper_size(&self) -> Size {
        let standard = self.standard_size();
        match self.standard {
            ScaleStandard::Width => Size::new(self.design.width, standard.height),
            ScaleStandard::Height => Size::new(standard.width, self.design.height),
            ScaleStandard::Contain => self.design,
        }
    }

    /// CSS transform applied to the wrapper.
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale())
    }

    /// Inline style placing `placement` on this stage.
    pub fn style(&self, placement: &Placement) -> String {
        placement.style(self.design, self.dev)
    }
}

// ============================================================================
// Placement
// ============================================================================

/// Widget position in design pixels. Unset or zero edges are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// `position: fixed` instead of `absolute`.
    pub fixed: bool,
}

impl From<Rect> for Placement {
    fn from(rect: Rect) -> Self {
        Self {
            left: Some(rect.left),
            top: Some(rect.top),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Self::default()
        }
    }
}

impl Placement {
    /// Render as inline CSS relative to a `design` stage.
    pub fn style(&self, design: Size, dev: bool) -> String {
        let mut decls: Vec<String> = Vec::with_capacity(8);
        if dev {
            decls.push("outline:red dashed 5px".to_string());
        }
        let position = if self.fixed { "fixed" } else { "absolute" };
        decls.push(format!("position:{position}"));

        let edges = [
            ("width", self.width, design.width),
            ("height", self.height, design.height),
            ("left", self.left, design.width),
            ("right", self.right, design.width),
            ("top", self.top, design.height),
            ("bottom", self.bottom, design.height),
        ];
        for (name, value, total) in edges {
            if let Some(pct) = percentage(total, value) {
                decls.push(format!("{name}:{pct}"));
            }
        }

        decls.join(";")
    }
}

/// `value / total` as a CSS percentage; `None` for missing or zero values.
fn percentage(total: f64, value: Option<f64>) -> Option<String> {
    let value = value.filter(|v| *v != 0.0)?;
    Some(format!("{}%", value / total * 100.0))
}
