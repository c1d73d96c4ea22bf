//! The vector document model
//!
//! A document owns a tree of primitives. Groups own their children; there
//! are no back references or cycles, so plain owned nodes are enough. The
//! tree is read-only during rendering.

use crate::color::Rgba;
use crate::transform::{Transform2D, Vector2D};

/// Fill and stroke paint of a primitive
///
/// An alpha of exactly 0 means the corresponding draw step is skipped.
#[derive(Debug, Copy, Clone)]
pub struct Style {
    pub fill: Rgba,
    pub stroke: Rgba,
}

impl Default for Style {
    /// Opaque black fill, no stroke
    fn default() -> Self {
        Style {
            fill: Rgba::black(),
            stroke: Rgba::clear(),
        }
    }
}

impl Style {
    pub fn filled(fill: Rgba) -> Self {
        Style {
            fill,
            stroke: Rgba::clear(),
        }
    }
    pub fn stroked(stroke: Rgba) -> Self {
        Style {
            fill: Rgba::clear(),
            stroke,
        }
    }
}

/// Image resource for the texture-sampling extension point
#[derive(Debug, Default, Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    /// RGBA8 texel data, row-major
    pub data: Vec<u8>,
}

/// A drawing primitive
///
/// Geometry is document-space. The exhaustive match in the dispatcher makes
/// adding a new kind a compile-time-checked exercise.
#[derive(Debug, Clone)]
pub enum Element {
    Point {
        position: Vector2D,
        style: Style,
    },
    Line {
        from: Vector2D,
        to: Vector2D,
        style: Style,
    },
    /// Open path: the last vertex is not connected back to the first
    Polyline {
        points: Vec<Vector2D>,
        style: Style,
    },
    Rect {
        position: Vector2D,
        dimension: Vector2D,
        style: Style,
    },
    /// Closed path: the outline wraps back to the first vertex, and the fill
    /// is triangulated
    Polygon {
        points: Vec<Vector2D>,
        style: Style,
    },
    /// Unimplemented fill: draws nothing
    Ellipse {
        center: Vector2D,
        radius: Vector2D,
        style: Style,
    },
    Image {
        position: Vector2D,
        dimension: Vector2D,
        tex: Texture,
    },
    /// Ordered children drawn in sequence; later children overwrite earlier
    /// ones where they overlap
    Group {
        transform: Transform2D,
        elements: Vec<Element>,
    },
}

/// A parsed vector document: canvas bounds plus the element tree
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Canvas width in document units
    pub width: f64,
    /// Canvas height in document units
    pub height: f64,
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Document {
            width,
            height,
            elements: Vec::new(),
        }
    }
}
