//! The software renderer
//!
//! Walks a document's element tree, maps geometry through the current
//! transform, hands it to the scan converters, and resolves the sample
//! buffer into the caller's render target. One renderer instance owns one
//! sample buffer; rendering is single-threaded and runs to completion.

use log::debug;

use crate::buffer::RenderTarget;
use crate::color::Rgba;
use crate::element::{Document, Element};
use crate::error::RenderError;
use crate::raster;
use crate::sample::SampleBuffer;
use crate::tess;
use crate::transform::{Transform2D, Vector2D};

pub struct SoftwareRenderer {
    sample_rate: usize,
    background: Rgba,
    samples: SampleBuffer,
}

impl Default for SoftwareRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareRenderer {
    /// A renderer with supersampling disabled and a white background
    pub fn new() -> Self {
        SoftwareRenderer {
            sample_rate: 1,
            background: Rgba::white(),
            samples: SampleBuffer::new(0, 0, 1),
        }
    }

    /// Set the supersampling rate (samples per pixel axis)
    ///
    /// Any positive value is legal; 1 disables supersampling. Only call
    /// between renders.
    pub fn set_sample_rate(&mut self, rate: usize) -> Result<(), RenderError> {
        if rate == 0 {
            return Err(RenderError::InvalidSampleRate);
        }
        self.sample_rate = rate;
        Ok(())
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    /// Color the sample buffer is cleared to at the start of each render
    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    /// The sample grid of the most recent render
    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Render a document, mapping its canvas onto the full target
    pub fn render(&mut self, doc: &Document, target: &mut RenderTarget) {
        let root = Transform2D::scaling(
            target.width() as f64 / doc.width,
            target.height() as f64 / doc.height,
        );
        self.render_with_transform(doc, root, target);
    }

    /// Render a document with a caller-supplied root document-to-device
    /// transform
    ///
    /// Draws the element tree in order, then a one-pixel-outset black border
    /// around the canvas bounds, then resolves into the target. The target
    /// is written only during the resolve.
    pub fn render_with_transform(
        &mut self,
        doc: &Document,
        root: Transform2D,
        target: &mut RenderTarget,
    ) {
        debug!(
            "render {}x{} target at sample rate {}",
            target.width(),
            target.height(),
            self.sample_rate
        );
        if self.samples.width() != target.width()
            || self.samples.height() != target.height()
            || self.samples.rate() != self.sample_rate
        {
            self.samples = SampleBuffer::new(target.width(), target.height(), self.sample_rate);
        }
        self.samples.fill(self.background);

        for element in &doc.elements {
            self.draw_element(element, &root);
        }

        // canvas outline: each transformed corner pushed one device pixel
        // outward
        let mut a = root.transform(Vector2D::new(0.0, 0.0));
        let mut b = root.transform(Vector2D::new(doc.width, 0.0));
        let mut c = root.transform(Vector2D::new(0.0, doc.height));
        let mut d = root.transform(Vector2D::new(doc.width, doc.height));
        a.x -= 1.0;
        a.y -= 1.0;
        b.x += 1.0;
        b.y -= 1.0;
        c.x -= 1.0;
        c.y += 1.0;
        d.x += 1.0;
        d.y += 1.0;
        let black = Rgba::black();
        raster::line(&mut self.samples, a.x, a.y, b.x, b.y, black);
        raster::line(&mut self.samples, a.x, a.y, c.x, c.y, black);
        raster::line(&mut self.samples, d.x, d.y, b.x, b.y, black);
        raster::line(&mut self.samples, d.x, d.y, c.x, c.y, black);

        debug!("resolve into target");
        self.samples.resolve_into(target);
    }

    /// Draw one element under the given transform, recursing into groups
    fn draw_element(&mut self, element: &Element, t: &Transform2D) {
        match element {
            Element::Point { position, style } => {
                let p = t.transform(*position);
                raster::point(&mut self.samples, p.x, p.y, style.fill);
            }
            Element::Line { from, to, style } => {
                let p0 = t.transform(*from);
                let p1 = t.transform(*to);
                raster::line(&mut self.samples, p0.x, p0.y, p1.x, p1.y, style.stroke);
            }
            Element::Polyline { points, style } => {
                if style.stroke.is_visible() {
                    for pair in points.windows(2) {
                        let p0 = t.transform(pair[0]);
                        let p1 = t.transform(pair[1]);
                        raster::line(&mut self.samples, p0.x, p0.y, p1.x, p1.y, style.stroke);
                    }
                }
            }
            Element::Rect {
                position,
                dimension,
                style,
            } => {
                let p0 = t.transform(*position);
                let p1 = t.transform(Vector2D::new(position.x + dimension.x, position.y));
                let p2 = t.transform(Vector2D::new(position.x, position.y + dimension.y));
                let p3 = t.transform(*position + *dimension);
                if style.fill.is_visible() {
                    // diagonal split into two triangles
                    raster::triangle(
                        &mut self.samples,
                        p0.x,
                        p0.y,
                        p1.x,
                        p1.y,
                        p2.x,
                        p2.y,
                        style.fill,
                    );
                    raster::triangle(
                        &mut self.samples,
                        p2.x,
                        p2.y,
                        p1.x,
                        p1.y,
                        p3.x,
                        p3.y,
                        style.fill,
                    );
                }
                if style.stroke.is_visible() {
                    raster::line(&mut self.samples, p0.x, p0.y, p1.x, p1.y, style.stroke);
                    raster::line(&mut self.samples, p1.x, p1.y, p3.x, p3.y, style.stroke);
                    raster::line(&mut self.samples, p3.x, p3.y, p2.x, p2.y, style.stroke);
                    raster::line(&mut self.samples, p2.x, p2.y, p0.x, p0.y, style.stroke);
                }
            }
            Element::Polygon { points, style } => {
                if style.fill.is_visible() {
                    for tri in tess::triangulate(points).chunks_exact(3) {
                        let p0 = t.transform(tri[0]);
                        let p1 = t.transform(tri[1]);
                        let p2 = t.transform(tri[2]);
                        raster::triangle(
                            &mut self.samples,
                            p0.x,
                            p0.y,
                            p1.x,
                            p1.y,
                            p2.x,
                            p2.y,
                            style.fill,
                        );
                    }
                }
                if style.stroke.is_visible() {
                    let n = points.len();
                    for i in 0..n {
                        let p0 = t.transform(points[i]);
                        let p1 = t.transform(points[(i + 1) % n]);
                        raster::line(&mut self.samples, p0.x, p0.y, p1.x, p1.y, style.stroke);
                    }
                }
            }
            Element::Ellipse { .. } => {
                // ellipse rasterization is an open extension point
            }
            Element::Image {
                position,
                dimension,
                tex,
            } => {
                let p0 = t.transform(*position);
                let p1 = t.transform(*position + *dimension);
                raster::image(&mut self.samples, p0.x, p0.y, p1.x, p1.y, tex);
            }
            Element::Group {
                transform,
                elements,
            } => {
                // composed on a local value, so siblings never observe it
                let local = *t * *transform;
                for child in elements {
                    self.draw_element(child, &local);
                }
            }
        }
    }
}
