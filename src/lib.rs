//! softras: a deterministic supersampling software rasterizer for 2-D
//! vector documents.
//!
//! Data flow for one frame:
//!
//! ```text
//! Document tree --draw_element--> Transform2D (per vertex)
//!                                     |
//!                                     v
//!                     scan converters (raster::{point,line,triangle})
//!                                     |
//!                                     v
//!                  SampleBuffer (width * height * rate^2 samples)
//!                                     |
//!                              resolve (box filter)
//!                                     v
//!                     RenderTarget (caller-owned RGBA8 bytes)
//! ```
//!
//! Coverage decisions are exact and reproducible: the line walker is pure
//! integer Bresenham stepping and triangle containment is a signed
//! edge-function test evaluated at `rate * rate` sub-samples per pixel.
//! Sample writes are last-write-wins; no compositing happens anywhere.

pub mod buffer;
pub mod color;
pub mod element;
pub mod error;
pub mod ppm;
pub mod raster;
pub mod renderer;
pub mod sample;
pub mod tess;
pub mod transform;

pub use crate::buffer::RenderTarget;
pub use crate::color::{cu8, Rgba};
pub use crate::element::{Document, Element, Style, Texture};
pub use crate::error::RenderError;
pub use crate::renderer::SoftwareRenderer;
pub use crate::sample::SampleBuffer;
pub use crate::transform::{Transform2D, Vector2D};
