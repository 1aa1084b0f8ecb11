//! Export boundary.
//!
//! Rasterizing the generated document to pixels requires a headless browser
//! or an equivalent renderer, which lives outside this crate. The trait pins
//! the handoff so callers can inject whichever backend they run.

use std::io;

use crate::builder::Dimensions;

/// Turns a finished HTML document into encoded image bytes (PNG).
pub trait Rasterizer {
    /// Render `html` on a canvas of exactly `dimensions` and return the
    /// encoded image. The document already embeds its own sizing rules, so
    /// the backend viewport must match `dimensions` or the output will be
    /// cropped or letterboxed.
    fn rasterize(&self, html: &str, dimensions: Dimensions) -> io::Result<Vec<u8>>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, html: &str, dimensions: Dimensions) -> io::Result<Vec<u8>> {
        (**self).rasterize(html, dimensions)
    }
}

impl<R: Rasterizer + ?Sized> Rasterizer for Box<R> {
    fn rasterize(&self, html: &str, dimensions: Dimensions) -> io::Result<Vec<u8>> {
        (**self).rasterize(html, dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRasterizer;

    impl Rasterizer for StubRasterizer {
        fn rasterize(&self, html: &str, _dimensions: Dimensions) -> io::Result<Vec<u8>> {
            Ok(html.as_bytes().to_vec())
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let backend: Box<dyn Rasterizer> = Box::new(StubRasterizer);
        let bytes = backend.rasterize("<html></html>", Dimensions::SQUARE).unwrap();
        assert_eq!(bytes, b"<html></html>");
    }
}
