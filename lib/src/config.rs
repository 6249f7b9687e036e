use crate::filters::DEFAULT_EDGE_THRESHOLD;

/// Renderer pipeline applied to the ingested raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Otsu binarization, then 2x3 Braille cells
    #[default]
    Braille,
    /// Sobel edge glyphs over shading blocks, one character per pixel
    Shade,
}

/// Configuration for text conversion
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: RenderMode,

    /// Sobel magnitude a pixel must exceed to draw an edge glyph (shade mode), default 120.0
    pub edge_threshold: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Braille,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if !self.edge_threshold.is_finite() || self.edge_threshold < 0.0 {
            return Err(format!(
                "edge_threshold must be a finite, non-negative number, got {}",
                self.edge_threshold
            ));
        }
        Ok(())
    }
}
