use crate::core::actions::generate_palette::{GeneratePaletteError, generate_palette};
use crate::core::actions::render_frame::render_frame_parallel;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::{
    IMAGINARY_START_DEFAULT, REAL_END_DEFAULT, REAL_START_DEFAULT, Viewport, ViewportError,
};
use crate::core::fractals::mandelbrot::iteration_budget::{
    DEFAULT_MAX_ITERATIONS, iterations_for_scale,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EngineError {
    Viewport(ViewportError),
    Palette(GeneratePaletteError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<ViewportError> for EngineError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<GeneratePaletteError> for EngineError {
    fn from(err: GeneratePaletteError) -> Self {
        Self::Palette(err)
    }
}

/// Stateful facade over the pure render pipeline: holds the current
/// viewport, the palette parameters and the iteration budget, and turns
/// render calls into immutable [`RenderRequest`]s. The pixel grid is fixed
/// for the engine's lifetime; viewports are swapped wholesale.
///
/// One render call owns the frame it produces and blocks until every pixel
/// is computed. Callers serialize requests; the engine keeps no interior
/// mutability.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotEngine {
    viewport: Viewport,
    parameters: RenderParameters,
    max_iterations: u32,
}

impl MandelbrotEngine {
    /// Engine with the default full-set viewport. The budget starts at
    /// [`DEFAULT_MAX_ITERATIONS`] and is first recomputed by a
    /// viewport-changing render.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        let viewport = Viewport::with_defaults(width, height)?;

        Ok(Self {
            viewport,
            parameters: RenderParameters::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        })
    }

    /// Renders at the current viewport and budget. Used when only palette
    /// parameters changed: the budget stays untouched, the palette is
    /// regenerated against it.
    pub fn render(&self) -> Result<PixelBuffer, EngineError> {
        let palette = generate_palette(self.max_iterations, &self.parameters)?;
        let request = RenderRequest::new(self.viewport, palette, self.max_iterations)
            .expect("budget is clamped to at least one");

        Ok(render_frame_parallel(&request))
    }

    /// Replaces the viewport (pixel grid held fixed), recomputes the
    /// iteration budget from the new zoom scale, and renders.
    pub fn render_with_viewport(
        &mut self,
        real_start: f64,
        imaginary_start: f64,
        real_end: f64,
    ) -> Result<PixelBuffer, EngineError> {
        let viewport = self
            .viewport
            .with_bounds(real_start, imaginary_start, real_end)?;

        self.viewport = viewport;
        self.max_iterations = iterations_for_scale(viewport.scale());

        self.render()
    }

    /// Back to the built-in framing, budget recomputed accordingly.
    pub fn reset_viewport(&mut self) -> Result<PixelBuffer, EngineError> {
        self.render_with_viewport(REAL_START_DEFAULT, IMAGINARY_START_DEFAULT, REAL_END_DEFAULT)
    }

    pub fn set_hue_factor(&mut self, hue_factor: i32) {
        self.parameters.hue_factor = hue_factor;
    }

    pub fn set_brightness_factor(&mut self, brightness_factor: i32) {
        self.parameters.brightness_factor = brightness_factor;
    }

    pub fn set_initial_hue(&mut self, initial_hue: f32) {
        self.parameters.initial_hue = initial_hue;
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.viewport.step()
    }

    #[must_use]
    pub fn real_start(&self) -> f64 {
        self.viewport.real_start()
    }

    #[must_use]
    pub fn real_end(&self) -> f64 {
        self.viewport.real_end()
    }

    #[must_use]
    pub fn imaginary_start(&self) -> f64 {
        self.viewport.imaginary_start()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
