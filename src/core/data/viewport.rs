use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const REAL_START_DEFAULT: f64 = -2.15;
pub const IMAGINARY_START_DEFAULT: f64 = 1.50;
pub const REAL_END_DEFAULT: f64 = 0.85;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds { real_start: f64, real_end: f64 },
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                real_start,
                real_end,
            } => {
                write!(
                    f,
                    "real axis bounds must satisfy start < end: {} .. {}",
                    real_start, real_end
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "pixel dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular complex-plane region currently mapped onto the pixel
/// grid. Pixels are square: the imaginary-axis extent follows from `step`
/// and the pixel height. A viewport is replaced wholesale on every
/// pan/zoom/reset, never partially mutated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_start: f64,
    imaginary_start: f64,
    real_end: f64,
    width: u32,
    height: u32,
    step: f64,
}

impl Viewport {
    pub fn new(
        real_start: f64,
        imaginary_start: f64,
        real_end: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if real_end <= real_start {
            return Err(ViewportError::InvalidBounds {
                real_start,
                real_end,
            });
        }

        Ok(Self {
            real_start,
            imaginary_start,
            real_end,
            width,
            height,
            step: (real_end - real_start) / f64::from(width),
        })
    }

    /// The classic full-set framing of the original explorer.
    pub fn with_defaults(width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(
            REAL_START_DEFAULT,
            IMAGINARY_START_DEFAULT,
            REAL_END_DEFAULT,
            width,
            height,
        )
    }

    /// Same plane bounds, same pixel grid, new real-axis window.
    pub fn with_bounds(
        &self,
        real_start: f64,
        imaginary_start: f64,
        real_end: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(real_start, imaginary_start, real_end, self.width, self.height)
    }

    /// The complex constant a pixel maps to. Image y grows downward while
    /// the imaginary axis grows upward, hence the subtraction.
    #[must_use]
    pub fn complex_at(&self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.real_start + self.step * f64::from(x),
            imag: self.imaginary_start - self.step * f64::from(y),
        }
    }

    /// Zoom scale: the narrower the real-axis window, the larger the scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        1.0 / (self.real_end - self.real_start)
    }

    #[must_use]
    pub fn real_start(&self) -> f64 {
        self.real_start
    }

    #[must_use]
    pub fn real_end(&self) -> f64 {
        self.real_end
    }

    #[must_use]
    pub fn imaginary_start(&self) -> f64 {
        self.imaginary_start
    }

    /// Plane distance covered by one pixel.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}
