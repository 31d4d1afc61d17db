use crate::core::data::palette::Palette;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderRequestError {
    ZeroMaxIterations,
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for RenderRequestError {}

/// Everything a render needs, as one immutable value. The shell holds the
/// current request and builds a new one per gesture; the render actions are
/// pure functions of it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub palette: Palette,
    pub max_iterations: u32,
}

impl RenderRequest {
    pub fn new(
        viewport: Viewport,
        palette: Palette,
        max_iterations: u32,
    ) -> Result<Self, RenderRequestError> {
        if max_iterations == 0 {
            return Err(RenderRequestError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            palette,
            max_iterations,
        })
    }
}
