mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::explorer::ExplorerController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::generate_palette::{GeneratePaletteError, generate_palette};
pub use crate::core::actions::render_frame::{render_frame, render_frame_parallel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::palette::Palette;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_parameters::RenderParameters;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::engine::{EngineError, MandelbrotEngine};
pub use crate::core::fractals::mandelbrot::iteration_budget::iterations_for_scale;
