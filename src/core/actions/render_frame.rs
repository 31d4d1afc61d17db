use rayon::prelude::*;

use crate::core::data::colour::{BLACK, Colour};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::escape_time::{escape_time, smooth_iteration_count};

/// Renders one frame sequentially, row-major. Pure: the same request always
/// produces the same buffer.
#[must_use]
pub fn render_frame(request: &RenderRequest) -> PixelBuffer {
    let width = request.viewport.width();
    let height = request.viewport.height();

    let mut buffer: Vec<u8> = Vec::with_capacity((width as usize) * (height as usize) * 3);

    for y in 0..height {
        for x in 0..width {
            let Colour { r, g, b } = pixel_colour(request, x, y);
            buffer.push(r);
            buffer.push(g);
            buffer.push(b);
        }
    }

    PixelBuffer::from_data(width, height, buffer).expect("row loop fills the exact grid size")
}

/// Renders one frame with the pixel rows spread across rayon's worker pool.
/// Rows are independent and each lands in its own output slice, so the
/// result is bit-identical to [`render_frame`].
#[must_use]
pub fn render_frame_parallel(request: &RenderRequest) -> PixelBuffer {
    let width = request.viewport.width();
    let height = request.viewport.height();

    let buffer: Vec<u8> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).flat_map(move |x| {
                let Colour { r, g, b } = pixel_colour(request, x, y);
                [r, g, b]
            })
        })
        .collect();

    PixelBuffer::from_data(width, height, buffer).expect("row loop fills the exact grid size")
}

/// Escape-time evaluation and colour lookup for one pixel. Points that
/// exhaust the budget are interior and stay black; everything else gets the
/// smooth-coloring palette sample.
fn pixel_colour(request: &RenderRequest, x: u32, y: u32) -> Colour {
    let c = request.viewport.complex_at(x, y);
    let escape = escape_time(c, request.max_iterations);

    if escape.iterations >= request.max_iterations {
        return BLACK;
    }

    let mu = smooth_iteration_count(escape, request.max_iterations, request.palette.len());
    request.palette.sample(mu)
}
