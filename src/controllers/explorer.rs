use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::engine::MandelbrotEngine;

/// Pixel distance a pan gesture moves the frame, converted through the
/// viewport step into plane coordinates.
const PAN_SHIFT_PIXELS: f64 = 80.0;

/// Command-line collaborator around the engine. Owns the current frame and
/// translates gestures — a drag rectangle, a pan, a reset — into viewport
/// bounds using only the engine's viewport getters, the same arithmetic the
/// windowed shell would do with mouse coordinates.
pub struct ExplorerController<P: FilePresenterPort> {
    engine: MandelbrotEngine,
    presenter: P,
    frame: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> ExplorerController<P> {
    pub fn new(engine: MandelbrotEngine, presenter: P) -> Self {
        Self {
            engine,
            presenter,
            frame: None,
        }
    }

    /// Renders the default framing at the current parameters.
    pub fn render(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let start = Instant::now();
        let frame = self.engine.render()?;
        println!("Rendered default view in {:?}", start.elapsed());

        self.frame = Some(frame);
        Ok(())
    }

    /// Zooms into the rectangle a mouse drag would select: the top-left
    /// pixel `(x0, y0)` becomes the new window origin and the right edge
    /// pixel `x1` bounds the real axis; the vertical extent follows from
    /// the fixed aspect ratio.
    pub fn zoom_to_rectangle(
        &mut self,
        x0: u32,
        y0: u32,
        x1: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let step = self.engine.step();
        let real_start = self.engine.real_start() + step * f64::from(x0);
        let imaginary_start = self.engine.imaginary_start() - step * f64::from(y0);
        let real_end = self.engine.real_start() + step * f64::from(x1);

        let start = Instant::now();
        let frame = self
            .engine
            .render_with_viewport(real_start, imaginary_start, real_end)?;
        println!(
            "Zoomed to {:.6} .. {:.6} ({} iterations) in {:?}",
            real_start,
            real_end,
            self.engine.max_iterations(),
            start.elapsed()
        );

        self.frame = Some(frame);
        Ok(())
    }

    /// Pans right by the fixed pixel shift.
    pub fn pan_right(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let shift = self.engine.step() * PAN_SHIFT_PIXELS;
        let real_start = self.engine.real_start() + shift;
        let imaginary_start = self.engine.imaginary_start();
        let real_end = self.engine.real_end() + shift;

        let frame = self
            .engine
            .render_with_viewport(real_start, imaginary_start, real_end)?;

        self.frame = Some(frame);
        Ok(())
    }

    /// Back to the built-in framing.
    pub fn reset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let frame = self.engine.reset_viewport()?;

        self.frame = Some(frame);
        Ok(())
    }

    /// Writes the current frame, if any, through the presenter.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, filepath)?;
        }

        Ok(())
    }

    #[must_use]
    pub fn engine(&self) -> &MandelbrotEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubPresenter {
        presented: RefCell<Vec<(u32, u32)>>,
    }

    impl StubPresenter {
        fn new() -> Self {
            Self {
                presented: RefCell::new(Vec::new()),
            }
        }
    }

    impl FilePresenterPort for StubPresenter {
        fn present(&self, buffer: &PixelBuffer, _: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((buffer.width(), buffer.height()));
            Ok(())
        }
    }

    fn controller() -> ExplorerController<StubPresenter> {
        let engine = MandelbrotEngine::new(100, 100).unwrap();
        ExplorerController::new(engine, StubPresenter::new())
    }

    #[test]
    fn test_write_before_render_presents_nothing() {
        let controller = controller();

        controller.write("unused.ppm").unwrap();

        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_render_then_write_presents_the_frame() {
        let mut controller = controller();

        controller.render().unwrap();
        controller.write("unused.ppm").unwrap();

        assert_eq!(*controller.presenter.presented.borrow(), vec![(100, 100)]);
    }

    #[test]
    fn test_zoom_rectangle_translates_pixels_to_plane() {
        let mut controller = controller();

        // default window spans 3.0 over 100 pixels: step 0.03
        controller.zoom_to_rectangle(10, 20, 60).unwrap();

        let engine = controller.engine();
        assert!((engine.real_start() - (-2.15 + 0.3)).abs() < 1e-12);
        assert!((engine.imaginary_start() - (1.50 - 0.6)).abs() < 1e-12);
        assert!((engine.real_end() - (-2.15 + 1.8)).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_drag_is_rejected_and_state_kept() {
        let mut controller = controller();

        let result = controller.zoom_to_rectangle(50, 10, 50);

        assert!(result.is_err());
        assert_eq!(controller.engine().real_start(), -2.15);
    }

    #[test]
    fn test_pan_right_shifts_both_real_bounds() {
        let mut controller = controller();
        let step = controller.engine().step();

        controller.pan_right().unwrap();

        let engine = controller.engine();
        assert!((engine.real_start() - (-2.15 + step * 80.0)).abs() < 1e-12);
        assert!((engine.real_end() - (0.85 + step * 80.0)).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_default_bounds() {
        let mut controller = controller();

        controller.zoom_to_rectangle(10, 20, 60).unwrap();
        controller.reset().unwrap();

        assert_eq!(controller.engine().real_start(), -2.15);
        assert_eq!(controller.engine().real_end(), 0.85);
        assert_eq!(controller.engine().imaginary_start(), 1.50);
    }
}
