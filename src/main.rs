fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = mandelbrot_explorer::MandelbrotEngine::new(400, 400)?;
    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let mut controller = mandelbrot_explorer::ExplorerController::new(engine, presenter);

    controller.render()?;
    controller.write("output/mandelbrot.ppm")?;

    // the seahorse valley, selected the way a mouse drag would be
    controller.zoom_to_rectangle(180, 120, 260)?;
    controller.write("output/mandelbrot_zoom.ppm")?;

    controller.reset()?;
    controller.write("output/mandelbrot_reset.ppm")?;

    Ok(())
}
