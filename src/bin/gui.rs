fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_zoom::init_logging();

    let presenter_factory = mandelbrot_zoom::PixelsPresenterFactory::new();
    let command = mandelbrot_zoom::RunGuiCommand::new(
        mandelbrot_zoom::ExplorerConfig::default(),
        presenter_factory,
    );

    command.execute()?;

    Ok(())
}
