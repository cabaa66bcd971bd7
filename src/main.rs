use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_zoom::init_logging();

    let args = mandelbrot_zoom::CliArgs::parse();
    mandelbrot_zoom::RunCliCommand::new(args).execute()
}
