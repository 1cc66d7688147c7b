use {
    clap::{Parser, Subcommand},
    glam::DVec2,
    simplex_lcg::{FractalParams, Lcg, NoiseError, Simplex, TextureParams},
    std::{path::PathBuf, process::ExitCode, time::Instant},
};

/// Seeded LCG and 2D simplex noise generator.
#[derive(Parser, Debug)]
#[command(name = "simplex_lcg")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render fbm noise to a grayscale PNG.
    Texture {
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,

        #[arg(long, default_value_t = 800)]
        width: u32,

        #[arg(long, default_value_t = 600)]
        height: u32,

        /// Horizontal pixel offset applied before scaling.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x0: f64,

        /// Vertical pixel offset applied before scaling.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y0: f64,

        /// Noise units per pixel.
        #[arg(long, default_value_t = 0.01)]
        scale: f64,

        #[command(flatten)]
        fractal: FractalArgs,

        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,
    },
    /// Print fbm noise at a single point. One octave is plain simplex noise.
    Sample {
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,

        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        #[command(flatten)]
        fractal: FractalArgs,
    },
    /// Print the first values of the LCG stream.
    Sequence {
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,

        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Print `random()` floats instead of raw 32-bit states.
        #[arg(long)]
        float: bool,
    },
}

#[derive(clap::Args, Debug)]
struct FractalArgs {
    #[arg(long, default_value_t = 4)]
    octaves: u32,

    /// Amplitude multiplier per octave.
    #[arg(long, default_value_t = 0.5)]
    persistence: f64,

    /// Frequency multiplier per octave.
    #[arg(long, default_value_t = 2.0)]
    lacunarity: f64,
}

impl From<FractalArgs> for FractalParams {
    fn from(args: FractalArgs) -> Self {
        Self::new(args.octaves, args.persistence, args.lacunarity)
    }
}

fn run(args: Args) -> Result<(), NoiseError> {
    match args.command {
        Command::Texture {
            seed,
            width,
            height,
            x0,
            y0,
            scale,
            fractal,
            output,
        } => {
            let params = TextureParams {
                width,
                height,
                origin: DVec2::new(x0, y0),
                scale,
                fractal: fractal.into(),
            };

            let start = Instant::now();
            let texture = Simplex::new(seed).texture(&params)?;
            log::info!(
                "rendered {width}x{height} in {}ms",
                start.elapsed().as_millis()
            );

            texture.save_png(&output)?;
        }
        Command::Sample {
            seed,
            x,
            y,
            fractal,
        } => {
            let params = FractalParams::from(fractal);
            let noise = Simplex::new(seed);
            let value = noise.fbm(x, y, params.octaves, params.persistence, params.lacunarity)?;
            println!("{value}");
        }
        Command::Sequence { seed, count, float } => {
            let mut lcg = Lcg::new(seed);
            for _ in 0..count {
                if float {
                    println!("{}", lcg.random());
                } else {
                    println!("{}", lcg.next());
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
