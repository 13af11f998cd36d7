use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use projectile_sim::core::ballistics::{
    DEFAULT_TIME_STEP_S, DEFAULT_TOTAL_TIME_S, EARTH_GRAVITY_MPS2, FlightSummary,
    SimulationParams, projectile_motion,
};
use projectile_sim::plot::{PlotOptions, default_output_path, render_trajectory};

/// Sample a projectile's flight under constant gravity and plot it.
#[derive(Parser, Debug)]
#[command(version, about, allow_negative_numbers = true)]
struct Args {
    /// Initial speed (m/s)
    #[arg(default_value_t = 20.0)]
    speed_mps: f64,

    /// Launch angle above the horizontal (degrees)
    #[arg(default_value_t = 45.0)]
    angle_deg: f64,

    /// Gravitational acceleration (m/s^2)
    #[arg(long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Interval between samples (s)
    #[arg(long, default_value_t = DEFAULT_TIME_STEP_S)]
    time_step: f64,

    /// End of the sampled window, exclusive (s)
    #[arg(long, default_value_t = DEFAULT_TOTAL_TIME_S)]
    total_time: f64,

    /// Chart file; `.svg` writes SVG, anything else PNG [default: trajectory_<timestamp>.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the summary without writing a chart
    #[arg(long)]
    no_plot: bool,
}

impl Args {
    fn params(&self) -> SimulationParams {
        SimulationParams::new(self.speed_mps, self.angle_deg)
            .with_gravity(self.gravity)
            .with_time_step(self.time_step)
            .with_total_time(self.total_time)
    }
}

fn print_summary(params: SimulationParams, samples: usize) {
    println!("Samples: {samples} (every {} s)", params.time_step_s);

    let summary = FlightSummary::from_params(params);
    match summary.apex {
        Some((time, height)) => println!("Peak height: {height:.4} m at {time:.4} s"),
        None => println!("Peak height: none (no upward motion)"),
    }
    match summary.landing {
        Some((time, distance)) => {
            println!("Time of flight: {time:.4} s");
            println!("Horizontal distance: {distance:.4} m");
        }
        None => println!("Time of flight: unbounded (gravity is not positive)"),
    }
}

fn run(args: Args) -> Result<()> {
    let params = args.params();
    let trajectory = projectile_motion(params).context("could not compute trajectory")?;

    print_summary(params, trajectory.len());

    if args.no_plot {
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&chrono::Local::now()));
    let options = PlotOptions::new(output, params.launch_angle_deg);
    render_trajectory(&trajectory, &options)
        .with_context(|| format!("could not write chart to {}", options.output.display()))?;

    info!(path = %options.output.display(), "done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
