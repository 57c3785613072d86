use clap::Parser;
use savanna_sim_core::{run_model_with_observer, Landscape, LandscapeClass, ModelConfig};

/// Forest-savanna boundary simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "savanna-sim-demo")]
#[command(about = "Forest-savanna boundary dynamics demo", long_about = None)]
struct Args {
    /// Total simulation steps
    #[arg(short = 'n', long, default_value_t = 2500)]
    steps: u32,

    /// Steps between fire events
    #[arg(short = 'i', long, default_value_t = 15)]
    interval: u32,

    /// Grid height (rows)
    #[arg(long, default_value_t = 50)]
    height: usize,

    /// Grid width (columns)
    #[arg(long, default_value_t = 200)]
    width: usize,

    /// Base colonisation-to-forest maturation time
    #[arg(long, default_value_t = 15.0)]
    recovery_time: f32,

    /// Mean Poisson dispersal distance
    #[arg(short = 'd', long, default_value_t = 1.0)]
    dispersal_rate: f64,

    /// Fire spread probability into forest cells
    #[arg(long, default_value_t = 0.035)]
    p_forest: f64,

    /// Fire spread probability into savanna cells
    #[arg(long, default_value_t = 0.3)]
    p_savanna: f64,

    /// Fertility gained by burning savanna
    #[arg(long, default_value_t = 0.2)]
    fire_impact: f32,

    /// Fertility recovered per step by unburned forest
    #[arg(long, default_value_t = 0.001)]
    recovery_rate: f32,

    /// Disable the fire-soil fertility feedback
    #[arg(long)]
    no_feedback: bool,

    /// Start with an intrinsic soil-type split instead of uniform fertility
    #[arg(long)]
    edaphic: bool,

    /// Savanna-half fertility when --edaphic is set
    #[arg(long, default_value_t = 5.0)]
    savanna_fertility: f32,

    /// RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Render the landscape every N steps (0 = final state only)
    #[arg(short = 'p', long, default_value_t = 0)]
    plot_interval: u32,
}

fn class_glyph(class: LandscapeClass) -> char {
    match class {
        LandscapeClass::Savanna => '.',
        LandscapeClass::Forest => '#',
        LandscapeClass::ColonisedSavanna => '+',
    }
}

fn render(land: &Landscape, step: u32) {
    println!("--- step {step} ---");
    for row in 0..land.height() {
        let line: String = (0..land.width())
            .map(|col| class_glyph(land.class_at(row, col).expect("coordinate in bounds")))
            .collect();
        println!("{line}");
    }
}

fn print_summary(land: &Landscape) {
    let cells = land.cell_count();
    let savanna = land.class_count(LandscapeClass::Savanna);
    let forest = land.class_count(LandscapeClass::Forest);
    let colonised = land.class_count(LandscapeClass::ColonisedSavanna);

    println!("\n=== Final landscape ===");
    println!(
        "savanna:   {savanna:6} cells ({:5.1}%)",
        100.0 * savanna as f64 / cells as f64
    );
    println!(
        "forest:    {forest:6} cells ({:5.1}%)",
        100.0 * forest as f64 / cells as f64
    );
    println!(
        "colonised: {colonised:6} cells ({:5.1}%)",
        100.0 * colonised as f64 / cells as f64
    );

    // Mean fertility per initial half, to show the feedback/edaphic contrast
    let boundary = land.width() / 2;
    let (mut left, mut right) = (0.0_f64, 0.0_f64);
    for row in 0..land.height() {
        for col in 0..land.width() {
            let f = f64::from(land.fertility_at(row, col).expect("coordinate in bounds"));
            if col < boundary {
                left += f;
            } else {
                right += f;
            }
        }
    }
    let half = (land.height() * boundary) as f64;
    println!("mean fertility, initial savanna half: {:.3}", left / half);
    println!(
        "mean fertility, initial forest half:  {:.3}",
        right / (cells as f64 - half)
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ModelConfig {
        height: args.height,
        width: args.width,
        n_steps: args.steps,
        recurrence_interval: args.interval,
        base_fire_recovery_time: args.recovery_time,
        dispersal_rate: args.dispersal_rate,
        fire_probability_forest: args.p_forest,
        fire_probability_savanna: args.p_savanna,
        fire_impact: args.fire_impact,
        recovery_rate: args.recovery_rate,
        fire_soil_feedback: !args.no_feedback,
        edaphic_boundary: args.edaphic,
        savanna_fertility: args.savanna_fertility,
        seed: args.seed,
    };

    let plot_interval = args.plot_interval;
    let outcome = match run_model_with_observer(config, |land, step| {
        if plot_interval > 0 && step % plot_interval == 0 {
            render(land, step);
        }
    }) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    render(&outcome.landscape, outcome.stats.steps);
    print_summary(&outcome.landscape);
    println!(
        "\n{} fire events, {} cells burned, {} colonised, {} matured over {} steps",
        outcome.stats.fire_events,
        outcome.stats.cells_burned,
        outcome.stats.cells_colonised,
        outcome.stats.cells_matured,
        outcome.stats.steps
    );
}
