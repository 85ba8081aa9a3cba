//! Main CLI application for the Game of Life stepper

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use life_stepper::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_grids, find_pattern, load_grid_from_file, Grid, PATTERNS, SAMPLE,
    },
    simulation::Simulation,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "life_stepper")]
#[command(about = "Conway's Game of Life stepper")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the starting board comes from
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
struct BoardArgs {
    /// Board file
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Built-in board: sample, block, blinker, beacon or glider
    #[arg(short, long)]
    pattern: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        // Board file or pattern (overrides config)
        #[command(flatten)]
        source: BoardArgs,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the single generation that follows a board
    Step {
        // The sample board when neither is given
        #[command(flatten)]
        source: BoardArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "list")]
        format: OutputFormat,
    },

    /// List the status of every cell on a board
    Describe {
        // The sample board when neither is given
        #[command(flatten)]
        source: BoardArgs,

        /// Also show neighbor counts and the rule outcome for each cell
        #[arg(long)]
        transitions: bool,
    },

    /// Create example configuration and board files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            source,
            generations,
            format,
            verbose,
        } => run_command(config, source, generations, format, verbose),
        Commands::Step { source, format } => step_command(source, format),
        Commands::Describe {
            source,
            transitions,
        } => describe_command(source, transitions),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

/// Resolve a built-in board by name
fn named_board(name: &str) -> Result<Grid> {
    let pattern = find_pattern(name).with_context(|| {
        format!(
            "Unknown pattern '{}'; expected one of: {}",
            name,
            PATTERNS.iter().map(|p| p.name).join(", ")
        )
    })?;
    pattern
        .to_grid()
        .with_context(|| format!("Pattern {} does not fit its board", pattern.name))
}

/// The board named on the command line, if any
fn board_from_args(source: &BoardArgs) -> Result<Option<Grid>> {
    match (&source.board, &source.pattern) {
        (Some(path), _) => load_grid_from_file(path).map(Some),
        (None, Some(name)) => named_board(name).map(Some),
        (None, None) => Ok(None),
    }
}

fn board_or_sample(source: &BoardArgs) -> Result<Grid> {
    match board_from_args(source)? {
        Some(grid) => Ok(grid),
        None => named_board(SAMPLE.name),
    }
}

fn run_command(
    config_path: PathBuf,
    source: BoardArgs,
    generations: Option<usize>,
    format: Option<OutputFormat>,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        generations,
        board_file: source.board.clone(),
        format,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Generations: {}", settings.simulation.generations);
        match (&source.pattern, &settings.input.board_file) {
            (Some(name), _) => println!("  Board: built-in {} pattern", name),
            (None, Some(path)) => println!("  Board file: {}", path.display()),
            (None, None) => println!("  Board: built-in {} pattern", SAMPLE.name),
        }
        println!("  Format: {:?}", settings.output.format);
        println!();
    }

    let initial = match (&source.pattern, &settings.input.board_file) {
        (Some(name), _) => named_board(name)?,
        (None, Some(path)) => load_grid_from_file(path)?,
        (None, None) => named_board(SAMPLE.name)?,
    };
    let format = settings.output.format;

    if settings.output.show_initial {
        println!("Original board is:");
        println!("{}", GridFormatter::format_grid(&initial, format)?.trim_end());
    }

    let mut simulation = Simulation::new(initial);
    for (i, grid) in simulation
        .by_ref()
        .take(settings.simulation.generations)
        .enumerate()
    {
        if verbose {
            println!("{}", ColorOutput::info(&GridFormatter::format_summary(i + 1, &grid)));
        }
        println!("{}", GridFormatter::format_grid(&grid, format)?.trim_end());
    }

    if verbose {
        println!(
            "Final: {}",
            GridFormatter::format_summary(simulation.generation(), simulation.current())
        );
    }

    println!("{}", ColorOutput::success("End of simulation"));
    Ok(())
}

fn step_command(source: BoardArgs, format: OutputFormat) -> Result<()> {
    let grid = board_or_sample(&source)?;
    let next = life_stepper::next_generation(&grid);
    println!("{}", GridFormatter::format_grid(&next, format)?.trim_end());
    Ok(())
}

fn describe_command(source: BoardArgs, transitions: bool) -> Result<()> {
    let grid = board_or_sample(&source)?;

    println!("{}", ColorOutput::info(&format!("Board ({}x{}):", grid.size(), grid.size())));
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    if transitions {
        print!("{}", GridFormatter::format_transitions(&grid));
    } else {
        print!("{}", GridFormatter::format_status(&grid));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let boards_dir = directory.join("boards");

    for dir in [&config_dir, &boards_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    write_config(&config_path, &Settings::default(), force)?;

    create_example_grids(&boards_dir).context("Failed to create example boards")?;
    println!("Created example boards in: {}", boards_dir.display());

    // A short text-mode run of the blinker
    let mut blinker_settings = Settings::default();
    blinker_settings.simulation.generations = 4;
    blinker_settings.input.board_file = Some(PathBuf::from("boards/blinker.txt"));
    blinker_settings.output.format = OutputFormat::Text;
    write_config(&config_dir.join("blinker.yaml"), &blinker_settings, force)?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your boards to {}", boards_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn write_config(path: &PathBuf, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }
    settings
        .to_file(path)
        .with_context(|| format!("Failed to create configuration {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}
