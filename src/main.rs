//! Main CLI application for the terminal Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_term::{
    config::{CliOverrides, InitialState, Settings},
    game_of_life::{create_example_patterns, load_grid_from_file, read_grid_from_input, Grid, LifeRules},
    terminal::{print_start_menu, read_menu_choice},
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_term")]
#[command(about = "Terminal Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file to start from (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Type the starting field by hand (overrides config)
        #[arg(long)]
        direct_input: bool,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Initial inter-generation delay in milliseconds (overrides config)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Directory holding the bundled pattern files
        #[arg(long, default_value = "patterns")]
        patterns_dir: PathBuf,
    },

    /// Create the default configuration and the bundled pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Evolve a pattern a few generations and print each one to stdout
    Preview {
        /// Pattern file to preview
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to show
        #[arg(short, long, default_value_t = 5)]
        generations: usize,

        /// Grid rows
        #[arg(long, default_value_t = 23)]
        rows: usize,

        /// Grid columns
        #[arg(long, default_value_t = 78)]
        cols: usize,

        /// Show row and column coordinates
        #[arg(long)]
        coords: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            direct_input,
            rows,
            cols,
            delay,
            patterns_dir,
        } => run_command(config, pattern, direct_input, rows, cols, delay, patterns_dir),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Preview {
            pattern,
            generations,
            rows,
            cols,
            coords,
        } => preview_command(pattern, generations, rows, cols, coords),
    }
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    direct_input: bool,
    rows: Option<usize>,
    cols: Option<usize>,
    delay: Option<u64>,
    patterns_dir: PathBuf,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        rows,
        cols,
        delay_ms: delay,
        pattern,
        direct_input,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    let initial = resolve_initial_grid(&settings, &patterns_dir)?;

    let generations = game_of_life_term::run_simulation(&settings, initial)?;

    println!(
        "{}",
        ColorOutput::info(&format!("Simulation ended after {} generations", generations))
    );
    Ok(())
}

/// Build the starting grid from the configured initializer
fn resolve_initial_grid(settings: &Settings, patterns_dir: &PathBuf) -> Result<Grid> {
    let rows = settings.simulation.rows;
    let cols = settings.simulation.cols;

    let source = match &settings.input.source {
        InitialState::Menu => {
            if !patterns_dir.exists() {
                create_example_patterns(patterns_dir)
                    .context("Failed to create bundled pattern files")?;
            }
            let mut stdout = std::io::stdout();
            print_start_menu(&mut stdout)?;
            let stdin = std::io::stdin();
            read_menu_choice(&mut stdin.lock(), patterns_dir)?
        }
        other => other.clone(),
    };

    match source {
        InitialState::Pattern { file } => load_grid_from_file(&file, rows, cols)
            .with_context(|| format!("Failed to load pattern from {}", file.display())),
        InitialState::DirectInput => {
            println!("Enter {} values (0 or 1), row by row:", rows * cols);
            let stdin = std::io::stdin();
            read_grid_from_input(stdin.lock(), rows, cols)
        }
        InitialState::Menu => unreachable!("menu choice resolved above"),
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    // Default configuration
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.source = InitialState::Menu;
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Bundled starting patterns
    create_example_patterns(&patterns_dir)
        .context("Failed to create bundled pattern files")?;
    println!("Created starting patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {} if you want a different grid size", config_path.display());
    println!("2. Run: cargo run -- run");

    Ok(())
}

fn preview_command(
    pattern: PathBuf,
    generations: usize,
    rows: usize,
    cols: usize,
    coords: bool,
) -> Result<()> {
    let mut grid = load_grid_from_file(&pattern, rows, cols)
        .with_context(|| format!("Failed to load pattern from {}", pattern.display()))?;

    for generation in 0..=generations {
        println!("Generation {} (living: {}):", generation, grid.living_count());
        if coords {
            println!("{}", GridFormatter::format_with_coords(&grid));
        } else {
            println!("{}", GridFormatter::format_compact(&grid));
        }
        if generation < generations {
            grid = LifeRules::evolve(&grid);
        }
    }

    Ok(())
}
