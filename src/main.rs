use clap::Parser;
use colored::Colorize;
use design_patterns::logging::setup_logging;
use design_patterns::{DemoConfig, Pattern, PatternResult};
use std::path::PathBuf;

/// Run the design pattern vignettes
#[derive(Parser, Debug)]
#[command(name = "patterns", version, about, long_about = None)]
struct Cli {
    /// Patterns to run, e.g. `command` or `template-method` (default: all)
    patterns: Vec<Pattern>,

    /// TOML file overriding the demo inputs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available patterns and exit
    #[arg(short, long)]
    list: bool,

    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> PatternResult<()> {
    if cli.list {
        for pattern in Pattern::ALL {
            println!("{:<18} {}", pattern.name().bold(), pattern.summary());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let selected: Vec<Pattern> = if cli.patterns.is_empty() {
        Pattern::ALL.to_vec()
    } else {
        cli.patterns.clone()
    };

    for (i, pattern) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("=== {} ===", pattern.name()).green().bold());
        for line in pattern.run(&config)? {
            println!("{}", line);
        }
    }
    Ok(())
}
