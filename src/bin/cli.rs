//! Solow Dashboard CLI
//!
//! Command-line companion to the dashboard server:
//! - Print the four chart series for a parameter set
//! - List the slider controls
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use solow_dashboard::chart::Figure;
use solow_dashboard::config::{generate_default_config, Config};
use solow_dashboard::dashboard::{Controls, ViewController};
use solow_dashboard::model::SolowParams;

#[derive(Parser)]
#[command(name = "solow-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Solow growth model curves from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: the server's search path)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print savings and depreciation curves against the benchmark
    Curves {
        /// Savings rate
        #[arg(long, default_value_t = 0.3)]
        s: f64,
        /// Depreciation rate
        #[arg(long, default_value_t = 0.1)]
        delta: f64,
        /// Population growth rate
        #[arg(long, default_value_t = 0.05)]
        n: f64,
        /// Output elasticity of capital
        #[arg(long, default_value_t = 0.3)]
        alpha: f64,
        /// Productivity
        #[arg(long, default_value_t = 2.0)]
        z: f64,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the dashboard sliders
    Controls,

    /// Generate default config file
    #[command(name = "config")]
    GenerateConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Curves {
            s,
            delta,
            n,
            alpha,
            z,
            format,
        } => {
            let params = SolowParams::new(s, delta, n, alpha, z);
            if let Err(e) = Controls::check(&params) {
                eprintln!("Warning: {} (the dashboard sliders cannot produce this)", e);
            }

            let config = Config::resolve(cli.config.as_deref())?;

            let mut controller = ViewController::new(config.benchmark);
            let figure = controller.apply(params);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&figure)?),
                OutputFormat::Csv => print!("{}", figure.to_csv()?),
                OutputFormat::Table => print_table(&figure),
            }
        }

        Commands::Controls => {
            println!(
                "{:<14} {:<24} {:>6} {:>6} {:>6} {:>8}",
                "ID", "LABEL", "MIN", "MAX", "STEP", "DEFAULT"
            );
            println!("{}", "-".repeat(69));
            for slider in Controls::sliders() {
                println!(
                    "{:<14} {:<24} {:>6} {:>6} {:>6} {:>8}",
                    slider.id, slider.label, slider.min, slider.max, slider.step, slider.default
                );
            }
        }

        Commands::GenerateConfig { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_table(figure: &Figure) {
    let Some(first) = figure.data.first() else {
        println!("No data");
        return;
    };

    print!("{:>6}", figure.layout.xaxis.title.text);
    for trace in &figure.data {
        print!("  {:>22}", trace.name);
    }
    println!();
    println!("{}", "-".repeat(6 + figure.data.len() * 24));

    for (i, k) in first.x.iter().enumerate() {
        print!("{:>6}", k);
        for trace in &figure.data {
            let value = trace.y.get(i).copied().unwrap_or(f64::NAN);
            print!("  {:>22.6}", value);
        }
        println!();
    }
}
