//! Summarizes per-harmonic fitness statistics from the simulation results
//! CSV and renders the distribution as a box plot.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use armonico::config::AnalysisConfig;
use armonico::error::AnalysisError;
use armonico::harmonics::{load_trials, summarize};
use armonico::plot::render_fitness_boxplot;
use armonico::report::summary_table;

#[derive(Parser, Debug)]
#[command(author, version, about = "Análisis estadístico por armónico")]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "analysis.toml")]
    config: String,

    /// Simulation results CSV (overrides config)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Chart output PNG (overrides config)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let cfg = AnalysisConfig::load_or_default(&args.config);
    let results_path = args
        .input
        .unwrap_or_else(|| PathBuf::from(&cfg.inputs.results_path));
    let out_path = args.out.unwrap_or_else(|| PathBuf::from(&cfg.chart.out_path));

    let records = match load_trials(&results_path) {
        Ok(records) => records,
        Err(AnalysisError::MissingFile { path }) => {
            println!("Error: No se pudo encontrar '{}'.", path.display());
            println!("Asegúrate de haber ejecutado el modo 'harmonic' primero.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("--- ANÁLISIS ESTADÍSTICO POR ARMÓNICO ---");
    let summary = summarize(&records);
    print!("{}", summary_table(&summary));

    println!();
    println!("--- VISUALIZANDO LA DISTRIBUCIÓN DEL FITNESS ---");
    if records.is_empty() {
        warn!("sin registros de prueba; se omite el gráfico");
        return Ok(());
    }
    render_fitness_boxplot(&out_path, &records, cfg.chart.width, cfg.chart.height)?;
    println!("Gráfico guardado en {}", out_path.display());
    Ok(())
}
