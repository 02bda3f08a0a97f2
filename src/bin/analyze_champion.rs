//! Compares the champion genome against our universe's constants and
//! prints the percentage-difference table.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use armonico::config::AnalysisConfig;
use armonico::error::AnalysisError;
use armonico::genome::{compare_sets, load_constant_set};
use armonico::report::comparison_table;

#[derive(Parser, Debug)]
#[command(author, version, about = "Análisis comparativo del genoma cósmico")]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "analysis.toml")]
    config: String,

    /// Champion genome JSON (overrides config)
    #[arg(long)]
    champion: Option<PathBuf>,

    /// Reference universe JSON (overrides config)
    #[arg(long)]
    reference: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let cfg = AnalysisConfig::load_or_default(&args.config);
    let champion_path = args
        .champion
        .unwrap_or_else(|| PathBuf::from(&cfg.inputs.champion_path));
    let reference_path = args
        .reference
        .unwrap_or_else(|| PathBuf::from(&cfg.inputs.reference_path));

    let loaded = load_constant_set(&champion_path).and_then(|champion| {
        load_constant_set(&reference_path).map(|reference| (champion, reference))
    });
    let (champion, reference) = match loaded {
        Ok(pair) => pair,
        Err(AnalysisError::MissingFile { path }) => {
            println!("Error: No se pudo encontrar el archivo {}.", path.display());
            println!(
                "Asegúrate de tener '{}' y '{}' en la raíz del proyecto.",
                champion_path.display(),
                reference_path.display()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let rows = compare_sets(&champion, &reference);

    println!("--- ANÁLISIS COMPARATIVO DEL GENOMA CÓSMICO ---");
    print!("{}", comparison_table(&rows));

    println!();
    println!("--- CONCLUSIONES PRELIMINARES ---");
    println!("Observa la increíble similitud en 'alpha_s' y la jerarquía de masas de los quarks.");
    println!(
        "Sin embargo, hay diferencias drásticas en otras constantes, indicando una 'solución' alternativa y viable."
    );
    Ok(())
}
