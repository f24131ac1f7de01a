// src/bin/podwire.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use podwire::cli::Cli;
use podwire::core::registrar::{self, RecordingRegistrar};
use podwire::models::PodManifest;
use podwire::system::env::ProcessEnv;
use podwire::system::fs::DiskSource;

/// El punto de entrada principal de la aplicación.
fn main() {
    // Inicializar el logger. Para ver los logs, ejecuta con `RUST_LOG=debug podwire ...`
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        // Usamos `eprintln` para escribir en stderr, que es la práctica estándar para errores.
        // El formato `{:?}` con `anyhow` proporciona la cadena de causas completa.
        eprintln!("\nError: {:?}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut registrar = RecordingRegistrar::default();
    registrar::install_all_ios_pods(&DiskSource, &ProcessEnv, &cli.app_dir, &mut registrar)
        .context("No se pudieron registrar las dependencias de la aplicación.")?;

    let manifest = PodManifest {
        pods: registrar.pods,
    };
    let toml_string =
        toml::to_string_pretty(&manifest).context("No se pudo serializar el manifiesto de pods.")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &toml_string).with_context(|| {
                format!("No se pudo escribir el manifiesto en '{}'.", path.display())
            })?;
            println!("Manifiesto escrito en '{}'.", path.display());
        }
        None => print!("{}", toml_string),
    }

    Ok(())
}
