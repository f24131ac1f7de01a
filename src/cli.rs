// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Podwire: conecta los ajustes de build de Flutter con declaraciones de pods.", long_about = None)]
pub struct Cli {
    /// Raíz de la aplicación Flutter (por defecto, el directorio actual).
    #[arg(default_value = ".")]
    pub app_dir: PathBuf,

    /// Archivo donde escribir el manifiesto de pods (por defecto, stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
