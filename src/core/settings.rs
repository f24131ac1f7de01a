// src/core/settings.rs

use crate::constants::{FLUTTER_ROOT_KEY, GENERATED_XCCONFIG_FILENAME, XCCONFIG_SEPARATOR};
use crate::core::kv_parser::{self, ParseError};
use crate::models::SettingsMap;
use crate::system::fs::FileSource;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Error de parseo: {0}")]
    Parse(#[from] ParseError),
    #[error(
        "No se encontró la clave '{key}' en '{file}'. Asegúrate de que Flutter está configurado correctamente."
    )]
    RequiredKeyMissing { key: String, file: String },
    #[error(
        "El archivo '{file}' debe existir. Asegúrate de haber ejecutado 'flutter pub get' en la raíz del proyecto."
    )]
    RequiredFileMissing { file: String },
}

type SettingsResult<T> = Result<T, SettingsError>;

/// Ruta al `Generated.xcconfig` de una aplicación Flutter.
pub fn generated_xcconfig_path(app_dir: &Path) -> PathBuf {
    app_dir
        .join("ios")
        .join("Flutter")
        .join(GENERATED_XCCONFIG_FILENAME)
}

/// Resuelve la raíz del SDK de Flutter a partir de un archivo de ajustes de build.
/// La ausencia de la clave es un error fatal de configuración que la nombra.
pub fn resolve_flutter_root(fs: &impl FileSource, xcconfig: &Path) -> SettingsResult<PathBuf> {
    let settings = kv_parser::parse_kv_file(fs, xcconfig, XCCONFIG_SEPARATOR)?;
    match settings.get(FLUTTER_ROOT_KEY) {
        Some(root) => Ok(PathBuf::from(root.trim())),
        None => Err(SettingsError::RequiredKeyMissing {
            key: FLUTTER_ROOT_KEY.to_string(),
            file: xcconfig.display().to_string(),
        }),
    }
}

/// Carga los ajustes de build y exige que no estén vacíos.
/// Aquí "sin archivo" NO se tolera: el paso previo del build debe haberlo generado.
pub fn load_build_settings(fs: &impl FileSource, xcconfig: &Path) -> SettingsResult<SettingsMap> {
    let settings = kv_parser::parse_kv_file(fs, xcconfig, XCCONFIG_SEPARATOR)?;
    if settings.is_empty() {
        return Err(SettingsError::RequiredFileMissing {
            file: xcconfig.display().to_string(),
        });
    }
    Ok(settings)
}
