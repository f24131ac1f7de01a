// src/core/registrar.rs

use crate::constants::{
    FRAMEWORK_POD_NAME, PLUGIN_DEPENDENCIES_FILENAME, PLUGIN_SEPARATOR, REGISTRANT_POD_NAME,
};
use crate::core::kv_parser;
use crate::core::paths;
use crate::core::settings::{self, SettingsError};
use crate::models::PodDependency;
use crate::system::env::EnvSource;
use crate::system::fs::FileSource;
use std::path::Path;

/// El mecanismo externo de declaración de dependencias: registra un pod con
/// nombre que apunta a un directorio local. Es el único efecto observable
/// del proceso de instalación.
pub trait PodRegistrar {
    fn register(&mut self, name: &str, path: &Path);
}

/// Un registrador que acumula las declaraciones en memoria, para emitir el
/// manifiesto después (y para los tests).
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub pods: Vec<PodDependency>,
}

impl PodRegistrar for RecordingRegistrar {
    fn register(&mut self, name: &str, path: &Path) {
        log::info!("Registrando pod '{}' -> {}", name, path.display());
        self.pods.push(PodDependency {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }
}

// --- ORQUESTACIÓN ---

/// Registra las dos declaraciones fijas: el framework del engine y el
/// registrador de plugins de la aplicación.
pub fn setup_ios_pods(
    fs: &impl FileSource,
    env: &impl EnvSource,
    app_dir: &Path,
    registrar: &mut impl PodRegistrar,
) -> Result<(), SettingsError> {
    let xcconfig = settings::generated_xcconfig_path(app_dir);
    let flutter_root = settings::resolve_flutter_root(fs, &xcconfig)?;
    let engine_dir = paths::engine_artifact_dir(&flutter_root, env);
    registrar.register(FRAMEWORK_POD_NAME, &engine_dir);

    let project_path = app_dir.join(".ios").join("Flutter");
    registrar.register(REGISTRANT_POD_NAME, &project_path.join(REGISTRANT_POD_NAME));
    Ok(())
}

/// Registra todos los pods iOS de una aplicación: la configuración fija más
/// un pod por cada entrada del archivo de dependencias de plugins, con la
/// ruta de la entrada unida a la raíz de la aplicación.
///
/// Sin archivo de plugins no hay pods de plugins; no es un error. En cambio,
/// unos ajustes de build vacíos sí abortan la instalación.
pub fn install_all_ios_pods(
    fs: &impl FileSource,
    env: &impl EnvSource,
    app_dir: &Path,
    registrar: &mut impl PodRegistrar,
) -> Result<(), SettingsError> {
    setup_ios_pods(fs, env, app_dir, registrar)?;

    let xcconfig = settings::generated_xcconfig_path(app_dir);
    settings::load_build_settings(fs, &xcconfig)?;

    let plugins_file = app_dir.join(PLUGIN_DEPENDENCIES_FILENAME);
    let plugin_pods = kv_parser::parse_kv_file(fs, &plugins_file, PLUGIN_SEPARATOR)?;

    // Orden estable para que el manifiesto resultante sea determinista.
    let mut entries: Vec<_> = plugin_pods.into_iter().collect();
    entries.sort();
    for (name, path_suffix) in entries {
        registrar.register(&name, &app_dir.join(path_suffix));
    }
    Ok(())
}
