// src/core/paths.rs

use crate::constants::{ENGINE_ARTIFACT_SEGMENTS, FLUTTER_ENGINE_ENV};
use crate::system::env::EnvSource;
use std::path::{Path, PathBuf};

/// Determina el directorio de artefactos del engine iOS.
///
/// Si la variable de entorno `FLUTTER_ENGINE` está definida, su valor se usa
/// tal cual como directorio (engine local); si no, se une la raíz del SDK con
/// la sub-ruta fija de artefactos.
pub fn engine_artifact_dir(flutter_root: &Path, env: &impl EnvSource) -> PathBuf {
    if let Some(local_engine) = env.var(FLUTTER_ENGINE_ENV) {
        log::info!(
            "Usando engine local de {}: {}",
            FLUTTER_ENGINE_ENV,
            local_engine
        );
        return PathBuf::from(local_engine);
    }
    ENGINE_ARTIFACT_SEGMENTS
        .iter()
        .fold(flutter_root.to_path_buf(), |dir, segment| dir.join(segment))
}
