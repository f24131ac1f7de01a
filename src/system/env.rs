// src/system/env.rs

use std::collections::HashMap;
use std::env;

/// Consulta de variables de entorno, inyectada por el llamador en lugar de
/// leer el entorno ambiente del proceso directamente.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// La implementación real sobre el entorno del proceso.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Un entorno en memoria: un mapeo variable → valor.
impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
