// src/models.rs

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

// --- MODELO DE AJUSTES (Resultado del parser KV) ---

/// El mapeo plano clave → valor que produce el parser KV.
/// Se crea nuevo en cada parseo y pertenece en exclusiva al llamador;
/// no hay estado compartido ni persistido entre llamadas.
pub type SettingsMap = HashMap<String, String>;

// --- MODELOS DE DECLARACIONES (Lo que se emite al mecanismo externo) ---

/// Una declaración de dependencia: un pod con nombre que apunta a un
/// directorio local que el mecanismo de build resolverá.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PodDependency {
    pub name: String,
    pub path: PathBuf,
}

/// El contenedor de declaraciones que el binario serializa a TOML.
#[derive(Serialize, Debug, Clone, Default)]
pub struct PodManifest {
    pub pods: Vec<PodDependency>,
}
