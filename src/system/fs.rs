// src/system/fs.rs

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Acceso de lectura al sistema de archivos, inyectado por el llamador.
/// Permite sustituir un proveedor en memoria en los tests, sin tocar el disco.
pub trait FileSource {
    /// Lee el archivo completo como texto. Devuelve `Ok(None)` si no existe.
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>>;
}

/// La implementación real sobre `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSource;

impl FileSource for DiskSource {
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Un proveedor en memoria: un mapeo ruta → contenido.
impl FileSource for HashMap<PathBuf, String> {
    fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.get(path).cloned())
    }
}
