// src/core/kv_parser.rs

use crate::models::SettingsMap;
use crate::system::fs::FileSource;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Error de Ficheros: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "Formato de línea inválido en '{file}': {line}. El formato esperado es 'clave{separator}valor'."
    )]
    InvalidFormat {
        file: String,
        line: String,
        separator: String,
    },
}

type ParseResult<T> = Result<T, ParseError>;

/// Parsea un archivo KV línea a línea en un `SettingsMap`.
///
/// Si el archivo no existe, devuelve un mapeo vacío (NO es un error): los
/// llamadores que toleran "sin archivo" lo tratan como "sin ajustes todavía".
///
/// Cada línea se recorta y después se descarta, en este orden, si es un
/// comentario (`//`), si está vacía o si no contiene el separador. Las líneas
/// restantes se dividen en la PRIMERA aparición del separador, de modo que el
/// valor puede contener el separador; la clave no puede. Si una clave se
/// repite, gana la última aparición.
pub fn parse_kv_file(
    fs: &impl FileSource,
    path: &Path,
    separator: &str,
) -> ParseResult<SettingsMap> {
    debug_assert!(!separator.is_empty(), "el separador no puede estar vacío");

    let Some(content) = fs.read_to_string(path)? else {
        log::debug!(
            "El archivo '{}' no existe. Devolviendo ajustes vacíos.",
            path.display()
        );
        return Ok(SettingsMap::new());
    };

    let mut result = SettingsMap::new();
    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.starts_with("//") || line.is_empty() || !line.contains(separator) {
            continue;
        }
        // El filtro anterior garantiza que el separador está presente, así que
        // esta división siempre debería producir exactamente dos partes.
        match line.split_once(separator) {
            Some((key, value)) => {
                result.insert(key.to_string(), value.to_string());
            }
            None => {
                return Err(ParseError::InvalidFormat {
                    file: path.display().to_string(),
                    line: line.to_string(),
                    separator: separator.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Parseadas {} entradas de '{}'.",
        result.len(),
        path.display()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn source(path: &str, content: &str) -> HashMap<PathBuf, String> {
        let mut files = HashMap::new();
        files.insert(PathBuf::from(path), content.to_string());
        files
    }

    #[test]
    fn missing_file_yields_empty_map() {
        let files: HashMap<PathBuf, String> = HashMap::new();
        let result = parse_kv_file(&files, Path::new("no/existe.xcconfig"), "=").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_contribute_nothing() {
        let files = source("a.xcconfig", "// comentario\n\n   \nA=1\n// B=2\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("A").map(String::as_str), Some("1"));
    }

    #[test]
    fn lines_without_separator_are_ignored() {
        let files = source("a.xcconfig", "esto no es una entrada\nA=1\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn splits_at_first_separator_only() {
        let files = source("a.xcconfig", "K=V1=V2\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(result.get("K").map(String::as_str), Some("V1=V2"));
    }

    #[test]
    fn duplicate_key_keeps_last_value() {
        let files = source("a.xcconfig", "K=primero\nK=segundo\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(result.get("K").map(String::as_str), Some("segundo"));
    }

    #[test]
    fn lines_are_trimmed_before_splitting() {
        let files = source("a.xcconfig", "  FLUTTER_ROOT=/opt/flutter   \n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(
            result.get("FLUTTER_ROOT").map(String::as_str),
            Some("/opt/flutter")
        );
    }

    #[test]
    fn comment_only_file_yields_empty_map() {
        let files = source("a.xcconfig", "// comentario\n\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn colon_separator_is_supported() {
        let files = source("deps", "my_plugin:.pub-cache/my_plugin\n");
        let result = parse_kv_file(&files, Path::new("deps"), ":").unwrap();
        assert_eq!(
            result.get("my_plugin").map(String::as_str),
            Some(".pub-cache/my_plugin")
        );
    }

    #[test]
    fn separator_at_line_edges_still_splits_in_two() {
        // `clave=` y `=valor` producen una parte vacía, no un error.
        let files = source("a.xcconfig", "VACIO=\n=anonimo\n");
        let result = parse_kv_file(&files, Path::new("a.xcconfig"), "=").unwrap();
        assert_eq!(result.get("VACIO").map(String::as_str), Some(""));
        assert_eq!(result.get("").map(String::as_str), Some("anonimo"));
    }

    #[test]
    fn round_trip_of_distinct_keys() {
        let mut expected = SettingsMap::new();
        for i in 0..10 {
            expected.insert(format!("CLAVE_{i}"), format!("valor {i}"));
        }
        let rendered: String = expected
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        let files = source("gen.xcconfig", &rendered);
        let result = parse_kv_file(&files, Path::new("gen.xcconfig"), "=").unwrap();
        assert_eq!(result, expected);
    }
}
