// src/constants.rs

/// El archivo de ajustes de build que genera `flutter pub get` (dentro de ios/Flutter/).
pub const GENERATED_XCCONFIG_FILENAME: &str = "Generated.xcconfig";

/// El archivo de dependencias de plugins, en la raíz de la aplicación.
pub const PLUGIN_DEPENDENCIES_FILENAME: &str = ".flutter-plugins-dependencies";

/// La clave obligatoria que apunta a la raíz del SDK de Flutter.
pub const FLUTTER_ROOT_KEY: &str = "FLUTTER_ROOT";

/// La variable de entorno que sobrescribe el directorio de artefactos del engine.
pub const FLUTTER_ENGINE_ENV: &str = "FLUTTER_ENGINE";

/// El nombre del pod del framework del engine.
pub const FRAMEWORK_POD_NAME: &str = "Flutter";

/// El nombre del pod del registrador de plugins.
pub const REGISTRANT_POD_NAME: &str = "FlutterPluginRegistrant";

/// Segmentos de ruta desde la raíz del SDK hasta los artefactos del engine iOS.
pub const ENGINE_ARTIFACT_SEGMENTS: [&str; 5] = ["bin", "cache", "artifacts", "engine", "ios"];

/// El separador de los archivos xcconfig.
pub const XCCONFIG_SEPARATOR: &str = "=";

/// El separador de los archivos de dependencias de plugins.
pub const PLUGIN_SEPARATOR: &str = ":";
