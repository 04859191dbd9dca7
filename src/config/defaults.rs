//! Default configuration values

/// Manifest file name
pub const MANIFEST_FILE: &str = "fxbuild.toml";

/// Default main class launched when none is given
pub const DEFAULT_MAIN_CLASS: &str = "Main";

/// Default JavaFX SDK version
pub const DEFAULT_JAVAFX_VERSION: &str = "21.0.2";

/// Default JavaFX modules passed to --add-modules
pub const DEFAULT_JAVAFX_MODULES: &[&str] = &["javafx.controls", "javafx.fxml"];

/// Extension of compilable source files
pub const SOURCE_EXTENSION: &str = "java";

/// Extension of dependency archives
pub const ARCHIVE_EXTENSION: &str = "jar";

/// Files carried across an output directory reset
pub const PRESERVED_FILES: &[&str] = &["README.md"];

/// File name of the temporary SDK archive during installation
pub const SDK_ARCHIVE_NAME: &str = "javafx-sdk.zip";

/// Maximum number of download retry attempts
pub const MAX_DOWNLOAD_RETRIES: u32 = 3;
