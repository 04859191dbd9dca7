//! Java toolchain management
//!
//! Locates the javac and java binaries and builds their invocations.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variable overriding the javac binary
pub const ENV_JAVAC: &str = "FXBUILD_JAVAC";

/// Environment variable overriding the java binary
pub const ENV_JAVA: &str = "FXBUILD_JAVA";

/// Compiler invocation inputs
#[derive(Debug)]
pub struct CompileSpec<'a> {
    /// Destination directory for compiled classes
    pub dest: &'a Path,
    /// Classpath string
    pub classpath: &'a str,
    /// JavaFX SDK module path, when the SDK is installed
    pub module_path: Option<&'a Path>,
    /// Modules passed to --add-modules
    pub modules: &'a [String],
    /// Source files, in deterministic order
    pub sources: &'a [PathBuf],
}

/// Runtime invocation inputs
#[derive(Debug)]
pub struct LaunchSpec<'a> {
    /// Classpath string
    pub classpath: &'a str,
    /// JavaFX SDK module path
    pub module_path: &'a Path,
    /// Modules passed to --add-modules
    pub modules: &'a [String],
    /// Class whose main method is invoked
    pub main_class: &'a str,
}

/// Java toolchain wrapper
#[derive(Debug)]
pub struct JavaToolchain {
    /// Path to the javac binary
    javac_path: PathBuf,
    /// Path to the java binary
    java_path: PathBuf,
}

impl JavaToolchain {
    /// Create a toolchain wrapper from explicit binary paths
    pub fn new(javac_path: PathBuf, java_path: PathBuf) -> Self {
        Self {
            javac_path,
            java_path,
        }
    }

    /// Locate the toolchain binaries.
    ///
    /// Environment overrides win, then a PATH lookup, then the bare command
    /// names (letting the OS report the absence at invocation time).
    pub fn detect() -> Self {
        Self::new(
            resolve_binary(ENV_JAVAC, "javac"),
            resolve_binary(ENV_JAVA, "java"),
        )
    }

    /// Get the path to the javac binary
    pub fn javac_path(&self) -> &PathBuf {
        &self.javac_path
    }

    /// Get the path to the java binary
    pub fn java_path(&self) -> &PathBuf {
        &self.java_path
    }

    /// Invoke the compiler, blocking until it exits, with output captured
    pub fn compile(&self, spec: &CompileSpec<'_>) -> io::Result<Output> {
        let mut cmd = Command::new(&self.javac_path);
        cmd.arg("-d").arg(spec.dest);
        cmd.arg("-classpath").arg(spec.classpath);

        if let Some(module_path) = spec.module_path {
            cmd.arg("--module-path").arg(module_path);
            cmd.arg("--add-modules").arg(spec.modules.join(","));
        }

        cmd.args(spec.sources);

        tracing::debug!("Running {cmd:?}");
        cmd.output()
    }

    /// Invoke the runtime, blocking until the application exits, with output captured
    pub fn run(&self, spec: &LaunchSpec<'_>) -> io::Result<Output> {
        let mut cmd = Command::new(&self.java_path);
        cmd.arg("--module-path").arg(spec.module_path);
        cmd.arg("--add-modules").arg(spec.modules.join(","));
        cmd.arg("-cp").arg(spec.classpath);
        cmd.arg(spec.main_class);

        tracing::debug!("Running {cmd:?}");
        cmd.output()
    }
}

impl Default for JavaToolchain {
    fn default() -> Self {
        Self::detect()
    }
}

fn resolve_binary(env_var: &str, name: &str) -> PathBuf {
    if let Some(path) = std::env::var_os(env_var) {
        return PathBuf::from(path);
    }
    which::which(name).unwrap_or_else(|_| PathBuf::from(name))
}
