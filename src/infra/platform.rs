//! Host platform detection
//!
//! Maps raw OS and architecture identifiers onto the small set of platform
//! tags the JavaFX SDK distribution is published for.

use std::fmt;

use crate::error::PlatformError;

/// Supported operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Mac,
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Linux => write!(f, "linux"),
            Os::Mac => write!(f, "mac"),
            Os::Windows => write!(f, "windows"),
        }
    }
}

/// Supported CPU architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X64,
    Aarch64,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X64 => write!(f, "x64"),
            Arch::Aarch64 => write!(f, "aarch64"),
        }
    }
}

/// Host platform tag, formatted the way SDK archive names spell it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the current host platform
    pub fn detect() -> Result<Self, PlatformError> {
        Self::from_raw(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map raw identifiers to a supported platform
    pub fn from_raw(os: &str, arch: &str) -> Result<Self, PlatformError> {
        let os = match os {
            "linux" => Os::Linux,
            "macos" | "darwin" => Os::Mac,
            "windows" => Os::Windows,
            other => {
                return Err(PlatformError::UnsupportedOs {
                    os: other.to_string(),
                })
            }
        };

        let arch = match arch {
            "x86_64" | "amd64" => Arch::X64,
            "aarch64" | "arm64" => Arch::Aarch64,
            other => {
                return Err(PlatformError::UnsupportedArch {
                    arch: other.to_string(),
                })
            }
        };

        Ok(Self { os, arch })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
