//! SDK distribution URLs

use crate::infra::platform::Platform;

/// OpenJFX SDK download base URL (Gluon mirror)
pub const JAVAFX_DOWNLOAD: &str = "https://download2.gluonhq.com/openjfx";

/// Build the download URL for a platform-specific JavaFX SDK archive
pub fn javafx_sdk_url(base: &str, version: &str, platform: &Platform) -> String {
    format!("{base}/{version}/openjfx-{version}_{platform}_bin-sdk.zip")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::platform::{Arch, Os};

    #[test]
    fn test_sdk_url_shape() {
        let platform = Platform {
            os: Os::Linux,
            arch: Arch::X64,
        };
        let url = javafx_sdk_url(JAVAFX_DOWNLOAD, "21.0.2", &platform);
        assert_eq!(
            url,
            "https://download2.gluonhq.com/openjfx/21.0.2/openjfx-21.0.2_linux-x64_bin-sdk.zip"
        );
    }
}
