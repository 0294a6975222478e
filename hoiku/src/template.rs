//! Excel reservation template export.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Message returned when export is attempted on a phone or tablet.
pub const UNSUPPORTED_PLATFORM_MESSAGE: &str = "Excel export is only available on desktop and web";

/// Name of the template asset inside the data directory.
pub const TEMPLATE_ASSET_NAME: &str = "reservation_template.xlsx";

/// The reservation template shipped with the crate: one sheet, 予約一覧,
/// with a frozen header row matching the `list` export columns.
pub const BUNDLED_TEMPLATE: &[u8] = include_bytes!("../assets/reservation_template.xlsx");

const XLSX_EXTENSION: &str = "xlsx";

/// Writes [`BUNDLED_TEMPLATE`] to `data_dir/`[`TEMPLATE_ASSET_NAME`],
/// creating the directory if needed.
///
/// An existing asset is left alone so a customised template survives
/// re-initialisation. Returns the path when a file was written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or file cannot be written.
pub fn install_bundled_template(data_dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let data_dir = data_dir.as_ref();
    let path = data_dir.join(TEMPLATE_ASSET_NAME);
    if path.exists() {
        return Ok(None);
    }

    fs::create_dir_all(data_dir)?;
    fs::write(&path, BUNDLED_TEMPLATE)?;
    log::info!("installed template asset at {}", path.display());
    Ok(Some(path))
}

/// Where the exporter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Desktop or web; file export works.
    Desktop,
    /// Android or iOS.
    Mobile,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Copies the template asset to a user-chosen location.
///
/// # Examples
///
/// ```no_run
/// use hoiku::template::TemplateExporter;
///
/// let exporter = TemplateExporter::new("/opt/hoiku/reservation_template.xlsx");
/// let written = exporter.export("/tmp", "予約一覧").unwrap();
/// assert!(written.ends_with("予約一覧.xlsx"));
/// ```
#[derive(Debug, Clone)]
pub struct TemplateExporter {
    asset_path: PathBuf,
    platform: Platform,
}

impl TemplateExporter {
    /// Creates an exporter for the asset at `asset_path`.
    #[must_use]
    pub fn new(asset_path: impl AsRef<Path>) -> Self {
        Self {
            asset_path: asset_path.as_ref().to_path_buf(),
            platform: Platform::current(),
        }
    }

    /// Overrides the detected platform.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Returns the asset location.
    #[must_use]
    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }

    /// Copies the asset to `dest_dir/file_name`, appending `.xlsx` when the
    /// name lacks it. Returns the written path.
    ///
    /// An existing file at the destination is overwritten.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPlatform`] on mobile targets
    /// - [`Error::Validation`] for an empty or path-like file name
    /// - [`Error::NotFound`] if the asset or `dest_dir` is missing
    /// - [`Error::Io`] if the copy fails
    pub fn export(&self, dest_dir: impl AsRef<Path>, file_name: &str) -> Result<PathBuf> {
        if self.platform == Platform::Mobile {
            return Err(Error::UnsupportedPlatform {
                message: UNSUPPORTED_PLATFORM_MESSAGE.to_string(),
            });
        }

        crate::config::ConfigValidator::validate_file_name(file_name)?;

        if !self.asset_path.is_file() {
            return Err(Error::NotFound {
                resource: format!("template asset {}", self.asset_path.display()),
            });
        }

        let dest_dir = dest_dir.as_ref();
        if !dest_dir.is_dir() {
            return Err(Error::NotFound {
                resource: format!("directory {}", dest_dir.display()),
            });
        }

        let destination = dest_dir.join(with_xlsx_extension(file_name.trim()));
        fs::copy(&self.asset_path, &destination)?;
        log::info!("exported template to {}", destination.display());
        Ok(destination)
    }
}

fn with_xlsx_extension(file_name: &str) -> String {
    let has_extension = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION));
    if has_extension {
        file_name.to_string()
    } else {
        format!("{file_name}.{XLSX_EXTENSION}")
    }
}
