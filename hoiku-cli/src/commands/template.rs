//! `template`: copy the Excel reservation template out of the data directory.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use clap::Args;
use hoiku::template::{install_bundled_template, TemplateExporter, TEMPLATE_ASSET_NAME};
use std::path::PathBuf;

/// Export the Excel reservation template.
#[derive(Args)]
pub struct TemplateCommand {
    /// Directory to write into (defaults to the current directory)
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// File name; `.xlsx` is appended when missing
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Template asset to copy (defaults to the one in the data directory,
    /// installed from the bundled template if missing)
    #[arg(long, value_name = "PATH")]
    pub asset: Option<PathBuf>,
}

impl TemplateCommand {
    /// Execute the template command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        // An explicit asset must exist; the data-directory copy is provisioned
        // from the bundled template on first use.
        let asset = match self.asset.or_else(|| config.template_asset_path().cloned()) {
            Some(path) => path,
            None => {
                let data_dir = resolve_data_dir(global, &config)?;
                install_bundled_template(&data_dir)?;
                data_dir.join(TEMPLATE_ASSET_NAME)
            }
        };
        let output = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let name = self
            .name
            .unwrap_or_else(|| config.template_file_name().to_string());

        let written = TemplateExporter::new(asset).export(&output, &name)?;

        if !global.quiet {
            println!("Template written to {}", written.display());
        }
        Ok(())
    }
}
