//! `decode-form`: turn a deep-link application payload back into JSON.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use hoiku::forms::ApplicationForm;
use std::io::Read;

/// Decode a deep-link application form payload.
#[derive(Args)]
pub struct DecodeFormCommand {
    /// Percent-encoded payload, or `-` to read it from stdin
    pub payload: String,
}

impl DecodeFormCommand {
    /// Execute the decode-form command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let raw = if self.payload == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            self.payload
        };

        let form = ApplicationForm::from_payload(raw.trim())?;
        println!("{}", serde_json::to_string_pretty(&form)?);
        Ok(())
    }
}
