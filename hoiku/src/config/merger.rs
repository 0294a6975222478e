//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings, TemplateSettings, ViewSettings};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hoiku::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    ///
    /// Nested sections merge field by field, so a higher layer that only
    /// sets `view.default_direction` keeps a lower layer's
    /// `view.default_sort`.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if let Some(db) = &source.database {
            Self::merge_database(target.database.get_or_insert_with(Default::default), db);
        }
        if let Some(view) = &source.view {
            Self::merge_view(target.view.get_or_insert_with(Default::default), view);
        }
        if let Some(template) = &source.template {
            Self::merge_template(target.template.get_or_insert_with(Default::default), template);
        }
    }

    fn merge_database(target: &mut DatabaseSettings, source: &DatabaseSettings) {
        if source.busy_timeout_ms.is_some() {
            target.busy_timeout_ms = source.busy_timeout_ms;
        }
    }

    fn merge_view(target: &mut ViewSettings, source: &ViewSettings) {
        if source.default_sort.is_some() {
            target.default_sort = source.default_sort;
        }
        if source.default_direction.is_some() {
            target.default_direction = source.default_direction;
        }
        if source.clear_selection_on_filter_change.is_some() {
            target.clear_selection_on_filter_change = source.clear_selection_on_filter_change;
        }
    }

    fn merge_template(target: &mut TemplateSettings, source: &TemplateSettings) {
        if source.asset_path.is_some() {
            target.asset_path.clone_from(&source.asset_path);
        }
        if source.default_file_name.is_some() {
            target.default_file_name.clone_from(&source.default_file_name);
        }
    }
}
