//! Property-based tests for the configuration layers.

use super::merger::ConfigMerger;
use super::schema::{Config, DatabaseSettings, OutputFormat, ViewSettings};
use super::validator::ConfigValidator;
use crate::query::{SortDirection, SortKey};
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn view_strategy() -> impl Strategy<Value = ViewSettings> {
    (
        prop::option::of(prop::sample::select(SortKey::ALL.to_vec())),
        prop::option::of(prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(default_sort, default_direction, clear)| ViewSettings {
            default_sort,
            default_direction,
            clear_selection_on_filter_change: clear,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(output_format_strategy()),
        prop::option::of(1u64..60_000),
        prop::option::of(view_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(output_format, busy, view, autoinit)| Config {
            output_format,
            database: busy.map(|ms| DatabaseSettings {
                busy_timeout_ms: Some(ms),
            }),
            view,
            disable_autoinit: autoinit,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn higher_layer_wins_when_set(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));

        let sort = |c: &Config| c.view.as_ref().and_then(|v| v.default_sort);
        prop_assert_eq!(sort(&merged), sort(&high).or(sort(&low)));
    }

    #[test]
    fn merge_is_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
