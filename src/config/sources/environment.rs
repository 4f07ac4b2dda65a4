//! Environment source: GATHER_<SECTION>__<KEY>, e.g. GATHER_AGGREGATOR__ROOT_MARKER.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Add `GATHER_*` environment overrides. List values are comma separated.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("GATHER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("aggregator.allowed_extensions")
            .with_list_parse_key("aggregator.ignored_file_names"),
    )
}
