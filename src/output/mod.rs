pub mod args;
pub mod errors;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::registry::Registry;
use crate::value::Opts;
use args::OutputFormat;
use errors::OutputError;

pub fn render(opts: &Opts, registry: &Registry, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => render_json(opts),
        OutputFormat::Table => Ok(render_table(opts, registry)),
    }
}

pub fn render_json(opts: &Opts) -> Result<String, OutputError> {
    serde_json::to_string_pretty(opts).map_err(|e| OutputError::SerializeError(e.to_string()))
}

/// One row per registered option, in registration order. Options without a
/// value show an empty cell.
pub fn render_table(opts: &Opts, registry: &Registry) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Option").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    for option in registry.iter() {
        let value = opts
            .value(&option.long_name)
            .map(|v| v.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&option.long_name),
            Cell::new(option.value_type.to_string()),
            Cell::new(value),
        ]);
    }

    table.to_string()
}
