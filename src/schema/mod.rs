pub mod args;
pub mod errors;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::parser::CmdLineParser;
use crate::value::ValueType;
use errors::SchemaError;

/// Option declarations read from a schema file, in file order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    pub options: IndexMap<String, OptionDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDecl {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

/// Default values as they appear in the file; converted with the option's
/// own text conversion so a default can never hold a value the command line
/// could not.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<DefaultValue>),
}

fn default_required() -> bool {
    true
}

impl DefaultValue {
    fn to_text(&self) -> String {
        match self {
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Int(n) => n.to_string(),
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::Str(s) => s.clone(),
            DefaultValue::List(items) => items
                .iter()
                .map(DefaultValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl OptionDecl {
    fn spec_string(&self, long: &str) -> String {
        match &self.short {
            Some(short) => format!("{},{}", long, short),
            None => long.to_string(),
        }
    }
}

impl Schema {
    pub fn from_str_with_extension(contents: &str, ext: &str) -> Result<Self, SchemaError> {
        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| SchemaError::FileError(format!("failed to parse TOML: {}", e))),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| SchemaError::FileError(format!("failed to parse YAML: {}", e))),
            "json" => serde_json::from_str(contents)
                .map_err(|e| SchemaError::FileError(format!("failed to parse JSON: {}", e))),
            other => Err(SchemaError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Builds a parser: defaults are seeded first, then every option is
    /// registered in file order.
    pub fn into_parser(self) -> Result<CmdLineParser, SchemaError> {
        let mut parser = CmdLineParser::new();

        for (long, decl) in &self.options {
            let value_type: ValueType =
                decl.value_type
                    .parse()
                    .map_err(|reason| SchemaError::UnknownType {
                        option: long.clone(),
                        reason,
                    })?;

            if let Some(default) = &decl.default {
                if value_type.is_bool() {
                    return Err(SchemaError::InvalidDefault {
                        option: long.clone(),
                        reason: "boolean options always default to false".to_string(),
                    });
                }
                let value = value_type.parse_text(&default.to_text()).map_err(|reason| {
                    SchemaError::InvalidDefault {
                        option: long.clone(),
                        reason,
                    }
                })?;
                parser.defaults_mut().set(long, value);
            }

            parser.setup_type(&decl.spec_string(long), value_type, decl.required, &decl.help)?;
        }

        tracing::debug!(options = parser.registry().len(), "schema loaded");
        Ok(parser)
    }
}

pub fn load_schema(path: &str) -> Result<Schema, SchemaError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SchemaError::FileError(format!("failed to open file {}: {}", path, e)))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    Schema::from_str_with_extension(&contents, &ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    const SCHEMA_TOML: &str = r#"
[options.verbose]
short = "v"
type = "bool"
required = false
help = "Verbose output"

[options.count]
short = "c"
type = "i32"
required = false
default = 3

[options.ids]
type = "list<u16>"
default = [1, 2]
required = false

[options.name]
type = "string"
"#;

    #[test]
    fn toml_schema_keeps_declaration_order() {
        let schema = Schema::from_str_with_extension(SCHEMA_TOML, "toml").expect("schema parses");
        let names: Vec<_> = schema.options.keys().map(String::as_str).collect();
        assert_eq!(names, ["verbose", "count", "ids", "name"]);
    }

    #[test]
    fn defaults_are_seeded_with_declared_type() {
        let schema = Schema::from_str_with_extension(SCHEMA_TOML, "toml").expect("schema parses");
        let parser = schema.into_parser().expect("parser builds");
        assert_eq!(parser.defaults().value("count"), Some(&Value::I32(3)));
        assert_eq!(parser.defaults().get::<Vec<u16>>("ids"), Ok(vec![1, 2]));
        assert!(parser.registry().get("name").is_some_and(|o| o.required));
    }

    #[test]
    fn unknown_type_is_a_schema_error() {
        let contents = r#"{"options": {"x": {"type": "widget"}}}"#;
        let schema = Schema::from_str_with_extension(contents, "json").expect("schema parses");
        assert!(matches!(
            schema.into_parser(),
            Err(SchemaError::UnknownType { .. })
        ));
    }

    #[test]
    fn default_out_of_range_is_rejected() {
        let contents = "options:\n  level:\n    type: u8\n    default: 300\n";
        let schema = Schema::from_str_with_extension(contents, "yaml").expect("schema parses");
        assert!(matches!(
            schema.into_parser(),
            Err(SchemaError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn default_on_bool_is_rejected() {
        let contents = "[options.verbose]\ntype = \"bool\"\nrequired = false\ndefault = true\n";
        let schema = Schema::from_str_with_extension(contents, "toml").expect("schema parses");
        match schema.into_parser() {
            Err(SchemaError::InvalidDefault { option, reason }) => {
                assert_eq!(option, "verbose");
                assert!(reason.contains("always default to false"));
            }
            other => panic!("expected InvalidDefault, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unsupported_extension() {
        assert!(matches!(
            Schema::from_str_with_extension("", "ini"),
            Err(SchemaError::UnsupportedFormat(_))
        ));
    }
}
