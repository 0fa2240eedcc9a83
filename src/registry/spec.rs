use super::errors::RegistryError;
use crate::value::ValueType;

/// One registered option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub long_name: String,
    pub short_name: Option<String>,
    pub value_type: ValueType,
    pub required: bool,
    pub help: String,
}

/// Long and short names unpacked from a `"long"` or `"long,short"` spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecNames {
    pub long: String,
    pub short: Option<String>,
}

pub fn parse_spec(spec: &str) -> Result<SpecNames, RegistryError> {
    if spec.is_empty() {
        return Err(RegistryError::invalid(spec, "missing option name"));
    }

    let parts: Vec<&str> = spec.split(',').collect();
    let names = match parts.as_slice() {
        [long] => SpecNames {
            long: long.to_string(),
            short: None,
        },
        [long, short] => {
            if long.is_empty() || short.is_empty() {
                return Err(RegistryError::invalid(spec, "missing long or short option"));
            }
            SpecNames {
                long: long.to_string(),
                short: Some(short.to_string()),
            }
        }
        _ => {
            return Err(RegistryError::invalid(
                spec,
                "expected 'long' or 'long,short'",
            ));
        }
    };

    if names.long.is_empty() {
        return Err(RegistryError::invalid(spec, "missing long option"));
    }

    let dashed = std::iter::once(&names.long)
        .chain(names.short.as_ref())
        .any(|n| n.starts_with('-'));
    if dashed {
        return Err(RegistryError::invalid(
            spec,
            "option names are given without leading dashes",
        ));
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_only() {
        let names = parse_spec("verbose").expect("valid spec");
        assert_eq!(names.long, "verbose");
        assert_eq!(names.short, None);
    }

    #[test]
    fn long_and_short() {
        let names = parse_spec("verbose,v").expect("valid spec");
        assert_eq!(names.long, "verbose");
        assert_eq!(names.short.as_deref(), Some("v"));
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for spec in ["", ",", "option,", ",o", "a,b,c", "--long", "long,-s"] {
            assert!(
                matches!(
                    parse_spec(spec),
                    Err(RegistryError::InvalidSpecification { .. })
                ),
                "spec {:?} should be rejected",
                spec
            );
        }
    }
}
