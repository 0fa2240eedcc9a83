pub mod errors;
pub mod spec;

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::value::ValueType;
use errors::RegistryError;
pub use spec::{OptionSpec, SpecNames, parse_spec};

/// Registered options in registration order, plus the short-to-long alias table.
#[derive(Debug, Default)]
pub struct Registry {
    options: IndexMap<String, OptionSpec>,
    short_to_long: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` against the existing entries and records the option.
    /// A rejected spec leaves the registry untouched.
    pub fn register(
        &mut self,
        spec: &str,
        value_type: ValueType,
        required: bool,
        help: &str,
    ) -> Result<&OptionSpec, RegistryError> {
        let SpecNames { long, short } = parse_spec(spec)?;

        if let Some(short) = short.as_ref().filter(|s| self.short_to_long.contains_key(*s)) {
            return Err(RegistryError::invalid(
                spec,
                format!("short option {} already specified", short),
            ));
        }

        let lowered = long.to_lowercase();
        if self.options.keys().any(|k| k.to_lowercase() == lowered) {
            return Err(RegistryError::invalid(
                spec,
                format!("long option {} already specified", long),
            ));
        }

        tracing::debug!(option = %long, short = ?short, value_type = %value_type, required, "registered option");

        if let Some(short) = &short {
            self.short_to_long.insert(short.clone(), long.clone());
        }
        let entry = self.options.entry(long.clone()).or_insert(OptionSpec {
            long_name: long,
            short_name: short,
            value_type,
            required,
            help: help.to_string(),
        });
        Ok(&*entry)
    }

    pub fn get(&self, long: &str) -> Option<&OptionSpec> {
        self.options.get(long)
    }

    pub fn resolve_short(&self, short: &str) -> Option<&OptionSpec> {
        self.short_to_long
            .get(short)
            .and_then(|long| self.options.get(long))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_is_kept() {
        let mut registry = Registry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register(name, ValueType::Str, false, "")
                .expect("register");
        }
        let names: Vec<_> = registry.iter().map(|s| s.long_name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_long_name_fails() {
        let mut registry = Registry::new();
        registry
            .register("option", ValueType::I32, true, "")
            .expect("first registration");
        let err = registry
            .register("option", ValueType::I32, true, "")
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSpecification { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn long_names_collide_case_insensitively() {
        let mut registry = Registry::new();
        registry
            .register("Output", ValueType::Str, true, "")
            .expect("first registration");
        assert!(registry.register("output", ValueType::Str, true, "").is_err());
    }

    #[test]
    fn duplicate_short_name_fails_without_side_effects() {
        let mut registry = Registry::new();
        registry
            .register("option1,o", ValueType::I32, true, "")
            .expect("first registration");
        assert!(registry.register("option2,o", ValueType::I32, true, "").is_err());
        assert!(registry.get("option2").is_none());
        assert_eq!(
            registry.resolve_short("o").map(|s| s.long_name.as_str()),
            Some("option1")
        );
    }

    #[test]
    fn failed_long_registration_does_not_claim_short_alias() {
        let mut registry = Registry::new();
        registry
            .register("option", ValueType::I32, true, "")
            .expect("first registration");
        assert!(registry.register("option,x", ValueType::I32, true, "").is_err());
        assert!(registry.resolve_short("x").is_none());
    }
}
