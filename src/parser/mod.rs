pub mod errors;
pub mod help;

use std::collections::HashSet;

use crate::registry::Registry;
use crate::registry::errors::RegistryError;
use crate::value::{OptionType, Opts, Value, ValueType};
use errors::ParseError;

const HELP_LONG: &str = "--help";
const HELP_SHORT: &str = "-h";

enum Token<'a> {
    Long(&'a str),
    Short(&'a str),
    Plain,
}

fn classify(token: &str) -> Token<'_> {
    if let Some(name) = token.strip_prefix("--") {
        Token::Long(name)
    } else if let Some(name) = token.strip_prefix('-').filter(|n| !n.is_empty()) {
        Token::Short(name)
    } else {
        Token::Plain
    }
}

/// Option registry plus the result map it fills.
///
/// Values placed into [`CmdLineParser::defaults_mut`] before an optional
/// option is set up act as that option's default. Every parse starts from
/// these defaults, never from an earlier parse's results.
#[derive(Debug, Default)]
pub struct CmdLineParser {
    registry: Registry,
    defaults: Opts,
    opts: Opts,
}

impl CmdLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    pub fn defaults(&self) -> &Opts {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Opts {
        &mut self.defaults
    }

    /// Registers an option whose type is given by a Rust type, e.g. `setup::<u16>`.
    pub fn setup<T: OptionType>(
        &mut self,
        spec: &str,
        required: bool,
        help: &str,
    ) -> Result<(), RegistryError> {
        self.setup_type(spec, T::value_type(), required, help)
    }

    /// Registers a required option with no help text.
    pub fn register(&mut self, spec: &str, value_type: ValueType) -> Result<(), RegistryError> {
        self.setup_type(spec, value_type, true, "")
    }

    pub fn setup_type(
        &mut self,
        spec: &str,
        value_type: ValueType,
        required: bool,
        help: &str,
    ) -> Result<(), RegistryError> {
        let option = self.registry.register(spec, value_type, required, help)?;

        if !option.required && !self.defaults.contains(&option.long_name) {
            if let Some(zero) = option.value_type.zero_value() {
                self.defaults.set(&option.long_name, zero);
            }
        }
        Ok(())
    }

    pub fn help_text(&self) -> String {
        help::generate_help(&self.registry)
    }

    /// Parses `args` into a fresh result map seeded from the defaults. On
    /// failure the previous results are kept.
    pub fn parse<I, S>(&mut self, args: I) -> Result<&Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        self.check_for_help(&tokens)?;
        self.convert_short_to_long(&mut tokens)?;

        let mut opts = self.defaults.clone();
        let observed = self.set_options(&tokens, &mut opts)?;
        self.set_missing_bools_to_false(&observed, &mut opts);
        self.check_for_missing_required(&observed)?;

        self.opts = opts;
        Ok(&self.opts)
    }

    fn check_for_help(&self, tokens: &[String]) -> Result<(), ParseError> {
        if tokens.iter().any(|t| t == HELP_LONG || t == HELP_SHORT) {
            return Err(ParseError::HelpRequested {
                help: self.help_text(),
            });
        }
        Ok(())
    }

    fn unknown_option(&self, token: &str) -> ParseError {
        ParseError::UnknownOption {
            option: token.to_string(),
            help: self.help_text(),
        }
    }

    /// First pass: rewrites every short flag to its long form. Values of
    /// non-boolean options are stepped over so they are never read as flags.
    fn convert_short_to_long(&self, tokens: &mut [String]) -> Result<(), ParseError> {
        let mut i = 0;
        while i < tokens.len() {
            let (takes_value, rewritten) = match classify(&tokens[i]) {
                Token::Short(name) => {
                    let option = self
                        .registry
                        .resolve_short(name)
                        .ok_or_else(|| self.unknown_option(&tokens[i]))?;
                    tracing::debug!(from = %tokens[i], to = %option.long_name, "normalized short option");
                    (
                        !option.value_type.is_bool(),
                        Some(format!("--{}", option.long_name)),
                    )
                }
                Token::Long(name) => {
                    let option = self
                        .registry
                        .get(name)
                        .ok_or_else(|| self.unknown_option(&tokens[i]))?;
                    (!option.value_type.is_bool(), None)
                }
                Token::Plain => {
                    tracing::warn!(token = %tokens[i], "ignoring unexpected argument");
                    (false, None)
                }
            };

            if let Some(long) = rewritten {
                tokens[i] = long;
            }
            if takes_value {
                i += 1;
            }
            i += 1;
        }
        Ok(())
    }

    /// Second pass: records each long flag and converts its value.
    fn set_options(&self, tokens: &[String], opts: &mut Opts) -> Result<HashSet<String>, ParseError> {
        let mut observed = HashSet::new();

        let mut i = 0;
        while i < tokens.len() {
            let Token::Long(name) = classify(&tokens[i]) else {
                i += 1;
                continue;
            };

            let option = self
                .registry
                .get(name)
                .ok_or_else(|| self.unknown_option(&tokens[i]))?;

            if !observed.insert(option.long_name.clone()) {
                return Err(ParseError::DuplicateOption {
                    option: option.long_name.clone(),
                    help: self.help_text(),
                });
            }

            if option.value_type.is_bool() {
                opts.set(&option.long_name, Value::Bool(true));
            } else {
                let text = tokens
                    .get(i + 1)
                    .ok_or_else(|| ParseError::MissingValue {
                        option: option.long_name.clone(),
                        help: self.help_text(),
                    })?;
                let value =
                    option
                        .value_type
                        .parse_text(text)
                        .map_err(|reason| ParseError::InvalidValue {
                            option: option.long_name.clone(),
                            value: text.clone(),
                            reason,
                            help: self.help_text(),
                        })?;
                opts.set(&option.long_name, value);
                i += 1;
            }
            i += 1;
        }

        Ok(observed)
    }

    fn set_missing_bools_to_false(&self, observed: &HashSet<String>, opts: &mut Opts) {
        self.registry
            .iter()
            .filter(|o| o.value_type.is_bool() && !observed.contains(&o.long_name))
            .for_each(|o| opts.set(&o.long_name, Value::Bool(false)));
    }

    fn check_for_missing_required(&self, observed: &HashSet<String>) -> Result<(), ParseError> {
        match self
            .registry
            .iter()
            .find(|o| o.required && !observed.contains(&o.long_name))
        {
            Some(missing) => Err(ParseError::MissingRequiredOption {
                option: missing.long_name.clone(),
                help: self.help_text(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_flags_become_long_and_values_are_skipped() {
        let mut parser = CmdLineParser::new();
        parser.setup::<i32>("number,n", true, "").unwrap();
        parser.setup::<bool>("verbose,v", false, "").unwrap();

        let mut args = tokens(&["-n", "-v", "-v"]);
        parser.convert_short_to_long(&mut args).unwrap();
        assert_eq!(args, ["--number", "-v", "--verbose"]);
    }

    #[test]
    fn negative_numbers_after_valued_options_are_not_flags() {
        let mut parser = CmdLineParser::new();
        parser.setup::<i64>("offset,o", true, "").unwrap();

        let mut args = tokens(&["-o", "-12"]);
        parser.convert_short_to_long(&mut args).unwrap();
        assert_eq!(args, ["--offset", "-12"]);
    }

    #[test]
    fn unresolved_short_flag_is_unknown() {
        let parser = CmdLineParser::new();
        let mut args = tokens(&["-q"]);
        let err = parser.convert_short_to_long(&mut args).unwrap_err();
        assert_eq!(err.option(), Some("-q"));
    }

    #[test]
    fn lone_dash_is_not_a_flag() {
        assert!(matches!(classify("-"), Token::Plain));
        assert!(matches!(classify("--x"), Token::Long("x")));
        assert!(matches!(classify("-x"), Token::Short("x")));
    }

    #[test]
    fn seeded_defaults_survive_setup() {
        let mut parser = CmdLineParser::new();
        parser.defaults_mut().set("level", Value::U8(7));
        parser.setup::<u8>("level", false, "").unwrap();
        parser.setup::<String>("name", false, "").unwrap();

        assert_eq!(parser.defaults().get::<u8>("level"), Ok(7));
        assert_eq!(parser.defaults().get::<String>("name"), Ok(String::new()));
        assert!(parser.opts().is_empty());
    }

    #[test]
    fn required_options_get_no_zero_value() {
        let mut parser = CmdLineParser::new();
        parser.setup::<i32>("count", true, "").unwrap();
        assert!(!parser.defaults().contains("count"));
    }
}
