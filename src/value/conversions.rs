use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Value, ValueType};

fn parse_number<T: FromStr>(text: &str, tag: &ValueType) -> Result<T, String> {
    text.trim()
        .parse::<T>()
        .map_err(|_| format!("'{}' is not a valid {}", text, tag))
}

fn parse_char(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("'{}' is not a single character", text)),
    }
}

fn parse_bool(text: &str) -> Result<bool, String> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("'{}' is not a valid bool", text))
    }
}

impl ValueType {
    /// Converts one command-line token into a value of this type.
    pub fn parse_text(&self, text: &str) -> Result<Value, String> {
        match self {
            ValueType::Str => Ok(Value::Str(text.to_string())),
            ValueType::Bool => parse_bool(text).map(Value::Bool),
            ValueType::Char => parse_char(text).map(Value::Char),
            ValueType::I8 => parse_number(text, self).map(Value::I8),
            ValueType::I16 => parse_number(text, self).map(Value::I16),
            ValueType::I32 => parse_number(text, self).map(Value::I32),
            ValueType::I64 => parse_number(text, self).map(Value::I64),
            ValueType::U8 => parse_number(text, self).map(Value::U8),
            ValueType::U16 => parse_number(text, self).map(Value::U16),
            ValueType::U32 => parse_number(text, self).map(Value::U32),
            ValueType::U64 => parse_number(text, self).map(Value::U64),
            ValueType::F32 => parse_number(text, self).map(Value::F32),
            ValueType::F64 => parse_number(text, self).map(Value::F64),
            ValueType::Decimal => parse_number::<Decimal>(text, self).map(Value::Decimal),
            ValueType::List(element) => {
                if element.is_list() {
                    return Err(format!("no conversion defined for {}", self));
                }
                text.split(',')
                    .map(|item| element.parse_text(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
            ValueType::Custom {
                parser: Some(parser),
                ..
            } => parser(text),
            ValueType::Custom { name, parser: None } => {
                Err(format!("no conversion defined for type {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_widths_reject_out_of_range() {
        assert_eq!(ValueType::U8.parse_text("64"), Ok(Value::U8(64)));
        assert!(ValueType::U8.parse_text("256").is_err());
        assert!(ValueType::U16.parse_text("-1").is_err());
        assert_eq!(ValueType::I8.parse_text("-22"), Ok(Value::I8(-22)));
    }

    #[test]
    fn malformed_numbers_fail() {
        assert!(ValueType::I32.parse_text("abc").is_err());
        assert!(ValueType::F64.parse_text("1.2.3").is_err());
    }

    #[test]
    fn decimal_keeps_exact_digits() {
        let expected = Decimal::from_str("123.4455").expect("decimal literal");
        assert_eq!(
            ValueType::Decimal.parse_text("123.4455"),
            Ok(Value::Decimal(expected))
        );
    }

    #[test]
    fn char_requires_exactly_one_character() {
        assert_eq!(ValueType::Char.parse_text("a"), Ok(Value::Char('a')));
        assert!(ValueType::Char.parse_text("ab").is_err());
        assert!(ValueType::Char.parse_text("").is_err());
    }

    #[test]
    fn string_passes_through_untouched() {
        assert_eq!(
            ValueType::Str.parse_text(" a,b "),
            Ok(Value::Str(" a,b ".to_string()))
        );
    }

    #[test]
    fn list_splits_on_comma_and_fails_on_any_bad_element() {
        let list = ValueType::list(ValueType::I32);
        assert_eq!(
            list.parse_text("1,2,3"),
            Ok(Value::List(vec![Value::I32(1), Value::I32(2), Value::I32(3)]))
        );
        assert!(list.parse_text("1,x,3").is_err());
    }

    #[test]
    fn list_of_bools_is_case_insensitive() {
        let list = ValueType::list(ValueType::Bool);
        assert_eq!(
            list.parse_text("True,false"),
            Ok(Value::List(vec![Value::Bool(true), Value::Bool(false)]))
        );
    }

    #[test]
    fn nested_lists_and_opaque_types_have_no_conversion() {
        let nested = ValueType::list(ValueType::list(ValueType::I32));
        assert!(nested.parse_text("1").is_err());
        assert!(ValueType::opaque("Widget").parse_text("3").is_err());
    }

    #[test]
    fn custom_parser_is_invoked() {
        let hex = ValueType::custom("hex", |s| {
            u32::from_str_radix(s.trim_start_matches("0x"), 16)
                .map(Value::U32)
                .map_err(|e| e.to_string())
        });
        assert_eq!(hex.parse_text("0xFF"), Ok(Value::U32(255)));
        assert!(hex.parse_text("0xZZ").is_err());
    }
}
