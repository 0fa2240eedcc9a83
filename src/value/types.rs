use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::Value;

/// Conversion routine supplied for a custom option type.
pub type CustomParser = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// Type tag attached to every registered option.
#[derive(Clone)]
pub enum ValueType {
    Bool,
    Str,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    /// Comma separated list, every element converted as the inner type.
    List(Box<ValueType>),
    /// Caller defined type. `parser: None` describes a type with no textual
    /// conversion; such options register fine but fail once a value arrives.
    Custom {
        name: String,
        parser: Option<CustomParser>,
    },
}

impl ValueType {
    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    pub fn custom<F>(name: &str, parser: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        ValueType::Custom {
            name: name.to_string(),
            parser: Some(Arc::new(parser)),
        }
    }

    pub fn opaque(name: &str) -> Self {
        ValueType::Custom {
            name: name.to_string(),
            parser: None,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ValueType::Bool)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ValueType::List(_))
    }

    /// Zero value used for optional options nobody pre-seeded.
    pub fn zero_value(&self) -> Option<Value> {
        let zero = match self {
            ValueType::Bool => Value::Bool(false),
            ValueType::Str => Value::Str(String::new()),
            ValueType::Char => Value::Char('\0'),
            ValueType::I8 => Value::I8(0),
            ValueType::I16 => Value::I16(0),
            ValueType::I32 => Value::I32(0),
            ValueType::I64 => Value::I64(0),
            ValueType::U8 => Value::U8(0),
            ValueType::U16 => Value::U16(0),
            ValueType::U32 => Value::U32(0),
            ValueType::U64 => Value::U64(0),
            ValueType::F32 => Value::F32(0.0),
            ValueType::F64 => Value::F64(0.0),
            ValueType::Decimal => Value::Decimal(Decimal::ZERO),
            ValueType::List(_) => Value::List(Vec::new()),
            ValueType::Custom { .. } => return None,
        };
        Some(zero)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Bool => f.write_str("bool"),
            ValueType::Str => f.write_str("string"),
            ValueType::Char => f.write_str("char"),
            ValueType::I8 => f.write_str("i8"),
            ValueType::I16 => f.write_str("i16"),
            ValueType::I32 => f.write_str("i32"),
            ValueType::I64 => f.write_str("i64"),
            ValueType::U8 => f.write_str("u8"),
            ValueType::U16 => f.write_str("u16"),
            ValueType::U32 => f.write_str("u32"),
            ValueType::U64 => f.write_str("u64"),
            ValueType::F32 => f.write_str("f32"),
            ValueType::F64 => f.write_str("f64"),
            ValueType::Decimal => f.write_str("decimal"),
            ValueType::List(inner) => write!(f, "list<{}>", inner),
            ValueType::Custom { name, .. } => f.write_str(name),
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Custom { name, parser } => f
                .debug_struct("Custom")
                .field("name", name)
                .field("parser", &parser.is_some())
                .finish(),
            other => write!(f, "{}", other),
        }
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ValueType::List(a), ValueType::List(b)) => a == b,
            (ValueType::Custom { name: a, .. }, ValueType::Custom { name: b, .. }) => a == b,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

/// Type names accepted in schema files.
impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(inner) = name
            .strip_prefix("list<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(ValueType::list(inner.parse()?));
        }

        match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(ValueType::Bool),
            "string" | "str" => Ok(ValueType::Str),
            "char" => Ok(ValueType::Char),
            "i8" => Ok(ValueType::I8),
            "i16" => Ok(ValueType::I16),
            "i32" | "int" => Ok(ValueType::I32),
            "i64" => Ok(ValueType::I64),
            "u8" => Ok(ValueType::U8),
            "u16" => Ok(ValueType::U16),
            "u32" => Ok(ValueType::U32),
            "u64" => Ok(ValueType::U64),
            "f32" => Ok(ValueType::F32),
            "f64" | "float" => Ok(ValueType::F64),
            "decimal" => Ok(ValueType::Decimal),
            _ => Err(format!("unknown value type '{}'", name)),
        }
    }
}

/// Rust types that can be registered directly, e.g. `setup::<u16>(..)`.
pub trait OptionType {
    fn value_type() -> ValueType;
}

macro_rules! impl_option_type {
    ($($t:ty => $tag:ident),* $(,)?) => {$(
        impl OptionType for $t {
            fn value_type() -> ValueType {
                ValueType::$tag
            }
        }
    )*};
}
impl_option_type!(
    bool => Bool,
    String => Str,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
);

impl<T: OptionType> OptionType for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list(T::value_type())
    }
}
