use anyhow::{bail, Result};

/// Kind of a generated field, decided once from the type token.
/// Drives the format specifier and the display expression in toString().
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Reference,
}

impl FieldKind {
    pub fn from_type(type_name: &str) -> Self {
        if type_name == "int" {
            FieldKind::Integer
        } else {
            FieldKind::Reference
        }
    }

    pub fn format_specifier(&self) -> &'static str {
        match self {
            FieldKind::Integer => "%d",
            FieldKind::Reference => "%s",
        }
    }
}

/// One constructor parameter of the generated class, as a (type, name) pair.
/// Names are expected in lowerCamelCase; tokens are trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    type_name: String,
    name: String,
}

impl Argument {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_type(&self.type_name)
    }

    pub fn field_name(&self) -> String {
        format!("_{}", self.name)
    }

    pub fn field_decl(&self) -> String {
        format!("private final {} {};", self.type_name, self.field_name())
    }

    pub fn param_decl(&self) -> String {
        format!("{} {}", self.type_name, self.name)
    }

    pub fn init_stmt(&self) -> String {
        format!("{} = {};", self.field_name(), self.name)
    }

    pub fn equals_clause(&self) -> String {
        let field = self.field_name();
        format!("{} == other.{}", field, field)
    }

    pub fn format_specifier(&self) -> &'static str {
        self.kind().format_specifier()
    }

    pub fn display_value(&self) -> String {
        match self.kind() {
            FieldKind::Integer => self.field_name(),
            FieldKind::Reference => format!("{}.toString()", self.field_name()),
        }
    }
}

/// The whole generation request: mnemonic, class name and ordered arguments.
/// Argument order fixes field, constructor and display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    mnemonic: String,
    class_name: String,
    arguments: Vec<Argument>,
}

impl Invocation {
    pub fn new(
        mnemonic: impl Into<String>,
        class_name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            class_name: class_name.into(),
            arguments,
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

/// Groups a flat token list two at a time: even index = type, odd = name.
/// Shape is the only thing checked; token spellings are not validated.
pub fn pair_arguments(tokens: &[String]) -> Result<Vec<Argument>> {
    if tokens.len() % 2 != 0 {
        bail!(
            "missing type or field name in arguments list ({})",
            tokens.join(", ")
        );
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| Argument::new(&pair[0], &pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pair_empty() {
        let args = pair_arguments(&[]).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_pair_even() {
        let tokens = strings(&["int", "bitIndex", "Register8", "r8"]);
        let args = pair_arguments(&tokens).unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], Argument::new("int", "bitIndex"));
        assert_eq!(args[1], Argument::new("Register8", "r8"));
    }

    #[test]
    fn test_pair_odd() {
        let tokens = strings(&["int", "x", "foo"]);
        let err = pair_arguments(&tokens).unwrap_err();
        assert!(err.to_string().contains("int, x, foo"));
    }

    #[test]
    fn test_field_kind() {
        assert_eq!(FieldKind::from_type("int"), FieldKind::Integer);
        assert_eq!(FieldKind::from_type("Int"), FieldKind::Reference);
        assert_eq!(FieldKind::from_type("integer"), FieldKind::Reference);
        assert_eq!(FieldKind::from_type("Register8"), FieldKind::Reference);
    }

    #[test]
    fn test_integer_argument_derivations() {
        let arg = Argument::new("int", "bitIndex");
        assert_eq!(arg.field_name(), "_bitIndex");
        assert_eq!(arg.field_decl(), "private final int _bitIndex;");
        assert_eq!(arg.param_decl(), "int bitIndex");
        assert_eq!(arg.init_stmt(), "_bitIndex = bitIndex;");
        assert_eq!(arg.equals_clause(), "_bitIndex == other._bitIndex");
        assert_eq!(arg.format_specifier(), "%d");
        assert_eq!(arg.display_value(), "_bitIndex");
    }

    #[test]
    fn test_reference_argument_derivations() {
        let arg = Argument::new("Register8", "r8");
        assert_eq!(arg.field_decl(), "private final Register8 _r8;");
        assert_eq!(arg.format_specifier(), "%s");
        assert_eq!(arg.display_value(), "_r8.toString()");
    }
}
