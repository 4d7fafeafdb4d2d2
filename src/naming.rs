/// The deterministic transform from a field's declared name to its
/// wire-format property name. An explicit wire-name override on a
/// field or mixin always wins over the strategy's derived name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `firstName` becomes `first_name`.
    CamelToSnake,
    /// The declared name is used on the wire as-is.
    Identity,
    /// `firstName` becomes `first-name`.
    CamelToKebab,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        NamingStrategy::CamelToSnake
    }
}

impl NamingStrategy {
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingStrategy::CamelToSnake => split_camel(name, '_'),
            NamingStrategy::Identity => name.to_owned(),
            NamingStrategy::CamelToKebab => split_camel(name, '-'),
        }
    }
}

fn split_camel(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (ix, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if ix != 0 {
                out.push(separator);
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::naming::NamingStrategy;

    #[test]
    fn camel_to_snake() {
        let strategy = NamingStrategy::CamelToSnake;
        assert_eq!(strategy.apply("firstName"), "first_name");
        assert_eq!(strategy.apply("fullLegalName"), "full_legal_name");
        assert_eq!(strategy.apply("id"), "id");
        assert_eq!(strategy.apply("already_snake"), "already_snake");
        assert_eq!(strategy.apply(""), "");
    }

    #[test]
    fn identity() {
        assert_eq!(NamingStrategy::Identity.apply("firstName"), "firstName");
    }

    #[test]
    fn camel_to_kebab() {
        assert_eq!(NamingStrategy::CamelToKebab.apply("firstName"), "first-name");
    }

    #[test]
    fn default_is_camel_to_snake() {
        assert_eq!(NamingStrategy::default(), NamingStrategy::CamelToSnake);
    }
}
