use thiserror;

use std;

use serde_json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("error reading json text: {0}")]
    Syntax(String),
    #[error("cannot map {got} into `{type_name}`: expected an object")]
    UnexpectedShape {
        type_name: &'static str,
        got: &'static str,
    },
    #[error("invalid format for field `{field}`: {reason}")]
    InvalidFormat { field: String, reason: String },
    #[error("unknown field `{field}` on `{type_name}`")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },
    #[error("enum field `{field}` on `{type_name}` declares no default member")]
    NoDefaultMember {
        type_name: &'static str,
        field: &'static str,
    },
    #[error("{0}")]
    Handler(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Syntax(err.to_string())
    }
}
