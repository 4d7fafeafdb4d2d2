//! Explicit capability tables for mappable types.
//!
//! The mapper never reflects over a type. Each mappable type declares
//! a [`TypeDescriptor`] through the [`JsonShape`] trait: the fields it
//! binds, any explicit wire names, which fields are enum-kinded and
//! what their member set and default member are, and optionally a
//! catch-all handler invoked for input fields matching no declared
//! property. A [`Mixin`] is the same kind of metadata declared
//! out-of-band and attached to a target type via the configuration.

use crate::error::{Error, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Binds one already-policy-resolved field value into the object
/// being built.
pub type AssignFn<T> = fn(&mut T, &Value) -> Result<()>;

/// Produces the wire value for one field, or `None` to omit it from
/// output.
pub type EmitFn<T> = fn(&T) -> Result<Option<Value>>;

/// The catch-all handler: invoked with `(field_name, value)` for each
/// input field that matches no declared property. Whatever it does,
/// including returning an error, is the mapper's behavior on unknown
/// fields for that type.
pub type AnySetterFn<T> = fn(&mut T, &str, &Value) -> Result<()>;

pub trait JsonShape: Default {
    fn descriptor() -> TypeDescriptor<Self>;
}

pub struct TypeDescriptor<T> {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor<T>>,
    pub any_setter: Option<AnySetterFn<T>>,
}

impl<T> TypeDescriptor<T> {
    pub fn new(name: &'static str) -> Self {
        TypeDescriptor {
            name,
            fields: Vec::new(),
            any_setter: None,
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_any_setter(mut self, handler: AnySetterFn<T>) -> Self {
        self.any_setter = Some(handler);
        self
    }
}

pub struct FieldDescriptor<T> {
    /// The declared name, fed to the naming strategy unless a wire
    /// name is set here or renamed by a mixin.
    pub name: &'static str,
    pub wire_name: Option<&'static str>,
    pub ignored: bool,
    pub kind: FieldKind,
    pub assign: AssignFn<T>,
    pub emit: EmitFn<T>,
}

impl<T> FieldDescriptor<T> {
    pub fn new(name: &'static str, assign: AssignFn<T>, emit: EmitFn<T>) -> Self {
        FieldDescriptor {
            name,
            wire_name: None,
            ignored: false,
            kind: FieldKind::Plain,
            assign,
            emit,
        }
    }

    pub fn with_wire_name(mut self, wire_name: &'static str) -> Self {
        self.wire_name = Some(wire_name);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn enumerated(mut self, shape: EnumShape) -> Self {
        self.kind = FieldKind::Enum(shape);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Plain,
    Enum(EnumShape),
}

/// The member set of an enum-kinded field, plus the single member
/// designated as the fallback for unrecognized literals.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumShape {
    pub members: &'static [&'static str],
    pub default_member: Option<&'static str>,
}

impl EnumShape {
    pub fn new(members: &'static [&'static str]) -> Self {
        EnumShape {
            members,
            default_member: None,
        }
    }

    pub fn with_default(mut self, member: &'static str) -> Self {
        self.default_member = Some(member);
        self
    }
}

/// Annotation overlay for a target type: metadata declared on a
/// `source` type, applied to the target as though declared directly
/// on it. At most one mixin may be registered per target type.
#[derive(Clone, Debug, PartialEq)]
pub struct Mixin {
    pub source: &'static str,
    pub overrides: Vec<FieldOverride>,
}

impl Mixin {
    pub fn new(source: &'static str) -> Self {
        Mixin {
            source,
            overrides: Vec::new(),
        }
    }

    pub fn ignoring(mut self, field: &'static str) -> Self {
        self.overrides.push(FieldOverride {
            field,
            wire_name: None,
            ignore: true,
        });
        self
    }

    pub fn renaming(mut self, field: &'static str, wire_name: &'static str) -> Self {
        self.overrides.push(FieldOverride {
            field,
            wire_name: Some(wire_name),
            ignore: false,
        });
        self
    }

    pub(crate) fn override_for(&self, field: &'static str) -> Option<&FieldOverride> {
        self.overrides.iter().find(|o| o.field == field)
    }
}

/// One field-level override carried by a mixin, keyed by the target
/// field's declared name.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOverride {
    pub field: &'static str,
    pub wire_name: Option<&'static str>,
    pub ignore: bool,
}

/// Converts a wire value into a field's native type via `serde_json`.
/// Intended for use inside [`AssignFn`] implementations; a conversion
/// failure is reported as an invalid-format error naming the field.
pub fn decode_field<V: DeserializeOwned>(field: &str, value: &Value) -> Result<V> {
    serde_json::from_value(value.clone()).map_err(|err| Error::InvalidFormat {
        field: field.to_owned(),
        reason: err.to_string(),
    })
}

/// Converts a field's native value into its wire form. The emitted
/// value is always present; use [`encode_optional`] for fields that
/// should be omitted when unset.
pub fn encode_field<V: Serialize>(value: &V) -> Result<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

/// Like [`encode_field`], but omits the field entirely when the value
/// is `None`.
pub fn encode_optional<V: Serialize>(value: &Option<V>) -> Result<Option<Value>> {
    match value {
        Some(v) => encode_field(v),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{decode_field, encode_optional, EnumShape, Mixin};
    use crate::error::Error;
    use serde_json::{json, Value};

    #[test]
    fn decode_reports_field_name_on_mismatch() {
        let err = decode_field::<i64>("id", &json!("not a number")).unwrap_err();
        match err {
            Error::InvalidFormat { field, .. } => assert_eq!(field, "id"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn encode_optional_omits_none() {
        let absent: Option<String> = None;
        assert_eq!(encode_optional(&absent).unwrap(), None);
        assert_eq!(
            encode_optional(&Some(3)).unwrap(),
            Some(Value::from(3))
        );
    }

    #[test]
    fn mixin_override_lookup() {
        let mixin = Mixin::new("SampleMixin")
            .ignoring("name")
            .renaming("id", "ident");
        assert!(mixin.override_for("name").unwrap().ignore);
        assert_eq!(
            mixin.override_for("id").unwrap().wire_name,
            Some("ident")
        );
        assert!(mixin.override_for("letter").is_none());
    }

    #[test]
    fn enum_shape_default_member() {
        let shape = EnumShape::new(&["A", "B"]).with_default("B");
        assert_eq!(shape.default_member, Some("B"));
        assert!(EnumShape::new(&["A"]).default_member.is_none());
    }
}
