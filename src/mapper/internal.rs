use crate::config::MapperConfig;
use crate::descriptor::{AnySetterFn, EnumShape, FieldDescriptor, FieldKind, Mixin, TypeDescriptor};
use crate::error::{Error, Result};
use crate::naming::NamingStrategy;

use log::{error, trace};
use serde_json::{Map, Value};

/// A type descriptor after policy resolution: every field carries its
/// effective wire name and effective ignored flag, with the mixin
/// overlay (if any) and the naming strategy already folded in.
pub(super) struct ResolvedType<T> {
    name: &'static str,
    fields: Vec<ResolvedField<T>>,
    any_setter: Option<AnySetterFn<T>>,
}

struct ResolvedField<T> {
    wire_name: String,
    ignored: bool,
    descriptor: FieldDescriptor<T>,
}

impl<T> ResolvedType<T> {
    pub(super) fn resolve(
        descriptor: TypeDescriptor<T>,
        mixin: Option<&Mixin>,
        naming: NamingStrategy,
    ) -> Self {
        let any_setter = descriptor.any_setter;
        let fields = descriptor
            .fields
            .into_iter()
            .map(|field| {
                let overlay = mixin.and_then(|m| m.override_for(field.name));
                // Precedence: mixin rename, then the field's own wire
                // name, then the strategy's derived name.
                let wire_name = overlay
                    .and_then(|o| o.wire_name)
                    .or(field.wire_name)
                    .map(str::to_owned)
                    .unwrap_or_else(|| naming.apply(field.name));
                let ignored = field.ignored || overlay.map(|o| o.ignore).unwrap_or(false);
                ResolvedField {
                    wire_name,
                    ignored,
                    descriptor: field,
                }
            })
            .collect();
        ResolvedType {
            name: descriptor.name,
            fields,
            any_setter,
        }
    }

    pub(super) fn read(&self, value: &Value, config: &MapperConfig) -> Result<T>
    where
        T: Default,
    {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::UnexpectedShape {
                    type_name: self.name,
                    got: json_kind(other),
                })
            }
        };

        let mut out = T::default();
        for (key, field_value) in object {
            match self.fields.iter().find(|f| f.wire_name == *key) {
                Some(field) if field.ignored => {
                    trace!("skipping ignored field `{}` on `{}`", key, self.name);
                }
                Some(field) => self.bind(&mut out, field, key, field_value, config)?,
                None => self.unknown_field(&mut out, key, field_value, config)?,
            }
        }
        Ok(out)
    }

    fn bind(
        &self,
        out: &mut T,
        field: &ResolvedField<T>,
        key: &str,
        value: &Value,
        config: &MapperConfig,
    ) -> Result<()> {
        trace!("binding field `{}` on `{}`", key, self.name);
        match &field.descriptor.kind {
            FieldKind::Plain => (field.descriptor.assign)(out, value),
            FieldKind::Enum(shape) => {
                let member = self.resolve_enum_literal(field, shape, key, value, config)?;
                (field.descriptor.assign)(out, &Value::String(member.to_owned()))
            }
        }
    }

    /// Applies the enum-fallback policy. A literal matching a
    /// declared member passes through in either mode; anything else,
    /// including null and the empty string, resolves to the default
    /// member or fails depending on the configuration.
    fn resolve_enum_literal(
        &self,
        field: &ResolvedField<T>,
        shape: &EnumShape,
        key: &str,
        value: &Value,
        config: &MapperConfig,
    ) -> Result<&'static str> {
        let literal = match value {
            Value::String(literal) => literal.as_str(),
            Value::Null => "",
            other => {
                return Err(Error::InvalidFormat {
                    field: key.to_owned(),
                    reason: format!("expected a string, got {}", json_kind(other)),
                })
            }
        };

        if let Some(member) = shape.members.iter().copied().find(|m| *m == literal) {
            return Ok(member);
        }

        if config.disable_unknown_enum_default {
            return Err(Error::InvalidFormat {
                field: key.to_owned(),
                reason: format!("unrecognized enum value `{}`", literal),
            });
        }

        trace!(
            "falling back to default member for `{}` on `{}`, got `{}`",
            key,
            self.name,
            literal
        );
        shape.default_member.ok_or(Error::NoDefaultMember {
            type_name: self.name,
            field: field.descriptor.name,
        })
    }

    fn unknown_field(
        &self,
        out: &mut T,
        key: &str,
        value: &Value,
        config: &MapperConfig,
    ) -> Result<()> {
        if config.ignore_any_setter {
            trace!("discarding unknown field `{}` on `{}`", key, self.name);
            return Ok(());
        }
        match self.any_setter {
            Some(handler) => handler(out, key, value).map_err(|err| {
                error!(
                    "catch-all handler for `{}` failed on field `{}`: {}",
                    self.name, key, err
                );
                err
            }),
            None => {
                trace!("no catch-all handler on `{}`, dropping `{}`", self.name, key);
                Ok(())
            }
        }
    }

    pub(super) fn write(&self, value: &T) -> Result<Value> {
        let mut object = Map::new();
        for field in &self.fields {
            if field.ignored {
                continue;
            }
            if let Some(emitted) = (field.descriptor.emit)(value)? {
                object.insert(field.wire_name.clone(), emitted);
            }
        }
        Ok(Value::Object(object))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
