use crate::config::MapperConfig;
use crate::descriptor::JsonShape;
use crate::error::Result;
use crate::naming::NamingStrategy;

use serde_json::Value;
use std::any::TypeId;

mod internal;
use internal::ResolvedType;

/// This is the entry point to the crate. Given a [`MapperConfig`], it
/// builds the one shared [`Mapper`] the serialization layer hands to
/// its callers. Construction is a pure transformation of the
/// configuration and cannot fail; every policy error a target type's
/// descriptor can trigger (an enum field with no default member, a
/// raising catch-all handler) surfaces at parse time, from the parse
/// call that hits it.
///
/// The configuration is copied into the mapper, so the mapper never
/// observes changes made to the original value afterwards. The
/// resulting mapper holds no interior mutability and is safe to share
/// across threads for both reading and writing.
///
/// [`MapperConfig`]: crate::config::MapperConfig
pub fn create_mapper(config: MapperConfig) -> Mapper {
    Mapper::new(config)
}

/// A JSON mapper with a fixed policy: naming strategy, mixin
/// overlays, unknown-field handling, and enum fallback are all
/// decided by the [`MapperConfig`] it was created from.
///
/// [`MapperConfig`]: crate::config::MapperConfig
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Mapper { config }
    }

    pub fn naming_strategy(&self) -> NamingStrategy {
        self.config.naming_strategy
    }

    /// Number of mixin overlays registered with this mapper.
    pub fn mixin_count(&self) -> usize {
        self.config.mixins.len()
    }

    /// The name of the annotation-source type registered as the
    /// overlay for target type `T`, if one was configured.
    pub fn mixin_for<T: 'static>(&self) -> Option<&'static str> {
        self.config.mixins.get(&TypeId::of::<T>()).map(|m| m.source)
    }

    /// Parses a JSON text into a `T`. Recognized fields are bound
    /// through the type's descriptor; unknown fields and
    /// unrecognized enum literals are handled per this mapper's
    /// policy.
    pub fn read_value<T: JsonShape + 'static>(&self, text: &str) -> Result<T> {
        let value: Value = serde_json::from_str(text)?;
        self.read_json_value(&value)
    }

    /// Like [`read_value`], for callers already holding a parsed
    /// document.
    ///
    /// [`read_value`]: Mapper::read_value()
    pub fn read_json_value<T: JsonShape + 'static>(&self, value: &Value) -> Result<T> {
        self.resolved::<T>().read(value, &self.config)
    }

    /// Writes a `T` as JSON text. The naming strategy and any mixin
    /// renames apply to the emitted keys; ignored fields and fields
    /// whose emit function returns `None` are omitted.
    pub fn write_value<T: JsonShape + 'static>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json_value(value)?)?)
    }

    /// Like [`write_value`], but stops at the document form.
    ///
    /// [`write_value`]: Mapper::write_value()
    pub fn to_json_value<T: JsonShape + 'static>(&self, value: &T) -> Result<Value> {
        self.resolved::<T>().write(value)
    }

    fn resolved<T: JsonShape + 'static>(&self) -> ResolvedType<T> {
        ResolvedType::resolve(
            T::descriptor(),
            self.config.mixins.get(&TypeId::of::<T>()),
            self.config.naming_strategy,
        )
    }
}
