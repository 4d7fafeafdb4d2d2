//! The configuration value the mapper is created from.
//!
//! Built once at startup, optionally adjusted through the fluent
//! setters, then handed to [`create_mapper`]. Once a mapper has been
//! created from it the configuration must be treated as fixed; the
//! mapper keeps its own copy and never observes later changes.
//!
//! [`create_mapper`]: crate::mapper::create_mapper()

use crate::descriptor::Mixin;
use crate::naming::NamingStrategy;

use std::any::TypeId;
use std::collections::HashMap;

/// All four policy switches, with the permissive defaults: camel-case
/// names become snake-case on the wire, no mixins, catch-all handlers
/// are invoked, and unrecognized enum literals fall back to the
/// default member.
#[derive(Clone, Debug, Default)]
pub struct MapperConfig {
    pub(crate) naming_strategy: NamingStrategy,
    pub(crate) mixins: HashMap<TypeId, Mixin>,
    pub(crate) ignore_any_setter: bool,
    pub(crate) disable_unknown_enum_default: bool,
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming_strategy(mut self, strategy: NamingStrategy) -> Self {
        self.naming_strategy = strategy;
        self
    }

    /// Replaces the whole mixin table. Keys are the target types; at
    /// most one overlay per target.
    pub fn with_mixins(mut self, mixins: HashMap<TypeId, Mixin>) -> Self {
        self.mixins = mixins;
        self
    }

    /// Registers a single overlay for the target type `T`. A second
    /// call for the same target replaces the first.
    pub fn with_mixin<T: 'static>(mut self, mixin: Mixin) -> Self {
        self.mixins.insert(TypeId::of::<T>(), mixin);
        self
    }

    /// Suppresses catch-all handlers: unknown input fields are
    /// silently discarded instead of being handed to the target
    /// type's handler.
    pub fn ignore_any_setter(mut self) -> Self {
        self.ignore_any_setter = true;
        self
    }

    /// Disables the fallback-to-default-member behavior for
    /// unrecognized enum literals; they become invalid-format errors
    /// instead.
    pub fn disable_unknown_enum_default(mut self) -> Self {
        self.disable_unknown_enum_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MapperConfig;
    use crate::descriptor::Mixin;
    use crate::naming::NamingStrategy;
    use std::any::TypeId;

    struct Target;

    #[test]
    fn defaults_are_permissive() {
        let config = MapperConfig::new();
        assert_eq!(config.naming_strategy, NamingStrategy::CamelToSnake);
        assert!(config.mixins.is_empty());
        assert!(!config.ignore_any_setter);
        assert!(!config.disable_unknown_enum_default);
    }

    #[test]
    fn fluent_setters_compose() {
        let config = MapperConfig::new()
            .with_naming_strategy(NamingStrategy::Identity)
            .with_mixin::<Target>(Mixin::new("TargetMixin"))
            .ignore_any_setter()
            .disable_unknown_enum_default();
        assert_eq!(config.naming_strategy, NamingStrategy::Identity);
        assert_eq!(config.mixins.len(), 1);
        assert!(config.ignore_any_setter);
        assert!(config.disable_unknown_enum_default);
    }

    #[test]
    fn second_mixin_for_same_target_replaces_first() {
        let config = MapperConfig::new()
            .with_mixin::<Target>(Mixin::new("First"))
            .with_mixin::<Target>(Mixin::new("Second"));
        assert_eq!(config.mixins.len(), 1);
        assert_eq!(
            config.mixins.get(&TypeId::of::<Target>()).unwrap().source,
            "Second"
        );
    }
}
