//! A centrally-configured JSON mapper for typed API objects.
//!
//! This crate sits between an HTTP API layer and the `serde_json`
//! engine. The API layer needs one shared, long-lived way to turn
//! request and response bodies into typed objects, while letting each
//! deployment customize a handful of cross-cutting behaviors:
//! the field-naming convention on the wire, annotation overlays
//! ("mixins") applied to types it does not own, what happens to
//! unknown input fields, and what happens to unrecognized enum
//! literals.
//!
//! Those four switches live in a [`MapperConfig`]. Build one, call
//! zero or more of its fluent setters, and hand it to
//! [`create_mapper`]; the resulting [`Mapper`] is immutable in its
//! policy and safe to share between threads for the life of the
//! process.
//!
//! The mapper does not reflect over your types. Instead each mappable
//! type implements [`JsonShape`] and describes itself with a
//! [`TypeDescriptor`]: its fields, their wire-name overrides, which
//! fields are enums and what their members and default member are,
//! and an optional catch-all handler for fields the type does not
//! declare. Mixins are descriptors of the same kind, registered
//! against a target type through the configuration rather than
//! declared on it.
//!
//! Parsing and writing both go through the `serde_json` [`Value`]
//! document form, so the actual JSON reading and writing is entirely
//! `serde_json`'s business. This crate only decides how field names,
//! unknown fields, and enum fallbacks are resolved on the way
//! through.
//!
//! [`MapperConfig`]: crate::config::MapperConfig
//! [`create_mapper`]: crate::mapper::create_mapper()
//! [`Mapper`]: crate::mapper::Mapper
//! [`JsonShape`]: crate::descriptor::JsonShape
//! [`TypeDescriptor`]: crate::descriptor::TypeDescriptor
//! [`Value`]: serde_json::Value

pub mod config;
pub mod descriptor;
pub mod error;
pub mod mapper;
pub mod naming;

pub use config::MapperConfig;
pub use descriptor::{EnumShape, FieldDescriptor, FieldOverride, JsonShape, Mixin, TypeDescriptor};
pub use error::{Error, Result};
pub use mapper::{create_mapper, Mapper};
pub use naming::NamingStrategy;
