//! Creational patterns: singleton, builder, factory, factory method, prototype.

pub mod builder;
pub mod factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
