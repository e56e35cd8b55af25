//! Structural patterns: adapter, composite, decorator, facade, flyweight, proxy.

pub mod adapter;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
