//! Behavioral patterns: chain of responsibility, strategy, template method.

pub mod chain;
pub mod strategy;
pub mod template_method;
