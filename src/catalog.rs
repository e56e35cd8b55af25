// Catalog of the fourteen pattern examples, in the order the driver runs them.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::behavioral::{chain, strategy, template_method};
use crate::context::DemoContext;
use crate::creational::{builder, factory, factory_method, prototype, singleton};
use crate::error::DemoError;
use crate::structural::{adapter, composite, decorator, facade, flyweight, proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Family::Creational => "creational",
            Family::Structural => "structural",
            Family::Behavioral => "behavioral",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Pattern {
    Singleton,
    Builder,
    Factory,
    FactoryMethod,
    Prototype,
    Adapter,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
    ChainOfResponsibility,
    Strategy,
    TemplateMethod,
}

impl Pattern {
    pub const ALL: [Pattern; 14] = [
        Pattern::Singleton,
        Pattern::Builder,
        Pattern::Factory,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Adapter,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
        Pattern::ChainOfResponsibility,
        Pattern::Strategy,
        Pattern::TemplateMethod,
    ];

    /// 1-based position in the demonstration.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Pattern::Singleton => "SINGLETON",
            Pattern::Builder => "BUILDER",
            Pattern::Factory => "FACTORY",
            Pattern::FactoryMethod => "FACTORY METHOD",
            Pattern::Prototype => "PROTOTYPE",
            Pattern::Adapter => "ADAPTER",
            Pattern::Composite => "COMPOSITE",
            Pattern::Decorator => "DECORATOR",
            Pattern::Facade => "FACADE",
            Pattern::Flyweight => "FLYWEIGHT",
            Pattern::Proxy => "PROXY",
            Pattern::ChainOfResponsibility => "CHAIN OF RESPONSIBILITY",
            Pattern::Strategy => "STRATEGY",
            Pattern::TemplateMethod => "TEMPLATE METHOD",
        }
    }

    pub fn slug(self) -> String {
        self.title().to_ascii_lowercase().replace(' ', "-")
    }

    pub fn family(self) -> Family {
        match self {
            Pattern::Singleton
            | Pattern::Builder
            | Pattern::Factory
            | Pattern::FactoryMethod
            | Pattern::Prototype => Family::Creational,
            Pattern::Adapter
            | Pattern::Composite
            | Pattern::Decorator
            | Pattern::Facade
            | Pattern::Flyweight
            | Pattern::Proxy => Family::Structural,
            Pattern::ChainOfResponsibility | Pattern::Strategy | Pattern::TemplateMethod => {
                Family::Behavioral
            }
        }
    }

    /// Runs the example and returns the lines it prints.
    pub fn run(self, ctx: &mut DemoContext) -> Vec<String> {
        match self {
            Pattern::Singleton => singleton::demo(&ctx.campus),
            Pattern::Builder => builder::demo(),
            Pattern::Factory => factory::demo(),
            Pattern::FactoryMethod => factory_method::demo(),
            Pattern::Prototype => prototype::demo(),
            Pattern::Adapter => adapter::demo(),
            Pattern::Composite => composite::demo(),
            Pattern::Decorator => decorator::demo(),
            Pattern::Facade => facade::demo(),
            Pattern::Flyweight => flyweight::demo(&mut ctx.glyphs),
            Pattern::Proxy => proxy::demo(&ctx.blocked_sites),
            Pattern::ChainOfResponsibility => chain::demo(),
            Pattern::Strategy => strategy::demo(),
            Pattern::TemplateMethod => template_method::demo(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

impl FromStr for Pattern {
    type Err = DemoError;

    /// Accepts the slug (`chain-of-responsibility`) or the number (`12`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.slug() == wanted || pattern.number().to_string() == wanted)
            .ok_or_else(|| DemoError::UnknownPattern(s.to_string()))
    }
}

impl TryFrom<String> for Pattern {
    type Error = DemoError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_driver_order() {
        for (index, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.number(), index + 1);
        }
    }

    #[test]
    fn test_slugs() {
        assert_eq!(Pattern::Singleton.slug(), "singleton");
        assert_eq!(Pattern::FactoryMethod.slug(), "factory-method");
        assert_eq!(Pattern::ChainOfResponsibility.slug(), "chain-of-responsibility");
    }

    #[test]
    fn test_from_str_slug_and_number() {
        assert_eq!("proxy".parse::<Pattern>().unwrap(), Pattern::Proxy);
        assert_eq!("Template-Method".parse::<Pattern>().unwrap(), Pattern::TemplateMethod);
        assert_eq!("12".parse::<Pattern>().unwrap(), Pattern::ChainOfResponsibility);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "visitor".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, DemoError::UnknownPattern(ref name) if name == "visitor"));
        assert!("0".parse::<Pattern>().is_err());
        assert!("15".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_try_from_matches_from_str() {
        for name in ["proxy", "PROXY", "11"] {
            assert_eq!(Pattern::try_from(name.to_string()).unwrap(), Pattern::Proxy);
        }
        assert!(Pattern::try_from("visitor".to_string()).is_err());
    }

    #[test]
    fn test_families() {
        let count = |family| Pattern::ALL.iter().filter(|p| p.family() == family).count();
        assert_eq!(count(Family::Creational), 5);
        assert_eq!(count(Family::Structural), 6);
        assert_eq!(count(Family::Behavioral), 3);
    }

    #[test]
    fn test_heading_display() {
        assert_eq!(Pattern::Singleton.to_string(), "1. SINGLETON");
        assert_eq!(Pattern::TemplateMethod.to_string(), "14. TEMPLATE METHOD");
    }

    #[test]
    fn test_every_pattern_prints_something() {
        let mut ctx = DemoContext::new(&crate::config::DemoConfig::default());
        for pattern in Pattern::ALL {
            assert!(!pattern.run(&mut ctx).is_empty(), "{} printed nothing", pattern);
        }
    }
}
