//! # Design Patterns Catalog
//!
//! Fourteen classic patterns, each as a small self-contained example:
//!
//! ## Creational
//! - Singleton (student registry)
//! - Builder (student)
//! - Factory (animals)
//! - Factory Method (games)
//! - Prototype (books)
//!
//! ## Structural
//! - Adapter (phone charger)
//! - Composite (university structure)
//! - Decorator (pizza toppings)
//! - Facade (home theater)
//! - Flyweight (character glyphs)
//! - Proxy (internet blocklist)
//!
//! ## Behavioral
//! - Chain of Responsibility (support desk)
//! - Strategy (transport)
//! - Template Method (daily routine)
//!
//! Run them all with:
//! ```bash
//! cargo run
//! cargo run -- --only decorator,proxy
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod context;
pub mod creational;
pub mod driver;
pub mod error;
pub mod structural;

pub use catalog::{Family, Pattern};
pub use config::DemoConfig;
pub use context::DemoContext;
pub use driver::Driver;
pub use error::DemoError;
