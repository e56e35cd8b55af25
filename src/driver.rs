// Demonstration driver: runs the selected examples in order and writes the
// transcript to any `io::Write`.

use std::io::Write;

use colored::Colorize;

use crate::catalog::Pattern;
use crate::context::DemoContext;
use crate::error::DemoError;

pub const BANNER: &str = "=== Design Patterns Examples ===";

pub struct Driver {
    color: bool,
}

impl Driver {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, pattern: Pattern) -> String {
        let heading = format!("{}:", pattern);
        if self.color {
            heading.bold().cyan().to_string()
        } else {
            heading
        }
    }

    fn banner(&self) -> String {
        if self.color {
            BANNER.bold().green().to_string()
        } else {
            BANNER.to_string()
        }
    }

    pub fn run(
        &self,
        patterns: &[Pattern],
        ctx: &mut DemoContext,
        out: &mut impl Write,
    ) -> Result<(), DemoError> {
        writeln!(out, "{}", self.banner())?;

        for pattern in patterns {
            tracing::debug!(pattern = %pattern.slug(), "running example");
            writeln!(out)?;
            writeln!(out, "{}", self.heading(*pattern))?;
            for line in pattern.run(ctx) {
                writeln!(out, "{}", line)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    pub fn list(&self, out: &mut impl Write) -> Result<(), DemoError> {
        for pattern in Pattern::ALL {
            let slug = if self.color {
                pattern.slug().bold().to_string()
            } else {
                pattern.slug()
            };
            writeln!(out, "{:>2}. {} ({})", pattern.number(), slug, pattern.family())?;
        }
        Ok(())
    }
}
