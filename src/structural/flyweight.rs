// Flyweight: glyphs are shared per (letter, font); only the size varies per use.

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    letter: char,
    font: String,
}

impl Glyph {
    pub fn display(&self, size: u32) -> String {
        format!("Character '{}' in {} font, size {}", self.letter, self.font, size)
    }
}

#[derive(Debug, Default)]
pub struct GlyphFactory {
    glyphs: HashMap<(char, String), Rc<Glyph>>,
}

impl GlyphFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&mut self, letter: char, font: &str) -> Rc<Glyph> {
        let key = (letter, font.to_string());
        if let Some(glyph) = self.glyphs.get(&key) {
            tracing::trace!(%letter, font, "glyph cache hit");
            return Rc::clone(glyph);
        }

        tracing::debug!(%letter, font, "creating glyph");
        let glyph = Rc::new(Glyph {
            letter,
            font: font.to_string(),
        });
        self.glyphs.insert(key, Rc::clone(&glyph));
        glyph
    }

    /// Number of distinct glyphs created so far.
    pub fn created(&self) -> usize {
        self.glyphs.len()
    }
}

pub fn demo(factory: &mut GlyphFactory) -> Vec<String> {
    let a1 = factory.glyph('A', "Arial");
    let a2 = factory.glyph('A', "Arial");
    vec![
        a1.display(12),
        a2.display(14),
        format!("Characters created: {}", factory.created()),
    ]
}
