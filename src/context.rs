use crate::config::DemoConfig;
use crate::creational::singleton::Campus;
use crate::structural::flyweight::GlyphFactory;

/// State shared by the examples for one run, owned by the caller instead of
/// living in statics.
pub struct DemoContext {
    pub campus: Campus,
    pub glyphs: GlyphFactory,
    pub blocked_sites: Vec<String>,
}

impl DemoContext {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            campus: Campus::new(config.school_name.clone()),
            glyphs: GlyphFactory::new(),
            blocked_sites: config.blocked_sites.clone(),
        }
    }
}
