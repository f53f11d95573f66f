use crate::color::Rgb;
use crate::constants::{DEFAULT_SECTION, DEFAULT_SECTION_COLORS};
use crate::error::AmbientResult;
use fnv::FnvHashMap;

/// Maps section ids to their ambient color.
///
/// Lookups for unknown ids resolve to the default section's color, so the
/// palette always yields a defined value.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: FnvHashMap<String, Rgb>,
    default_id: String,
    fallback: Rgb,
}

impl Palette {
    /// Build a palette from `(id, hex)` pairs. `default_id` should be one of
    /// the ids; if it is not, the first entry's color is used as fallback.
    pub fn from_hex_pairs<'a, I>(pairs: I, default_id: &str) -> AmbientResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut colors = FnvHashMap::default();
        let mut first = None;
        for (id, hex) in pairs {
            let color = Rgb::from_hex(hex)?;
            first.get_or_insert(color);
            colors.insert(id.to_string(), color);
        }
        let fallback = colors
            .get(default_id)
            .copied()
            .or(first)
            .unwrap_or_default();
        Ok(Self {
            colors,
            default_id: default_id.to_string(),
            fallback,
        })
    }

    pub fn insert(&mut self, id: impl Into<String>, color: Rgb) {
        let id = id.into();
        if id == self.default_id {
            self.fallback = color;
        }
        self.colors.insert(id, color);
    }

    #[inline]
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.colors.contains_key(id)
    }

    #[inline]
    pub fn color(&self, id: &str) -> Rgb {
        self.colors.get(id).copied().unwrap_or(self.fallback)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = FnvHashMap::default();
        for (id, hex) in DEFAULT_SECTION_COLORS {
            if let Ok(color) = Rgb::from_hex(hex) {
                colors.insert(id.to_string(), color);
            }
        }
        let fallback = colors.get(DEFAULT_SECTION).copied().unwrap_or_default();
        Self {
            colors,
            default_id: DEFAULT_SECTION.to_string(),
            fallback,
        }
    }
}
