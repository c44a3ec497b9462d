/// An ordered set of inline CSS property writes for one element.
///
/// Every effect describes its visual change as a patch; the DOM layer applies
/// patches through a single function, so no handler writes styles directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    entries: Vec<(&'static str, String)>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_writes_replace_earlier_ones_in_place() {
        let patch = StylePatch::new()
            .set("opacity", "0")
            .set("transform", "translateY(30px)")
            .set("opacity", "1");

        assert_eq!(patch.entries().len(), 2);
        assert_eq!(patch.entries()[0], ("opacity", "1".to_string()));
        assert_eq!(patch.get("transform"), Some("translateY(30px)"));
        assert_eq!(patch.get("width"), None);
    }
}
