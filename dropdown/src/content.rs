//! Caller-supplied panel content.

use std::collections::BTreeMap;

use dropdom::{Element, Event, EventResult};

/// String key/value parameters handed to a [`ContentRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentProps {
    values: BTreeMap<String, String>,
}

impl ContentProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// `true`/`false`, `yes`/`no` and `1`/`0`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key)?.trim().parse().ok()
    }

    /// Comma-separated list with surrounding whitespace trimmed.
    pub fn get_list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// Renders what the opened panel shows.
///
/// Events targeted at elements inside the panel are offered to
/// [`on_event`](ContentRenderer::on_event) before the dropdown handles them.
/// Content that wants to keep its state across renders should give its
/// elements stable IDs.
pub trait ContentRenderer {
    fn render(&self, props: &ContentProps) -> Element;

    fn on_event(&mut self, _event: &Event, _props: &ContentProps) -> EventResult {
        EventResult::Ignored
    }
}

impl<F> ContentRenderer for F
where
    F: Fn(&ContentProps) -> Element,
{
    fn render(&self, props: &ContentProps) -> Element {
        self(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters() {
        let props = ContentProps::new()
            .with("searchable", "yes")
            .with("limit", " 12 ")
            .with("options", "apple, banana,,cherry ")
            .with("broken", "maybe");

        assert_eq!(props.get_bool("searchable"), Some(true));
        assert_eq!(props.get_bool("broken"), None);
        assert_eq!(props.get_u16("limit"), Some(12));
        assert_eq!(props.get_u16("options"), None);
        assert_eq!(props.get_list("options"), vec!["apple", "banana", "cherry"]);
        assert!(props.get_list("missing").is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let props: ContentProps = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert_eq!(props.iter().next(), Some(("a", "1")));
    }

    #[test]
    fn closures_render() {
        let renderer = |props: &ContentProps| Element::text(props.get("title").unwrap_or("-"));
        let element = renderer.render(&ContentProps::new().with("title", "Fruits"));
        assert_eq!(element.content, dropdom::Content::Text("Fruits".into()));
    }
}
