//! Nested render parameters with dotted-path resolution.

use serde::Serialize;
use std::collections::BTreeMap;

/// One parameter value: text or a nested map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderParam {
    Text(String),
    Nested(RenderParams),
}

/// Parameter map passed to `Renderer::render`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderParams {
    entries: BTreeMap<String, RenderParam>,
}

impl RenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text parameter, replacing any previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries
            .insert(key.into(), RenderParam::Text(value.into()));
        self
    }

    /// Sets a nested parameter map under `key`.
    pub fn nest(&mut self, key: impl Into<String>, nested: RenderParams) -> &mut Self {
        self.entries.insert(key.into(), RenderParam::Nested(nested));
        self
    }

    pub fn get(&self, key: &str) -> Option<&RenderParam> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a `.`-separated path to its text value.
    ///
    /// Empty path segments are skipped, so `a..b` equals `a.b`. Returns `""`
    /// when any segment is missing or when the path ends on a nested map.
    pub fn resolve(&self, path: &str) -> &str {
        let mut segments = path.trim().split('.').filter(|segment| !segment.is_empty());
        let Some(first) = segments.next() else {
            return "";
        };

        let mut current = match self.entries.get(first) {
            Some(param) => param,
            None => return "",
        };
        for segment in segments {
            current = match current {
                RenderParam::Nested(nested) => match nested.entries.get(segment) {
                    Some(param) => param,
                    None => return "",
                },
                RenderParam::Text(_) => return "",
            };
        }

        match current {
            RenderParam::Text(value) => value.as_str(),
            RenderParam::Nested(_) => "",
        }
    }
}
