//! JSON dump of the Document model, serialized with serde.
//!
//! Entries are tagged by `kind`; `ty` fields are written as `type`.

use crate::render::Renderer;
use anyhow::{Context, Result};
use apidoc::Document;
use serde_json::{Map, Value};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    /// One object keyed by source path.
    fn render_many(&self, docs: &[(String, Document)]) -> Result<String> {
        let mut map = Map::new();
        for (source, doc) in docs {
            let value = serde_json::to_value(doc)
                .with_context(|| format!("failed to serialize {}", source))?;
            map.insert(source.clone(), value);
        }
        let mut out = serde_json::to_string_pretty(&Value::Object(map))?;
        out.push('\n');
        Ok(out)
    }
}
