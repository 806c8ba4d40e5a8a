//! Tree dump formats behind one trait.

pub mod json;
pub mod sexp;

use anyhow::{anyhow, Result};
use apidoc::Document;

/// Writes a parsed Document in one dump format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;

    /// Dump several documents to one stream, each labelled with its source.
    fn render_many(&self, docs: &[(String, Document)]) -> Result<String> {
        let mut out = String::new();
        for (source, doc) in docs {
            out.push_str(&format!(";; {}\n", source));
            out.push_str(&self.render(doc)?);
        }
        Ok(out)
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "sexp" | "tree" => Ok(Box::new(sexp::SexpRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use sexp or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("sexp").unwrap().file_extension(), "sexp");
        assert_eq!(create_renderer("tree").unwrap().file_extension(), "sexp");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format"));
    }

    #[test]
    fn render_many_labels_sources() {
        let docs = vec![
            ("a.js".to_string(), Document::default()),
            ("b.js".to_string(), Document::default()),
        ];
        let out = create_renderer("sexp").unwrap().render_many(&docs).unwrap();
        assert_eq!(out, ";; a.js\n(source_file)\n;; b.js\n(source_file)\n");
    }
}
