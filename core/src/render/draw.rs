//! The four drawing primitives the grass images need, on top of the `svg`
//! crate: filled rectangles, text, translated groups, and saving.

use anyhow::{Context, Result};
use std::path::Path;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;

use crate::config::CanvasSize;

pub fn canvas(size: CanvasSize) -> Document {
    Document::new()
        .set("width", size.width)
        .set("height", size.height)
        .set("viewBox", format!("0 0 {} {}", size.width, size.height))
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: &str) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", fill)
}

pub fn text(x: f64, y: f64, content: &str) -> Text {
    Text::new(content).set("x", x).set("y", y)
}

pub fn translated(dx: f64, dy: f64) -> Group {
    Group::new().set("transform", format!("translate({}, {})", dx, dy))
}

pub fn save(path: &Path, document: &Document) -> Result<()> {
    svg::save(path, document).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_canvas_and_group() {
        let doc = canvas(CanvasSize {
            width: 100,
            height: 50,
        })
        .add(translated(50.0, 10.5).add(rect(-12.0, 0.0, 10.0, 5.0, "red")));
        let out = doc.to_string();

        assert!(out.contains(r#"viewBox="0 0 100 50""#));
        assert!(out.contains(r#"transform="translate(50, 10.5)""#));
        assert!(out.contains(r#"x="-12""#));
        assert!(out.contains(r#"fill="red""#));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let doc = canvas(CanvasSize {
            width: 10,
            height: 10,
        });
        save(&path, &doc).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("<svg"));

        let err = save(&dir.path().join("missing").join("out.svg"), &doc).unwrap_err();
        assert!(err.to_string().contains("writing"));
    }
}
