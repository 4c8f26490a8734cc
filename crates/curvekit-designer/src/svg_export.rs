//! SVG output for the edited path
//!
//! Produces the path-description string consumed by renderers and the
//! standalone SVG document used for export.

use std::fs;

use curvekit_core::constants::EXPORT_EXTENT;
use curvekit_core::Result;
use tracing::info;

use crate::model::Path;

const STROKE_COLOR: &str = "#1f2937";
const STROKE_WIDTH: f64 = 2.0;
const FILL_COLOR: &str = "#3b82f6";
const FILL_OPACITY: f64 = 0.25;

/// Builds the SVG path data for `path`.
///
/// `M x y`, then one `C` per segment (start node's outgoing handle, end node's
/// incoming handle, end anchor), then `Z` when closed. An empty path yields an
/// empty string.
pub fn path_description(path: &Path) -> String {
    let Some(first) = path.nodes().first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.anchor.x, first.anchor.y);
    for curve in path.segments() {
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            curve.p1.x, curve.p1.y, curve.p2.x, curve.p2.y, curve.p3.x, curve.p3.y
        ));
    }
    if path.is_closed() {
        d.push_str(" Z");
    }
    d
}

/// Wraps path data in a standalone SVG document.
///
/// The canvas is `EXPORT_EXTENT` square. Closed paths get a translucent fill;
/// open paths are stroke only.
pub fn export_document(description: &str, closed: bool) -> String {
    let fill = if closed {
        format!(r#"fill="{}" fill-opacity="{}""#, FILL_COLOR, FILL_OPACITY)
    } else {
        r#"fill="none""#.to_string()
    };

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{e}" height="{e}" viewBox="0 0 {e} {e}">"#,
            "\n",
            r#"  <path d="{d}" stroke="{stroke}" stroke-width="{width}" {fill}/>"#,
            "\n",
            "</svg>\n"
        ),
        e = EXPORT_EXTENT,
        d = description,
        stroke = STROKE_COLOR,
        width = STROKE_WIDTH,
        fill = fill,
    )
}

/// Writes an exported document to disk.
pub fn write_document(file: &std::path::Path, document: &str) -> Result<()> {
    fs::write(file, document)?;
    info!("Exported SVG to {}", file.display());
    Ok(())
}
