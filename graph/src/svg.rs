//! Connector overlay markup.
//!
//! The canvas draws connectors as a single `<svg>` element stacked between
//! the zone layer and the node layer. The markup is rebuilt from the node
//! list on every change and injected verbatim by the client, so this module
//! produces the complete element: arrowhead marker defs plus one `<path>`
//! per connector.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::consts::CONNECTOR_STROKE;
use crate::geometry::connectors;
use crate::model::TopicNode;

/// The full connector overlay for the current node list, sized to the
/// canvas surface.
///
/// The element ignores pointer events so drags pass through to the
/// entities beneath it.
#[must_use]
pub fn overlay_svg(nodes: &[TopicNode], width: f64, height: f64) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"position:absolute;inset:0;pointer-events:none\">",
    ));

    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<marker id=\"arrowhead\" markerWidth=\"10\" markerHeight=\"10\" refX=\"9\" refY=\"3\" orient=\"auto\"><polygon points=\"0 0, 10 3, 0 6\" fill=\"{CONNECTOR_STROKE}\"/></marker>",
    ));
    svg.push_str("</defs>");

    for connector in connectors(nodes) {
        svg.push_str(&format!(
            "<path d=\"{}\" stroke=\"{CONNECTOR_STROKE}\" stroke-width=\"2\" fill=\"none\" marker-end=\"url(#arrowhead)\"/>",
            connector.path
        ));
    }

    svg.push_str("</svg>");
    svg
}
