//! SVG serialization of a positioned [`LayoutModel`].
//!
//! Output is a pure function of the model and options: numbers are printed with JS-compatible
//! shortest round-trip formatting and items are written in list order.

use crate::model::{ArrowItem, LayoutModel, NameBadgeItem, RenderItem, ShieldItem, TextItem};
use base64::Engine as _;
use signwright_core::config::colors;
use signwright_core::{Direction, HBox};
use std::fmt::Write as _;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

const FONT_FAMILY: &str = "Arial, sans-serif";

#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderOptions {
    pub background_color: String,
    pub include_grid: bool,
    /// Emits a guides marker comment; no guide geometry is drawn.
    pub include_guides: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            background_color: colors::SIGN_GREEN.to_string(),
            include_grid: false,
            include_guides: false,
        }
    }
}

/// Triangular head plus rectangular bar of a direction arrow, in the item's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Tip first, then the two base corners.
    pub head: [(f64, f64); 3],
    pub bar: HBox,
}

pub fn arrow_geometry(x: f64, y: f64, w: f64, h: f64, direction: Direction) -> ArrowGeometry {
    match direction {
        Direction::Left | Direction::Right => {
            let head_w = w * 0.4;
            let head_h = h * 0.8;
            let head_y = y + (h - head_h) / 2.0;
            let bar_w = w * 0.6;
            let bar_h = h * 0.3;
            let bar_y = y + (h - bar_h) / 2.0;
            if direction == Direction::Left {
                let base_x = x + head_w;
                ArrowGeometry {
                    head: [
                        (x, y + h / 2.0),
                        (base_x, head_y),
                        (base_x, head_y + head_h),
                    ],
                    bar: HBox {
                        x: base_x,
                        y: bar_y,
                        w: bar_w,
                        h: bar_h,
                    },
                }
            } else {
                let base_x = x + bar_w;
                ArrowGeometry {
                    head: [
                        (base_x + head_w, y + h / 2.0),
                        (base_x, head_y),
                        (base_x, head_y + head_h),
                    ],
                    bar: HBox {
                        x,
                        y: bar_y,
                        w: bar_w,
                        h: bar_h,
                    },
                }
            }
        }
        Direction::Forward => {
            let head_w = w * 0.8;
            let head_h = h * 0.4;
            let head_x = x + (w - head_w) / 2.0;
            let bar_w = w * 0.3;
            let bar_h = h * 0.6;
            ArrowGeometry {
                head: [
                    (x + w / 2.0, y),
                    (head_x, y + head_h),
                    (head_x + head_w, y + head_h),
                ],
                bar: HBox {
                    x: x + (w - bar_w) / 2.0,
                    y: y + head_h,
                    w: bar_w,
                    h: bar_h,
                },
            }
        }
    }
}

pub fn render_svg(model: &LayoutModel, options: &SvgRenderOptions) -> String {
    let w = fmt(model.board.w);
    let h = fmt(model.board.h);

    let mut out = String::with_capacity(256 + model.items.len() * 192);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        &mut out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
    );
    out.push_str("  <!-- Background -->\n");
    let _ = writeln!(
        &mut out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}" rx="8" />"#,
        escape_xml(&options.background_color)
    );
    out.push_str("  \n");

    if options.include_grid {
        out.push_str(concat!(
            "  <!-- Grid -->\n",
            "  <defs>\n",
            "    <pattern id=\"grid\" width=\"20\" height=\"20\" patternUnits=\"userSpaceOnUse\">\n",
            "      <path d=\"M 20 0 L 0 0 0 20\" fill=\"none\" stroke=\"rgba(255,255,255,0.1)\" stroke-width=\"0.5\"/>\n",
            "    </pattern>\n",
            "  </defs>\n",
            "  <rect width=\"100%\" height=\"100%\" fill=\"url(#grid)\" />\n",
            "  \n",
        ));
    }

    for item in &model.items {
        match item {
            RenderItem::Text(t) => render_text(&mut out, t, "white"),
            RenderItem::RoadNumber(t) => render_text(&mut out, t, colors::SIGN_YELLOW),
            RenderItem::RoadName(b) => render_road_name(&mut out, b),
            RenderItem::Arrow(a) => render_arrow(&mut out, a),
            RenderItem::Shield(s) => render_shield(&mut out, s),
        }
    }

    if options.include_guides {
        out.push_str("  <!-- Guides -->\n");
    }

    out.push_str("</svg>");
    out
}

/// `data:image/svg+xml;base64,...` for embedding in documents.
pub fn to_data_url(model: &LayoutModel, options: &SvgRenderOptions) -> String {
    let svg = render_svg(model, options);
    format!(
        "data:{SVG_MIME_TYPE};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(svg.as_bytes())
    )
}

fn render_text(out: &mut String, t: &TextItem, fill: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" font-size="{}" font-family="{FONT_FAMILY}" fill="{fill}" font-weight="bold">{}</text>"#,
        fmt(t.x),
        fmt(t.y),
        fmt(t.font_size),
        escape_xml(&t.text)
    );
}

// Badge rectangle plus a label centered on it; the `/3` nudges the baseline to optical center.
fn render_badge(out: &mut String, id: &str, bounds: HBox, font_size: f64, label: &str) {
    let HBox { x, y, w, h } = bounds;
    let _ = writeln!(out, r#"  <g id="{id}">"#);
    let _ = writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="white" rx="4" />"#,
        fmt(x),
        fmt(y),
        fmt(w),
        fmt(h)
    );
    let _ = writeln!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" font-family="{FONT_FAMILY}" fill="black" font-weight="bold" text-anchor="middle">{}</text>"#,
        fmt(x + w / 2.0),
        fmt(y + h / 2.0 + font_size / 3.0),
        fmt(font_size),
        escape_xml(label)
    );
    out.push_str("  </g>\n");
}

fn render_road_name(out: &mut String, b: &NameBadgeItem) {
    let bounds = HBox {
        x: b.x,
        y: b.y,
        w: b.w,
        h: b.h,
    };
    render_badge(out, "roadName", bounds, b.font_size, &b.text);
}

fn render_shield(out: &mut String, s: &ShieldItem) {
    let bounds = HBox {
        x: s.x,
        y: s.y,
        w: s.w,
        h: s.h,
    };
    render_badge(out, "shield", bounds, s.h * 0.4, &s.label);
}

fn render_arrow(out: &mut String, a: &ArrowItem) {
    let geom = arrow_geometry(a.x, a.y, a.w, a.h, a.direction);
    let [tip, p1, p2] = geom.head;
    let polygon = format!(
        r#"    <polygon points="{},{} {},{} {},{}" fill="white" />"#,
        fmt(tip.0),
        fmt(tip.1),
        fmt(p1.0),
        fmt(p1.1),
        fmt(p2.0),
        fmt(p2.1)
    );
    let bar = format!(
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="white" />"#,
        fmt(geom.bar.x),
        fmt(geom.bar.y),
        fmt(geom.bar.w),
        fmt(geom.bar.h)
    );

    out.push_str("  <g id=\"arrow\">\n");
    // Right arrows draw the bar first so the head overlaps it.
    let (first, second) = match a.direction {
        Direction::Right => (bar, polygon),
        Direction::Left | Direction::Forward => (polygon, bar),
    };
    out.push_str(&first);
    out.push('\n');
    out.push_str(&second);
    out.push('\n');
    out.push_str("  </g>\n");
}

/// JS `Number#toString()` formatting; non-finite values print as `0`.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let mut buf = ryu_js::Buffer::new();
    buf.format_finite(v).to_string()
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
