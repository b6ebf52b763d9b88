// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of recorded draw commands.

use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use vizir_sections::DrawCommand;
use vizir_text::{FontWeight, TextAnchor};

pub(crate) fn to_svg_string(view_box: Rect, commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );
    out.push('\n');

    let mut clip_id = 0;
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, paint } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                write_paint_attr(&mut out, "fill", paint);
                out.push_str("/>\n");
            }
            DrawCommand::StrokeLine { line, paint, width } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{width}""#,
                    line.p0.x, line.p0.y, line.p1.x, line.p1.y
                );
                write_paint_attr(&mut out, "stroke", paint);
                out.push_str("/>\n");
            }
            DrawCommand::Text {
                text,
                position,
                anchor,
                angle,
                style,
                fill,
            } => {
                let (text_anchor, baseline) = svg_anchor(*anchor);
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="{text_anchor}" dominant-baseline="{baseline}""#,
                    position.x,
                    position.y,
                    style.font_size,
                    escape_xml(style.font_family.as_css_family()),
                );
                if style.font_weight != FontWeight::NORMAL {
                    let _ = write!(out, r#" font-weight="{}""#, style.font_weight.0);
                }
                if *angle != 0.0 {
                    let _ = write!(
                        out,
                        r#" transform="rotate({} {} {})""#,
                        angle.to_degrees(),
                        position.x,
                        position.y
                    );
                }
                write_paint_attr(&mut out, "fill", fill);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
            DrawCommand::PushClip(rect) => {
                clip_id += 1;
                let _ = writeln!(
                    out,
                    r#"<clipPath id="clip{clip_id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                let _ = writeln!(out, r#"<g clip-path="url(#clip{clip_id})">"#);
            }
            DrawCommand::PopClip => out.push_str("</g>\n"),
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_anchor(anchor: TextAnchor) -> (&'static str, &'static str) {
    let horizontal = match anchor {
        TextAnchor::TopLeft | TextAnchor::CenterLeft | TextAnchor::BottomLeft => "start",
        TextAnchor::TopCenter | TextAnchor::Center | TextAnchor::BottomCenter => "middle",
        TextAnchor::TopRight | TextAnchor::CenterRight | TextAnchor::BottomRight => "end",
    };
    let vertical = match anchor {
        TextAnchor::TopLeft | TextAnchor::TopCenter | TextAnchor::TopRight => "text-before-edge",
        TextAnchor::CenterLeft | TextAnchor::Center | TextAnchor::CenterRight => "central",
        TextAnchor::BottomLeft | TextAnchor::BottomCenter | TextAnchor::BottomRight => {
            "text-after-edge"
        }
    };
    (horizontal, vertical)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
