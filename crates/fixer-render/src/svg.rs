//! SVG export of a display list.

use crate::renderer::DrawCommand;
use kurbo::Size;
use peniko::Color;
use std::fmt::Write;

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialize a display list as a standalone SVG document of the given size.
pub fn to_svg(commands: &[DrawCommand], size: Size) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        size.width, size.height, size.width, size.height
    );
    for command in commands {
        match command {
            // A fresh document is already clear.
            DrawCommand::Clear => {}
            DrawCommand::FillBackground(color) => {
                let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, hex(*color));
            }
            DrawCommand::Stroke {
                path,
                stroke,
                color,
            } => {
                let dash = if stroke.dash_pattern.is_empty() {
                    String::new()
                } else {
                    let pattern: Vec<String> =
                        stroke.dash_pattern.iter().map(|d| d.to_string()).collect();
                    format!(r#" stroke-dasharray="{}""#, pattern.join(" "))
                };
                let _ = writeln!(
                    out,
                    r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
                    path.to_svg(),
                    hex(*color),
                    stroke.width,
                    dash
                );
            }
            DrawCommand::Text {
                position,
                lines,
                font_size,
                line_height,
                color,
            } => {
                for (i, line) in lines.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        r#"  <text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
                        position.x,
                        position.y + i as f64 * line_height,
                        font_size,
                        hex(*color),
                        escape(line)
                    );
                }
            }
        }
    }
    out.push_str("</svg>\n");
    out
}
