//! Primitive SVG elements: pie wedges, legend swatches, text labels and cards.

use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, FontWeight, TextAnchor};
use crate::chart::FULL_CIRCLE;

/// Sweeps within this distance of 360° are drawn as a full disc.
const FULL_SWEEP_TOLERANCE: f64 = 1e-9;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// One pie slice positioned on the canvas.
///
/// Angles are degrees counter-clockwise from 3 o'clock; SVG's y axis points
/// down, so points are computed as `(cx + r·cos θ, cy − r·sin θ)`.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start: f64,
    pub sweep: f64,
    pub color: ChartColor,
    pub outline: ChartColor,
    /// Tooltip text
    pub label: String,
}

impl Wedge {
    fn point_at(&self, angle: f64) -> (f64, f64) {
        let radians = angle.to_radians();
        (
            self.radius.mul_add(radians.cos(), self.cx),
            self.radius.mul_add(-radians.sin(), self.cy),
        )
    }

    /// SVG path data for a partial slice.
    ///
    /// Sweeps over 180° are drawn as two arcs through the midpoint angle, so
    /// a nearly full slice never ends on its own start point after rounding.
    #[must_use]
    pub fn path_data(&self) -> String {
        let (x1, y1) = self.point_at(self.start);
        let mut path = format!(
            "M{},{} L{},{}",
            coord(self.cx),
            coord(self.cy),
            coord(x1),
            coord(y1)
        );

        let end = self.start + self.sweep;
        if self.sweep > FULL_CIRCLE / 2.0 {
            self.push_arc(&mut path, self.start + self.sweep / 2.0);
        }
        self.push_arc(&mut path, end);
        path.push_str(" Z");
        path
    }

    /// Append a counter-clockwise arc (sweep-flag 0) of at most 180° ending at `angle`.
    fn push_arc(&self, path: &mut String, angle: f64) {
        let (x, y) = self.point_at(angle);
        let r = coord(self.radius);
        let _ = write!(path, " A{r},{r} 0 0 0 {},{}", coord(x), coord(y));
    }
}

impl SvgElement for Wedge {
    fn render(&self) -> String {
        if self.sweep <= 0.0 {
            return String::new();
        }

        let fill = self.color.to_css();
        let outline = self.outline.to_css();
        let escaped_label = html_escape(&self.label);

        if self.sweep >= FULL_CIRCLE - FULL_SWEEP_TOLERANCE {
            return format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="{outline}" stroke-width="1">
    <title>{escaped_label}</title>
</circle>"#,
                coord(self.cx),
                coord(self.cy),
                coord(self.radius)
            );
        }

        format!(
            r#"<path d="{}" fill="{fill}" stroke="{outline}" stroke-width="1">
    <title>{escaped_label}</title>
</path>"#,
            self.path_data()
        )
    }
}

/// Square color sample in a legend.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: ChartColor,
    pub outline: ChartColor,
}

impl SvgElement for Swatch {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            coord(self.x),
            coord(self.y),
            coord(self.size),
            coord(self.size),
            self.color,
            self.outline
        )
    }
}

/// Single line of text, vertically centred on `y`.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: ChartColor,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Start,
            font_size: 12.0,
            weight: FontWeight::Normal,
            color: ChartColor::hex("#000000"),
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let escaped = html_escape(&self.text);
        let mut output = format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" fill="{}" font-size="{}""#,
            coord(self.x),
            coord(self.y),
            self.anchor,
            self.color,
            self.font_size
        );
        if self.weight == FontWeight::Bold {
            output.push_str(r#" font-weight="bold""#);
        }
        let _ = write!(output, ">{escaped}</text>");
        output
    }
}

/// Filled box with centred lines of text, used for summary statistics.
#[derive(Debug, Clone)]
pub struct Card {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub background: ChartColor,
    pub text_color: ChartColor,
    pub font_size: f64,
    pub lines: Vec<String>,
}

impl Card {
    #[allow(clippy::cast_precision_loss)]
    fn line_positions(&self) -> impl Iterator<Item = (f64, &String)> {
        let line_height = self.font_size * 1.4;
        let block_height = line_height * self.lines.len().saturating_sub(1) as f64;
        let first_y = self.height.mul_add(0.5, self.y) - block_height / 2.0;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (line_height.mul_add(i as f64, first_y), line))
    }
}

impl SvgElement for Card {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="4"/>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height),
            self.background
        );

        let center_x = self.width.mul_add(0.5, self.x);
        for (y, line) in self.line_positions() {
            if line.is_empty() {
                continue;
            }
            let label = Label::new(center_x, y, line.clone())
                .with_anchor(TextAnchor::Middle)
                .with_font_size(self.font_size)
                .with_color(self.text_color.clone());
            let _ = writeln!(output, "{}", label.render());
        }

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
