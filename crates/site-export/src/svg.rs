//! SVG rendering of a placement.
//!
//! Draws the site as a square of side `sqrt(site_area)` anchored at the
//! origin and every placed building as a labelled rectangle. Site coordinates
//! have y pointing up, so the drawing is flipped vertically.

use site_core::LayoutDataset;
use site_layout::{Bounds, Solution};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Hex form without alpha (e.g. "#ff0000").
    pub fn to_svg(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }

    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

/// Options for SVG rendering.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Caption drawn above the site
    pub title: Option<String>,
    /// Pixels per site unit
    pub scale: f64,
    /// Extra room around the drawing, as a fraction of its extent
    pub margin: f64,
    /// Label font size in pixels
    pub font_size: f64,
    pub site_stroke: Color,
    pub building_fill: Color,
    pub label_color: Color,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            title: None,
            scale: 10.0,
            margin: 0.1,
            font_size: 8.0,
            site_stroke: Color::RED,
            building_fill: Color::rgba(0.0, 0.0, 1.0, 0.5),
            label_color: Color::WHITE,
        }
    }
}

impl SvgOptions {
    /// Default options with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Render a placement to an SVG document.
///
/// Buildings without a position are skipped with a warning.
pub fn render(dataset: &LayoutDataset, solution: &Solution, options: &SvgOptions) -> String {
    let side = dataset.site_area().max(0.0).sqrt();
    let content = solution.content_bounds(dataset).unwrap_or_default();
    let extent = side.max(content.right()).max(content.top()).max(1.0) * (1.0 + options.margin);

    let px = extent * options.scale;
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
        px, px, extent, extent
    ));

    let mut builder = SvgBuilder {
        svg: &mut svg,
        extent,
        unit: 1.0 / options.scale,
        options,
    };

    if let Some(title) = &options.title {
        builder.title(title);
    }
    builder.site(side);

    for building in dataset.buildings() {
        let Some(bounds) = solution.bounds(building) else {
            log::warn!("no position found for building ID={}", building.id);
            continue;
        };
        builder.building(bounds, &building.name, &building.id.to_string());
    }

    svg.push_str("</svg>\n");
    svg
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    /// Side of the square view, in site units
    extent: f64,
    /// Size of one pixel in site units
    unit: f64,
    options: &'a SvgOptions,
}

impl<'a> SvgBuilder<'a> {
    /// Flip a site y coordinate into SVG space.
    fn flip(&self, y: f64) -> f64 {
        self.extent - y
    }

    fn title(&mut self, title: &str) {
        let text = escape_xml(title);
        self.svg.push_str(&format!("  <title>{}</title>\n", text));
        self.svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" font-family=\"sans-serif\">{}</text>\n",
            self.extent / 2.0,
            self.options.font_size * 1.5 * self.unit,
            self.options.font_size * 1.5 * self.unit,
            text
        ));
    }

    fn site(&mut self, side: f64) {
        let stroke = self.options.site_stroke;
        self.svg.push_str(&format!(
            "  <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />\n",
            self.flip(side),
            side,
            side,
            stroke.to_svg(),
            2.0 * self.unit
        ));
    }

    fn building(&mut self, bounds: Bounds, name: &str, id: &str) {
        let fill = self.options.building_fill;

        let mut attrs = vec![
            format!("x=\"{}\"", bounds.x),
            format!("y=\"{}\"", self.flip(bounds.top())),
            format!("width=\"{}\"", bounds.width),
            format!("height=\"{}\"", bounds.height),
            format!("fill=\"{}\"", fill.to_svg()),
            format!("stroke=\"{}\"", fill.to_svg()),
            format!("stroke-width=\"{}\"", self.unit),
        ];
        if fill.a < 1.0 {
            attrs.push(format!("fill-opacity=\"{}\"", fill.a));
        }

        self.svg.push_str("  <g>\n");
        self.svg.push_str(&format!("    <rect {} />\n", attrs.join(" ")));

        let center = bounds.center();
        let font_size = self.options.font_size * self.unit;
        let x = center.x;
        let y = self.flip(center.y);
        self.svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"sans-serif\">\
<tspan x=\"{}\" dy=\"{}\">{}</tspan><tspan x=\"{}\" dy=\"{}\">ID: {}</tspan></text>\n",
            x,
            y,
            self.options.label_color.to_svg(),
            font_size,
            x,
            -0.2 * font_size,
            escape_xml(name),
            x,
            1.2 * font_size,
            escape_xml(id)
        ));
        self.svg.push_str("  </g>\n");
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::{DatasetBuilder, PathSpec};
    use site_layout::{generate_initial_solution, improve_solution};

    fn dataset() -> LayoutDataset {
        let mut builder = DatasetBuilder::new().site_area(Some(400.0));
        builder.add_building("A", "office", [10.0, 10.0]).unwrap();
        builder.add_building("B & Co", "storage", [5.0, 5.0]).unwrap();
        builder
            .add_path(PathSpec::new("AB", "A", "B & Co").with_lengths(8.0, 10.0))
            .unwrap();
        builder.build()
    }

    fn tight(title: Option<&str>) -> SvgOptions {
        SvgOptions {
            title: title.map(str::to_string),
            margin: 0.0,
            ..SvgOptions::default()
        }
    }

    #[test]
    fn test_color_to_svg() {
        assert_eq!(Color::rgb(1.0, 0.5, 0.0).to_svg(), "#ff7f00");
        assert_eq!(Color::RED.to_svg(), "#ff0000");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
    }

    #[test]
    fn test_render_site_and_buildings() {
        let dataset = dataset();
        let solution = generate_initial_solution(&dataset).unwrap();
        let svg = render(&dataset, &solution, &tight(Some("Initial Layout")));

        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<title>Initial Layout</title>"));
        assert!(svg.contains("width=\"200\" height=\"200\" viewBox=\"0 0 20 20\""));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"20\" height=\"20\" fill=\"none\" stroke=\"#ff0000\""));
        // A at (0, 0), 10 high: its top edge lands at 20 - 10.
        assert!(svg.contains("<rect x=\"0\" y=\"10\" width=\"10\" height=\"10\" fill=\"#0000ff\""));
        assert!(svg.contains("fill-opacity=\"0.5\""));
        assert!(svg.contains("B &amp; Co"));
        assert!(svg.contains("ID: 2"));
        assert_eq!(svg.matches("<g>").count(), 2);
    }

    #[test]
    fn test_view_grows_with_content() {
        let dataset = dataset();
        let initial = generate_initial_solution(&dataset).unwrap();
        let improved = improve_solution(&dataset, &initial).unwrap();
        let svg = render(&dataset, &improved, &tight(None));

        // B is stacked on A and reaches y = 23, above the 20 x 20 site.
        assert!(svg.contains("viewBox=\"0 0 23 23\""));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"5\" height=\"5\""));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_render_skips_unplaced_building() {
        let mut partial = DatasetBuilder::new().site_area(Some(400.0));
        partial.add_building("A", "office", [10.0, 10.0]).unwrap();
        let solution = generate_initial_solution(&partial.build()).unwrap();

        let svg = render(&dataset(), &solution, &tight(None));
        assert_eq!(svg.matches("<g>").count(), 1);
        assert!(svg.contains("ID: 1"));
        assert!(!svg.contains("B &amp; Co"));
        assert!(!svg.contains("ID: 2"));
    }

    #[test]
    fn test_render_degenerate_site() {
        let dataset = DatasetBuilder::new().site_area(Some(-5.0)).build();
        let solution = generate_initial_solution(&dataset).unwrap();
        let svg = render(&dataset, &solution, &SvgOptions::default());
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<g>").count(), 0);
    }
}
