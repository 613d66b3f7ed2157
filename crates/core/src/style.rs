//! CSS generation: spacing shorthands, inline style attributes, and the
//! per-page stylesheet.

use crate::content::{BlockStyling, DesignSettings, SectionSettings, Spacing, TextAlign};

/// Collapse a [`Spacing`] into the shortest CSS shorthand.
///
/// All four sides `"0"` formats to the empty string, meaning the property
/// is omitted entirely; all sides equal collapses to one value; vertical
/// and horizontal pairs collapse to two; anything else emits all four as
/// `top right bottom left`.
pub fn format_spacing(spacing: &Spacing) -> String {
    if spacing.is_zero() {
        return String::new();
    }

    if spacing.top == spacing.right
        && spacing.right == spacing.bottom
        && spacing.bottom == spacing.left
    {
        spacing.top.clone()
    } else if spacing.top == spacing.bottom && spacing.left == spacing.right {
        format!("{} {}", spacing.top, spacing.right)
    } else {
        format!(
            "{} {} {} {}",
            spacing.top, spacing.right, spacing.bottom, spacing.left
        )
    }
}

/// Individual `property: value` fragments for a section's inline style,
/// in emission order: background-color, padding, margin.
pub fn section_style_parts(settings: &SectionSettings) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(color) = &settings.background_color {
        parts.push(format!("background-color: {color}"));
    }

    let padding = format_spacing(&settings.padding);
    if !padding.is_empty() {
        parts.push(format!("padding: {padding}"));
    }

    let margin = format_spacing(&settings.margin);
    if !margin.is_empty() {
        parts.push(format!("margin: {margin}"));
    }

    parts
}

/// Individual `property: value` fragments for a block's inline style, in
/// emission order: color, background-color, font-size, font-weight,
/// text-align (omitted for the left default), padding, margin,
/// border-radius.
pub fn block_style_parts(styling: &BlockStyling) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(color) = &styling.color {
        parts.push(format!("color: {color}"));
    }

    if let Some(color) = &styling.background_color {
        parts.push(format!("background-color: {color}"));
    }

    if let Some(size) = &styling.font_size {
        parts.push(format!("font-size: {size}"));
    }

    if let Some(weight) = &styling.font_weight {
        parts.push(format!("font-weight: {weight}"));
    }

    if styling.text_align != TextAlign::Left {
        parts.push(format!("text-align: {}", styling.text_align.css_value()));
    }

    let padding = format_spacing(&styling.padding);
    if !padding.is_empty() {
        parts.push(format!("padding: {padding}"));
    }

    let margin = format_spacing(&styling.margin);
    if !margin.is_empty() {
        parts.push(format!("margin: {margin}"));
    }

    if let Some(radius) = &styling.border_radius {
        parts.push(format!("border-radius: {radius}"));
    }

    parts
}

/// Join style fragments into a ` style="..."` attribute, or nothing when
/// there are no fragments.
pub fn style_attr(parts: &[String]) -> String {
    if parts.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", parts.join("; "))
    }
}

/// Generate the page stylesheet from design settings.
///
/// Structural defaults plus one mobile breakpoint, with the tenant's custom
/// CSS appended verbatim at the end so it can override anything generated.
pub fn stylesheet(design: &DesignSettings) -> String {
    let mut css = String::new();

    css.push_str("        * { box-sizing: border-box; }\n");
    css.push_str("        body {\n");
    css.push_str("            margin: 0;\n");
    css.push_str("            padding: 0;\n");
    css.push_str(&format!(
        "            font-family: {};\n",
        design.font_family
    ));
    css.push_str("            line-height: 1.6;\n");
    css.push_str("            color: #333;\n");
    css.push_str("        }\n");

    css.push_str("        .container {\n");
    css.push_str(&format!(
        "            max-width: {};\n",
        design.container_width
    ));
    css.push_str("            margin: 0 auto;\n");
    css.push_str("            padding: 0 20px;\n");
    css.push_str("        }\n");

    css.push_str("        .section {\n");
    css.push_str("            width: 100%;\n");
    css.push_str("        }\n");

    css.push_str("        .section-content {\n");
    css.push_str("            padding: 40px 0;\n");
    css.push_str("        }\n");

    css.push_str("        .block {\n");
    css.push_str("            margin-bottom: 20px;\n");
    css.push_str("        }\n");

    css.push_str("        .block:last-child {\n");
    css.push_str("            margin-bottom: 0;\n");
    css.push_str("        }\n");

    css.push_str("        @media (max-width: 768px) {\n");
    css.push_str("            .container {\n");
    css.push_str("                padding: 0 15px;\n");
    css.push_str("            }\n");
    css.push_str("            .section-content {\n");
    css.push_str("                padding: 20px 0;\n");
    css.push_str("            }\n");
    css.push_str("        }\n");

    if let Some(custom) = &design.custom_css {
        css.push_str("        /* Custom CSS */\n");
        css.push_str(&format!("        {custom}\n"));
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_all_zero_is_omitted() {
        assert_eq!(format_spacing(&Spacing::default()), "");
        assert_eq!(format_spacing(&Spacing::new("0", "0", "0", "0")), "");
    }

    #[test]
    fn spacing_uniform_collapses_to_one_value() {
        let spacing = Spacing::new("10px", "10px", "10px", "10px");
        assert_eq!(format_spacing(&spacing), "10px");
    }

    #[test]
    fn spacing_symmetric_collapses_to_two_values() {
        let spacing = Spacing::new("10px", "5px", "10px", "5px");
        assert_eq!(format_spacing(&spacing), "10px 5px");
    }

    #[test]
    fn spacing_asymmetric_emits_four_values() {
        let spacing = Spacing::new("1px", "2px", "3px", "4px");
        assert_eq!(format_spacing(&spacing), "1px 2px 3px 4px");
    }

    #[test]
    fn section_style_order_and_attr() {
        let settings = SectionSettings {
            background_color: Some("#f8f9fa".into()),
            padding: Spacing::new("40px", "0", "40px", "0"),
            ..Default::default()
        };
        let parts = section_style_parts(&settings);
        assert_eq!(
            parts,
            vec!["background-color: #f8f9fa", "padding: 40px 0"]
        );
        assert_eq!(
            style_attr(&parts),
            " style=\"background-color: #f8f9fa; padding: 40px 0\""
        );
    }

    #[test]
    fn default_section_has_no_style_attr() {
        let parts = section_style_parts(&SectionSettings::default());
        assert!(parts.is_empty());
        assert_eq!(style_attr(&parts), "");
    }

    #[test]
    fn block_style_omits_left_align() {
        let styling = BlockStyling {
            color: Some("#111".into()),
            ..Default::default()
        };
        assert_eq!(block_style_parts(&styling), vec!["color: #111"]);

        let centered = BlockStyling {
            text_align: TextAlign::Center,
            ..Default::default()
        };
        assert_eq!(block_style_parts(&centered), vec!["text-align: center"]);
    }

    #[test]
    fn block_style_full_ordering() {
        let styling = BlockStyling {
            text_align: TextAlign::Right,
            font_size: Some("18px".into()),
            font_weight: Some("bold".into()),
            color: Some("#fff".into()),
            background_color: Some("#000".into()),
            padding: Spacing::new("4px", "4px", "4px", "4px"),
            margin: Spacing::new("1px", "2px", "3px", "4px"),
            border_radius: Some("6px".into()),
            custom_css: None,
        };
        assert_eq!(
            block_style_parts(&styling),
            vec![
                "color: #fff",
                "background-color: #000",
                "font-size: 18px",
                "font-weight: bold",
                "text-align: right",
                "padding: 4px",
                "margin: 1px 2px 3px 4px",
                "border-radius: 6px",
            ]
        );
    }

    #[test]
    fn stylesheet_reflects_design_settings() {
        let design = DesignSettings {
            font_family: "Georgia, serif".into(),
            container_width: "960px".into(),
            custom_css: Some(".hero { color: red; }".into()),
            ..Default::default()
        };
        let css = stylesheet(&design);
        assert!(css.contains("font-family: Georgia, serif;"));
        assert!(css.contains("max-width: 960px;"));
        assert!(css.contains("@media (max-width: 768px)"));
        // Custom CSS lands verbatim at the end.
        assert!(css.trim_end().ends_with(".hero { color: red; }"));
    }

    #[test]
    fn stylesheet_without_custom_css() {
        let css = stylesheet(&DesignSettings::default());
        assert!(!css.contains("/* Custom CSS */"));
        assert!(css.contains("font-family: Arial, sans-serif;"));
    }
}
