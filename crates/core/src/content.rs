//! Page content model.
//!
//! The serializable document tree behind every landing page: a page owns an
//! ordered list of sections, each section an ordered list of blocks, plus
//! page-wide design and SEO settings. The wire format is camelCase JSON,
//! matching what the drag-and-drop editor produces.
//!
//! This is pure data. Every optional field deserializes from an absent key
//! to its default instead of erroring; a block's `content` map is an open
//! key/value bag so new block kinds can ship without a schema migration.
//! Readers (the renderer) default every expected key per block type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Page status
// ---------------------------------------------------------------------------

/// Publication state of a page. Only `Published` pages are publicly served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    /// Storage representation, identical to the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "DRAFT",
            PageStatus::Published => "PUBLISHED",
            PageStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PageStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "DRAFT" => Ok(PageStatus::Draft),
            "PUBLISHED" => Ok(PageStatus::Published),
            "ARCHIVED" => Ok(PageStatus::Archived),
            other => Err(CoreError::Validation(format!(
                "Unknown page status: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Content tree
// ---------------------------------------------------------------------------

/// Root of a page's content: ordered sections plus page-wide design settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageContent {
    pub sections: Vec<ContentSection>,
    pub design_settings: DesignSettings,
}

/// A horizontal content band on a page, containing blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub settings: SectionSettings,
}

/// Section label. Affects the generated CSS class only; the renderer does
/// not constrain which blocks a section may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    Header,
    Hero,
    Content,
    Features,
    Testimonials,
    Cta,
    Footer,
}

impl SectionType {
    /// CSS class fragment for the rendered `<section>` element.
    pub fn css_class(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Hero => "hero",
            SectionType::Content => "content",
            SectionType::Features => "features",
            SectionType::Testimonials => "testimonials",
            SectionType::Cta => "cta",
            SectionType::Footer => "footer",
        }
    }
}

/// An individual content unit inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Open key/value bag; expected keys depend on `block_type`.
    #[serde(default)]
    pub content: serde_json::Map<String, Value>,
    #[serde(default)]
    pub styling: BlockStyling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Heading,
    Paragraph,
    Image,
    Button,
    List,
    Spacer,
    Divider,
}

impl BlockType {
    /// CSS class fragment, e.g. `heading` in `block heading-block`.
    pub fn css_slug(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::List => "list",
            BlockType::Spacer => "spacer",
            BlockType::Divider => "divider",
        }
    }
}

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Per-section presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionSettings {
    pub background_color: Option<String>,
    pub padding: Spacing,
    pub margin: Spacing,
    pub full_width: bool,
    pub custom_css: Option<String>,
}

/// Per-block presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyling {
    pub text_align: TextAlign,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub padding: Spacing,
    pub margin: Spacing,
    pub border_radius: Option<String>,
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// CSS `text-align` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Four independent CSS lengths. The literal `"0"` means "unset"; a spacing
/// of all zeroes emits no CSS property at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            top: "0".into(),
            right: "0".into(),
            bottom: "0".into(),
            left: "0".into(),
        }
    }
}

impl Spacing {
    pub fn new(
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Self {
        Spacing {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == "0" && self.right == "0" && self.bottom == "0" && self.left == "0"
    }
}

// ---------------------------------------------------------------------------
// Page-wide settings
// ---------------------------------------------------------------------------

/// Page-wide visual defaults feeding the generated stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSettings {
    pub theme: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub container_width: String,
    /// Appended verbatim to the generated stylesheet. The tenant is trusted
    /// with raw CSS on their own pages.
    pub custom_css: Option<String>,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            theme: "default".into(),
            primary_color: "#007bff".into(),
            secondary_color: "#6c757d".into(),
            font_family: "Arial, sans-serif".into(),
            container_width: "1200px".into(),
            custom_css: None,
        }
    }
}

/// Social/robots metadata rendered into the document head.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: String,
    pub canonical_url: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
}

impl Default for SeoSettings {
    fn default() -> Self {
        SeoSettings {
            og_title: None,
            og_description: None,
            og_image: None,
            twitter_card: "summary".into(),
            canonical_url: None,
            no_index: false,
            no_follow: false,
        }
    }
}
