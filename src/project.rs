//! Typed project document.
//!
//! The project is the unit the application store persists: business info
//! plus the logo/menu/site configuration. Site sections are a closed tagged
//! union accessed through `SectionKind`-keyed getters, so "section missing,
//! create default inline" lives in exactly one place instead of being
//! duplicated across every form editor.

use crate::canvas::Canvas;
use crate::types::CanvasElement;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    pub cuisine: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

// ============================================================================
// Logo configuration
// ============================================================================

/// Serializable snapshot of a logo canvas session. History and viewport are
/// deliberately not part of the document - they are session state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub elements: Vec<CanvasElement>,
    pub canvas_size: (f32, f32),
    pub template_id: Option<String>,
}

impl LogoConfig {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            elements: canvas.elements.clone(),
            canvas_size: canvas.canvas_size,
            template_id: canvas.template_id.clone(),
        }
    }

    /// Open a fresh editing session over this configuration.
    pub fn to_canvas(&self) -> Canvas {
        Canvas::from_parts(self.elements.clone(), self.canvas_size, self.template_id.clone())
    }
}

// ============================================================================
// Menu configuration
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Price in minor currency units (cents)
    pub price_cents: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub currency: String,
    pub sections: Vec<MenuSection>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { currency: "USD".to_string(), sections: Vec::new() }
    }
}

// ============================================================================
// Site configuration
// ============================================================================

/// Discriminant for addressing sections without constructing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    About,
    Gallery,
    Reviews,
    Contact,
    MenuPreview,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Gallery,
        SectionKind::Reviews,
        SectionKind::Contact,
        SectionKind::MenuPreview,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::About => "About",
            SectionKind::Gallery => "Gallery",
            SectionKind::Reviews => "Reviews",
            SectionKind::Contact => "Contact",
            SectionKind::MenuPreview => "Menu Preview",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1..=5
    pub rating: u8,
    pub quote: String,
}

/// One independently enable/orderable block of website content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero { enabled: bool, headline: String, subheadline: String, image_url: String },
    About { enabled: bool, heading: String, body: String, image_url: String },
    Gallery { enabled: bool, image_urls: Vec<String> },
    Reviews { enabled: bool, reviews: Vec<Review> },
    Contact { enabled: bool, show_map: bool },
    MenuPreview { enabled: bool, max_items: usize },
}

impl Section {
    /// The default variant for a kind, enabled.
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => Section::Hero {
                enabled: true,
                headline: String::new(),
                subheadline: String::new(),
                image_url: String::new(),
            },
            SectionKind::About => Section::About {
                enabled: true,
                heading: "About Us".to_string(),
                body: String::new(),
                image_url: String::new(),
            },
            SectionKind::Gallery => Section::Gallery { enabled: true, image_urls: Vec::new() },
            SectionKind::Reviews => Section::Reviews { enabled: true, reviews: Vec::new() },
            SectionKind::Contact => Section::Contact { enabled: true, show_map: true },
            SectionKind::MenuPreview => Section::MenuPreview { enabled: true, max_items: 6 },
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero { .. } => SectionKind::Hero,
            Section::About { .. } => SectionKind::About,
            Section::Gallery { .. } => SectionKind::Gallery,
            Section::Reviews { .. } => SectionKind::Reviews,
            Section::Contact { .. } => SectionKind::Contact,
            Section::MenuPreview { .. } => SectionKind::MenuPreview,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Section::Hero { enabled, .. }
            | Section::About { enabled, .. }
            | Section::Gallery { enabled, .. }
            | Section::Reviews { enabled, .. }
            | Section::Contact { enabled, .. }
            | Section::MenuPreview { enabled, .. } => *enabled,
        }
    }

    pub fn set_enabled(&mut self, value: bool) {
        match self {
            Section::Hero { enabled, .. }
            | Section::About { enabled, .. }
            | Section::Gallery { enabled, .. }
            | Section::Reviews { enabled, .. }
            | Section::Contact { enabled, .. }
            | Section::MenuPreview { enabled, .. } => *enabled = value,
        }
    }
}

/// Ordered list of site sections with typed access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub sections: Vec<Section>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { sections: SectionKind::ALL.iter().map(|k| Section::default_for(*k)).collect() }
    }
}

impl SiteConfig {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    /// Typed mutable access; materializes the default variant (appended at
    /// the end of the order) when the section is missing.
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.kind() == kind) {
            Some(index) => index,
            None => {
                self.sections.push(Section::default_for(kind));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn set_enabled(&mut self, kind: SectionKind, enabled: bool) {
        self.section_mut(kind).set_enabled(enabled);
    }

    /// Move a section to `index` in the display order. Unknown kinds and
    /// out-of-range indices are silent no-ops / clamped.
    pub fn reorder(&mut self, kind: SectionKind, index: usize) {
        let Some(current) = self.sections.iter().position(|s| s.kind() == kind) else {
            return;
        };
        let section = self.sections.remove(current);
        let target = index.min(self.sections.len());
        self.sections.insert(target, section);
    }

    /// Sections that the site preview should render, in order.
    pub fn enabled_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.enabled())
    }
}

// ============================================================================
// Project
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub logo: LogoConfig,
    pub menu: MenuConfig,
    pub site: SiteConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub business: BusinessInfo,
    pub data: ProjectData,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            business: BusinessInfo::default(),
            data: ProjectData::default(),
        }
    }

    /// Fold a committed canvas state back into the document. This is what
    /// the editor's commit handler typically calls.
    pub fn set_logo_from_canvas(&mut self, canvas: &Canvas) {
        self.data.logo = LogoConfig::from_canvas(canvas);
    }
}
