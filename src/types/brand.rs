use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client identity profile.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    #[serde(default)]
    pub colors: Vec<BrandColor>,
    #[serde(default)]
    pub fonts: Vec<BrandFont>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(rename = "targetAudience")]
    pub target_audience: String,
    #[serde(default)]
    pub logos: Vec<AssetRef>,
    #[serde(rename = "referenceImages", default)]
    pub reference_images: Vec<AssetRef>,
    #[serde(default)]
    pub inspirations: Vec<AssetRef>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// First color marked primary. Uniqueness of the primary type is not
    /// enforced by the model; display takes the first match.
    pub fn primary_color(&self) -> Option<&BrandColor> {
        self.colors
            .iter()
            .find(|c| c.color_type == ColorType::Primary)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BrandColor {
    pub id: String,
    pub name: String,
    pub hex: String,
    #[serde(rename = "type")]
    pub color_type: ColorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Primary,
    Secondary,
    Accent,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BrandFont {
    pub id: String,
    pub name: String,
    pub usage: String,
    #[serde(rename = "type")]
    pub font_type: FontType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    Primary,
    Secondary,
}

/// Reference to a stored asset (logo, reference image, inspiration).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AssetRef {
    pub id: String,
    pub name: String,
    pub url: String,
}
