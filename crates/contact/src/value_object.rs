use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum ProjectType {
    #[serde(rename = "Motion Graphics")]
    #[strum(serialize = "Motion Graphics")]
    MotionGraphics,
    #[serde(rename = "Video Creatives")]
    #[strum(serialize = "Video Creatives")]
    VideoCreatives,
    #[serde(rename = "YouTube Strategy")]
    #[strum(serialize = "YouTube Strategy")]
    YouTubeStrategy,
    #[serde(rename = "Ads Direction")]
    #[strum(serialize = "Ads Direction")]
    AdsDirection,
    #[serde(rename = "Graphic Design")]
    #[strum(serialize = "Graphic Design")]
    GraphicDesign,
    #[serde(rename = "Full Package")]
    #[strum(serialize = "Full Package")]
    FullPackage,
}

/// Choices offered by the contact form selects.
///
/// The relay never enforces these; they only drive the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub project_types: Vec<String>,
    pub budgets: Vec<String>,
}

impl Catalog {
    pub fn studio() -> Self {
        Self::with_budgets(["Under $1,000", "$1,000 - $2,000", "$2,000 - $5,000", "$5,000+"])
    }

    pub fn placeholder() -> Self {
        Self::with_budgets([
            "$1,000 - $5,000",
            "$5,000 - $10,000",
            "$10,000 - $25,000",
            "$25,000+",
        ])
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "studio" => Some(Self::studio()),
            "placeholder" => Some(Self::placeholder()),
            _ => None,
        }
    }

    fn with_budgets<const N: usize>(budgets: [&str; N]) -> Self {
        Self {
            project_types: ProjectType::VARIANTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            budgets: budgets.iter().map(|b| (*b).to_owned()).collect(),
        }
    }

    pub fn accepts_project_type(&self, value: &str) -> bool {
        self.project_types.iter().any(|p| p == value)
    }

    pub fn accepts_budget(&self, value: &str) -> bool {
        self.budgets.iter().any(|b| b == value)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::studio()
    }
}
