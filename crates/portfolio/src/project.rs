use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed";
const HOSTED_MEDIA: &str =
    "https://rrwpihpeixhuycrirqxs.supabase.co/storage/v1/object/public/Zeno%20Videos";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Motion,
    #[serde(rename = "YouTube")]
    #[strum(serialize = "YouTube")]
    YouTube,
    Ads,
}

/// Work page filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }

        Category::from_str(s).map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoSource {
    File { url: String },
    #[serde(rename = "youtube")]
    YouTube { id: String },
}

impl VideoSource {
    /// URL handed to the player (`File`) or the embed frame (`YouTube`).
    pub fn url(&self) -> String {
        match self {
            VideoSource::File { url } => url.to_owned(),
            VideoSource::YouTube { id } => format!("{YOUTUBE_EMBED}/{id}?autoplay=1&rel=0"),
        }
    }
}

/// Which kind of media a deployment ships with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VideoStrategy {
    #[default]
    Hosted,
    #[serde(rename = "youtube")]
    #[strum(serialize = "youtube")]
    YouTube,
    None,
}

impl VideoStrategy {
    pub fn allows(&self, source: &VideoSource) -> bool {
        matches!(
            (self, source),
            (VideoStrategy::Hosted, VideoSource::File { .. })
                | (VideoStrategy::YouTube, VideoSource::YouTube { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub result: String,
    #[serde(default)]
    pub video: Option<VideoSource>,
}

/// What the work page renders for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub result: String,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub strategy: VideoStrategy,
    #[serde(default = "studio_projects")]
    pub projects: Vec<Project>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            strategy: VideoStrategy::default(),
            projects: studio_projects(),
        }
    }
}

impl Portfolio {
    /// Projects for a filter tab, with media the strategy does not ship removed.
    pub fn cards(&self, filter: CategoryFilter) -> Vec<ProjectCard> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.category))
            .map(|p| ProjectCard {
                id: p.id,
                title: p.title.to_owned(),
                category: p.category,
                result: p.result.to_owned(),
                video_url: self.playable(p).map(VideoSource::url),
            })
            .collect()
    }

    pub fn playable<'a>(&self, project: &'a Project) -> Option<&'a VideoSource> {
        project.video.as_ref().filter(|v| self.strategy.allows(v))
    }

    pub fn find(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Modal that plays a selected project.
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    selected: Option<Project>,
}

impl Showcase {
    /// Opens the modal. Projects with nothing the deployment can play are ignored.
    pub fn open(&mut self, portfolio: &Portfolio, project: &Project) -> bool {
        if portfolio.playable(project).is_none() {
            return false;
        }

        self.selected = Some(project.clone());
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }
}

fn hosted(title: &str) -> Option<VideoSource> {
    Some(VideoSource::File {
        url: format!("{HOSTED_MEDIA}/{}.mp4", title.replace(' ', "%20")),
    })
}

fn project(id: u32, title: &str, category: Category, result: &str, video: bool) -> Project {
    Project {
        id,
        title: title.to_owned(),
        category,
        result: result.to_owned(),
        video: if video { hosted(title) } else { None },
    }
}

pub fn studio_projects() -> Vec<Project> {
    vec![
        project(1, "David", Category::Motion, "+2M Views", true),
        project(2, "Jaylen", Category::Motion, "50% Conv. Rate", true),
        project(3, "Shaid", Category::YouTube, "+500K Subs", true),
        project(4, "Stranger Things", Category::Ads, "4.2x ROAS", true),
        project(5, "Tellus", Category::YouTube, "+10M Views", true),
        project(6, "Product Launch", Category::Ads, "2.8x ROAS", false),
        project(7, "Brand Animation", Category::Motion, "Award Winner", false),
        project(8, "Shorts Strategy", Category::YouTube, "+5M Views", false),
    ]
}
