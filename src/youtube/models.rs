use serde::{Deserialize, Serialize};

/// Video resource as returned by the YouTube Data API v3 `videos` endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    pub id: String,
    pub snippet: Snippet,
    pub content_details: ContentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub channel_title: String,
    pub channel_id: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContentDetails {
    /// ISO-8601, e.g. PT8M20S; missing reads as empty and formats as `0:00`
    #[serde(default)]
    pub duration: String,
}

/// Counts arrive as strings from the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct YouTubeVideoResponse {
    #[serde(default)]
    pub items: Vec<YouTubeVideo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Kettlebell,
    Dumbbell,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Kettlebell => "kettlebell",
            EquipmentType::Dumbbell => "dumbbell",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    All,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::All => "all",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentComparison {
    pub id: String,
    pub equipment_type: EquipmentType,
    pub advantages: Vec<String>,
    pub best_exercises: Vec<String>,
    pub target_muscles: Vec<String>,
    pub skill_level: SkillLevel,
    pub best_for: Vec<String>,
}
