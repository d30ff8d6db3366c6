//! Deployment guide document and upload responses.

use serde::Deserialize;

/// One block of guide content: `paragraph`, `unordered_list`,
/// `ordered_list` or `code`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuideBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<String>,
    pub items: Option<Vec<String>>,
    pub lines: Option<Vec<String>>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuideSubsection {
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub blocks: Vec<GuideBlock>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub blocks: Vec<GuideBlock>,
    #[serde(default)]
    pub subsections: Vec<GuideSubsection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeploymentGuide {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<GuideSection>,
}

/// `POST /upload` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub original_filename: String,
}
