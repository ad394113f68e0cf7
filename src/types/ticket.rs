use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TicketStatus};

/// A unit of creative work tracked through the workflow.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(rename = "designType")]
    pub design_type: DesignType,
    pub priority: Priority,
    pub status: TicketStatus,
    // Relational key
    #[serde(rename = "brandId")]
    pub brand_id: String,
    // Denormalized for display; the Brand record stays authoritative
    #[serde(rename = "brandName")]
    pub brand_name: String,
    #[serde(rename = "brandColor")]
    pub brand_color: String,
    #[serde(rename = "assigneeId")]
    pub assignee_id: Option<String>,
    #[serde(rename = "assigneeName")]
    pub assignee_name: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "estimatedHours")]
    pub estimated_hours: Option<f64>,
    /// Accumulated hours, non-negative
    #[serde(rename = "trackedTime")]
    pub tracked_time: f64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub versions: Vec<DesignVersion>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Enumerated category of design work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DesignType {
    Logo,
    Branding,
    SocialMedia,
    Web,
    Print,
    Packaging,
    Illustration,
    Motion,
}

impl DesignType {
    pub fn label(self) -> &'static str {
        match self {
            DesignType::Logo => "Logo",
            DesignType::Branding => "Branding",
            DesignType::SocialMedia => "Social Media",
            DesignType::Web => "Web Design",
            DesignType::Print => "Print",
            DesignType::Packaging => "Packaging",
            DesignType::Illustration => "Illustration",
            DesignType::Motion => "Motion",
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Comment {
    pub id: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// One uploaded iteration of the deliverable.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DesignVersion {
    pub id: String,
    pub number: u32,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}
