use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Open => "Open",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            ProjectStatus::Open => "badge-open",
            ProjectStatus::InProgress => "badge-progress",
            ProjectStatus::Completed => "badge-completed",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, ProjectStatus::Open | ProjectStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub skills_required: Vec<String>,
    pub posted_date: Date,
    pub proposals: u32,
}

/// Headline numbers for a client's projects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_projects: usize,
    pub total_proposals: u32,
    pub completed_projects: usize,
    pub total_budget: f64,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects
            .iter()
            .fold(DashboardStats::default(), |mut stats, project| {
                if project.status.is_active() {
                    stats.active_projects += 1;
                }
                if project.status == ProjectStatus::Completed {
                    stats.completed_projects += 1;
                }
                stats.total_proposals += project.proposals;
                stats.total_budget += project.budget;
                stats
            })
    }
}
