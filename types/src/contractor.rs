use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub rating: f64,
    pub hourly_rate: f64,
    pub completed_projects: u32,
    pub bio: Option<String>,
}

impl Contractor {
    /// Case-insensitive match of `query` against the name or any skill.
    /// A blank query matches everyone.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah() -> Contractor {
        Contractor {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            skills: vec!["Tiling".to_string(), "Plumbing".to_string()],
            rating: 4.9,
            hourly_rate: 85.0,
            completed_projects: 47,
            bio: None,
        }
    }

    #[test]
    fn matches_name_or_skill_ignoring_case() {
        let contractor = sarah();

        assert!(contractor.matches("johnson"));
        assert!(contractor.matches("  PLUMB "));
        assert!(!contractor.matches("roofing"));
    }

    #[test]
    fn blank_query_matches_everyone() {
        assert!(sarah().matches(""));
        assert!(sarah().matches("   "));
    }
}
