use jiff::civil::{Date, DateTime};
use types::{Contractor, DashboardStats, Message, Project, ProjectStatus};

use crate::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Contractors,
    Messages,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Contractors, Tab::Messages];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "My Projects",
            Tab::Contractors => "Browse Contractors",
            Tab::Messages => "Messages",
        }
    }
}

/// Raw input of the new-project modal, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub budget: String,
    /// Comma separated.
    pub skills: String,
}

impl ProjectDraft {
    pub fn budget_value(&self) -> f64 {
        self.budget.trim().parse().unwrap_or(0.0)
    }

    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Everything the client dashboard shows, owned by the view for as long as it
/// is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDashboardState {
    pub projects: Vec<Project>,
    pub contractors: Vec<Contractor>,
    pub messages: Vec<Message>,
    pub tab: Tab,
    pub show_new_project: bool,
    pub draft: ProjectDraft,
    pub contractor_query: String,
    pub outgoing: String,
    next_id: u64,
}

impl ClientDashboardState {
    pub fn new(projects: Vec<Project>, contractors: Vec<Contractor>, messages: Vec<Message>) -> Self {
        let next_id = projects
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            projects,
            contractors,
            messages,
            tab: Tab::default(),
            show_new_project: false,
            draft: ProjectDraft::default(),
            contractor_query: String::new(),
            outgoing: String::new(),
            next_id,
        }
    }

    pub fn seeded() -> Self {
        Self::new(mock::projects(), mock::contractors(), mock::messages())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(&self.projects)
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn open_new_project(&mut self) {
        self.show_new_project = true;
    }

    /// Close the modal and throw away whatever was typed.
    pub fn cancel_new_project(&mut self) {
        self.show_new_project = false;
        self.draft = ProjectDraft::default();
    }

    /// Turn the draft into an open project at the top of the list, then close
    /// the modal.
    pub fn submit_project(&mut self, today: Date) -> &Project {
        let draft = std::mem::take(&mut self.draft);
        let project = Project {
            id: self.next_id.to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            budget: draft.budget_value(),
            status: ProjectStatus::Open,
            skills_required: draft.skill_list(),
            posted_date: today,
            proposals: 0,
        };
        self.next_id += 1;
        self.show_new_project = false;

        self.projects.insert(0, project);
        &self.projects[0]
    }

    pub fn visible_contractors(&self) -> impl Iterator<Item = &Contractor> {
        self.contractors
            .iter()
            .filter(|c| c.matches(&self.contractor_query))
    }

    /// Post the outgoing text at the top of the list as a message from the
    /// current user. Blank input is ignored.
    pub fn send_message(&mut self, now: DateTime) -> bool {
        let content = self.outgoing.trim();
        if content.is_empty() {
            return false;
        }

        let message = Message {
            id: format!("m{}", self.messages.len() + 1),
            sender_name: "You".to_string(),
            content: content.to_string(),
            timestamp: now,
            read: true,
        };
        self.messages.insert(0, message);
        self.outgoing.clear();
        true
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, datetime};
    use pretty_assertions::assert_eq;

    fn dashboard() -> ClientDashboardState {
        ClientDashboardState::seeded()
    }

    #[test]
    fn seeded_dashboard_starts_on_projects_with_modal_closed() {
        let state = dashboard();

        assert_eq!(state.tab, Tab::Projects);
        assert!(!state.show_new_project);
        assert_eq!(state.projects.len(), 3);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn submitting_draft_adds_open_project_and_closes_modal() {
        let mut state = dashboard();
        let before = state.projects.len();
        state.open_new_project();
        state.draft = ProjectDraft {
            title: "T".to_string(),
            description: String::new(),
            budget: "100".to_string(),
            skills: "A, B".to_string(),
        };

        let added = state.submit_project(date(2026, 3, 10)).clone();

        assert_eq!(state.projects.len(), before + 1);
        assert_eq!(added.title, "T");
        assert_eq!(added.budget, 100.0);
        assert_eq!(added.status, ProjectStatus::Open);
        assert_eq!(added.proposals, 0);
        assert_eq!(added.skills_required, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(added.posted_date, date(2026, 3, 10));
        assert!(!state.show_new_project);
        assert_eq!(state.draft, ProjectDraft::default());
    }

    #[test]
    fn new_projects_get_fresh_ids() {
        let mut state = dashboard();

        let first = state.submit_project(date(2026, 3, 10)).id.clone();
        let second = state.submit_project(date(2026, 3, 10)).id.clone();

        assert_eq!(first, "4");
        assert_eq!(second, "5");
    }

    #[test]
    fn budget_that_is_not_a_number_becomes_zero() {
        let draft = ProjectDraft {
            budget: "about 5k".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.budget_value(), 0.0);
    }

    #[test]
    fn skills_drop_empty_pieces() {
        let draft = ProjectDraft {
            skills: " Tiling,, Plumbing , ".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.skill_list(), vec!["Tiling".to_string(), "Plumbing".to_string()]);
    }

    #[test]
    fn cancel_discards_draft_without_adding() {
        let mut state = dashboard();
        state.open_new_project();
        state.draft.title = "Half typed".to_string();

        state.cancel_new_project();

        assert!(!state.show_new_project);
        assert_eq!(state.draft, ProjectDraft::default());
        assert_eq!(state.projects.len(), 3);
    }

    #[test]
    fn stats_follow_new_projects() {
        let mut state = dashboard();
        let before = state.stats();
        state.draft.budget = "250".to_string();

        state.submit_project(date(2026, 3, 10));

        let after = state.stats();
        assert_eq!(after.active_projects, before.active_projects + 1);
        assert_eq!(after.total_budget, before.total_budget + 250.0);
        assert_eq!(after.total_proposals, before.total_proposals);
    }

    #[test]
    fn tab_switching_only_changes_tab() {
        let mut state = dashboard();
        let projects = state.projects.clone();

        for tab in Tab::ALL {
            state.select_tab(tab);
            assert_eq!(state.tab, tab);
        }
        assert_eq!(state.projects, projects);
    }

    #[test]
    fn contractor_query_filters_by_skill() {
        let mut state = dashboard();
        state.contractor_query = "carpentry".to_string();

        let names: Vec<_> = state.visible_contractors().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Sarah Johnson", "Dan Okafor"]);
    }

    #[test]
    fn sending_message_prepends_and_clears_input() {
        let mut state = dashboard();
        state.outgoing = "  Can you start Monday?  ".to_string();

        assert!(state.send_message(datetime(2026, 2, 3, 9, 0, 0, 0)));

        assert_eq!(state.messages[0].content, "Can you start Monday?");
        assert_eq!(state.messages[0].sender_name, "You");
        assert!(state.outgoing.is_empty());
    }

    #[test]
    fn blank_message_is_not_sent() {
        let mut state = dashboard();
        state.outgoing = "   ".to_string();

        assert!(!state.send_message(datetime(2026, 2, 3, 9, 0, 0, 0)));
        assert_eq!(state.messages.len(), 2);
    }

    #[test]
    fn opening_a_message_marks_it_read() {
        let mut state = dashboard();

        state.mark_read("m1");

        assert_eq!(state.unread_count(), 0);
    }
}
