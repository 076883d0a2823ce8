use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::ld_icons::{LdMessageSquare, LdPlus, LdStar},
};
use jiff::Zoned;
use types::{Contractor, Message, Project};

use super::components::{DashboardHeader, StatCard};
use crate::client_state::{ClientDashboardState, Tab};

fn money(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[component]
pub fn ClientDashboard() -> Element {
    let mut state = use_signal(ClientDashboardState::seeded);

    let stats = state.read().stats();
    let tab = state.read().tab;
    let unread = state.read().unread_count();

    rsx! {
        div { class: "dashboard dashboard-client",
            DashboardHeader {
                title: "Client Dashboard",
                badge: "CLIENT",
                badge_class: "role-badge-client",
            }

            main { class: "dashboard-main",
                h2 { class: "welcome", "Welcome back! 👋" }

                div { class: "stats-grid",
                    StatCard { label: "Active Projects", value: "{stats.active_projects}" }
                    StatCard { label: "Proposals Received", value: "{stats.total_proposals}" }
                    StatCard { label: "Completed", value: "{stats.completed_projects}" }
                    StatCard { label: "Total Budget", value: money(stats.total_budget) }
                }

                nav { class: "tabs",
                    for option in Tab::ALL {
                        button {
                            key: "{option.label()}",
                            class: if option == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| state.write().select_tab(option),
                            "{option.label()}"
                            if option == Tab::Messages && unread > 0 {
                                span { class: "tab-count", "{unread}" }
                            }
                        }
                    }
                }

                {
                    match tab {
                        Tab::Projects => rsx! { ProjectsTab { state } },
                        Tab::Contractors => rsx! { ContractorsTab { state } },
                        Tab::Messages => rsx! { MessagesTab { state } },
                    }
                }
            }

            if state.read().show_new_project {
                NewProjectModal { state }
            }
        }
    }
}

#[component]
fn ProjectsTab(mut state: Signal<ClientDashboardState>) -> Element {
    let projects = state.read().projects.clone();

    rsx! {
        div { class: "tab-header",
            h3 { class: "section-title", "My Projects" }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.write().open_new_project(),
                Icon { width: 20, height: 20, icon: LdPlus }
                "Post New Project"
            }
        }

        if projects.is_empty() {
            div { class: "empty-state", "No projects yet. Post one to start receiving proposals." }
        }

        div { class: "project-list",
            for project in projects {
                ProjectCard { key: "{project.id}", project }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "project-card",
            div { class: "project-card-header",
                h4 { class: "project-title", "{project.title}" }
                span { class: "status-badge {project.status.css_class()}", "{project.status.label()}" }
            }
            if !project.description.is_empty() {
                p { class: "project-desc", "{project.description}" }
            }
            div { class: "skill-list",
                for skill in project.skills_required.iter() {
                    span { key: "{skill}", class: "skill-chip", "{skill}" }
                }
            }
            div { class: "project-meta",
                span { class: "project-budget", {money(project.budget)} }
                span { "Posted {project.posted_date}" }
                span { "{project.proposals} proposals" }
            }
        }
    }
}

#[component]
fn ContractorsTab(mut state: Signal<ClientDashboardState>) -> Element {
    let contractors: Vec<Contractor> = state.read().visible_contractors().cloned().collect();

    rsx! {
        div { class: "tab-header",
            h3 { class: "section-title", "Browse Contractors" }
            input {
                class: "form-input search-input",
                r#type: "search",
                placeholder: "Filter by name or skill",
                value: "{state.read().contractor_query}",
                oninput: move |e| state.write().contractor_query = e.value(),
            }
        }

        if contractors.is_empty() {
            div { class: "empty-state", "No contractors match that search." }
        }

        div { class: "contractor-grid",
            for contractor in contractors {
                div { key: "{contractor.id}", class: "contractor-card",
                    div { class: "contractor-card-header",
                        h4 { class: "contractor-name", "{contractor.name}" }
                        span { class: "contractor-rating",
                            Icon { width: 16, height: 16, icon: LdStar }
                            "{contractor.rating:.1}"
                        }
                    }
                    if let Some(bio) = &contractor.bio {
                        p { class: "contractor-bio", "{bio}" }
                    }
                    div { class: "skill-list",
                        for skill in contractor.skills.iter() {
                            span { key: "{skill}", class: "skill-chip", "{skill}" }
                        }
                    }
                    div { class: "contractor-meta",
                        span { {money(contractor.hourly_rate)} "/hr" }
                        span { "{contractor.completed_projects} projects completed" }
                    }
                }
            }
        }
    }
}

#[component]
fn MessagesTab(mut state: Signal<ClientDashboardState>) -> Element {
    let messages: Vec<Message> = state.read().messages.clone();

    rsx! {
        div { class: "tab-header",
            h3 { class: "section-title", "Messages" }
        }

        form {
            class: "message-compose",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                state.write().send_message(Zoned::now().datetime());
            },
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Write a message...",
                value: "{state.read().outgoing}",
                oninput: move |e| state.write().outgoing = e.value(),
            }
            button { r#type: "submit", class: "btn btn-primary",
                Icon { width: 18, height: 18, icon: LdMessageSquare }
                "Send"
            }
        }

        if messages.is_empty() {
            div { class: "empty-state", "No messages yet." }
        }

        ul { class: "message-list",
            for message in messages {
                li {
                    key: "{message.id}",
                    class: if message.read { "message" } else { "message message-unread" },
                    onclick: {
                        let id = message.id.clone();
                        move |_| state.write().mark_read(&id)
                    },
                    div { class: "message-header",
                        span { class: "message-sender", "{message.sender_name}" }
                        span { class: "message-time", {message.timestamp.strftime("%Y-%m-%d %H:%M").to_string()} }
                    }
                    p { class: "message-body", "{message.content}" }
                }
            }
        }
    }
}

#[component]
fn NewProjectModal(mut state: Signal<ClientDashboardState>) -> Element {
    let draft = state.read().draft.clone();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { class: "modal-title", "Post a New Project" }
                }
                form {
                    class: "modal-body",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let today = Zoned::now().date();
                        let mut state = state.write();
                        let project = state.submit_project(today);
                        tracing::debug!("Posted mock project {}", project.id);
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "project-title", "Title" }
                        input {
                            id: "project-title",
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            placeholder: "e.g. Kitchen Remodel",
                            value: "{draft.title}",
                            oninput: move |e| state.write().draft.title = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "project-description", "Description" }
                        textarea {
                            id: "project-description",
                            class: "form-input",
                            rows: 4,
                            required: true,
                            value: "{draft.description}",
                            oninput: move |e| state.write().draft.description = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "project-budget", "Budget ($)" }
                        input {
                            id: "project-budget",
                            class: "form-input",
                            r#type: "number",
                            required: true,
                            min: "0",
                            value: "{draft.budget}",
                            oninput: move |e| state.write().draft.budget = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "project-skills", "Skills (comma separated)" }
                        input {
                            id: "project-skills",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Carpentry, Plumbing",
                            value: "{draft.skills}",
                            oninput: move |e| state.write().draft.skills = e.value(),
                        }
                    }
                    div { class: "modal-footer",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| state.write().cancel_new_project(),
                            "Cancel"
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Post Project" }
                    }
                }
            }
        }
    }
}
