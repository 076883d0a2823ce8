use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::ld_icons::{LdActivity, LdFolderOpen, LdUsers},
};

use super::components::{ActionCard, DashboardHeader, StatCard};

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-admin",
            DashboardHeader {
                title: "Admin Control Center",
                badge: "ADMIN",
                badge_class: "role-badge-admin",
            }

            main { class: "dashboard-main",
                div { class: "stats-grid",
                    StatCard {
                        label: "Total Users",
                        value: "1,247",
                        icon: rsx! { Icon { class: "stat-icon accent-blue", width: 48, height: 48, icon: LdUsers } },
                    }
                    StatCard {
                        label: "Active Projects",
                        value: "342",
                        icon: rsx! { Icon { class: "stat-icon accent-purple", width: 48, height: 48, icon: LdFolderOpen } },
                    }
                    StatCard {
                        label: "Revenue (Monthly)",
                        value: "$45.2K",
                        icon: rsx! { Icon { class: "stat-icon accent-green", width: 48, height: 48, icon: LdActivity } },
                    }
                }

                div { class: "action-grid",
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdUsers } },
                        title: "User Management",
                        description: "View, edit, suspend, or delete users across the platform.",
                        action: "Manage Users",
                        accent: "blue",
                    }
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdFolderOpen } },
                        title: "Project Oversight",
                        description: "Monitor all projects, resolve disputes, and track progress.",
                        action: "View Projects",
                        accent: "purple",
                    }
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdActivity } },
                        title: "Platform Analytics",
                        description: "Growth metrics, revenue, user activity, and system health.",
                        action: "View Analytics",
                        accent: "green",
                    }
                }
            }
        }
    }
}
