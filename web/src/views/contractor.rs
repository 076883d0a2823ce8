use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::ld_icons::{LdBriefcase, LdSearch, LdUser},
};

use super::components::{ActionCard, DashboardHeader, StatCard};

#[component]
pub fn ContractorDashboard() -> Element {
    rsx! {
        div { class: "dashboard dashboard-contractor",
            DashboardHeader {
                title: "Contractor Dashboard",
                badge: "CONTRACTOR",
                badge_class: "role-badge-contractor",
            }

            main { class: "dashboard-main",
                h2 { class: "welcome", "Welcome back, Pro! 🛠️" }

                div { class: "stats-grid",
                    StatCard { label: "Active Jobs", value: "5" }
                    StatCard { label: "Total Earnings", value: "$28,340" }
                    StatCard { label: "Profile Views", value: "142" }
                }

                div { class: "action-grid",
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdSearch } },
                        title: "Find New Projects",
                        description: "Browse jobs that match your skills and location.",
                        action: "Browse Jobs",
                        accent: "green",
                    }
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdBriefcase } },
                        title: "My Active Jobs",
                        description: "Manage ongoing projects and client communication.",
                        action: "View Jobs",
                        accent: "blue",
                    }
                    ActionCard {
                        icon: rsx! { Icon { width: 48, height: 48, icon: LdUser } },
                        title: "Update Profile",
                        description: "Keep your portfolio, rates, and certifications current.",
                        action: "Edit Profile",
                        accent: "purple",
                    }
                }
            }
        }
    }
}
