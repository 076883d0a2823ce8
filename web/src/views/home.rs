use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::ld_icons::{LdArrowRight, LdEye, LdUserCheck, LdVideo},
};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "landing",
            section { class: "hero",
                h1 { class: "hero-title", "SkillSync" }
                p { class: "hero-tagline",
                    "The future of contractor-client connections — powered by virtual consultations, AR previews, and verified trust."
                }
                div { class: "hero-actions",
                    Link {
                        to: Route::Register { role: Some("client".to_string()) },
                        class: "cta cta-client",
                        "Find a Contractor"
                        Icon { width: 32, height: 32, icon: LdArrowRight }
                    }
                    Link {
                        to: Route::Register { role: Some("contractor".to_string()) },
                        class: "cta cta-contractor",
                        "Get Hired Today"
                        Icon { width: 32, height: 32, icon: LdArrowRight }
                    }
                }
            }

            section { class: "features",
                h2 { class: "features-title", "Built for the Future of Work" }
                div { class: "features-grid",
                    Feature {
                        accent: "blue",
                        title: "Virtual Consultations",
                        blurb: "Real-time video walkthroughs — diagnose, quote, and plan without leaving home.",
                        Icon { width: 64, height: 64, icon: LdVideo }
                    }
                    Feature {
                        accent: "purple",
                        title: "AR Previews",
                        blurb: "See your renovation in real space before committing — reduce changes and surprises.",
                        Icon { width: 64, height: 64, icon: LdEye }
                    }
                    Feature {
                        accent: "green",
                        title: "Verified Professionals",
                        blurb: "Licensed, insured, reviewed — only the best contractors join SkillSync.",
                        Icon { width: 64, height: 64, icon: LdUserCheck }
                    }
                }
            }

            footer { class: "site-footer",
                p { "© 2026 SkillSync — Redefining trust in home services" }
            }
        }
    }
}

#[component]
fn Feature(accent: String, title: String, blurb: String, children: Element) -> Element {
    rsx! {
        div { class: "feature-card feature-{accent}",
            div { class: "feature-icon", {children} }
            h3 { class: "feature-title", "{title}" }
            p { class: "feature-blurb", "{blurb}" }
        }
    }
}
