use crate::views::shared::initial;
use dioxus::prelude::*;

struct TeamMember {
    name: &'static str,
    role: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Abhiram B",
        role: "Team Lead & Frontend Developer",
    },
    TeamMember {
        name: "Noshin M K",
        role: "Security Specialist & Backend Developer",
    },
    TeamMember {
        name: "Aditya Vardhan Singh",
        role: "AI Integration & UX Designer",
    },
];

const CORE_FEATURES: &[(&str, &str, &str)] = &[
    (
        "🛡",
        "Comprehensive Monitoring",
        "Get real-time updates on all entry points, camera feeds, and potential security threats.",
    ),
    (
        "🤖",
        "AI-Powered Assistant",
        "Interact naturally with our intelligent chatbot to get information and manage your security system.",
    ),
    (
        "🔒",
        "Smart Alert System",
        "Receive intelligent alerts that minimize false alarms while ensuring you're notified of real threats.",
    ),
    (
        "👥",
        "User-Friendly Interface",
        "Manage complex security features through an intuitive, easy-to-navigate interface.",
    ),
];

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page-container narrow",
            div { class: "page-intro",
                h1 { "About Safe Home Guardian" }
                div { class: "accent-rule" }
                p { class: "text-muted",
                    "Enhancing home security through intelligent AI-powered monitoring"
                }
            }

            div { class: "card",
                p {
                    "This project, Safe Home Guardian, is developed as part of an academic endeavor by a dedicated team of Computer Science Engineering students. The team includes Abhiram B, Noshin M K, Aditya Vardhan Singh, who are currently pursuing their B.Tech in Computer Science Engineering."
                }
                p {
                    "The main objective of this project is to utilize artificial intelligence to help users monitor home security in a smart and efficient way, enhancing the security through intelligent digital support."
                }
                p {
                    "Our AI-powered assistant provides real-time updates on door/window status, camera feeds, potential intrusions, and helps manage security settings, all through a simple, intuitive interface."
                }
            }

            h2 { class: "section-title", "Core Features" }
            div { class: "feature-grid two-up",
                for (icon, title, description) in CORE_FEATURES.iter().copied() {
                    div { class: "feature-row",
                        div { class: "feature-badge", "{icon}" }
                        div {
                            h3 { "{title}" }
                            p { class: "text-muted", "{description}" }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Our Team" }
            div { class: "team-grid",
                for member in TEAM {
                    div { class: "team-card",
                        div { class: "avatar", "{initial(member.name)}" }
                        h3 { "{member.name}" }
                        p { class: "text-muted", "{member.role}" }
                    }
                }
            }
        }
    }
}
