use crate::ui::AppTab;
use crate::views::SecurityChatbot;
use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SECURITY_FEATURES: &[Feature] = &[
    Feature {
        icon: "🛡",
        title: "Door & Window Status",
        description: "Real-time monitoring of all entry points in your home",
    },
    Feature {
        icon: "📷",
        title: "Camera Feeds",
        description: "Live video from all your security cameras in one place",
    },
    Feature {
        icon: "🔔",
        title: "Intrusion Alerts",
        description: "Immediate notifications for any unusual activity",
    },
    Feature {
        icon: "🔒",
        title: "Smart Alarm Settings",
        description: "Customize your security preferences with ease",
    },
];

#[component]
pub fn HomeView(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;

    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                div { class: "hero-copy",
                    h1 { "Secure Your Home with Intelligent Monitoring" }
                    p {
                        "Get real-time updates, manage security settings, and protect what matters most with our AI-powered security assistant."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-accent",
                            r#type: "button",
                            onclick: move |_| active_tab.set(AppTab::Settings),
                            "Get Started"
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| active_tab.set(AppTab::About),
                            "Learn More"
                        }
                    }
                }
                div { class: "hero-chat",
                    SecurityChatbot {}
                }
            }
        }

        section { class: "features",
            h2 { "Smart Security Features" }
            div { class: "feature-grid",
                for feature in SECURITY_FEATURES {
                    div { class: "feature-card",
                        div { class: "feature-icon", "{feature.icon}" }
                        h3 { "{feature.title}" }
                        p { class: "text-muted", "{feature.description}" }
                    }
                }
            }
        }

        section { class: "cta",
            h2 { "Ready to Secure Your Home?" }
            p {
                "Join thousands of homeowners who trust Safe Home Guardian for their security needs. Start protecting what matters most today."
            }
            button {
                class: "btn btn-light",
                r#type: "button",
                onclick: move |_| active_tab.set(AppTab::Settings),
                "Sign Up Now ›"
            }
        }
    }
}
