use crate::assistant::{SharedResponder, build_responder};
use crate::config::AssistantConfig;
use crate::toast::{TOAST_TTL, ToastQueue, ToastSpec, ToastVariant};
use crate::views::{AboutView, HomeView, SettingsView};
use dioxus::prelude::*;

const GUARDIAN_CSS: Asset = asset!("/assets/guardian.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Home,
    About,
    Settings,
}

impl AppTab {
    const ALL: [AppTab; 3] = [AppTab::Home, AppTab::About, AppTab::Settings];

    fn label(self) -> &'static str {
        match self {
            AppTab::Home => "Home",
            AppTab::About => "About Us",
            AppTab::Settings => "Settings",
        }
    }
}

/// Queue a toast and schedule its removal.
pub fn show_toast(mut toasts: Signal<ToastQueue>, spec: &ToastSpec) {
    let id = toasts.with_mut(|queue| queue.push_spec(spec));
    spawn(async move {
        crate::timer::sleep(TOAST_TTL).await;
        toasts.with_mut(|queue| queue.dismiss(id));
    });
}

#[component]
pub fn App() -> Element {
    let responder: SharedResponder =
        use_hook(|| build_responder(&AssistantConfig::from_env_or_default()));
    use_context_provider(|| responder);
    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| toasts);
    let active_tab = use_signal(|| AppTab::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: GUARDIAN_CSS }
        div { class: "app-shell",
            Navbar { active_tab }
            main { class: "app-main",
                TabPanels { active_tab }
            }
            footer { class: "app-footer",
                p { "© 2023 Safe Home Guardian. All rights reserved." }
            }
        }
        ToastHost { toasts }
    }
}

#[component]
fn Navbar(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let mut menu_open = use_signal(|| false);
    let toggle_label = if menu_open() { "✕" } else { "☰" };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div {
                    class: "brand",
                    onclick: move |_| active_tab.set(AppTab::Home),
                    span { class: "brand-icon", "🛡" }
                    span { class: "brand-name", "Safe Home Guardian" }
                }
                div { class: "nav-links desktop-only",
                    for tab in AppTab::ALL {
                        NavLink { active_tab, tab, menu_open }
                    }
                }
                button {
                    class: "menu-toggle mobile-only",
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "{toggle_label}"
                }
            }
            if menu_open() {
                div { class: "mobile-menu mobile-only",
                    for tab in AppTab::ALL {
                        NavLink { active_tab, tab, menu_open }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(active_tab: Signal<AppTab>, tab: AppTab, menu_open: Signal<bool>) -> Element {
    let mut active_tab = active_tab;
    let mut menu_open = menu_open;
    let class = if active_tab() == tab {
        "nav-link active"
    } else {
        "nav-link"
    };
    rsx! {
        a {
            class: class,
            onclick: move |_| {
                active_tab.set(tab);
                menu_open.set(false);
            },
            "{tab.label()}"
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Home,
                children: rsx!( HomeView { active_tab } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::About,
                children: rsx!( AboutView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( SettingsView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn ToastHost(toasts: Signal<ToastQueue>) -> Element {
    let mut toasts = toasts;
    let items = toasts.read().items().to_vec();
    rsx! {
        div { class: "toast-host",
            for toast in items {
                div {
                    key: "{toast.id.0}",
                    class: match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    },
                    onclick: move |_| {
                        toasts.with_mut(|queue| queue.dismiss(toast.id));
                    },
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-description", "{toast.description}" }
                }
            }
        }
    }
}
