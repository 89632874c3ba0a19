use crate::settings::{
    AlarmMode, AlarmSettings, EntryDelay, NotificationKind, NotificationSettings, save_settings,
};
use crate::toast::ToastQueue;
use crate::ui::show_toast;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsTab {
    Notifications,
    Alarm,
    Camera,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [
        SettingsTab::Notifications,
        SettingsTab::Alarm,
        SettingsTab::Camera,
    ];

    fn label(self) -> &'static str {
        match self {
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Alarm => "Alarm System",
            SettingsTab::Camera => "Camera Settings",
        }
    }
}

#[component]
pub fn SettingsView() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut active = use_signal(|| SettingsTab::Notifications);
    let notifications = use_signal(NotificationSettings::default);
    let alarm = use_signal(AlarmSettings::default);

    let on_save = move |_: MouseEvent| {
        let ack = save_settings(&notifications(), &alarm());
        show_toast(toasts, &ack);
    };

    rsx! {
        div { class: "page-container",
            h1 { "Security Settings" }
            div { class: "settings-tabs",
                for tab in SettingsTab::ALL {
                    button {
                        class: if active() == tab { "settings-tab active" } else { "settings-tab" },
                        r#type: "button",
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            match active() {
                SettingsTab::Notifications => rsx! {
                    NotificationsCard { notifications, on_save }
                },
                SettingsTab::Alarm => rsx! {
                    AlarmCard { alarm, on_save }
                },
                SettingsTab::Camera => rsx! {
                    CameraCard {}
                },
            }
        }
    }
}

#[component]
fn NotificationsCard(
    notifications: Signal<NotificationSettings>,
    on_save: EventHandler<MouseEvent>,
) -> Element {
    let mut notifications = notifications;
    let current = notifications();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { "Notification Preferences" }
                p { class: "text-muted", "Choose which security events you want to be notified about." }
            }
            div { class: "card-content",
                for kind in NotificationKind::ALL {
                    div { class: "setting-row",
                        div {
                            label { r#for: kind.element_id(), "{kind.label()}" }
                            div { class: "text-muted small", "{kind.description()}" }
                        }
                        input {
                            id: kind.element_id(),
                            class: "switch",
                            r#type: "checkbox",
                            checked: current.get(kind),
                            onchange: move |_| {
                                notifications.with_mut(|n| n.toggle(kind));
                            },
                        }
                    }
                }
            }
            div { class: "card-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |ev| on_save.call(ev),
                    "Save Changes"
                }
            }
        }
    }
}

#[component]
fn AlarmCard(alarm: Signal<AlarmSettings>, on_save: EventHandler<MouseEvent>) -> Element {
    let mut alarm = alarm;
    let current = alarm();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { "Alarm System Configuration" }
                p { class: "text-muted", "Manage your alarm system settings and security modes." }
            }
            div { class: "card-content",
                div { class: "setting-field",
                    label { r#for: "alarm-mode", "Alarm Mode" }
                    select {
                        id: "alarm-mode",
                        value: "{current.mode}",
                        onchange: move |ev| {
                            if let Err(err) = alarm.with_mut(|a| a.set_mode_str(&ev.value())) {
                                tracing::warn!(error = %err, "ignoring alarm mode");
                            }
                        },
                        for mode in AlarmMode::ALL {
                            option {
                                value: mode.as_str(),
                                selected: mode == current.mode,
                                "{mode.label()}"
                            }
                        }
                    }
                }
                div { class: "setting-field",
                    div { class: "setting-row",
                        label { r#for: "alarm-volume", "Alarm Volume" }
                        span { class: "text-muted small", "{current.volume}%" }
                    }
                    input {
                        id: "alarm-volume",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        step: "1",
                        value: "{current.volume}",
                        oninput: move |ev| {
                            if let Ok(value) = ev.value().parse::<i64>() {
                                alarm.with_mut(|a| a.set_volume(value));
                            }
                        },
                    }
                }
                div { class: "setting-field",
                    label { r#for: "entry-delay", "Entry Delay (seconds)" }
                    select {
                        id: "entry-delay",
                        value: "{current.entry_delay.seconds()}",
                        onchange: move |ev| {
                            if let Err(err) = alarm.with_mut(|a| a.set_entry_delay_str(&ev.value())) {
                                tracing::warn!(error = %err, "ignoring entry delay");
                            }
                        },
                        for delay in EntryDelay::CHOICES {
                            option {
                                value: "{delay.seconds()}",
                                selected: delay == current.entry_delay,
                                "{delay.label()}"
                            }
                        }
                    }
                    p { class: "text-muted small", "Time between door opening and alarm triggering" }
                }
                div { class: "setting-field",
                    label { "🕒 Scheduled Security Modes" }
                    p { class: "text-muted small",
                        "Set up automatic alarm mode changes based on your schedule through the chatbot assistant."
                    }
                }
            }
            div { class: "card-footer",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |ev| on_save.call(ev),
                    "Save Changes"
                }
            }
        }
    }
}

#[component]
fn CameraCard() -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { "Camera Settings" }
                p { class: "text-muted", "Manage your security camera configuration." }
            }
            div { class: "card-content centered",
                div { class: "feature-icon", "📷" }
                p { class: "lead", "Camera Settings Coming Soon" }
                p { class: "text-muted", "This feature will be available in the next update." }
            }
            div { class: "card-footer",
                button { class: "btn btn-primary", r#type: "button", disabled: true, "Coming Soon" }
            }
        }
    }
}
