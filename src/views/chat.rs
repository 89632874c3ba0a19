use crate::assistant::{SharedResponder, answer};
use crate::timeline::Timeline;
use crate::toast::{CONNECTION_ERROR, ToastQueue};
use crate::types::{ChatMessage, Sender};
use crate::ui::show_toast;
use crate::views::shared::{format_message_timestamp, markdown_to_html};
use dioxus::html::MountedResult;
use dioxus::prelude::*;
use std::rc::Rc;

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    }
}

/// Returns whether the scroll went through; failures are only traced.
fn note_scroll_result(result: MountedResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "scroll to newest message failed");
            false
        }
    }
}

#[component]
pub fn SecurityChatbot() -> Element {
    let responder = use_context::<SharedResponder>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let mut timeline = use_signal(Timeline::new);
    let mut input = use_signal(String::new);
    let mut end_anchor = use_signal(|| Option::<Rc<MountedData>>::None);

    // Keep the newest message in view
    use_effect(move || {
        let _ = timeline.read().len();
        if let Some(anchor) = end_anchor() {
            spawn(async move {
                note_scroll_result(anchor.scroll_to(ScrollBehavior::Smooth).await);
            });
        }
    });

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let text = input();
        if timeline.with_mut(|t| t.push_user(&text)).is_none() {
            return;
        }
        input.set(String::new());

        let conversation = timeline.read().conversation();
        let placeholder = timeline.with_mut(|t| t.begin_typing());
        let responder = responder.clone();
        spawn(async move {
            let mut timeline = timeline;
            let outcome = answer(responder.as_ref(), &conversation).await;
            if outcome.failed {
                show_toast(toasts, &CONNECTION_ERROR);
            }
            timeline.with_mut(|t| t.resolve(placeholder, outcome.content));
        });
    };

    let messages_snapshot: Vec<ChatMessage> = timeline.read().messages().to_vec();
    let busy = timeline.read().is_busy();

    rsx! {
        div { class: "chatbot-container",
            div { class: "chatbot-header",
                h2 { "Home Security Assistant" }
            }
            div { class: "messages-container",
                for msg in messages_snapshot {
                    MessageBubble { key: "{msg.id}", message: msg }
                }
                div { onmounted: move |ev| end_anchor.set(Some(ev.data())) }
            }
            form { class: "input-container", onsubmit: on_submit,
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "Ask about your home security...",
                    disabled: busy,
                    oninput: move |ev| input.set(ev.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy || input().trim().is_empty(),
                    if busy { span { class: "spinner", aria_label: "Waiting for reply" } } else { "Send" }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let class = sender_class(message.sender);
    let timestamp = format_message_timestamp(message.created_at);

    rsx! {
        div { class: "message-row {class}",
            if message.typing {
                div { class: "message bot-message typing", aria_label: "Assistant is typing",
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
            } else if message.sender == Sender::Bot {
                div {
                    class: "message bot-message md",
                    dangerous_inner_html: "{markdown_to_html(&message.content)}",
                }
            } else {
                div { class: "message user-message", "{message.content}" }
            }
            if let Some(ts) = timestamp {
                span { class: "message-timestamp", "{ts}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_class() {
        assert_eq!(sender_class(Sender::User), "user");
        assert_eq!(sender_class(Sender::Bot), "bot");
    }

    #[test]
    fn test_scroll_failure_is_reported() {
        assert!(note_scroll_result(Ok(())));
        assert!(!note_scroll_result(Err(dioxus::html::MountedError::NotSupported)));
    }
}
