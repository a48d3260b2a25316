// services/paymind-dash/src/components/chat_box.rs
//
// PayMind Dashboard - Chat transcript and input
//

use leptos::*;
use paykit::types::{ChatMessage, Sender};

#[component]
pub fn ChatBox(
    #[prop(into)] messages: Signal<Vec<ChatMessage>>,
    #[prop(into)] pending: Signal<bool>,
    on_send: Callback<String>,
) -> impl IntoView {
    let input = create_rw_signal(String::new());

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        input.set(String::new());
        on_send.call(text);
    };

    view! {
        <div class="chat-box">
            <div class="chat-transcript">
                <For
                    each=move || messages.get()
                    key=|msg| msg.id
                    children=move |msg: ChatMessage| {
                        let class = match msg.sender {
                            Sender::User => "chat-msg chat-user",
                            Sender::Assistant => "chat-msg chat-assistant",
                        };
                        let time = msg
                            .timestamp
                            .with_timezone(&chrono::Local)
                            .format("%H:%M")
                            .to_string();
                        view! {
                            <div class=class>
                                <p class="chat-content">{msg.content.clone()}</p>
                                <span class="chat-time">{time}</span>
                            </div>
                        }
                    }
                />
                <Show when=move || pending.get() fallback=|| ()>
                    <div class="chat-msg chat-assistant chat-typing">"…"</div>
                </Show>
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    placeholder="Type a payment command..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="btn btn-primary"
                    disabled=move || pending.get() || input.with(|t| t.trim().is_empty())
                    on:click=move |_| send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
