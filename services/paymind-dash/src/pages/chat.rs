// services/paymind-dash/src/pages/chat.rs
//
// PayMind Dashboard - AI payment assistant
//

use leptos::*;
use paykit::pages::chat::{ChatSession, EXAMPLE_PROMPTS};

use crate::components::{Card, ChatBox};
use crate::state::AppState;

#[component]
pub fn ChatPage(state: AppState) -> impl IntoView {
    let session = create_rw_signal(ChatSession::new());

    let on_send = Callback::new(move |text: String| {
        let mut pending = None;
        session.update(|s| pending = s.begin(&text));
        let Some(pending) = pending else {
            return;
        };

        let responder = state.responder.get_value();
        spawn_local(async move {
            let reply = responder.reply(&pending.message, &pending.history).await;
            if let Err(e) = &reply {
                log::warn!("Chat request failed: {}", e);
            }
            session.update(|s| s.complete(reply));
        });
    });

    view! {
        <div class="page chat">
            <div class="page-header">
                <h2 class="page-title">"AI Assistant"</h2>
            </div>

            <div class="chat-layout">
                <Card class="chat-panel">
                    <ChatBox
                        messages=Signal::derive(move || session.with(|s| s.messages().to_vec()))
                        pending=Signal::derive(move || session.with(|s| s.is_pending()))
                        on_send=on_send
                    />
                </Card>

                <div class="chat-examples">
                    {EXAMPLE_PROMPTS
                        .iter()
                        .map(|(heading, prompts)| view! {
                            <Card title=*heading class="example-card">
                                <ul>
                                    {prompts
                                        .iter()
                                        .map(|p| view! {
                                            <li
                                                class="example-prompt"
                                                on:click=move |_| on_send.call(p.to_string())
                                            >
                                                {*p}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
