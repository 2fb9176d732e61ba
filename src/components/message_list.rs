//! Grouped message rendering with date separators and sender alignment.
//!
//! DESIGN
//! ======
//! The entire sequence renders on every pass — no pagination or
//! virtualization. Acceptable here because threads are small and bounded;
//! a long-conversation screen would need a windowed list.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::conversation::{Conversation, Message};

/// True when a date separator renders before the message at `index`.
///
/// Pure adjacency comparison of grouping labels: the first message always
/// gets one, later messages only when their label differs from the previous
/// message's label.
pub(crate) fn shows_date_separator(messages: &[Message], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    match (messages.get(index - 1), messages.get(index)) {
        (Some(previous), Some(current)) => previous.date != current.date,
        _ => false,
    }
}

/// Scrollable message area. Researcher messages align right with a filled
/// bubble; company messages align left with a bordered one.
#[component]
pub fn MessageList(conversation: RwSignal<Conversation>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to the newest message after every conversation change. Runs as
    // a reaction to the commit, not inside the append itself; a missing
    // element is ignored.
    Effect::new(move || {
        let _ = conversation.get().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(f64::from(el.scroll_height()));
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_to_with_scroll_to_options(&options);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=messages_ref>
            {move || {
                let state = conversation.get();
                let messages = state.messages();
                if messages.is_empty() {
                    return view! {
                        <div class="message-list__empty">"Nenhuma mensagem ainda."</div>
                    }
                        .into_any();
                }

                messages
                    .iter()
                    .enumerate()
                    .map(|(index, msg)| {
                        let separator = shows_date_separator(messages, index).then(|| {
                            view! {
                                <div class="message-list__date-row">
                                    <span class="message-list__date">{msg.date.clone()}</span>
                                </div>
                            }
                        });
                        let is_local = msg.sender.is_local();

                        view! {
                            <div class="message-list__entry">
                                {separator}
                                <div class="message-row" class:message-row--local=is_local>
                                    <img
                                        class="message-row__avatar"
                                        src=msg.avatar.clone()
                                        alt=msg.sender_name.clone()
                                    />
                                    <div class="message-row__column" class:message-row__column--local=is_local>
                                        <div class="message-row__meta">
                                            <span class="message-row__sender">{msg.sender_name.clone()}</span>
                                            <span class="message-row__timestamp">{msg.timestamp.clone()}</span>
                                        </div>
                                        <div class="message-bubble" class:message-bubble--local=is_local>
                                            <p class="message-bubble__text">{msg.body.clone()}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
