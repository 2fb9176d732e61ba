//! Conversation page between a problem-owner company and a researcher.
//!
//! ARCHITECTURE
//! ============
//! The page owns the two pieces of screen state — the append-only
//! conversation and the uncommitted draft — as signals, resolves the seed
//! thread from the route's problem id on mount, and wires submission into
//! the composer. Rendering is delegated to `components`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_header::ChatHeader;
use crate::components::message_input::MessageInput;
use crate::components::message_list::MessageList;
use crate::components::site_header::SiteHeader;
use crate::data::threads;
use crate::state::conversation::{Conversation, Message, Sender, TODAY_LABEL};
use crate::util::time;

/// Appends the drafted text to the conversation as a researcher message.
///
/// Trims surrounding whitespace first; an empty result is a silent no-op.
/// On success the message takes the next positional id, the fixed local
/// identity, the supplied clock string, and the today label. Returns whether
/// a message was appended so the caller knows to clear the draft.
pub(crate) fn submit_draft(conversation: &mut Conversation, draft: &str, sent_at: String) -> bool {
    let body = draft.trim();
    if body.is_empty() {
        return false;
    }

    let author = threads::local_identity();
    let message = Message {
        id: conversation.next_id(),
        sender: Sender::Researcher,
        sender_name: author.name.to_owned(),
        avatar: author.avatar.to_owned(),
        body: body.to_owned(),
        timestamp: sent_at,
        date: TODAY_LABEL.to_owned(),
    };
    conversation.append(message);
    true
}

/// Conversation screen: site header, thread header, scrollable message
/// list, and the composer. Reads the problem id from the route parameter.
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let problem_id = params
        .read_untracked()
        .get("problem_id")
        .unwrap_or_default();
    let thread = threads::thread_for(&problem_id);

    let conversation = RwSignal::new(Conversation::seeded(thread.messages.clone()));
    let draft = RwSignal::new(String::new());

    let on_submit = Callback::new(move |()| {
        let mut appended = false;
        conversation.update(|c| {
            appended = submit_draft(c, &draft.get_untracked(), time::now_clock());
        });
        if appended {
            draft.set(String::new());
        }
    });

    view! {
        <div class="chat-page">
            <SiteHeader />
            <ChatHeader
                company_name=thread.company_name.clone()
                company_avatar=thread.company_avatar.clone()
                problem_title=thread.problem_title.clone()
            />
            <MessageList conversation=conversation />
            <MessageInput draft=draft on_submit=on_submit />
        </div>
    }
}
