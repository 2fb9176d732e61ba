//! Conversation header showing counterparty identity and the problem title.

use leptos::prelude::*;

/// Header row for the active thread: back link, company avatar and name,
/// and the problem this conversation is about.
#[component]
pub fn ChatHeader(company_name: String, company_avatar: String, problem_title: String) -> impl IntoView {
    let avatar_alt = company_name.clone();

    view! {
        <div class="chat-header">
            <a class="btn chat-header__back" href="/problems" title="Voltar para problemas">
                "←"
            </a>
            <img class="chat-header__avatar" src=company_avatar alt=avatar_alt />
            <div class="chat-header__identity">
                <h2 class="chat-header__name">{company_name}</h2>
                <p class="chat-header__problem">{problem_title}</p>
            </div>
            <span class="chat-header__spacer"></span>
            <button class="btn chat-header__more" type="button" title="Mais opções">
                "⋮"
            </button>
        </div>
    }
}
