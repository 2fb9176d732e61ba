//! Draft entry form with a submit affordance gated on non-empty input.

#[cfg(test)]
#[path = "message_input_test.rs"]
mod message_input_test;

use leptos::prelude::*;

/// True when the drafted text qualifies for submission (non-empty after
/// trimming). Drives the `disabled` state of the send button.
pub(crate) fn can_submit(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Composer row: inert attach affordance, the draft input, and a send
/// button. Enter submits; the page decides what submission means.
#[component]
pub fn MessageInput(draft: RwSignal<String>, on_submit: Callback<()>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the composer when the screen mounts.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = input_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="message-input">
            <button class="btn message-input__attach" type="button" title="Anexar arquivo">
                "📎"
            </button>
            <input
                class="message-input__field"
                type="text"
                placeholder="Digite sua mensagem..."
                node_ref=input_ref
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="btn btn--primary message-input__send"
                disabled=move || !can_submit(&draft.get())
                on:click=move |_| on_submit.run(())
            >
                "Enviar"
            </button>
        </div>
    }
}
