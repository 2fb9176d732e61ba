//! Marketplace-wide header bar with navigation links.
//!
//! Navigation targets are served by the rest of the marketplace, so they
//! render as plain anchors rather than router links.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <img class="site-header__logo" src="/eureca-logo.jpeg" alt="Eureca" />
            </a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/problems">"Problemas"</a>
                <a class="site-header__link" href="/solutions">"Soluções"</a>
                <a class="site-header__link" href="/researchers">"Pesquisadores"</a>
                <a class="site-header__link" href="/about">"Sobre"</a>
            </nav>
            <div class="site-header__actions">
                <a class="btn site-header__login" href="/login">"Entrar"</a>
                <a class="btn btn--primary site-header__register" href="/register">"Cadastrar"</a>
            </div>
        </header>
    }
}
