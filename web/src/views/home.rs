use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Landing page. Its sections are the targets of the navbar anchor links.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Find a game. Fill your pitch."</h1>
            <p class="hero__subtitle">
                "KoraLink connects players looking for a match with owners who have a pitch to fill."
            </p>
            <A href="/register">
                <Button appearance=ButtonAppearance::Primary>"Get Started"</Button>
            </A>
        </section>

        <section id="features" class="section">
            <h2 class="section__title">"Features"</h2>
            <ul class="section__list">
                <li>"Browse open slots near you"</li>
                <li>"Book and pay in a couple of taps"</li>
                <li>"Owners manage schedules from one dashboard"</li>
            </ul>
        </section>

        <section id="how-it-works" class="section">
            <h2 class="section__title">"How It Works"</h2>
            <ol class="section__list">
                <li>"Create a player or owner account"</li>
                <li>"Players pick a slot, owners confirm"</li>
                <li>"Show up and play"</li>
            </ol>
        </section>

        <section id="about" class="section">
            <h2 class="section__title">"About"</h2>
            <p>"KoraLink is built by people who spent too long looking for a fifth player."</p>
        </section>
    }
}
