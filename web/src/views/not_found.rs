use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="not-found__title">"Page Not Found"</h1>
            <p class="not-found__text">
                "The page you're looking for doesn't exist or may have been moved."
            </p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigate("/", Default::default())
            >
                "Go Home"
            </Button>
        </div>
    }
}
