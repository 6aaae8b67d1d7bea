use crate::router::AppRoute;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-dvh flex flex-col items-center justify-center px-4">
            <h1 class="text-3xl font-bold">"Page not found"</h1>
            <a href=AppRoute::Home.path() class="mt-5 text-sm underline">
                "Go to Blitz"
            </a>
        </div>
    }
}
