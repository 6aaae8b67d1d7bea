use crate::router::AppRoute;
use leptos::*;

/// Landing spot for the home screen's call to action. The sign-in flow
/// itself lives outside this crate.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="min-h-dvh flex flex-col justify-center px-4">
            <h2 class="text-3xl font-bold">"Log in to Blitz"</h2>
            <a href=AppRoute::Home.path() class="mt-5 text-sm underline">
                "Back"
            </a>
        </div>
    }
}
