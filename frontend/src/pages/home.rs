use crate::{
    config::use_asset_manifest,
    router::AppRoute,
    state::navigation::{use_navigator, NavigatorHandle},
};
use leptos::{ev::MouseEvent, *};

pub const CONTINUE_PATH: &str = AppRoute::Login.path();

#[component]
pub fn HomePage() -> impl IntoView {
    let manifest = use_asset_manifest();
    let navigator = use_navigator();

    // Bound on the anchor itself so it runs before the router's window-level
    // link handler, which skips clicks that are already prevented.
    let on_continue = move |ev: MouseEvent| {
        if !should_handle_click(
            ev.button(),
            ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key(),
            ev.default_prevented(),
        ) {
            return;
        }
        ev.prevent_default();
        continue_to_login(&navigator);
    };

    view! {
        <div>
            <div
                class="bg-[length:500px_700px] bg-center h-dvh pt-7 flex justify-between flex-col w-full"
                style=manifest.background_style()
            >
                <h1 class="text-3xl ml-7 font-bold">"Blitz"</h1>
                <div class="bg-white py-4 pb-7 px-4">
                    <h2 class="text-3xl font-bold">"Get Started with Blitz"</h2>
                    <a
                        href=CONTINUE_PATH
                        on:click:undelegated=on_continue
                        class="flex items-center justify-center w-full bg-black text-white py-3 rounded mt-5"
                    >
                        "Continue"
                    </a>
                </div>
            </div>
        </div>
    }
}

pub(crate) fn continue_to_login(navigator: &NavigatorHandle) {
    navigator.navigate(CONTINUE_PATH);
}

// Modified or non-primary clicks stay with the browser (new tab, new window).
fn should_handle_click(button: i16, modified: bool, default_prevented: bool) -> bool {
    button == 0 && !modified && !default_prevented
}
