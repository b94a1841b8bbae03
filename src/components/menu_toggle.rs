use leptos::prelude::*;

use crate::components::icons::{Icon, IconView};

/// Floating open/close button for narrow screens.
#[component]
pub fn MenuToggle(
    #[prop(into)]
    is_open: Signal<bool>,
    set_is_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="menu-toggle-wrap">
            <button
                class="menu-toggle"
                aria-label=move || {
                    if is_open.get() { "Close navigation" } else { "Open navigation" }
                }
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.set(!is_open.get_untracked())
            >
                {move || {
                    let icon = if is_open.get() { Icon::Close } else { Icon::Menu };
                    view! { <IconView icon=icon size=24 /> }
                }}
            </button>
        </div>
    }
}
