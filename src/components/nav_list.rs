use leptos::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::layout::PanelLayout;
use crate::motion::Motion;
use crate::navigation::{is_active, select_entry, Navigator, RouterNavigator, NAV_ITEMS};

fn row_class(active: bool, layout: PanelLayout) -> String {
    let mut class = String::from("nav-row");
    if active {
        class.push_str(" nav-row-active");
    }
    if layout.is_collapsed() {
        class.push_str(" nav-row-compact");
    }
    class
}

#[component]
pub fn NavList(
    navigator: RouterNavigator,
    #[prop(into)]
    layout: Signal<PanelLayout>,
    /// Drives the staggered enter animation
    #[prop(into)]
    visible: Signal<bool>,
    set_is_open: WriteSignal<bool>,
) -> impl IntoView {
    let count = NAV_ITEMS.len();

    view! {
        <nav class="nav-list" aria-label="Primary">
            {NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                let current = navigator.clone();
                let active = Memo::new(move |_| is_active(item, &current.current_path()));
                let navigator = navigator.clone();
                let labels = move || layout.get().shows_labels();

                view! {
                    <button
                        class=move || row_class(active.get(), layout.get())
                        style=move || Motion::item(visible.get(), index, count).to_style()
                        title=move || if labels() { String::new() } else { item.label.to_string() }
                        aria-current=move || active.get().then_some("page")
                        data-nav-id=item.id
                        data-admin-only=item.admin_only.then_some("true")
                        on:click=move |_| {
                            select_entry(item.path, &navigator, |open| set_is_open.set(open));
                        }
                    >
                        <IconView icon=item.icon />
                        <Show when=labels>
                            <span class="nav-label">{item.label}</span>
                        </Show>
                        <Show when=move || active.get() && labels()>
                            <IconView
                                icon=Icon::ChevronRight
                                size=16
                                extra_class="nav-active-marker"
                            />
                        </Show>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
