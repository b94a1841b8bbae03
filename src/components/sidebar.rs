//! Dashboard navigation panel.
//!
//! Shows the signed-in user, the productivity score and KPIs, the
//! navigation entries and the settings/logout footer. On narrow screens the
//! panel is an overlay driven by the parent's `is_open` flag; on wide
//! screens it is docked and can be collapsed down to icons.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::avatar::{AvatarResolver, UiAvatars};
use crate::components::icons::{Icon, IconView};
use crate::components::menu_toggle::MenuToggle;
use crate::components::nav_list::NavList;
use crate::components::quick_stats::{QuickStats, ScoreCard};
use crate::config::AppConfig;
use crate::layout::{use_viewport, DisplayState, PanelLayout, Viewport};
use crate::motion::Motion;
use crate::navigation::{select_entry, RouterNavigator, SETTINGS_PATH};
use crate::session::{avatar_name, handle, short_name, sign_out, IdentityService};
use crate::summary::KpiSummary;

#[component]
pub fn Sidebar(
    /// Owned by the parent; only consulted on narrow screens.
    #[prop(into)]
    is_open: Signal<bool>,
    set_is_open: WriteSignal<bool>,
    /// `None` hides the quick stats block entirely.
    #[prop(into)]
    kpis: Signal<Option<KpiSummary>>,
    /// 0 to 100; `None` until loaded.
    #[prop(into)]
    productivity_score: Signal<Option<u8>>,
    identity: Arc<dyn IdentityService>,
    /// Defaults to ui-avatars at the configured base URL.
    #[prop(optional)]
    avatars: Option<Arc<dyn AvatarResolver>>,
    /// Initial collapse state of the docked panel.
    #[prop(optional)]
    start_collapsed: bool,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let avatars: Arc<dyn AvatarResolver> = avatars
        .unwrap_or_else(|| Arc::new(UiAvatars::new(config.avatar_base_url.clone())));
    let navigator = RouterNavigator::from_router();
    let viewport = use_viewport(config.wide_breakpoint_px);

    let (is_collapsed, set_is_collapsed) = signal(start_collapsed);
    let (entered, set_entered) = signal(false);
    let (logging_out, set_logging_out) = signal(false);
    let (logout_error, set_logout_error) = signal::<Option<String>>(None);

    let layout = Memo::new(move |_| {
        let state = DisplayState {
            is_open: is_open.get(),
            is_collapsed: is_collapsed.get(),
        };
        PanelLayout::resolve(state, viewport.get())
    });
    let shows_labels = move || layout.get().shows_labels();
    let items_visible = Signal::derive(move || entered.get() && layout.get().is_visible());

    // Flip after the first paint so the items transition in
    Effect::new(move |_| {
        request_animation_frame(move || set_entered.set(true));
    });

    let user = {
        let identity = identity.clone();
        Memo::new(move |_| identity.current_user())
    };
    let avatar_url = move || user.with(|u| avatars.avatar_url(avatar_name(u.as_ref())));
    let first_name = move || user.with(|u| short_name(u.as_ref()).to_string());
    let user_handle = move || user.with(|u| handle(u.as_ref()));

    let toggle_collapsed = move |_| set_is_collapsed.update(|collapsed| *collapsed = !*collapsed);

    let settings_navigator = navigator.clone();
    let open_settings = move |_| {
        select_entry(SETTINGS_PATH, &settings_navigator, |open| set_is_open.set(open));
    };

    let logout_navigator = navigator.clone();
    let login_path = config.login_path.clone();
    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        set_logging_out.set(true);
        set_logout_error.set(None);

        let identity = identity.clone();
        let navigator = logout_navigator.clone();
        let login_path = login_path.clone();
        spawn_local(async move {
            if let Err(e) = sign_out(identity.as_ref(), &navigator, &login_path).await {
                set_logout_error.set(Some(e.into()));
            }
            // the panel is unmounted once the login route renders
            let _ = set_logging_out.try_set(false);
        });
    };

    view! {
        <Show when=move || viewport.get().has_menu_toggle()>
            <MenuToggle is_open=is_open set_is_open=set_is_open />
        </Show>

        <Show when=move || viewport.get() == Viewport::Narrow>
            <div
                class="sidebar-backdrop"
                style=move || Motion::backdrop(layout.get().shows_backdrop()).to_style()
                on:click=move |_| set_is_open.set(false)
            ></div>
        </Show>

        <aside
            class=move || layout.get().panel_class()
            style=move || {
                let layout = layout.get();
                Motion::panel_style(layout.is_visible(), layout.width_px())
            }
            aria-label="Sidebar"
        >
            <style>{include_str!("sidebar.css")}</style>

            <div class="sidebar-header">
                <div class="sidebar-profile">
                    <img class="sidebar-avatar" src=avatar_url alt="Profile" />
                    <Show when=shows_labels>
                        <div class="sidebar-user">
                            <p class="sidebar-user-name">{first_name}</p>
                            {move || {
                                user_handle()
                                    .map(|h| view! { <p class="sidebar-user-handle">{h}</p> })
                            }}
                        </div>
                    </Show>
                    <Show when=move || viewport.get().has_collapse_toggle()>
                        <button
                            class="collapse-toggle"
                            aria-label=move || {
                                if is_collapsed.get() {
                                    "Expand sidebar"
                                } else {
                                    "Collapse sidebar"
                                }
                            }
                            aria-expanded=move || (!is_collapsed.get()).to_string()
                            on:click=toggle_collapsed
                        >
                            {move || {
                                let rotation = if is_collapsed.get() { "" } else { "rotate-180" };
                                view! {
                                    <IconView
                                        icon=Icon::ChevronRight
                                        size=18
                                        extra_class=rotation
                                    />
                                }
                            }}
                        </button>
                    </Show>
                </div>

                <Show when=shows_labels>
                    <ScoreCard score=productivity_score />
                </Show>
            </div>

            <Show when=shows_labels>
                <QuickStats kpis=kpis visible=items_visible />
            </Show>

            <NavList
                navigator=navigator.clone()
                layout=layout
                visible=items_visible
                set_is_open=set_is_open
            />

            <div class="sidebar-footer">
                <button
                    class="footer-row"
                    title=move || if shows_labels() { "" } else { "Settings" }
                    on:click=open_settings
                >
                    <IconView icon=Icon::Settings />
                    <Show when=shows_labels>
                        <span class="nav-label">"Settings"</span>
                    </Show>
                </button>
                <button
                    class="footer-row footer-logout"
                    title=move || if shows_labels() { "" } else { "Logout" }
                    disabled=move || logging_out.get()
                    on:click=on_logout
                >
                    <IconView icon=Icon::LogOut />
                    <Show when=shows_labels>
                        <span class="nav-label">
                            {move || if logging_out.get() { "Signing out..." } else { "Logout" }}
                        </span>
                    </Show>
                </button>
                {move || logout_error.get().map(|e| view! {
                    <p class="logout-error" role="alert">{e}</p>
                })}
            </div>

            <Show when=move || layout.get().is_collapsed()>
                <div class="sidebar-brand-marker">
                    <IconView icon=Icon::Zap extra_class="brand-icon" />
                </div>
            </Show>
        </aside>
    }
}
