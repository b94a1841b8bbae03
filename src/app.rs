use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::navigation::active_item;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::section::SectionPage;
use crate::session::{HttpIdentity, IdentityService};
use crate::summary::DashboardSummary;

#[derive(Clone, Copy)]
pub struct DashboardData {
    pub summary: ReadSignal<Option<DashboardSummary>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    view! {
        <Router>
            <DashboardLayout />
        </Router>
    }
}

/// `previous` is whether the login route was showing on the last check;
/// `None` on mount.
fn should_reload_user(previous: Option<bool>, on_login: bool) -> bool {
    !on_login && previous != Some(false)
}

#[component]
fn DashboardLayout() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let location = use_location();

    let (is_open, set_is_open) = signal(false);
    let (summary, set_summary) = signal::<Option<DashboardSummary>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    provide_context(DashboardData {
        summary,
        loading,
        error,
    });

    let http_identity =
        HttpIdentity::new(config.endpoint("auth/me"), config.endpoint("auth/logout"));
    let identity: Arc<dyn IdentityService> = Arc::new(http_identity.clone());

    // Load score and KPIs on mount
    let summary_url = config.endpoint("dashboard/summary");
    Effect::new(move |_| {
        let url = summary_url.clone();
        spawn_local(async move {
            match api::fetch_dashboard_summary(&url).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => {
                    tracing::warn!(error = %e, "dashboard summary unavailable");
                    set_error.set(Some(format!("Failed to load summary: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    let kpis = Signal::derive(move || summary.get().and_then(|s| s.kpis));
    let score = Signal::derive(move || summary.get().map(|s| s.productivity_score));

    let login_path = config.login_path.clone();
    let signed_out = Memo::new(move |_| location.pathname.get() == login_path);

    // Fetch the user on mount and again whenever the login route is left
    Effect::new(move |previous: Option<bool>| {
        let on_login = signed_out.get();
        if should_reload_user(previous, on_login) {
            http_identity.refresh();
        }
        on_login
    });

    let section_title = move || {
        active_item(&location.pathname.get())
            .map(|item| item.label)
            .unwrap_or("Focusboard")
    };

    view! {
        <div class="app-layout">
            <style>{include_str!("app.css")}</style>
            <Show when=move || !signed_out.get()>
                <Sidebar
                    is_open=is_open
                    set_is_open=set_is_open
                    kpis=kpis
                    productivity_score=score
                    identity=identity.clone()
                />
            </Show>
            <main class="content">
                <header class="content-header">
                    <h1 class="content-title">{section_title}</h1>
                </header>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route
                        path=path!("/analytics")
                        view=|| view! { <SectionPage title="Analytics" /> }
                    />
                    <Route
                        path=path!("/sessions")
                        view=|| view! { <SectionPage title="Sessions" /> }
                    />
                    <Route
                        path=path!("/insights")
                        view=|| view! { <SectionPage title="Insights" /> }
                    />
                    <Route
                        path=path!("/admin/users")
                        view=|| view! { <SectionPage title="Users" /> }
                    />
                    <Route
                        path=path!("/settings")
                        view=|| view! { <SectionPage title="Settings" /> }
                    />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
        </div>
    }
}
