use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page login-page">
            <h2>"Signed out"</h2>
            <p class="page-description">"Your session has ended."</p>
            <a href="/dashboard" class="btn btn-primary">"Back to dashboard"</a>
        </div>
    }
}
