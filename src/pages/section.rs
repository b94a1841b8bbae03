use leptos::prelude::*;

/// Titled page for dashboard sections without dedicated content.
#[component]
pub fn SectionPage(
    /// Heading, e.g. "Analytics"
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <div class="page section-page">
            <h2>{title}</h2>
            <p class="page-description">"Nothing to show here yet."</p>
        </div>
    }
}
