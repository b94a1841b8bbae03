use leptos::prelude::*;

use crate::app::DashboardData;
use crate::summary::{format_score, ScoreIndicator};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = use_context::<DashboardData>();

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <p class="page-description">"Your focus and productivity at a glance."</p>

            {move || {
                let Some(data) = data else {
                    return view! { <p class="status-text">"No dashboard data"</p> }.into_any();
                };
                if data.loading.get() {
                    view! { <p class="status-text">"Loading summary..."</p> }.into_any()
                } else if let Some(err) = data.error.get() {
                    view! { <p class="status-text status-error">{err}</p> }.into_any()
                } else if let Some(summary) = data.summary.get() {
                    let indicator = ScoreIndicator::for_score(summary.productivity_score);
                    view! {
                        <div class="card-grid">
                            <div class="card card-score">
                                <h3>"Productivity Score"</h3>
                                <p class="card-value">
                                    {format_score(summary.productivity_score)}
                                    " "
                                    {indicator.emoji()}
                                </p>
                                <p>{indicator.label()}</p>
                            </div>
                            {summary.kpis.map(|kpis| {
                                kpis.rows().into_iter().map(|(label, value)| view! {
                                    <div class="card">
                                        <h3>{label}</h3>
                                        <p class="card-value">{value}</p>
                                    </div>
                                }).collect::<Vec<_>>()
                            })}
                        </div>
                    }.into_any()
                } else {
                    view! { <p class="status-text">"No data"</p> }.into_any()
                }
            }}
        </div>
    }
}
