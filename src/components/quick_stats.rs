use leptos::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::motion::Motion;
use crate::summary::{format_score_or_pending, KpiSummary, ScoreIndicator};

/// Productivity score with its indicator emoji. Shows a placeholder and no
/// indicator until a score is known.
#[component]
pub fn ScoreCard(
    #[prop(into)]
    score: Signal<Option<u8>>,
) -> impl IntoView {
    view! {
        <div class="score-card">
            <div class="score-card-header">
                <span class="score-card-title">"Score"</span>
                <IconView icon=Icon::Award size=16 extra_class="score-card-icon" />
            </div>
            <div class="score-card-body">
                <p class="score-value">{move || format_score_or_pending(score.get())}</p>
                {move || score.get().map(ScoreIndicator::for_score).map(|indicator| view! {
                    <span class="score-indicator" role="img" aria-label=indicator.label()>
                        {indicator.emoji()}
                    </span>
                })}
            </div>
        </div>
    }
}

/// Focus time, sessions and mood rows. Renders nothing without KPIs.
#[component]
pub fn QuickStats(
    #[prop(into)]
    kpis: Signal<Option<KpiSummary>>,
    /// Drives the staggered enter animation
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    move || {
        kpis.get().map(|kpis| {
            let rows = kpis.rows();
            let count = rows.len();
            view! {
                <div class="quick-stats">
                    {rows.into_iter().enumerate().map(|(index, (label, value))| {
                        view! {
                            <div
                                class="quick-stat"
                                style=move || Motion::item(visible.get(), index, count).to_style()
                            >
                                <span class="quick-stat-label">{label}</span>
                                <span class="quick-stat-value">{value}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            }
        })
    }
}
