//! Inline Lucide-style SVG icons.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LayoutGrid,
    BarChart,
    Clock,
    BookOpen,
    Users,
    Settings,
    LogOut,
    Menu,
    Close,
    ChevronRight,
    Award,
    Zap,
}

fn icon_body(icon: Icon) -> AnyView {
    match icon {
        Icon::LayoutGrid => view! {
            <g>
                <rect width="7" height="7" x="3" y="3" rx="1"/>
                <rect width="7" height="7" x="14" y="3" rx="1"/>
                <rect width="7" height="7" x="14" y="14" rx="1"/>
                <rect width="7" height="7" x="3" y="14" rx="1"/>
            </g>
        }.into_any(),
        Icon::BarChart => view! {
            <g>
                <path d="M3 3v18h18"/>
                <path d="M18 17V9"/>
                <path d="M13 17V5"/>
                <path d="M8 17v-3"/>
            </g>
        }.into_any(),
        Icon::Clock => view! {
            <g>
                <circle cx="12" cy="12" r="10"/>
                <polyline points="12 6 12 12 16 14"/>
            </g>
        }.into_any(),
        Icon::BookOpen => view! {
            <g>
                <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>
                <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>
            </g>
        }.into_any(),
        Icon::Users => view! {
            <g>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </g>
        }.into_any(),
        Icon::Settings => view! {
            <g>
                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/>
                <circle cx="12" cy="12" r="3"/>
            </g>
        }.into_any(),
        Icon::LogOut => view! {
            <g>
                <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
                <polyline points="16 17 21 12 16 7"/>
                <line x1="21" x2="9" y1="12" y2="12"/>
            </g>
        }.into_any(),
        Icon::Menu => view! {
            <g>
                <line x1="4" x2="20" y1="6" y2="6"/>
                <line x1="4" x2="20" y1="12" y2="12"/>
                <line x1="4" x2="20" y1="18" y2="18"/>
            </g>
        }.into_any(),
        Icon::Close => view! {
            <g>
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            </g>
        }.into_any(),
        Icon::ChevronRight => view! {
            <g>
                <path d="m9 18 6-6-6-6"/>
            </g>
        }.into_any(),
        Icon::Award => view! {
            <g>
                <circle cx="12" cy="8" r="6"/>
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>
            </g>
        }.into_any(),
        Icon::Zap => view! {
            <g>
                <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>
            </g>
        }.into_any(),
    }
}

#[component]
pub fn IconView(
    icon: Icon,
    #[prop(default = 20)]
    size: u32,
    /// Extra classes, e.g. "nav-active-marker"
    #[prop(optional, into)]
    extra_class: String,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class=format!("icon {}", extra_class)
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_body(icon)}
        </svg>
    }
}
