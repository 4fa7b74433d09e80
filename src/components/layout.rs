use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{
    icon_arrows, icon_calendar, icon_layout_grid, icon_log_out, icon_tag, icon_target, icon_wallet,
};
use crate::hooks::use_session;
use crate::Route;

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar />
            </div>
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let session = use_session();
    let greeting = session
        .user()
        .map(|u| format!("Welcome back, {}", u.name))
        .unwrap_or_default();

    html! {
        <header class="bg-card border-b border-border h-16 flex items-center justify-end px-6">
            <span class="text-sm text-muted-foreground">{ greeting }</span>
        </header>
    }
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            route: Route::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Accounts",
            route: Route::Accounts,
            icon: icon_wallet,
        },
        NavItem {
            label: "Categories",
            route: Route::Categories,
            icon: icon_tag,
        },
        NavItem {
            label: "Transactions",
            route: Route::Transactions,
            icon: icon_arrows,
        },
        NavItem {
            label: "Budgets",
            route: Route::Budgets,
            icon: icon_target,
        },
        NavItem {
            label: "Calendar",
            route: Route::Calendar,
            icon: icon_calendar,
        },
    ];

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.logout();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <aside class="w-[220px] h-screen bg-card border-r border-border p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-primary rounded-full flex items-center justify-center text-primary-foreground font-black">
                    {"F"}
                </div>
                <span class="text-foreground text-2xl font-black tracking-tight">{"FinTrack"}</span>
            </div>

            <nav class="flex-1 space-y-2">
                { for nav_items.iter().map(|item| {
                    let is_active = current.as_ref() == Some(&item.route);
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-primary text-primary-foreground w-full"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-muted-foreground hover:bg-secondary hover:text-foreground w-full"
                    };

                    html! {
                        <Link<Route> to={item.route.clone()} classes={class_name}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                        </Link<Route>>
                    }
                }) }
            </nav>

            <div class="mt-auto pt-4">
                <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-secondary transition-colors text-[13px] font-medium text-muted-foreground">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            </div>
        </aside>
    }
}
