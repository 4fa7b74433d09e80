use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod hooks;
mod models;
mod pages;
mod services;
mod session;
mod util;

use components::guard::RequireAuth;
use components::layout::Layout;
use pages::accounts::AccountsPage;
use pages::budgets::BudgetsPage;
use pages::calendar::CalendarPage;
use pages::categories::CategoriesPage;
use pages::dashboard::DashboardPage;
use pages::landing::LandingPage;
use pages::login::LoginPage;
use pages::register::RegisterPage;
use pages::transactions::TransactionsPage;
use session::SessionProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/accounts")]
    Accounts,
    #[at("/categories")]
    Categories,
    #[at("/transactions")]
    Transactions,
    #[at("/budgets")]
    Budgets,
    #[at("/calendar")]
    Calendar,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn guarded(page: Html) -> Html {
    html! {
        <RequireAuth>
            <Layout>
                { page }
            </Layout>
        </RequireAuth>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => guarded(html! { <DashboardPage /> }),
        Route::Accounts => guarded(html! { <AccountsPage /> }),
        Route::Categories => guarded(html! { <CategoriesPage /> }),
        Route::Transactions => guarded(html! { <TransactionsPage /> }),
        Route::Budgets => guarded(html! { <BudgetsPage /> }),
        Route::Calendar => guarded(html! { <CalendarPage /> }),
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"404 Not Found"}
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
