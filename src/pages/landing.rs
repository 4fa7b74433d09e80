use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4 text-center">
            <h1 class="text-5xl font-black text-foreground tracking-tight">{"FinTrack"}</h1>
            <p class="text-lg text-muted-foreground mt-4 max-w-md">
                {"Track your accounts, budgets and spending in one place."}
            </p>
            <div class="flex gap-4 mt-8">
                <Link<Route> to={Route::Login} classes="bg-primary text-primary-foreground px-6 py-3 rounded-xl font-bold hover:opacity-90 transition-all">
                    {"Login"}
                </Link<Route>>
                <Link<Route> to={Route::Register} classes="bg-secondary text-secondary-foreground px-6 py-3 rounded-xl font-bold hover:opacity-90 transition-all">
                    {"Create account"}
                </Link<Route>>
            </div>
        </div>
    }
}
