use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn HomePage() -> Html {
    use_title("Beacon");

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Beacon"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Check your inbox for a verification link to finish setting up your account."}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Have a code but no link? "}
                    <Link<Route> to={Route::Verify} classes="text-neutral-900 dark:text-neutral-100 font-medium underline">
                        {"Enter it here"}
                    </Link<Route>>
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Already verified? "}
                    <Link<Route> to={Route::Login} classes="text-neutral-900 dark:text-neutral-100 font-medium underline">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </main>
    }
}
