use yew::prelude::*;

use crate::hooks::use_title;

/// Redirect target for completed verifications.
#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in - Beacon");

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md text-center">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                    {"Sign in"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Your account is ready. Sign in with your email and password."}
                </p>
            </div>
        </div>
    }
}
