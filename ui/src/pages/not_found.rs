use yew::prelude::*;

use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page Not Found - Beacon");

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-300">{"Page not found"}</p>
            </div>
        </main>
    }
}
