use gloo_timers::future::sleep;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::Route;
use crate::hooks::use_push_route;

/// How long the verified view lingers before moving on to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub is_verified: bool,
    pub message: AttrValue,
    /// The wait before a verified view navigates away. Injected rather
    /// than read from the constant so callers are not pinned to the
    /// production delay.
    #[prop_or(REDIRECT_DELAY)]
    pub redirect_delay: Duration,
}

/// Terminal view of the verification flow. A verified account redirects
/// to login after a short delay; a failure message just sits there.
#[function_component]
pub fn VerificationStatus(props: &Props) -> Html {
    let push_route = use_push_route();

    // One-shot redirect for verified accounts.
    {
        let push_route = push_route.clone();
        let redirect_delay = props.redirect_delay;

        use_effect_with(props.is_verified, move |&is_verified| {
            let cancelled = Rc::new(AtomicBool::new(false));
            let cancelled_clone = cancelled.clone();

            if is_verified {
                spawn_local(async move {
                    sleep(redirect_delay).await;

                    if cancelled_clone.load(Ordering::Relaxed) {
                        return;
                    }

                    tracing::info!(
                        "redirect delay elapsed, navigating to login"
                    );
                    push_route.emit(Route::Login);
                });
            }

            // Cleanup: signal cancellation when the view unmounts
            move || {
                cancelled.store(true, Ordering::Relaxed);
            }
        });
    }

    if props.is_verified {
        html! {
            <div class="text-center py-8">
                <div class="mb-4">
                    <svg class="mx-auto h-12 w-12 text-green-600 dark:text-green-400"
                         fill="none"
                         stroke="currentColor"
                         viewBox="0 0 24 24">
                        <path stroke-linecap="round"
                              stroke-linejoin="round"
                              stroke-width="2"
                              d="M5 13l4 4L19 7" />
                    </svg>
                </div>
                <p class="text-neutral-900 dark:text-neutral-100 font-medium mb-2">
                    {&props.message}
                </p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                    {"You will be redirected to the login page shortly..."}
                </p>
                <button
                    onclick={push_route.reform(|_| Route::Login)}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                           transition-colors duration-200"
                >
                    {"Go to Login"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {&props.message}
                </p>
            </div>
        }
    }
}
