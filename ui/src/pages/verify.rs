use payloads::{SubmitAttempt, VerificationQuery, VerificationResult};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::VerificationStatus;
use crate::hooks::use_title;

#[function_component]
pub fn VerifyPage() -> Html {
    use_title("Verify Account - Beacon");

    // The URL query drives this page; read it once per mount.
    let query = use_memo((), |_| {
        let window = web_sys::window().unwrap();
        let search = window.location().search().unwrap_or_default();
        VerificationQuery::parse(&search)
    });

    let email = use_state(|| query.email.clone().unwrap_or_default());
    let result = use_state(|| None::<VerificationResult>);
    let is_checking = use_state(|| query.identifier().is_some());
    let is_submitting = use_state(|| false);
    // Authoritative submit gate. Unlike `is_submitting`, a write here
    // is visible to a second dispatch in the same task, not just to
    // the next render.
    let in_flight = use_mut_ref(|| false);
    let code_ref = use_node_ref();

    // Look up the verification state on mount when the link carries a
    // token. Links without one go straight to the form.
    {
        let query = query.clone();
        let email = email.clone();
        let result = result.clone();
        let is_checking = is_checking.clone();

        use_effect_with((), move |_| {
            let Some(token) = query.identifier().map(str::to_string) else {
                return;
            };

            yew::platform::spawn_local(async move {
                tracing::debug!("checking verification status for link token");
                let api_client = crate::get_api_client();
                let outcome = api_client.verification_status(&token).await;

                if let Err(error) = &outcome {
                    tracing::warn!("Status check failed: {}", error);
                }
                if let Ok(status) = &outcome
                    && let Some(address) = &status.email
                {
                    email.set(address.clone());
                }

                result
                    .set(Some(VerificationResult::from_status_check(&outcome)));
                is_checking.set(false);
            });
        });
    }

    let on_submit = {
        let email = email.clone();
        let result = result.clone();
        let is_submitting = is_submitting.clone();
        let in_flight = in_flight.clone();
        let code_ref = code_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let code_input = code_ref.cast::<HtmlInputElement>().unwrap();
            let code = code_input.value();

            // Bind before matching; the gate borrow must end before the
            // send arm takes it mutably.
            let attempt =
                SubmitAttempt::evaluate(*in_flight.borrow(), &email, &code);
            match attempt {
                // Dropped, not queued.
                SubmitAttempt::InFlight => {}
                SubmitAttempt::Rejected(outcome) => {
                    result.set(Some(outcome));
                }
                SubmitAttempt::Send(details) => {
                    *in_flight.borrow_mut() = true;

                    let result = result.clone();
                    let is_submitting = is_submitting.clone();
                    let in_flight = in_flight.clone();

                    yew::platform::spawn_local(async move {
                        is_submitting.set(true);
                        result.set(None);

                        let api_client = crate::get_api_client();
                        let outcome =
                            api_client.submit_verification(&details).await;
                        if let Err(error) = &outcome {
                            tracing::warn!(
                                "Verification submit failed: {}",
                                error
                            );
                        }

                        result.set(Some(VerificationResult::from_submission(
                            &outcome,
                        )));
                        is_submitting.set(false);
                        *in_flight.borrow_mut() = false;
                    });
                }
            }
        })
    };

    let page_error =
        result.as_ref().and_then(|r| r.page_error().map(str::to_string));
    let code_error = result
        .as_ref()
        .and_then(|r| r.field_error("code").map(str::to_string));

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Verify Your Account"}
                    </h1>
                </div>

                if let Some(outcome) = result.as_ref().filter(|r| r.is_terminal()) {
                    <VerificationStatus
                        is_verified={outcome.is_verified()}
                        message={outcome.status_message().unwrap_or_default().to_string()}
                    />
                } else if *is_checking {
                    <div class="text-center py-8">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-neutral-600 dark:border-neutral-400 mx-auto mb-4">
                        </div>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Checking verification status..."}
                        </p>
                    </div>
                } else {
                    <form onsubmit={on_submit} class="space-y-6">
                        if let Some(error) = &page_error {
                            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                            </div>
                        }

                        <div>
                            <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Email"}
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                value={(*email).clone()}
                                disabled={true}
                                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                                       text-neutral-900 dark:text-neutral-100
                                       disabled:opacity-75 disabled:cursor-not-allowed"
                            />
                        </div>

                        <div>
                            <label for="code" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Verification Code"}
                            </label>
                            <input
                                ref={code_ref}
                                type="text"
                                id="code"
                                name="code"
                                autocomplete="one-time-code"
                                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                                       text-neutral-900 dark:text-neutral-100
                                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                                       dark:focus:ring-neutral-400 dark:focus:border-neutral-400"
                                placeholder="Enter your verification code"
                            />
                            if let Some(error) = &code_error {
                                <p class="mt-2 text-sm text-red-700 dark:text-red-400">{error}</p>
                            }
                        </div>

                        <button
                            type="submit"
                            disabled={*is_submitting}
                            class="w-full flex justify-center py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            if *is_submitting {
                                {"Verifying..."}
                            } else {
                                {"Verify"}
                            }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
