//! Decorative login screen: sign-in/sign-up form with a simulated
//! fixed-latency submit, plus a staged system-log panel. No real
//! authentication behind any of it.

use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Simulated round-trip latency for a submit.
const AUTH_DELAY_MS: u32 = 2_000;

/// At most one simulated request in flight. A submit is accepted only
/// when nothing is pending; `finish` re-arms the guard for the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SubmitGuard {
    pending: bool,
}

impl SubmitGuard {
    /// Try to start a request. Returns `false` while one is pending.
    fn begin(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    fn finish(&mut self) {
        self.pending = false;
    }
}

const LOGIN_STYLES: &str = r#"
.login-screen {
    position: fixed;
    inset: 0;
    z-index: 60;
    background: #050505;
    color: white;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}
.login-backdrop {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, #1a0b2e 0%, #000 100%);
    opacity: 0.6;
    pointer-events: none;
}
.login-grid-floor {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(rgba(255,255,255,0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255,255,255,0.03) 1px, transparent 1px);
    background-size: 50px 50px;
    opacity: 0.2;
    pointer-events: none;
}
.login-panel {
    width: 100%;
    max-width: 32rem;
    padding: 2rem;
    position: relative;
    z-index: 10;
    max-height: 100vh;
    overflow-y: auto;
}
.login-header { text-align: center; margin-bottom: 2rem; }
.login-title {
    font-size: 3rem;
    font-weight: 900;
    letter-spacing: -0.02em;
    margin-bottom: 0.75rem;
}
.login-subtitle {
    font-family: monospace;
    font-size: 0.75rem;
    color: #8fe000;
    text-transform: uppercase;
    letter-spacing: 0.3em;
}
.login-card {
    position: relative;
    background: rgba(0,0,0,0.4);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255,255,255,0.1);
    padding: 2rem;
    border-radius: 1.5rem;
    overflow: hidden;
}
.login-scan {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 2px;
    background: linear-gradient(to right, transparent, #ff2e2e, transparent);
    opacity: 0.5;
    animation: login-scan 2s linear infinite;
}
@keyframes login-scan {
    0% { transform: translateY(0); }
    100% { transform: translateY(60vh); }
}
.login-field { margin-bottom: 1rem; }
.login-field label {
    display: block;
    font-family: monospace;
    font-size: 10px;
    font-weight: 700;
    color: #6b7280;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 0.5rem;
}
.login-field input {
    width: 100%;
    background: rgba(0,0,0,0.6);
    border: 1px solid rgba(255,255,255,0.1);
    border-radius: 0.5rem;
    padding: 1rem;
    color: white;
    font-family: monospace;
    font-size: 0.875rem;
    outline: none;
    transition: border-color 0.3s, background 0.3s;
}
.login-field input:focus { border-color: #ff2e2e; background: rgba(0,0,0,0.9); }
.login-submit {
    width: 100%;
    background: white;
    color: black;
    font-weight: 700;
    font-size: 1.125rem;
    padding: 1rem;
    margin-top: 0.5rem;
    text-transform: uppercase;
    letter-spacing: 0.02em;
    border: none;
    border-radius: 0.5rem;
    cursor: pointer;
    transition: background 0.3s, color 0.3s;
}
.login-submit:hover { background: #ff2e2e; color: white; }
.login-submit:disabled { opacity: 0.7; cursor: wait; }
.login-toggle {
    display: block;
    margin: 1.5rem auto 0;
    background: none;
    border: none;
    color: #6b7280;
    font-family: monospace;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    cursor: pointer;
    transition: color 0.3s;
}
.login-toggle:hover { color: white; }
.login-toggle .accent { color: #ff2e2e; }
.login-back {
    display: block;
    margin: 2rem auto 0;
    color: #6b7280;
    font-family: monospace;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    text-decoration: none;
    transition: color 0.3s;
}
.login-back:hover { color: white; }
.system-log {
    margin-top: 1.5rem;
    background: rgba(0,0,0,0.8);
    border: 1px solid rgba(20,83,45,0.3);
    border-radius: 0.5rem;
    padding: 1rem;
    font-family: monospace;
    font-size: 10px;
    color: rgba(34,197,94,0.8);
    height: 6rem;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    gap: 0.25rem;
}
.login-footnote {
    position: absolute;
    bottom: 1.5rem;
    font-family: monospace;
    font-size: 10px;
    color: rgba(255,255,255,0.2);
    letter-spacing: 0.1em;
}
"#;

const LOG_MESSAGES: &[&str] = &[
    "INITIALIZING SECURE HANDSHAKE...",
    "ESTABLISHING UPLINK TO MARS COLONY...",
    "VERIFYING BIOMETRIC SIGNATURES...",
    "ENCRYPTING DATA STREAM (AES-256)...",
    "CHECKING CLEARANCE LEVEL...",
    "READY FOR AUTHENTICATION.",
    "WAITING FOR USER INPUT...",
];

/// Boot-log panel: messages appear on randomized cumulative delays, the
/// panel shows the most recent five. Every pending timer is dropped on
/// unmount.
#[function_component(SystemLog)]
fn system_log() -> Html {
    let shown = use_state(|| 0_usize);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let mut delay = 0_u32;
                let mut timers = Vec::with_capacity(LOG_MESSAGES.len());
                for index in 0..LOG_MESSAGES.len() {
                    delay += (js_sys::Math::random() * 800.0) as u32 + 200;
                    let shown = shown.clone();
                    timers.push(Timeout::new(delay, move || shown.set(index + 1)));
                }
                move || drop(timers)
            },
            (),
        );
    }

    let visible = &LOG_MESSAGES[..(*shown).min(LOG_MESSAGES.len())];
    let tail = visible.iter().rev().take(5).rev();

    html! {
        <div class="system-log">
            { for tail.map(|msg| html! { <div key={*msg}>{format!("> {msg}")}</div> }) }
            <div>{"_"}</div>
        </div>
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let is_sign_up = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let is_loading = use_state(|| false);
    let guard = use_mut_ref(SubmitGuard::default);

    // Switching modes clears the form.
    {
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        use_effect_with_deps(
            move |_| {
                email.set(String::new());
                password.set(String::new());
                confirm_password.set(String::new());
                || ()
            },
            *is_sign_up,
        );
    }

    let on_submit = {
        let is_sign_up = is_sign_up.clone();
        let is_loading = is_loading.clone();
        let guard = guard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One pending attempt at a time; re-submits are ignored.
            if !guard.borrow_mut().begin() {
                return;
            }
            is_loading.set(true);
            let sign_up = *is_sign_up;
            let is_loading = is_loading.clone();
            let guard = guard.clone();
            log!("simulating auth round trip");
            spawn_local(async move {
                TimeoutFuture::new(AUTH_DELAY_MS).await;
                let message = if sign_up {
                    "REGISTRATION REQUEST SENT TO ORBITAL COMMAND"
                } else {
                    "ACCESS DENIED: RESTRICTED PERSONNEL ONLY"
                };
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
                guard.borrow_mut().finish();
                is_loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_sign_up = is_sign_up.clone();
        Callback::from(move |_: MouseEvent| is_sign_up.set(!*is_sign_up))
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_confirm = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |e: InputEvent| {
            confirm_password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="login-screen">
            <style>{LOGIN_STYLES}</style>
            <div class="login-backdrop"></div>
            <div class="login-grid-floor"></div>

            <div class="login-panel">
                <div class="login-header">
                    <h2 class="login-title">
                        { if *is_sign_up { "NEW RECRUIT" } else { "MARTIAN ID" } }
                    </h2>
                    <div class="login-subtitle">
                        { if *is_sign_up { "Clearance Required" } else { "Secure Gateway v4.0" } }
                    </div>
                </div>

                <div class="login-card">
                    <div class="login-scan"></div>
                    <form onsubmit={on_submit}>
                        <div class="login-field">
                            <label>{"Identity Protocol (Email)"}</label>
                            <input
                                type="email"
                                value={(*email).clone()}
                                oninput={on_email}
                                placeholder="agent@evilmartians.com"
                            />
                        </div>
                        <div class="login-field">
                            <label>
                                { if *is_sign_up { "Create Passcode" } else { "Security Key" } }
                            </label>
                            <input
                                type="password"
                                value={(*password).clone()}
                                oninput={on_password}
                                placeholder="••••••••••••"
                            />
                        </div>
                        if *is_sign_up {
                            <div class="login-field">
                                <label>{"Confirm Passcode"}</label>
                                <input
                                    type="password"
                                    value={(*confirm_password).clone()}
                                    oninput={on_confirm}
                                    placeholder="••••••••••••"
                                />
                            </div>
                        }

                        <button type="submit" class="login-submit" disabled={*is_loading}>
                            { if *is_loading {
                                "Processing..."
                            } else if *is_sign_up {
                                "Initiate Sequence"
                            } else {
                                "Authenticate"
                            } }
                        </button>

                        <SystemLog />

                        <button type="button" class="login-toggle" onclick={toggle_mode}>
                            { if *is_sign_up {
                                html! { <>{"ALREADY RECRUITED? "}<span class="accent">{"LOGIN HERE"}</span></> }
                            } else {
                                html! { <>{"NO ID? "}<span class="accent">{"REQUEST ACCESS"}</span></> }
                            } }
                        </button>
                    </form>
                </div>

                <Link<Route> to={Route::Home} classes="login-back">
                    {"← Abort Mission / Return to Base"}
                </Link<Route>>
            </div>

            <div class="login-footnote">
                {"SECURE CONNECTION ESTABLISHED • PORT 443 • LATENCY 12ms • "}
                { if *is_sign_up { "MODE: REGISTRATION" } else { "MODE: AUTHENTICATION" } }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut guard = SubmitGuard::default();
        assert!(guard.begin());
        assert!(!guard.begin());
        assert!(!guard.begin());
        guard.finish();
        assert!(guard.begin());
    }

    #[test]
    fn one_outcome_per_accepted_submit() {
        // Bursts of submits around each completion: exactly one acceptance
        // per round trip, no matter how many times the form is hammered.
        let mut guard = SubmitGuard::default();
        let mut accepted = 0;
        for _ in 0..5 {
            for _ in 0..3 {
                if guard.begin() {
                    accepted += 1;
                }
            }
            guard.finish();
        }
        assert_eq!(accepted, 5);
    }
}
