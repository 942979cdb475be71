//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{sign_in, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in in this tab
    use_effect(move || {
        if session().token.is_some() {
            nav.replace(Route::Home {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let result = match session().client() {
                Ok(api) => api.login(&e, &p).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(response) => {
                    sign_in(&mut session, &response.token);
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page center",
            div {
                class: "card",
                h2 { "Sign in" }

                form {
                    class: "form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "error", "{err}" }
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "muted",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
