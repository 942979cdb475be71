//! Registration page view with username/email/password form.

use api::models::Registration;
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

const MIN_PASSWORD_LEN: usize = 8;

/// Check the form and build the request body, or say what is wrong.
fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() {
        return Err("Username is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }

    Ok(Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let registration =
                match validate_registration(&username(), &email(), &password(), &confirm_password())
                {
                    Ok(r) => r,
                    Err(message) => {
                        error.set(Some(message.to_string()));
                        return;
                    }
                };

            loading.set(true);
            let result = match session().client() {
                Ok(api) => api.register(&registration).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(response) => {
                    tracing::info!("Registered user {:?}", response.user_id);
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    error.set(Some(e.user_message()));
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
                h2 { "Create Account" }

                form {
                    class: "form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "error", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password (min 8 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "muted",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
