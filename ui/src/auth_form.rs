//! Auth gate: one card toggling between sign-in and sign-up.

use dioxus::prelude::*;

use crate::{use_app, ErrorBanner};

/// Username/password form for both login and registration.
#[component]
pub fn AuthForm() -> Element {
    let app = use_app();
    let mut is_login = use_signal(|| true);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let u = username().trim().to_string();
            let p = password();

            if u.is_empty() {
                app.set_error("Please enter a username");
                return;
            }
            if p.is_empty() {
                app.set_error("Please enter a password");
                return;
            }

            if is_login() {
                app.login(u, p).await;
            } else {
                app.register(u, p).await;
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",

            h2 {
                if is_login() { "Welcome Back" } else { "Create Account" }
            }
            p {
                class: "auth-subtitle",
                if is_login() {
                    "Sign in to access your movie favorites"
                } else {
                    "Join to start collecting your favorite movies"
                }
            }

            ErrorBanner {}

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "Enter your username",
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: app.loading(),
                    if app.loading() {
                        if is_login() { "Signing in..." } else { "Creating account..." }
                    } else {
                        if is_login() { "Sign In" } else { "Create Account" }
                    }
                }
            }

            p {
                class: "auth-toggle",
                if is_login() { "Don't have an account?" } else { "Already have an account?" }
                button {
                    class: "link",
                    onclick: move |_| {
                        is_login.set(!is_login());
                        app.clear_error();
                    },
                    if is_login() { "Sign up" } else { "Sign in" }
                }
            }
        }
    }
}
