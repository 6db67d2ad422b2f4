use dto::auth::Credentials;
use leptos::prelude::*;

use crate::{components::alert::alert, services::auth::register};

#[component]
pub fn RegisterModal(on_close: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let register_user = Action::new(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move {
            match register(credentials).await {
                Ok(_) => {
                    alert("Usuário registrado com sucesso!");
                    on_close();
                }
                Err(_) => alert("Erro ao registrar usuário."),
            }
        }
    });

    view! {
        <form
            class="flex flex-col gap-3 w-80"
            on:submit=move |ev| {
                ev.prevent_default();
                register_user
                    .dispatch(Credentials {
                        username: username.get(),
                        password: password.get(),
                    });
            }
        >
            <div class="flex flex-col">
                <label for="register-username">Usuário</label>
                <input
                    id="register-username"
                    class="input"
                    placeholder="Digite seu usuário"
                    required
                    bind:value=(username, set_username)
                />
            </div>
            <div class="flex flex-col">
                <label for="register-password">Senha</label>
                <input
                    id="register-password"
                    class="input"
                    type="password"
                    placeholder="Digite sua senha"
                    required
                    bind:value=(password, set_password)
                />
            </div>
            <button type="submit" class="btn save" disabled=register_user.pending()>
                Registrar
            </button>
        </form>
    }
}
