use dto::auth::Credentials;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::{
    components::{alert::alert, modal::Modal, modals::register::RegisterModal},
    services::auth::login,
    session::use_session,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_register, set_show_register) = signal(false);

    let sign_in = Action::new(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move {
            match login(credentials).await {
                Ok(token) => session.sign_in(token),
                Err(_) => alert("Erro no login. Verifique suas credenciais."),
            }
        }
    });

    Effect::new(move || {
        if session.token().is_some() {
            navigate("/dashboard", Default::default());
        }
    });

    view! {
        <div class="flex flex-1 justify-center items-center">
            <div class="flex flex-col gap-3 bg-gray-900 p-6 rounded-xl outline outline-white/15 w-[400px] max-w-full">
                <h2 class="text-center text-2xl">Login</h2>
                <form
                    class="flex flex-col gap-3"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        sign_in
                            .dispatch(Credentials {
                                username: username.get(),
                                password: password.get(),
                            });
                    }
                >
                    <div class="flex flex-col">
                        <label for="username">Usuário</label>
                        <input
                            id="username"
                            class="input"
                            placeholder="Digite seu usuário"
                            required
                            bind:value=(username, set_username)
                        />
                    </div>
                    <div class="flex flex-col">
                        <label for="password">Senha</label>
                        <input
                            id="password"
                            class="input"
                            type="password"
                            placeholder="Digite sua senha"
                            required
                            bind:value=(password, set_password)
                        />
                    </div>
                    <button type="submit" class="btn save w-full" disabled=sign_in.pending()>
                        Entrar
                    </button>
                    <button
                        type="button"
                        class="btn w-full text-blue-400"
                        on:click=move |_| set_show_register.set(true)
                    >
                        Registrar-se
                    </button>
                </form>
            </div>
        </div>
        <Modal
            is_open=move || show_register.get()
            on_close=move || set_show_register.set(false)
            title=String::from("Cadastro")
        >
            <RegisterModal on_close=move || set_show_register.set(false) />
        </Modal>
    }
}
