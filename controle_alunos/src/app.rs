use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::{
    components::snackbar::Snackbar,
    pages::{dashboard::Dashboard, login_page::LoginPage},
    session::provide_session,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR" class="h-full">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-gray-950 flex flex-col h-full text-white p-2 gap-2">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/controle-alunos.css" />
        <Title text="Controle de Alunos" />

        <Router>
            <Snackbar>
                <Routes fallback=|| "Página não encontrada".into_view()>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/dashboard") view=Dashboard />
                    <Route path=path!("/login") view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </Snackbar>
        </Router>
    }
}
