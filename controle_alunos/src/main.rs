#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use controle_alunos::api::ApiClient;
    use controle_alunos::app::*;
    use controle_alunos::config::Config;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use simple_logger::SimpleLogger;

    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("Failed to initialise logger");

    let config = Config::load().expect("Environment misconfigured!");
    log::info!("Forwarding API calls to {}", config.api_base_url);
    let api = ApiClient::new(config.api_base_url);

    let conf = get_configuration(None).expect("Failed to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log::info!("Listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
