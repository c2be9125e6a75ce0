#![allow(non_snake_case)]

fn main() {
    #[cfg(not(feature = "server"))]
    {
        use artbooth::client::{Application, ClientConfig};
        use dioxus_logger::tracing;

        let mut app = match Application::initialize(ClientConfig::default()) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Failed to start application: {}", e);
                std::process::exit(1);
            }
        };

        if let Err(e) = app.mount() {
            tracing::error!("Failed to mount application: {}", e);
            app.shutdown();
            std::process::exit(1);
        }
    }

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use artbooth::{
            client,
            server::{self, config::Config},
        };
        use dioxus_logger::tracing;

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        dioxus_logger::init(config.log_level).ok();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        router = router.merge(server::router::routes(&config));

        Ok(router)
    })
}
