#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use tracing_subscriber::EnvFilter;

    use delight_school::config::SiteConfig;
    use delight_school::frontend::{shell, App as SiteApp};
    use delight_school::web::{AppState, SecurityHeaders};

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info")),
        )
        .init();

    let site = SiteConfig::from_env().map_err(std::io::Error::other)?;
    if site.email.public_key.is_none() {
        log::warn!("EMAILJS_PUBLIC_KEY is not set; contact messages will be rejected");
    }

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;
    let state = Data::new(AppState::new(site));

    log::info!("Delight International School listening on http://{addr}");

    HttpServer::new(move || {
        let routes = generate_route_list(SiteApp);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/images", format!("{site_root}/images")))
            .service(Files::new("/files", format!("{site_root}/files")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser build enters through `hydrate` in lib.rs.
}
