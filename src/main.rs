#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
mod web;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::{App, HttpServer};
    use healsphere::frontend::{shell, App as Site};
    use leptos_actix::{generate_route_list, LeptosRoutes};

    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = web::config::ServerConfig::load().map_err(|e| {
        log::error!("{e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let bind_addr = config.bind_addr;
    log::info!("serving Healsphere on http://{}", bind_addr);

    HttpServer::new(move || {
        let routes = generate_route_list(Site);
        let leptos_options = config.leptos_options.clone();
        let site_root = leptos_options.site_root.clone();

        App::new()
            .wrap(web::middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(actix_web::web::Data::new(leptos_options))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The client bundle is started through `hydrate()` in lib.rs.
}
