//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::server::axum;

        Ok(dioxus::server::router(App).route(
            "/_media/{*object_path}",
            axum::routing::get(backend::server_extra::photo::serve_photo),
        ))
    });
}
