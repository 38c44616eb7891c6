use once_cell::sync::Lazy;
use reqwest::Client;

// Timeouts are set per request: metadata calls and generation need very
// different limits against the same server.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("zforge/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

pub fn get_http_client() -> &'static Client {
    &HTTP_CLIENT
}
