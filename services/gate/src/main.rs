use axum::http::HeaderValue;
use tracing::info;

use pingate::config::GateConfig;
use pingate::infra::blynk::BlynkGateway;
use pingate::infra::cache::RedisPinStore;
use pingate::router::build_router;
use pingate::state::LiveState;

#[tokio::main]
async fn main() {
    pingate_core::tracing::init_tracing();

    let config = GateConfig::from_env().expect("invalid configuration");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let cors_allow_origin = config
        .cors_allow_origin
        .as_deref()
        .map(|origin| HeaderValue::from_str(origin).expect("invalid CORS_ALLOW_ORIGIN"));

    let gateway = BlynkGateway::new(
        reqwest::Client::new(),
        config.blynk_base_url,
        config.blynk_token,
        config.blynk_virtual_pin,
    );

    let state = LiveState {
        pins: RedisPinStore { pool: redis },
        gateway,
        require_admin_pin: config.require_admin_pin,
        cors_allow_origin,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.gate_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(
        require_admin_pin = config.require_admin_pin,
        "gate service listening on {addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
