pub mod app_info;

pub async fn health_check() -> &'static str {
    "OK"
}
