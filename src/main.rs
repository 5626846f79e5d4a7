#[tokio::main]
async fn main() {
    record_store_be::start_server().await;
}
