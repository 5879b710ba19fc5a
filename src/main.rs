#[tokio::main]
async fn main() {
    org_site_backend::run().await;
}
