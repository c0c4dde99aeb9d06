#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    salon_backend::run().await;
}
