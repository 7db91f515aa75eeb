#[tokio::main]
async fn main() {
    if let Err(err) = accident_triage_api::run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
