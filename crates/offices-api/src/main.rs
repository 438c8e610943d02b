use innoclinic_offices_api::app::{build_app, SERVICE_NAME};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    innoclinic_host::server::run(SERVICE_NAME, build_app).await
}
