use innoclinic_profiles_api::app::{build_app, in_memory_mediator, SERVICE_NAME};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    innoclinic_host::server::run(SERVICE_NAME, |config| {
        build_app(config, in_memory_mediator())
    })
    .await
}
