use fameframe::FameLoader;
use fameframe_demos::common::{MACRO_PATH, MACRO_REVISED_PATH, get_connector};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug cargo run --example 00_tracing --features tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let connector = get_connector();

    // One missing series (CPI in the revised vintage) and clamped bounds
    let data = FameLoader::builder()
        .sources([MACRO_PATH, MACRO_REVISED_PATH])
        .series(["GDP", "CPI"])
        .start("2015")
        .end("2030")
        .build()?
        .load(&connector)
        .await?;

    for w in &data.warnings {
        println!("warning: {w}");
    }
    Ok(())
}
