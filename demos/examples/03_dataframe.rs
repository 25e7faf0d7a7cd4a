#[cfg(feature = "dataframe")]
use fameframe::{FameLoader, ToDataFrame};
#[cfg(feature = "dataframe")]
use fameframe_demos::common::{MACRO_PATH, get_connector};

#[cfg(feature = "dataframe")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let data = FameLoader::builder()
        .source(MACRO_PATH)
        .series(["GDP", "CPI"])
        .build()?
        .load(&connector)
        .await?;

    if let Some(table) = data.data.single() {
        let df = table.to_dataframe()?;
        println!("{df}");
    }
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    println!("run with --features dataframe");
}
