use fameframe::{FameLoader, SourceStrategy};
use fameframe_demos::common::{LABOUR_PATH, MACRO_PATH, MACRO_REVISED_PATH, get_connector, print_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();

    let data = FameLoader::builder()
        .sources([MACRO_PATH, MACRO_REVISED_PATH, LABOUR_PATH])
        .mnemonics(["first", "revised", "labour"])
        .series(["GDP", "INV", "UNEMP"])
        .source_strategy(SourceStrategy::Concurrent)
        .build()?
        .load(&connector)
        .await?;

    for (mnemonic, series) in &data.series {
        println!("{mnemonic}: {series:?}");
    }

    // Only series found in every source are compared; add a shared one
    let data = FameLoader::builder()
        .sources([MACRO_PATH, MACRO_REVISED_PATH])
        .mnemonics(["first", "revised"])
        .series("GDP")
        .start("2020")
        .build()?
        .load(&connector)
        .await?;

    if let Some(compare) = &data.compare {
        for (series, table) in compare {
            println!("== {series} ==");
            print_table(table);
        }
    }
    Ok(())
}
