use fameframe::{FameLoader, Tables};
use fameframe_demos::common::{MACRO_PATH, get_connector, print_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();

    let data = FameLoader::builder()
        .source(MACRO_PATH)
        .start("2020")
        .end("2021Q2")
        .build()?
        .load(&connector)
        .await?;

    println!("series: {:?}", data.series["macro"]);
    for (name, range) in &data.ranges["macro"] {
        let fmt = |p: Option<fameframe::Period>| p.map_or_else(|| "-".to_string(), |p| p.to_string());
        println!("{name}: {} .. {}", fmt(range.start), fmt(range.end));
    }

    match &data.data {
        Tables::Single(table) => print_table(table),
        Tables::NoData => println!("{}", fameframe::NO_DATA_MESSAGE),
        Tables::Multi(_) => unreachable!("one source yields one table"),
    }
    Ok(())
}
