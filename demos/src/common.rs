use fameframe_mock::MockConnector;

pub use fameframe_mock::fixtures::{LABOUR_PATH, MACRO_PATH, MACRO_REVISED_PATH};

/// Return a connector for demos.
///
/// Serves the in-memory fixture databases at their fixture paths.
#[must_use]
pub fn get_connector() -> MockConnector {
    println!("--- (Using in-memory fixture databases) ---");
    MockConnector::with_fixtures()
}

/// Print a table with one row per period.
pub fn print_table(table: &fameframe::PeriodTable) {
    let header: Vec<&str> = table.column_names().collect();
    println!("period  {}", header.join("  "));
    for (row, period) in table.index().iter().enumerate() {
        let cells: Vec<String> = table
            .columns()
            .iter()
            .map(|c| c.values[row].map_or_else(|| "-".to_string(), |v| format!("{v:.1}")))
            .collect();
        println!("{period}  {}", cells.join("  "));
    }
}
