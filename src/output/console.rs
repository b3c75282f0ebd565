//! Console rendering of a scrape report

use crate::extract::ScrapeReport;
use crate::output::tabular::Tabular;

/// Prints a scrape report to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The report to display
pub fn print_report(report: &ScrapeReport) {
    println!("=== Scrape Report ===\n");

    println!("Summary:");
    println!("  Links found: {}", report.summary.link_count);
    println!("  Images found: {}", report.summary.image_count);
    println!("  Tables found: {}", report.summary.table_count);
    println!("  Status code: {}", report.summary.status_code);
    println!();

    println!("Metadata:");
    println!("  Title: {}", report.metadata.title);
    println!("  Description: {}", report.metadata.description);
    println!("  Charset: {}", report.metadata.charset);
    println!("  Server: {}", report.metadata.server);
    println!();

    print_section("Links", report.links.as_slice());
    print_section("Images", report.images.as_slice());
    print_section("Text Content", report.text_blocks.as_slice());
    print_section("Emails", &report.emails);

    for table in &report.tables {
        print_section(&table.label, table);
    }
}

/// Prints one result set as an aligned-enough pipe-separated block
fn print_section<T: Tabular + ?Sized>(title: &str, data: &T) {
    let rows = data.rows();

    if rows.is_empty() {
        println!("{}: none", title);
        println!();
        return;
    }

    println!("{} ({}):", title, rows.len());
    println!("  {}", data.headers().join(" | "));
    for row in rows {
        println!("  {}", row.join(" | "));
    }
    println!();
}
