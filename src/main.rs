use anyhow::Result;
use colored::Colorize;

use csv_add_titles::config::load_settings;
use csv_add_titles::csv_io::{read_urls, write_rows};
use csv_add_titles::rows::Row;
use csv_add_titles::scraping::fetch_page::build_client;
use csv_add_titles::scraping::resolve_title;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration settings
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let source_path = &settings.file.source_data;
    let output_path = &settings.file.output_data;

    // Read the URL list; a missing or unparsable input aborts before any
    // output is produced.
    let urls = match read_urls(source_path).await {
        Ok(urls) => urls,
        Err(e) => {
            println!("{}", format!("{:#}", e).red());
            return Err(e);
        }
    };

    println!("Read '{}'", source_path);
    println!("URLs to process: {}", urls.len());

    let client = build_client(&settings.http.user_agent, settings.http.timeout_secs)?;

    // Resolve titles one URL at a time, in input order. Deliberately
    // sequential: this is a one-off batch tool, not a crawler.
    let total = urls.len();
    let mut rows = Vec::with_capacity(total);
    for (index, url) in urls.into_iter().enumerate() {
        let outcome = resolve_title(&client, &url).await;
        println!("[{}/{}] {} -> {}", index + 1, total, url, outcome);
        rows.push(Row::new(url, outcome));
    }

    println!("\nResults:");
    for row in &rows {
        println!("{},{}", row.url, row.outcome);
    }

    write_rows(output_path, &rows).await?;
    println!(
        "\n{}",
        format!("Done: updated data saved to '{}'", output_path).green()
    );

    Ok(())
}
