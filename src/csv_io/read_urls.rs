use anyhow::{Context, Result};
use csv_async::AsyncReaderBuilder;
use futures::stream::StreamExt;
use tokio::fs::File as AsyncFile;
use tokio::io::BufReader;

/// Reads the source CSV and returns its URLs in file order.
///
/// The file has no header row: every record is data, and the URL is the
/// first field. A missing file or a record that fails to parse aborts the
/// whole run — no output is produced from a partial read.
pub async fn read_urls(source_path: &str) -> Result<Vec<String>> {
    let file = AsyncFile::open(source_path)
        .await
        .with_context(|| format!("input file '{}' not found", source_path))?;
    let reader = BufReader::new(file);
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(false)
        .create_reader(reader);

    let mut urls = Vec::new();
    let mut records = csv_reader.records();
    while let Some(record) = records.next().await {
        let record = record
            .with_context(|| format!("failed to parse '{}' as CSV", source_path))?;
        if let Some(url) = record.get(0) {
            urls.push(url.to_string());
        }
    }

    Ok(urls)
}
