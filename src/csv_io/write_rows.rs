use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::rows::Row;

/// UTF-8 byte order mark, so spreadsheet tools that default to legacy
/// encodings pick up the output as UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the resolved rows as a two-column CSV (URL, title-or-error),
/// no header, input order, overwriting any existing file at the path.
pub async fn write_rows(output_path: &str, rows: &[Row]) -> Result<()> {
    let mut file = AsyncFile::create(output_path)
        .await
        .with_context(|| format!("failed to create output file '{}'", output_path))?;
    file.write_all(UTF8_BOM)
        .await
        .context("failed to write BOM")?;

    let writer = BufWriter::new(file);
    let mut csv_writer = AsyncWriterBuilder::new().create_writer(writer);

    for row in rows {
        let title = row.outcome.to_string();
        csv_writer
            .write_record(&[row.url.as_str(), title.as_str()])
            .await
            .with_context(|| format!("failed to write row for '{}'", row.url))?;
    }

    csv_writer.flush().await.context("failed to flush output file")?;

    Ok(())
}
