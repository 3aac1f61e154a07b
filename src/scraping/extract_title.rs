use scraper::{Html, Selector};

/// Extracts the text of the first `<title>` element in the document,
/// whitespace-trimmed, with any nested markup stripped. Returns `None`
/// when the document has no title element.
pub fn extract_title(html_content: &str) -> Option<String> {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
}
