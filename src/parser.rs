use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

pub struct Document {
    pub path: String,
    pub title: Option<String>,
    pub body: String,
}

pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Reads a corpus file. HTML files contribute their title and body text,
/// anything else is taken verbatim and must be valid UTF-8.
pub fn read_document(path: &Path) -> anyhow::Result<Document> {
    let raw = fs::read_to_string(path)?;
    let name = path.to_string_lossy().to_string();
    if is_html(path) {
        parse_html(&raw, &name)
    } else {
        Ok(Document {
            path: name,
            title: None,
            body: raw,
        })
    }
}

fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {:?}: {:?}", css, e))
}

pub fn parse_html(html: &str, path: &str) -> anyhow::Result<Document> {
    let document = Html::parse_document(html);
    let selector_title = selector("title")?;
    let selector_body = selector("body")?;

    let title = document
        .select(&selector_title)
        .next()
        .map(|n| n.text().collect::<Vec<_>>().join(" "));

    let body = document
        .select(&selector_body)
        .next()
        .map(|n| n.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| document.root_element().text().collect::<Vec<_>>().join(" "));

    Ok(Document {
        path: path.to_string(),
        title,
        body,
    })
}
