use crate::report::AggregateReport;
use crate::results::{PageAudit, PageRecord};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const CSV_HEADERS: [&str; 33] = [
    "URL",
    "Title",
    "Title Length",
    "Meta Description",
    "Meta Description Length",
    "Meta Keywords",
    "H1 Tags",
    "H2 Tags",
    "H3 Tags",
    "H1 Count",
    "H2 Count",
    "H3 Count",
    "Images Total",
    "Images Without Alt",
    "Alt Texts",
    "Breadcrumbs",
    "Internal Links",
    "External Links",
    "Internal Links Count",
    "External Links Count",
    "Word Count",
    "Keyword Density",
    "Top Keywords",
    "Robots",
    "URL Depth",
    "URL Length",
    "Title Meta Issues",
    "Header Issues",
    "URL Issues",
    "Content Issues",
    "Recommendations",
    "Overall Score",
    "Error",
];

/// List-valued cells are written as JSON
fn json_cell<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn audit_row(audit: &PageAudit) -> Vec<String> {
    vec![
        audit.url.clone(),
        audit.title.clone().unwrap_or_default(),
        audit.title_length.to_string(),
        audit.meta_description.clone().unwrap_or_default(),
        audit.meta_description_length.to_string(),
        audit.meta_keywords.clone().unwrap_or_default(),
        json_cell(&audit.headers.h1),
        json_cell(&audit.headers.h2),
        json_cell(&audit.headers.h3),
        audit.headers.h1_count().to_string(),
        audit.headers.h2_count().to_string(),
        audit.headers.h3_count().to_string(),
        audit.images.total.to_string(),
        audit.images.without_alt.to_string(),
        json_cell(&audit.images.alt_texts),
        json_cell(&audit.breadcrumbs),
        json_cell(&audit.internal_links),
        json_cell(&audit.external_links),
        audit.internal_links.len().to_string(),
        audit.external_links.len().to_string(),
        audit.word_count.to_string(),
        json_cell(&audit.keyword_density),
        json_cell(&audit.top_keywords),
        audit.robots.clone(),
        audit.url_depth.to_string(),
        audit.url_length.to_string(),
        json_cell(&audit.issues.title_meta),
        json_cell(&audit.issues.header),
        json_cell(&audit.issues.url),
        json_cell(&audit.issues.content),
        json_cell(&audit.recommendations),
        audit.score.to_string(),
        String::new(),
    ]
}

/// Error rows carry only the URL and the reason
fn error_row(url: &str, error: &str) -> Vec<String> {
    let mut row = vec![String::new(); CSV_HEADERS.len()];
    row[0] = url.to_string();
    row[CSV_HEADERS.len() - 1] = error.to_string();
    row
}

/// Write one row per page record
pub fn write_csv<W: Write>(writer: W, records: &[PageRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADERS)?;

    for record in records {
        let row = match record {
            PageRecord::Success(audit) => audit_row(audit),
            PageRecord::Error { url, error } => error_row(url, error),
        };
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn save_csv<P: AsRef<Path>>(path: P, records: &[PageRecord]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_csv(file, records)?;
    Ok(())
}

/// Write the page records and the aggregate report as one JSON document
pub fn save_json<P: AsRef<Path>>(
    path: P,
    records: &[PageRecord],
    report: &AggregateReport,
) -> Result<(), Box<dyn Error>> {
    #[derive(Serialize)]
    struct Document<'a> {
        report: &'a AggregateReport,
        pages: &'a [PageRecord],
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(
        file,
        &Document {
            report,
            pages: records,
        },
    )?;
    Ok(())
}
