use std::io::Write;

use serde::Serialize;

use super::views::ApplicationCardView;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: u32,
    candidate: &'a str,
    email: &'a str,
    job_title: &'a str,
    status: &'a str,
    rating: Option<u8>,
    source: &'a str,
    applied_date: String,
    tags: String,
}

/// Write application rows as CSV with a header line.
pub fn write_csv<W: Write>(writer: W, cards: &[ApplicationCardView]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for card in cards {
        csv_writer.serialize(ExportRow {
            id: card.id.0,
            candidate: &card.candidate_name,
            email: &card.email,
            job_title: &card.job_title,
            status: card.status.as_str(),
            rating: card.rating,
            source: card.source.as_str(),
            applied_date: card.applied_date.format("%Y-%m-%d").to_string(),
            tags: card.tags.join(";"),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
