use crate::domain::model::Vacation;
use crate::domain::time::format_timestamp;
use crate::utils::error::{FerienError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    state_code: &'a str,
    year: i32,
    name: &'a str,
    slug: &'a str,
    start: String,
    end: String,
}

impl<'a> From<&'a Vacation> for CsvRow<'a> {
    fn from(v: &'a Vacation) -> Self {
        Self {
            state_code: &v.state_code,
            year: v.year,
            name: &v.name,
            slug: &v.slug,
            start: format_timestamp(&v.start),
            end: format_timestamp(&v.end),
        }
    }
}

pub fn render_vacations(vacations: &[Vacation], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(vacations
            .iter()
            .map(|v| {
                format!(
                    "{:<4}{:<6}{:<20}{} .. {}",
                    v.state_code,
                    v.year,
                    v.name,
                    format_timestamp(&v.start),
                    format_timestamp(&v.end)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            if vacations.is_empty() {
                writer.write_record(["state_code", "year", "name", "slug", "start", "end"])?;
            }
            for vacation in vacations {
                writer.serialize(CsvRow::from(vacation))?;
            }
            finish_csv(writer)
        }
        OutputFormat::Json => {
            let payloads: Vec<_> = vacations.iter().map(Vacation::to_payload).collect();
            Ok(serde_json::to_string_pretty(&payloads)?)
        }
    }
}

pub fn render_state_codes(codes: &[&str], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(codes.join("\n")),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["state_code"])?;
            for code in codes {
                writer.write_record([code])?;
            }
            finish_csv(writer)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(codes)?),
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| FerienError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| FerienError::malformed(e.to_string()))
}
