use crate::domain::model::Person;
pub use crate::domain::model::OutputFormat;
use crate::utils::error::{AddressBookError, Result};

pub fn render(persons: &[&Person], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(persons)),
        OutputFormat::Csv => render_csv(persons),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(persons)?),
    }
}

fn render_table(persons: &[&Person]) -> String {
    let mut lines: Vec<String> = persons
        .iter()
        .enumerate()
        .map(|(i, person)| format!("{}. {}", i + 1, person))
        .collect();
    lines.push(format!("{} persons listed!", persons.len()));
    lines.join("\n")
}

fn render_csv(persons: &[&Person]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "phone", "email", "address", "tags"])?;

    for person in persons {
        let tags = person
            .tags()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            person.name(),
            person.phone(),
            person.email(),
            person.address(),
            tags.as_str(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| AddressBookError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| AddressBookError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
