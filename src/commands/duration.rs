use crate::OutputFormat;
use crate::youtube::duration::{format_duration, parse_duration};
use anyhow::Result;

pub fn duration(iso: &str, format: OutputFormat) -> Result<()> {
    let formatted = format_duration(iso);
    match format {
        OutputFormat::Text => println!("{}", formatted),
        OutputFormat::Json => {
            let parts = parse_duration(iso);
            let out = serde_json::json!({
                "input": iso,
                "formatted": formatted,
                "parsed": parts.is_some(),
                "hours": parts.map(|p| p.hours),
                "minutes": parts.map(|p| p.minutes),
                "seconds": parts.map(|p| p.seconds),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
