use crate::OutputFormat;
use crate::commands::{QueryOptions, equipment, video};
use crate::config::Config;
use anyhow::Result;

pub const VIDEO_HEADING: &str = "YouTube Video Information";

/// Both tables: the configured video, then the equipment comparison.
pub fn dashboard(config: &Config, format: OutputFormat, opts: QueryOptions) -> Result<()> {
    let v = video::fetch(config, &config.youtube.video_id, opts)?;
    let items = equipment::fetch(config, opts)?;

    match format {
        OutputFormat::Text => {
            println!("{}\n", VIDEO_HEADING);
            println!("{}", video::render(v.as_slice(), format)?);
            println!("{}", equipment::render(&items, format)?);
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "video": video::table(v.as_slice()).to_json(),
                "equipment": equipment::table(&items).to_json(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
