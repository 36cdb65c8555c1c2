use crate::OutputFormat;
use crate::commands::{QueryOptions, run_query};
use crate::config::Config;
use crate::table::{Cell, Column, Table};
use crate::youtube::duration::format_duration;
use crate::youtube::models::YouTubeVideo;
use crate::youtube::service::{self, VIDEO_QUERY_KEY};
use anyhow::Result;
use tracing::info;

pub fn columns() -> Vec<Column<YouTubeVideo>> {
    vec![
        Column::new("video", "Video", |v: &YouTubeVideo| Cell::Link {
            text: v.snippet.title.clone(),
            href: format!("https://www.youtube.com/watch?v={}", v.id),
        }),
        Column::new("channel", "YouTube Channel", |v: &YouTubeVideo| Cell::Link {
            text: v.snippet.channel_title.clone(),
            href: format!("https://www.youtube.com/channel/{}", v.snippet.channel_id),
        }),
        Column::new("category", "Category", |v: &YouTubeVideo| {
            Cell::text(&v.snippet.category_id)
        }),
        Column::new("tags", "Tags", |v: &YouTubeVideo| {
            Cell::Tags(v.snippet.tags.clone().unwrap_or_default())
        }),
        Column::new("duration", "Duration", |v: &YouTubeVideo| {
            Cell::text(format_duration(&v.content_details.duration))
        }),
    ]
}

pub fn table(videos: &[YouTubeVideo]) -> Table<'_, YouTubeVideo> {
    Table::new(columns(), videos)
}

pub fn render(videos: &[YouTubeVideo], format: OutputFormat) -> Result<String> {
    let table = table(videos);
    match format {
        OutputFormat::Text => Ok(table.render()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&table.to_json())?),
    }
}

/// `None` renders as an empty table
pub fn fetch(config: &Config, id: &str, opts: QueryOptions) -> Result<Option<YouTubeVideo>> {
    info!(id, "loading video");
    run_query(config, &[VIDEO_QUERY_KEY, id], opts, || {
        service::fetch_single_video(config, id)
    })
}

pub fn video(config: &Config, id: Option<String>, format: OutputFormat, opts: QueryOptions) -> Result<()> {
    let id = id.unwrap_or_else(|| config.youtube.video_id.clone());
    let video = fetch(config, &id, opts)?;
    println!("{}", render(video.as_slice(), format)?);
    Ok(())
}
