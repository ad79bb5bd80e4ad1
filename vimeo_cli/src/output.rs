use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use vimeo_api::types::{Category, Channel, Feed, Group, Pagination, User, Video};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Account")]
    #[serde(rename = "Account")]
    account: String,
    #[tabled(rename = "Joined")]
    #[serde(rename = "Joined")]
    joined: String,
}

#[derive(Tabled, Serialize)]
struct VideoRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "URI")]
    #[serde(rename = "URI")]
    uri: String,
    #[tabled(rename = "Duration")]
    #[serde(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct NamedRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "URI")]
    #[serde(rename = "URI")]
    uri: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

// -- Row builders --

fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id().unwrap_or_default().to_string(),
            name: u.name.clone(),
            location: u.location.clone().unwrap_or_default(),
            account: u.account.clone().unwrap_or_default(),
            joined: u
                .created_time
                .map(|t| t.date_naive().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_video_rows<'a>(videos: impl Iterator<Item = &'a Video>) -> Vec<VideoRow> {
    videos
        .map(|v| VideoRow {
            name: v.name.clone(),
            uri: v.uri.clone(),
            duration: format_duration(v.duration),
            created: v
                .created_time
                .map(|t| t.date_naive().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_category_rows(categories: &[Category]) -> Vec<NamedRow> {
    categories
        .iter()
        .map(|c| NamedRow {
            name: c.name.clone(),
            uri: c.uri.clone(),
            link: c.link.clone(),
        })
        .collect()
}

fn build_channel_rows(channels: &[Channel]) -> Vec<NamedRow> {
    channels
        .iter()
        .map(|c| NamedRow {
            name: c.name.clone(),
            uri: c.uri.clone(),
            link: c.link.clone(),
        })
        .collect()
}

fn build_group_rows(groups: &[Group]) -> Vec<NamedRow> {
    groups
        .iter()
        .map(|g| NamedRow {
            name: g.name.clone(),
            uri: g.uri.clone(),
            link: g.link.clone(),
        })
        .collect()
}

// -- Printers --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

/// JSON output keeps the full API entities; the other formats use summary rows.
pub fn print_users(users: &[User], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&users);
        return Ok(());
    }
    print_rows(build_user_rows(users), format)
}

pub fn print_videos(videos: &[Video], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&videos);
        return Ok(());
    }
    print_rows(build_video_rows(videos.iter()), format)
}

pub fn print_feed(feed: &[Feed], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&feed);
        return Ok(());
    }
    print_rows(
        build_video_rows(feed.iter().filter_map(|f| f.clip.as_ref())),
        format,
    )
}

pub fn print_categories(categories: &[Category], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&categories);
        return Ok(());
    }
    print_rows(build_category_rows(categories), format)
}

pub fn print_channels(channels: &[Channel], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&channels);
        return Ok(());
    }
    print_rows(build_channel_rows(channels), format)
}

pub fn print_groups(groups: &[Group], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(&groups);
        return Ok(());
    }
    print_rows(build_group_rows(groups), format)
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// One-line page summary for stderr.
pub fn page_summary(pagination: Option<&Pagination>, noun: &str) -> String {
    match pagination {
        Some(p) => format!(
            "Page {}/{} ({} total {})",
            p.page,
            p.total_pages(),
            p.total,
            noun
        ),
        None => format!("(no paging information for {})", noun),
    }
}

fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
