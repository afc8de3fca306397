//! Output formatting for CLI display

use crate::db::{FavoriteArtist, Work};
use colored::Colorize;

/// Format a work for listing
///
/// Quiet mode prints only the id so output can be piped.
#[must_use]
pub fn work_line(work: &Work, saved: bool, quiet: bool) -> String {
    if quiet {
        return work.id.to_string();
    }

    let marker = if saved { "★".yellow().to_string() } else { " ".to_string() };
    let mut line = format!(
        "{marker} {} {} by {}",
        work.id.to_string().dimmed(),
        work.title.bold(),
        work.author.cyan()
    );
    if !work.tags.is_empty() {
        line.push_str(&format!(" [{}]", work.tags.join(", ")));
    }
    line
}

/// Format the description and contact link shown under a work
#[must_use]
pub fn work_details(work: &Work) -> Option<String> {
    let mut parts = Vec::new();
    if !work.description.is_empty() {
        parts.push(work.description.clone());
    }
    if let Some(url) = &work.instagram_url {
        parts.push(url.blue().underline().to_string());
    }
    (!parts.is_empty()).then(|| format!("      {}", parts.join(" · ")))
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} work(s))")
    }
}

/// Format a favorite artist
#[must_use]
pub fn favorite_line(favorite: &FavoriteArtist, quiet: bool) -> String {
    if quiet {
        favorite.name.clone()
    } else {
        format!(
            "  {} ({} work(s), added {})",
            favorite.name.bold(),
            favorite.work_count,
            favorite.added_date.format("%Y-%m-%d")
        )
    }
}
