use chrono::{DateTime, Utc};
use colored::Colorize;
use shortn::api::{CmdMessage, MessageLevel, ServiceListing};
use shortn::index::DisplayEntry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const SERVICE_WIDTH: usize = 9;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_short_url(short_url: &str) {
    println!("{}", short_url.bold());
}

/// One line per entry:
/// `  1. https://tinyurl.com/x  example.com/some/long/path…   tinyurl   3 minutes ago`
pub(super) fn print_entries(entries: &[DisplayEntry]) {
    for de in entries {
        let idx_str = format!("{:>3}. ", de.index);
        let short_url = &de.entry.short_url;
        let service = format!("{:<width$}", de.entry.service, width = SERVICE_WIDTH);
        let time_ago = format_time_ago(de.entry.created_at);

        let fixed = idx_str.width() + short_url.width() + 2 + SERVICE_WIDTH + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let long_url = truncate_to_width(&de.entry.decoded_long_url(), available);
        let padding = available.saturating_sub(long_url.width());

        println!(
            "{}{}  {}{} {}{}",
            idx_str.yellow(),
            short_url,
            long_url.dimmed(),
            " ".repeat(padding),
            service.cyan(),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_services(services: &[ServiceListing]) {
    for service in services {
        let marker = if service.active { "*" } else { " " };
        let endpoint = service.default_api_url.unwrap_or("(api-url required)");
        let line = format!(
            "{} {:<width$} {}",
            marker,
            service.id,
            endpoint,
            width = SERVICE_WIDTH
        );
        if service.active {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_config(entries: &[(String, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("example.com", 20), "example.com");
    }

    #[test]
    fn truncate_marks_cut_strings() {
        let out = truncate_to_width("https://example.com/a/very/long/path", 12);
        assert_eq!(out, "https://exa…");
        assert_eq!(out.width(), 12);
    }

    #[test]
    fn truncate_counts_wide_characters() {
        let out = truncate_to_width("例え例え例え", 5);
        assert_eq!(out, "例え…");
    }
}
