//! Output formatting utilities

use crate::application::{BuildReport, ContentKind};

/// One tag per line
pub fn format_tags(tags: &[String]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}

/// Summary of a build run
pub fn format_build_report(report: &BuildReport) -> String {
    let mut output = String::new();

    for item in &report.items {
        let kind = match item.kind {
            ContentKind::Article => "article",
            ContentKind::Page => "page",
        };
        output.push_str(&format!("{} {}\n", kind, item.source.display()));
        for tag in &item.tags {
            output.push_str(&format!("  {}\n", tag));
        }
    }

    if report.copied.is_empty() {
        output.push_str("No scripts copied\n");
    } else {
        output.push_str(&format!("Copied {} script(s)\n", report.copied.len()));
        for file in &report.copied {
            output.push_str(&format!("  {}\n", file.display()));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ResolvedItem;
    use std::path::PathBuf;

    #[test]
    fn test_format_tags() {
        let tags = vec!["<a>".to_string(), "<b>".to_string()];
        assert_eq!(format_tags(&tags), "<a>\n<b>\n");
        assert_eq!(format_tags(&[]), "");
    }

    #[test]
    fn test_format_empty_report() {
        let output = format_build_report(&BuildReport::default());
        assert_eq!(output, "No scripts copied\n");
    }

    #[test]
    fn test_format_report() {
        let report = BuildReport {
            items: vec![ResolvedItem {
                source: PathBuf::from("pages/about.md"),
                kind: ContentKind::Page,
                tags: vec!["<script src=\"/js/a.js\"></script>(head)".to_string()],
            }],
            copied: vec![PathBuf::from("js/a.js")],
        };

        let output = format_build_report(&report);
        assert!(output.contains("page pages/about.md\n"));
        assert!(output.contains("  <script src=\"/js/a.js\"></script>(head)\n"));
        assert!(output.contains("Copied 1 script(s)\n  js/a.js\n"));
    }
}
