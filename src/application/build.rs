//! Build use case: drive the plugin hooks over a content tree

use crate::application::hooks::JsEmbed;
use crate::application::signals::{register_with, Signal, SignalBus};
use crate::domain::metadata::{parse_header, parse_rst_fields};
use crate::domain::template::resolve_site_url;
use crate::domain::{Metadata, MetadataValue, JS_KEY};
use crate::error::Result;
use crate::infrastructure::{discover_files, Config, FileSystemGenerator, Generator};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as content items
const CONTENT_EXTENSIONS: [&str; 3] = ["md", "markdown", "rst"];

/// Read the metadata block of a content file, by its extension
fn read_metadata(rel: &Path, text: &str) -> Metadata {
    if rel.extension() == Some(OsStr::new("rst")) {
        parse_rst_fields(text)
    } else {
        parse_header(text)
    }
}

/// Content under this directory is sent as pages, everything else as articles
const PAGES_DIR: &str = "pages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Article,
    Page,
}

impl ContentKind {
    fn from_relative_path(rel: &Path) -> Self {
        if rel.starts_with(PAGES_DIR) {
            ContentKind::Page
        } else {
            ContentKind::Article
        }
    }

    fn context_signal(self) -> Signal {
        match self {
            ContentKind::Article => Signal::ArticleGeneratorContext,
            ContentKind::Page => Signal::PageGeneratorContext,
        }
    }
}

/// A content item that declared scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    /// Path relative to the content root
    pub source: PathBuf,
    pub kind: ContentKind,
    /// Script tags with the site url filled in
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub items: Vec<ResolvedItem>,
    /// Script files copied, relative to the content root
    pub copied: Vec<PathBuf>,
}

/// Service running metadata resolution and the resource copy for a project
pub struct BuildService {
    root: PathBuf,
    config: Config,
}

impl BuildService {
    pub fn new(root: PathBuf, config: Config) -> Self {
        BuildService { root, config }
    }

    /// Load jsembed.toml (plus env overrides) from `root`
    pub fn discover(root: &Path) -> Result<Self> {
        let config = Config::load_from_dir(root)?.with_env_overrides();
        Ok(BuildService::new(root.to_path_buf(), config))
    }

    pub fn execute(&self) -> Result<BuildReport> {
        let plugin = JsEmbed {
            extensions: self.config.extensions.clone(),
            ..JsEmbed::default()
        };
        let mut bus = SignalBus::new();
        let registration = register_with(&mut bus, plugin);

        let gen = FileSystemGenerator::from_config(&self.root, &self.config);
        let extensions: Vec<String> = CONTENT_EXTENSIONS.iter().map(|e| e.to_string()).collect();

        let mut report = BuildReport::default();
        for rel in discover_files(gen.path(), "", &extensions)? {
            let text = fs::read_to_string(gen.path().join(&rel))?;
            let mut metadata = read_metadata(&rel, &text);
            let kind = ContentKind::from_relative_path(&rel);

            bus.send_context(kind.context_signal(), &gen, &mut metadata)?;

            if let Some(tags) = metadata.get(JS_KEY).and_then(MetadataValue::as_list) {
                report.items.push(ResolvedItem {
                    source: rel,
                    kind,
                    tags: tags
                        .iter()
                        .map(|tag| resolve_site_url(tag, &self.config.site_url))
                        .collect(),
                });
            }
        }

        bus.send_finalized(Signal::ArticleGeneratorFinalized, &gen)?;
        report.copied = registration.copied();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsEmbedError;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_build_resolves_articles_and_pages() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "content/post.md",
            "Title: Post\nJS: app.js(head), chart.js(body)\n\nText",
        );
        write(temp.path(), "content/pages/about.md", "Title: About\nJS: app.js(body)\n");
        write(temp.path(), "content/plain.md", "Title: Plain\n");
        write(temp.path(), "content/js/app.js", "app");
        write(temp.path(), "content/js/chart.js", "chart");

        let config = Config {
            site_url: "https://example.org".to_string(),
            ..Config::default()
        };
        let report = BuildService::new(temp.path().to_path_buf(), config)
            .execute()
            .unwrap();

        assert_eq!(report.items.len(), 2);
        let about = &report.items[0];
        assert_eq!(about.source, PathBuf::from("pages/about.md"));
        assert_eq!(about.kind, ContentKind::Page);
        assert_eq!(
            about.tags,
            vec![r#"<script src="https://example.org/js/app.js"></script>(body)"#]
        );
        let post = &report.items[1];
        assert_eq!(post.kind, ContentKind::Article);
        assert_eq!(post.tags.len(), 2);

        assert_eq!(
            report.copied,
            vec![PathBuf::from("js/app.js"), PathBuf::from("js/chart.js")]
        );
        assert!(temp.path().join("output/js/app.js").exists());
        assert!(temp.path().join("output/js/chart.js").exists());
    }

    #[test]
    fn test_build_reads_rst_field_lists() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "content/post.rst",
            "My post\n#######\n\n:date: 2017-01-01\n:js: app.js(head)\n\nBody\n",
        );
        write(temp.path(), "content/js/app.js", "app");

        let report = BuildService::new(temp.path().to_path_buf(), Config::default())
            .execute()
            .unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].source, PathBuf::from("post.rst"));
        assert_eq!(
            report.items[0].tags,
            vec![r#"<script src="/js/app.js"></script>(head)"#]
        );
    }

    #[test]
    fn test_build_rst_malformed_entry_fails() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "content/post.rst", "Title\n=====\n\n:js: app.js\n");

        let result = BuildService::new(temp.path().to_path_buf(), Config::default()).execute();
        assert!(matches!(result, Err(JsEmbedError::MalformedEntry(_))));
    }

    #[test]
    fn test_build_tags_point_at_copied_files() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "content/post.md",
            "JS: app.js(head), vendor.js(body)\n",
        );
        write(temp.path(), "content/js/app.js", "app");
        write(temp.path(), "content/js/vendor.js", "vendor");

        let config = Config {
            site_url: "https://example.org".to_string(),
            output: PathBuf::from("public"),
            ..Config::default()
        };
        let report = BuildService::new(temp.path().to_path_buf(), config)
            .execute()
            .unwrap();

        for tag in &report.items[0].tags {
            let src = tag
                .strip_prefix("<script src=\"https://example.org/")
                .and_then(|rest| rest.split('"').next())
                .unwrap();
            assert!(
                temp.path().join("public").join(src).is_file(),
                "tag {} points at a file that was not copied",
                tag
            );
        }
    }

    #[test]
    fn test_build_fails_on_malformed_entry() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "content/post.md", "JS: app.js\n");
        write(temp.path(), "content/js/app.js", "app");

        let result = BuildService::new(temp.path().to_path_buf(), Config::default()).execute();

        assert!(matches!(result, Err(JsEmbedError::MalformedEntry(_))));
        assert!(!temp.path().join("output/js").exists());
    }

    #[test]
    fn test_build_without_scripts_creates_output_js() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "content/post.md", "Title: Post\n");

        let report = BuildService::new(temp.path().to_path_buf(), Config::default())
            .execute()
            .unwrap();

        assert!(report.items.is_empty());
        assert!(report.copied.is_empty());
        assert!(temp.path().join("output/js").is_dir());
    }
}
