//! Command-line interface
//!
//! Supports:
//! - Highlighting a file to markup
//! - Importing an exported document into the project store
//! - Exporting, listing and previewing stored projects

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::preview::compose_preview;
use crate::project::{export_document, import_document, ProjectStore};
use crate::syntax::{highlight, LanguageId};

/// Live HTML/CSS/JS playground editor
#[derive(Parser, Debug)]
#[command(name = "livepen", version, about = "Live HTML/CSS/JS playground editor")]
pub struct CliArgs {
    /// Use this project store instead of the one in the config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print a file as highlighted markup
    Highlight {
        path: PathBuf,
        /// html, css or js (detected from the extension when omitted)
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Import an exported document into the project store
    Import {
        path: PathBuf,
        /// Project name (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Write a stored project as a single document
    Export {
        id: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List stored projects, newest first
    List,
    /// Print the composed preview document of a stored project
    Preview { id: String },
}

impl CliArgs {
    /// Execute the parsed command, writing results to `out`
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        match self.command {
            CliCommand::Highlight { path, language } => {
                let language = match language {
                    Some(name) => LanguageId::from_name(&name)
                        .with_context(|| format!("Unknown language '{}'", name))?,
                    None => LanguageId::from_path(&path),
                };
                let text = read_file(&path)?;
                writeln!(out, "{}", highlight(&text, language))?;
            }
            CliCommand::Import { path, name } => {
                let html = read_file(&path)?;
                let report = import_document(&html)
                    .with_context(|| format!("Failed to import {}", path.display()))?;
                for tab in &report.missing {
                    tracing::warn!("{} has no {} section", path.display(), tab.label());
                }
                let name = name.unwrap_or_else(|| default_project_name(&path));

                let mut store = load_store(self.projects.as_deref());
                let id = store.insert(&name, report.snapshot);
                save_store(&store, self.projects.as_deref())?;
                writeln!(out, "{}", id)?;
            }
            CliCommand::Export { id, output } => {
                let store = load_store(self.projects.as_deref());
                let Some(project) = store.get(&id) else {
                    bail!("No project with id '{}'", id);
                };
                let document = export_document(&project.content, &project.name);
                match output {
                    Some(path) => std::fs::write(&path, document)
                        .with_context(|| format!("Failed to write {}", path.display()))?,
                    None => write!(out, "{}", document)?,
                }
            }
            CliCommand::List => {
                let store = load_store(self.projects.as_deref());
                for (id, project) in store.list() {
                    writeln!(out, "{}\t{}\t{}", id, project.name, project.timestamp)?;
                }
            }
            CliCommand::Preview { id } => {
                let store = load_store(self.projects.as_deref());
                let Some(project) = store.get(&id) else {
                    bail!("No project with id '{}'", id);
                };
                write!(out, "{}", compose_preview(&project.content))?;
            }
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn default_project_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

fn load_store(path: Option<&Path>) -> ProjectStore {
    match path {
        Some(path) => ProjectStore::load_from(path),
        None => ProjectStore::load(),
    }
}

fn save_store(store: &ProjectStore, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => store.save_to(path),
        None => store.save(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let args = CliArgs::try_parse_from(std::iter::once("livepen").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        args.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_highlight_with_language() {
        let args = CliArgs::try_parse_from(["livepen", "highlight", "a.txt", "-l", "css"]).unwrap();
        assert_eq!(
            args.command,
            CliCommand::Highlight {
                path: PathBuf::from("a.txt"),
                language: Some("css".to_string()),
            }
        );
        assert_eq!(args.projects, None);
    }

    #[test]
    fn test_highlight_detects_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.js");
        std::fs::write(&path, "let a = 1;").unwrap();
        let out = run(&["highlight", path.to_str().unwrap()]).unwrap();
        assert!(out.contains("<span class=\"hl-keyword\">let</span>"));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.txt");
        std::fs::write(&path, "x").unwrap();
        assert!(run(&["highlight", path.to_str().unwrap(), "--language", "cobol"]).is_err());
    }

    #[test]
    fn test_import_list_export_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("projects.json");
        let store = store.to_str().unwrap();
        let page = dir.path().join("demo.html");
        std::fs::write(
            &page,
            "<div id=\"livepen-markup\">\n<p>hi</p>\n</div><style id=\"livepen-style\">p{}</style>",
        )
        .unwrap();

        let id = run(&["--projects", store, "import", page.to_str().unwrap()]).unwrap();
        let id = id.trim();
        assert!(id.starts_with("project-"));

        let listing = run(&["list", "--projects", store]).unwrap();
        assert!(listing.contains(&format!("{}\tdemo\t", id)));

        let exported = run(&["--projects", store, "export", id]).unwrap();
        assert!(exported.contains("<div id=\"livepen-markup\">\n<p>hi</p>\n</div>"));
        assert!(exported.contains("<script id=\"livepen-script\">\n\n</script>"));

        let preview = run(&["--projects", store, "preview", id]).unwrap();
        assert!(preview.contains("<title>Preview</title>"));
    }

    #[test]
    fn test_import_rejects_unrelated_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("projects.json");
        let page = dir.path().join("plain.html");
        std::fs::write(&page, "<html><body>nothing</body></html>").unwrap();
        let result = run(&[
            "--projects",
            store.to_str().unwrap(),
            "import",
            page.to_str().unwrap(),
        ]);
        assert!(result.is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_export_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("projects.json");
        assert!(run(&["--projects", store.to_str().unwrap(), "export", "nope"]).is_err());
    }
}
