use clap::Parser;
use jsembed::application::{init::init, BuildService};
use jsembed::cli::{format_build_report, format_tags, Cli, Commands};
use jsembed::domain::template::resolve_site_url;
use jsembed::domain::{format_js, ScriptTemplate};
use jsembed::error::JsEmbedError;
use jsembed::infrastructure::{copy_resources, discover_files};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JsEmbedError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Tags {
            metadata,
            template,
            site_url,
        } => {
            let template = match template {
                Some(t) => t.parse::<ScriptTemplate>()?,
                None => ScriptTemplate::default(),
            };

            let mut tags = format_js(&metadata, &template)?;
            if let Some(url) = site_url {
                tags = tags.iter().map(|tag| resolve_site_url(tag, &url)).collect();
            }

            print!("{}", format_tags(&tags));
            Ok(())
        }
        Commands::Copy { src, dest, files } => {
            // Without explicit files, take every script below SRC
            let files = if files.is_empty() {
                discover_files(&src, "", &["js".to_string()])?
            } else {
                files
            };

            copy_resources(&src, &dest, &files)?;
            println!("Copied {} file(s) to {}", files.len(), dest.display());
            Ok(())
        }
        Commands::Build { root } => {
            let report = BuildService::discover(&root)?.execute()?;
            print!("{}", format_build_report(&report));
            Ok(())
        }
    }
}
