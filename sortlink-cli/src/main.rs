//! `sortlink` command-line front end.
//!
//! Loads a sort declaration from JSON, resolves a sort request against it and
//! prints the resulting direction map, ordering clause and sort links.

mod args;
mod file;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use sortlink_lib::model::parse_query;
use sortlink_lib::render::HtmlAttributes;
use sortlink_lib::render::HtmlLinkRenderer;
use sortlink_lib::routing::QueryStringRouter;
use sortlink_lib::Sort;

use crate::args::Args;
use crate::file::SortFile;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    WriteLogger::init(level, Config::default(), std::io::stderr())
        .context("Failed to initialize logger")?;

    let file = SortFile::load(&args.config)?;
    let mut sort = Sort::new(file.sort)
        .with_context(|| format!("Invalid sort configuration in {}", args.config.display()))?
        .with_router(Arc::new(QueryStringRouter::new(file.base_url)));
    if let Some(schema) = file.schema {
        sort = sort.with_schema(Arc::new(schema));
    }

    let mut params = parse_query(args.query.as_deref().unwrap_or_default());
    if let Some(token) = args.sort {
        params.insert(sort.config().sort_param.clone(), token);
    }
    log::debug!("Request parameters: {:?}", params);

    let state = sort.resolve(&params);
    let clause = state.order_clause()?;

    let links: Vec<String> = if args.links.is_empty() {
        sort.config().attributes.keys().cloned().collect()
    } else {
        args.links
    };

    let renderer = HtmlLinkRenderer::new();
    let mut out = std::io::stdout().lock();
    writeln!(out, "directions: {}", state.directions())?;
    writeln!(out, "order: {}", clause)?;
    if !links.is_empty() {
        writeln!(out, "links:")?;
    }
    for attribute in &links {
        let link = state.link(attribute, None, HtmlAttributes::new(), &renderer);
        writeln!(out, "  {}: {}", attribute, link)?;
    }

    Ok(())
}
