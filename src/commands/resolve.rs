//! `canonical resolve` command.

use std::path::PathBuf;

use crate::cli::ResolveArgs;
use crate::config::{SiteConfig, RECORD_VAR};
use crate::context::ServiceContext;
use crate::model::{ContentItem, PageContext, PermalinkCapability};
use crate::resolver::{self, Resolution};

/// Execute the `resolve` command.
///
/// Prints the canonical URL, or nothing when none can be determined. With
/// `--replay` the site configuration is not read: lookups come from the log
/// and dynamic permalinks are enabled only by `--dynamic`.
///
/// # Errors
///
/// Returns an error string if configuration or the lookup log cannot be loaded.
pub fn run(args: &ResolveArgs) -> Result<(), String> {
    let (ctx, capability) = if let Some(replay) = &args.replay {
        let ctx = ServiceContext::replaying(replay).map_err(|e| e.to_string())?;
        (ctx, PermalinkCapability { dynamic_permalinks_enabled: args.dynamic })
    } else {
        let config = SiteConfig::load(args.config.as_deref()).map_err(|e| e.to_string())?;
        let ctx = if let Some(path) = std::env::var_os(RECORD_VAR) {
            ServiceContext::recording(&config, args.date_archive, &PathBuf::from(path))
        } else {
            ServiceContext::live(&config, args.date_archive)
        }
        .map_err(|e| e.to_string())?;
        (ctx, live_capability(args, &config))
    };

    let resolution = resolve_with(args, capability, &ctx);
    print_resolution(&resolution, args.explain);
    Ok(())
}

/// Permalink mode for a live run: `--dynamic` or the site setting.
#[must_use]
pub fn live_capability(args: &ResolveArgs, config: &SiteConfig) -> PermalinkCapability {
    PermalinkCapability { dynamic_permalinks_enabled: args.dynamic || config.dynamic_permalinks }
}

/// Resolves the item and page described by `args` against `ctx`.
#[must_use]
pub fn resolve_with(
    args: &ResolveArgs,
    capability: PermalinkCapability,
    ctx: &ServiceContext,
) -> Resolution {
    let (item, page) = request(args);
    resolver::resolve(&item, &page, capability, ctx)
}

fn request(args: &ResolveArgs) -> (ContentItem, PageContext) {
    let item = ContentItem {
        id: args.id,
        slug: args.slug.clone(),
        published: args.published,
        canonical_override: args.canonical_override.clone(),
        stored_permalink: args.permalink.clone(),
    };
    let page = PageContext {
        is_date_archive: args.date_archive.is_some(),
        is_attachment_page: args.attachment.is_some(),
        raw_request_path: args.attachment.clone(),
    };
    (item, page)
}

fn print_resolution(resolution: &Resolution, explain: bool) {
    match (explain, resolution.is_empty()) {
        (true, true) => println!("{}", resolution.source),
        (true, false) => println!("{}: {}", resolution.source, resolution.url),
        (false, true) => {}
        (false, false) => println!("{}", resolution.url),
    }
}
