//! Command-line front end for resolving localized route URLs.
//!
//! Usage:
//!   localized-url about.page --locale de --route de:about.page=/ueber-uns
//!   localized-url post.show --param id=42 --route en:post.show=/posts/{id} --versions
//!   localized-url --redirect --request-url https://example.com/about --active-locale de
//!
//! Required environment variables:
//! - LOCALIZATION_DOMAIN
//!
//! Optional:
//! - LOCALIZATION_ALIASES (JSON object, e.g. {"german": "de"})
//! - LOCALIZATION_LOCALES (defaults to "en")
//! - LOCALIZATION_DEFAULT_LOCALE (defaults to the first locale)

use anyhow::{anyhow, bail, Context, Result};
use localized_routes::config::Config;
use localized_routes::i18n::{InMemoryCatalog, RouteParameters};
use localized_routes::request::{RequestSnapshot, RouteMatch};
use localized_routes::{Collaborators, LocalizedUrlResolver};
use tracing::info;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    route_name: Option<String>,
    locale: Option<String>,
    request_url: Option<String>,
    active_locale: Option<String>,
    routes: Vec<(String, String, String)>,
    params: RouteParameters,
    versions: bool,
    redirect: bool,
}

/// Split `KEY=VALUE`
fn split_pair<'s>(raw: &'s str, flag: &str) -> Result<(&'s str, &'s str)> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| anyhow!("{} expects KEY=VALUE, got '{}'", flag, raw))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--locale" => cli.locale = Some(value("--locale")?),
            "--request-url" => cli.request_url = Some(value("--request-url")?),
            "--active-locale" => cli.active_locale = Some(value("--active-locale")?),
            "--route" => {
                let raw = value("--route")?;
                let (locale, rest) = raw
                    .split_once(':')
                    .ok_or_else(|| anyhow!("--route expects LOCALE:NAME=PATH, got '{}'", raw))?;
                let (name, path) = split_pair(rest, "--route")?;
                cli.routes
                    .push((locale.to_string(), name.to_string(), path.to_string()));
            }
            "--param" => {
                let raw = value("--param")?;
                let (key, val) = split_pair(&raw, "--param")?;
                cli.params.insert(key.to_string(), val.to_string());
            }
            "--versions" => cli.versions = true,
            "--redirect" => cli.redirect = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            name => {
                if cli.route_name.is_some() {
                    bail!("Unexpected argument: {}", name);
                }
                cli.route_name = Some(name.to_string());
            }
        }
    }

    if !cli.redirect && cli.route_name.is_none() {
        bail!("Missing route name");
    }

    Ok(cli)
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_routes=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let config = Config::from_env()?;

    let mut catalog = InMemoryCatalog::new();
    for (locale, name, path) in &cli.routes {
        catalog.insert(locale.as_str(), name.as_str(), path.as_str());
    }
    info!("Loaded {} localized routes", cli.routes.len());

    let active_locale = cli
        .active_locale
        .clone()
        .unwrap_or_else(|| config.default_locale.clone());
    let request_url = cli
        .request_url
        .clone()
        .unwrap_or_else(|| format!("http://{}/", config.domain));

    let mut request = RequestSnapshot::new(request_url, active_locale);
    if let Some(name) = &cli.route_name {
        let route_match = cli.params.iter().fold(
            RouteMatch::new(name.as_str()),
            |route_match, (key, value)| route_match.with_parameter(key.as_str(), Some(value.clone())),
        );
        request = request.with_route_name(name.as_str()).with_route_match(route_match);
    }

    let mut resolver = LocalizedUrlResolver::new(Collaborators {
        request: &request,
        router: &request,
        catalog: &catalog,
        config: &config,
        locales: &config,
    });

    if cli.redirect {
        println!("{}", resolver.get_redirect_url()?);
        return Ok(());
    }

    if cli.versions {
        let versions = resolver.get_current_versions(false)?;
        println!("{}", serde_json::to_string_pretty(&versions)?);
        return Ok(());
    }

    let route_name = cli.route_name.as_deref().context("Missing route name")?;
    let params = (!cli.params.is_empty()).then_some(&cli.params);
    let url = resolver.url(route_name, params, cli.locale.as_deref())?;
    println!("{}", url);

    Ok(())
}
