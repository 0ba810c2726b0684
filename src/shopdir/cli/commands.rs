use super::browse;
use super::render::{FacetKind, ListLayout, Presenter, LOAD_ERROR_MESSAGE};
use super::setup::{Cli, Commands};
use super::theme::stdout_supports_color;
use clap::Parser;
use directories::ProjectDirs;
use shopdir::api::ShopdirApi;
use shopdir::commands::{CmdMessage, FilterEvent};
use shopdir::config::ShopdirConfig;
use shopdir::error::{Result, ShopdirError};
use shopdir::model::Facet;
use shopdir::store::{FallbackMode, Source};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "SHOPDIR_CONFIG_DIR";

struct AppContext {
    api: ShopdirApi<Source>,
    presenter: Presenter,
}

/// What the session needs before the one startup load.
struct LoadPlan {
    source: Source,
    mode: FallbackMode,
    config: ShopdirConfig,
    presenter: Presenter,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, !cli.no_color);

    let config_dir = config_dir()?;

    // Config does not need any shop data
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.as_deref(), value.as_deref(), !cli.no_color);
    }

    let plan = plan_load(&cli, &config_dir)?;

    if let Some(Commands::Browse) = cli.command {
        let policy = plan.config.selection_policy();
        return browse::run(plan.source, plan.mode, policy, &plan.presenter).await;
    }

    let html = matches!(cli.command, Some(Commands::List { html: true, .. }));
    let mut ctx = init_context(plan, html).await?;

    match cli.command {
        Some(Commands::List {
            category,
            subcategory,
            search,
            html,
        }) => handle_list(&mut ctx, category, subcategory, search, html),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term.join(" ")),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Subcategories { category }) => handle_subcategories(&ctx, category),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Browse) | Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&mut ctx, None, None, None, false),
    }
}

fn init_tracing(verbose: bool, color: bool) {
    let default_directive = if verbose { "shopdir=debug,warn" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color && console::Term::stderr().features().colors_supported())
        .with_target(false)
        .without_time()
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shopdir", "shopdir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShopdirError::Config("Could not determine config directory".into()))
}

fn plan_load(cli: &Cli, config_dir: &Path) -> Result<LoadPlan> {
    let config = ShopdirConfig::load(config_dir)?;
    let location = cli.source.clone().unwrap_or_else(|| config.source.clone());
    let source = Source::parse(&location)?;
    let mode = if cli.no_fallback {
        FallbackMode::Disabled
    } else {
        config.fallback_mode()
    };
    let presenter = Presenter::new(!cli.no_color && stdout_supports_color())?;
    Ok(LoadPlan {
        source,
        mode,
        config,
        presenter,
    })
}

async fn init_context(plan: LoadPlan, html: bool) -> Result<AppContext> {
    let LoadPlan {
        source,
        mode,
        config,
        presenter,
    } = plan;
    match ShopdirApi::load(source, mode, config.selection_policy()).await {
        Ok(api) => Ok(AppContext { api, presenter }),
        Err(e) => {
            let shown = if html {
                presenter.status_page(LOAD_ERROR_MESSAGE, true)?
            } else {
                presenter.status_text(LOAD_ERROR_MESSAGE, true)?
            };
            print!("{}", shown);
            Err(e)
        }
    }
}

fn handle_list(
    ctx: &mut AppContext,
    category: Option<String>,
    subcategory: Option<String>,
    search: Option<String>,
    html: bool,
) -> Result<()> {
    let mut events = Vec::new();
    if let Some(category) = category {
        events.push(FilterEvent::SelectCategory(Facet::from(category)));
    }
    if let Some(subcategory) = subcategory {
        events.push(FilterEvent::SelectSubcategory(Facet::from(subcategory)));
    }
    if let Some(search) = search {
        events.push(FilterEvent::SetSearch(search));
    }

    let result = ctx.api.browse(events)?;
    if html {
        print!("{}", ctx.presenter.shop_page(&result)?);
    } else {
        print!("{}", ctx.presenter.shop_list(&result, ListLayout::Compact)?);
    }
    print!("{}", ctx.presenter.messages(&result.messages)?);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.dispatch(FilterEvent::SetSearch(term))?;
    print!("{}", ctx.presenter.shop_list(&result, ListLayout::Compact)?);
    print!("{}", ctx.presenter.messages(&result.messages)?);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories();
    print!(
        "{}",
        ctx.presenter.facet_counts(&result.facet_counts, FacetKind::Category)?
    );
    Ok(())
}

fn handle_subcategories(ctx: &AppContext, category: Option<String>) -> Result<()> {
    let category = category.map(Facet::from).unwrap_or_default();
    let result = ctx.api.subcategories(&category)?;
    print!(
        "{}",
        ctx.presenter.facet_counts(&result.facet_counts, FacetKind::Subcategory)?
    );
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.shop(id)?;
    print!("{}", ctx.presenter.shop_list(&result, ListLayout::Full)?);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    key: Option<&str>,
    value: Option<&str>,
    color: bool,
) -> Result<()> {
    let mut config = ShopdirConfig::load(config_dir)?;
    let presenter = Presenter::new(color && stdout_supports_color())?;

    match (key, value) {
        (None, _) => {
            for key in ShopdirConfig::keys() {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save(config_dir)?;
            let message = CmdMessage::success(format!("{} = {}", key, config.get(key)?));
            print!("{}", presenter.messages(&[message])?);
        }
    }
    Ok(())
}
