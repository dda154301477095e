use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use assosite::application::ContentService;
use assosite::domain::entities::{DocumentRecord, EventRecord, NewsRecord};
use assosite::domain::services::dates::{format_date_fr, month_label};
use assosite::domain::services::listing::excerpt;
use assosite::infrastructure::{
    CliArgs, Command, SiteConfig, SupabaseContentStore, event_card_image_url,
    news_card_image_url,
};

fn init_logging(config: &SiteConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn print_news_item(item: &NewsRecord, excerpt_len: usize) {
    use assosite::domain::services::listing::Dated;

    if let Some(title) = item.title() {
        println!("  {title}");
    }
    if let Some(date) = item.date() {
        println!("    {}", format_date_fr(date));
    }
    if let Some(author) = item.author() {
        println!("    par {author}");
    }
    println!("    {}", excerpt(item.content().unwrap_or(""), excerpt_len));
    if let Some(image) = item.image_url() {
        println!("    image: {}", news_card_image_url(image));
    }
}

fn print_event_item(item: &EventRecord) {
    use assosite::domain::services::listing::Dated;

    if let Some(title) = item.title() {
        println!("  {title}");
    }
    if let Some(date) = item.date() {
        match item.time() {
            Some(time) => println!("    {} à {time}", format_date_fr(date)),
            None => println!("    {}", format_date_fr(date)),
        }
    }
    if let Some(location) = item.location() {
        println!("    {location}");
    }
    if let Some(description) = item.description() {
        println!("    {}", excerpt(description, 5));
    }
    if let Some(image) = item.image_url() {
        println!("    image: {}", event_card_image_url(image));
    }
}

fn print_document_item(item: &DocumentRecord) {
    use assosite::domain::services::listing::Dated;

    if let Some(title) = item.title() {
        println!("  {title}");
    }
    if let Some(date) = item.date() {
        println!("    {}", format_date_fr(date));
    }
    if let Some(description) = item.description() {
        println!("    {description}");
    }
    if let Some(file_url) = item.file_url() {
        println!("    fichier: {file_url}");
    }
    if let Some(thumbnail) = item.thumbnail_url() {
        println!("    miniature: {thumbnail}");
    }
}

async fn run(service: &ContentService, command: Command) -> Result<()> {
    match command {
        Command::News { category } => {
            let listing = service.news_listing().await?;
            println!("Catégories: {}", listing.categories().join(", "));
            for item in listing.filtered(&category, "") {
                print_news_item(item, 7);
            }
        }
        Command::Agenda { category, month } => {
            let listing = service.events_listing().await?;
            let months: Vec<String> = listing.months().iter().map(|m| month_label(m)).collect();
            println!("Mois: {}", months.join(", "));
            println!("Catégories: {}", listing.categories().join(", "));
            for item in listing.filtered(&category, &month) {
                print_event_item(item);
            }
        }
        Command::Documents { category } => {
            let listing = service.documents_listing().await?;
            println!("Catégories: {}", listing.categories().join(", "));
            for item in listing.filtered(&category, "") {
                print_document_item(item);
            }
        }
        Command::Home => {
            let home = service.home().await?;
            println!("Actualités:");
            for item in home.latest_news() {
                print_news_item(item, 5);
            }
            println!("Agenda:");
            for item in home.upcoming_events() {
                print_event_item(item);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    let mut config = SiteConfig::load_or_default(args.config.as_deref())?;
    if let Some(log_path) = args.log_path {
        config.log_path = Some(log_path);
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    config.apply_env_overrides();

    init_logging(&config)?;

    info!(version = assosite::VERSION, "Starting assosite");

    if config.store.url.is_empty() {
        return Err(eyre!(
            "store URL is not configured (set SUPABASE_URL or [store] url)"
        ));
    }

    let store = Arc::new(SupabaseContentStore::new(
        &config.store.url,
        &config.store.anon_key,
    )?);
    let service = ContentService::new(store);

    run(&service, args.command).await
}
