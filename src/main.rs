use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use catalog::api::{CatalogApi, CatalogClient};
use catalog::config::Config;
use catalog::logging::init_tracing;
use catalog::model::Product;
use catalog::storage;
use catalog::theme::ThemeContext;
use catalog::ui::detail::DetailState;
use catalog::ui::wishlist::{EMPTY_HINT, EMPTY_TITLE};
use catalog::ui::{App, AppContext, Route};
use catalog::wishlist::WishlistStore;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse the product catalog and keep a wishlist"
)]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List products
    Products {
        /// Only show products whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a product with its reviews
    Show { id: String },
    /// Post a review for a product
    Review {
        id: String,
        /// Stars, 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
    },
    /// List saved products
    Wishlist,
    /// Save or unsave a product
    Toggle { id: String },
    /// Show the theme, or switch it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let storage = storage::open(&config.storage).context("Failed to open local storage")?;
    let api: Arc<dyn CatalogApi> =
        Arc::new(CatalogClient::new(&config.api).context("Failed to set up catalog client")?);
    let ctx = AppContext {
        api,
        wishlist: WishlistStore::new(storage.clone()),
        theme: ThemeContext::initialize(storage, config.ui.theme).await,
    };
    let mut app = App::new(ctx);

    match cli.command {
        Command::Products { search } => {
            app.start().await;
            if let Some(search) = search {
                app.set_search_text(search);
            }
            let home = app.home();
            if let Some(error) = &home.error {
                bail!("Error loading products: {}", error);
            }
            println!("{}", Route::Home.title());
            for product in &home.filtered {
                print_product_line(product, home.is_wishlisted(product));
            }
            if home.filtered.is_empty() {
                println!("No products found.");
            }
        }
        Command::Show { id } => {
            open_detail(&mut app, &id).await?;
            print_detail(app.detail());
        }
        Command::Review {
            id,
            rating,
            comment,
        } => {
            open_detail(&mut app, &id).await?;
            app.submit_review(rating, &comment)
                .await
                .context("Review was not submitted")?;
            print_notice(app.detail());
            print_detail(app.detail());
        }
        Command::Wishlist => {
            app.navigate(Route::Wishlist).await;
            let screen = app.wishlist();
            println!("{}", Route::Wishlist.title());
            if screen.is_empty() {
                println!("{}", EMPTY_TITLE);
                println!("{}", EMPTY_HINT);
            }
            for product in &screen.items {
                print_product_line(product, true);
            }
        }
        Command::Toggle { id } => {
            open_detail(&mut app, &id).await?;
            app.toggle_on_detail()
                .await
                .context("Wishlist change was not saved, try again")?;
            print_notice(app.detail());
        }
        Command::Theme { toggle } => {
            app.navigate(Route::Settings).await;
            if toggle {
                app.toggle_theme().await.context("Failed to save theme")?;
            }
            let settings = app.settings();
            println!(
                "Theme: {} (background {}, text {})",
                settings.theme,
                settings.palette().background,
                settings.palette().text
            );
        }
    }

    Ok(())
}

async fn open_detail(app: &mut App, id: &str) -> anyhow::Result<()> {
    let product = app
        .context()
        .api
        .fetch_product_by_id(id)
        .await
        .with_context(|| format!("Failed to load product '{}'", id))?;
    app.navigate(Route::ProductDetail(product)).await;
    Ok(())
}

fn print_product_line(product: &Product, wishlisted: bool) {
    let marker = if wishlisted { "♥" } else { " " };
    println!("{} [{}] {}  ${}", marker, product.id, product.name, product.price);
}

fn print_notice(detail: &DetailState) {
    if let Some(notice) = &detail.notice {
        println!("{}: {}", notice.title, notice.message);
    }
}

fn print_detail(detail: &DetailState) {
    let Some(product) = &detail.product else {
        return;
    };
    println!("{}", product.name);
    println!("${}", product.price);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }
    if !product.image.is_empty() {
        println!("Image: {}", product.image);
    }
    println!("[{}]", detail.wishlist_action_label());
    println!();
    println!("Customer Feedback ({})", detail.review_count());
    if detail.reviews.is_empty() {
        println!("No reviews available yet.");
    }
    for review in &detail.reviews {
        println!("  ⭐ {} out of 5", review.rating);
        println!("  \"{}\"", review.comment);
    }
}
