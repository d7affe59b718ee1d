//! Admin client for the catalog service. Runs the actions of the category
//! and product pages from the terminal and prints the resulting tables.

extern crate catalog_lib;
#[macro_use]
extern crate log;

use std::process;

use clap::{Parser, Subcommand};

use catalog_lib::client::{AdminApp, AdminPage, CategoryForm, ClientError, HttpCatalogApi, ProductForm, Table, TerminalNotifier};
use catalog_lib::config::Config;

#[derive(Parser)]
#[command(name = "catalog_admin")]
#[command(about = "Manage catalog categories and products", long_about = None)]
struct Cli {
    /// Base url of the catalog service, defaults to `client.api_url` from the config
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print tables as html `<tr>` rows instead of aligned text
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category page
    #[command(subcommand)]
    Categories(CategoryAction),

    /// Product page
    #[command(subcommand)]
    Products(ProductAction),
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Print the category table
    List,

    /// Create a category and print the reloaded table
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// SEO tags, comma separated
        #[arg(long)]
        seo: String,
    },

    /// Print the options of the category select
    Options,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Print the product table
    List,

    /// Create a product and print the reloaded table
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        manufacturer: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        quantity: String,

        #[arg(long)]
        price: String,

        #[arg(long)]
        category_id: String,
    },
}

fn main() {
    catalog_lib::logger::init();

    let cli = Cli::parse();

    let api_url = match cli.api_url {
        Some(api_url) => api_url,
        None => match Config::new() {
            Ok(config) => config.client.api_url,
            Err(why) => {
                error!("Can't load app config: {}", why);
                process::exit(1);
            }
        },
    };
    let api = HttpCatalogApi::new(api_url);

    if let Err(why) = run(cli.command, api, cli.html) {
        debug!("Command failed: {}", why);
        process::exit(1);
    }
}

fn run(command: Commands, api: HttpCatalogApi, html: bool) -> Result<(), ClientError> {
    match command {
        Commands::Categories(CategoryAction::Options) => {
            let mut app = AdminApp::new(api, TerminalNotifier, AdminPage::products_page());
            app.fill_category_select()?;
            if let Some(select) = app.page.category_select.as_ref() {
                for option in select.options() {
                    println!("{}\t{}", option.value, option.label);
                }
            }
        }
        Commands::Categories(action) => {
            let mut app = AdminApp::new(api, TerminalNotifier, AdminPage::categories_page());
            match action {
                CategoryAction::Add { name, description, seo } => {
                    let mut form = CategoryForm { name, description, seo };
                    app.save_category(&mut form)?;
                }
                _ => app.load_categories()?,
            }
            if let Some(table) = app.page.categories.as_ref() {
                print_table(table, html);
            }
        }
        Commands::Products(action) => {
            let mut app = AdminApp::new(api, TerminalNotifier, AdminPage::products_page());
            match action {
                ProductAction::Add {
                    name,
                    manufacturer,
                    description,
                    quantity,
                    price,
                    category_id,
                } => {
                    let mut form = ProductForm {
                        name,
                        manufacturer,
                        description,
                        quantity,
                        price,
                        category_id,
                    };
                    app.save_product(&mut form)?;
                }
                ProductAction::List => app.load_products()?,
            }
            if let Some(table) = app.page.products.as_ref() {
                print_table(table, html);
            }
        }
    }
    Ok(())
}

fn print_table(table: &Table, html: bool) {
    if html {
        print!("{}", table.render_html());
    } else {
        print!("{}", table.render_text());
    }
}
