//! Catalog is a service for managing product categories and products.
//! This crate is for running the service from `catalog_lib`. See `catalog_lib` for details.

extern crate catalog_lib;
#[macro_use]
extern crate log;

use std::process;

fn main() {
    catalog_lib::logger::init();

    let config = match catalog_lib::config::Config::new() {
        Ok(config) => config,
        Err(why) => {
            error!("Can't load app config: {}", why);
            process::exit(1);
        }
    };

    // Prepare sentry integration
    let _sentry = catalog_lib::sentry_integration::init(config.sentry.as_ref());

    catalog_lib::start_server(config, &None, || ());
}
