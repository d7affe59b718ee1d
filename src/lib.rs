//! Catalog is a small service for managing product categories and products.
//! The layered structure of the app is
//!
//! `Application -> Controller -> Service -> Repo`
//!
//! Each layer can throw Error with context or cover occurred error with
//! Error in the context. When error is not covered with Error it will
//! be translated to code 500 in the http answer "Internal server error".
//!
//! The `client` module is the admin side: forms, listings and the category
//! select, talking to the service over http.

#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]
extern crate config as config_crate;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
extern crate hyper;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate r2d2;
extern crate regex;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate tokio_core;
extern crate tokio_signal;
extern crate validator;
#[macro_use]
extern crate validator_derive;
#[macro_use]
extern crate sentry;

pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod logger;
pub mod models;
pub mod repos;
pub mod schema;
pub mod sentry_integration;
pub mod services;

use std::net::SocketAddr;
use std::process;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use futures::{future, Future, Stream};
use futures_cpupool::CpuPool;
use hyper::server::Http;
use tokio_core::reactor::Core;

use crate::config::Config;
use crate::controller::application::Application;
use crate::controller::context::StaticContext;
use crate::repos::repo_factory::ReposFactoryImpl;

/// Starts new web service from provided `Config`
pub fn start_server<F: FnOnce() + 'static>(config: Config, port: &Option<String>, callback: F) {
    // Prepare reactor
    let mut core = Core::new().expect("Unexpected error creating event loop core");
    let handle = core.handle();

    // Prepare database pool, the service is useless without it
    let db_manager = ConnectionManager::<PgConnection>::new(config.server.database.clone());
    let db_pool = match r2d2::Pool::builder().max_size(config.server.pool_size).build(db_manager) {
        Ok(pool) => pool,
        Err(why) => {
            error!("Failed to connect to the database: {}", why);
            process::exit(1);
        }
    };

    let thread_count = config.server.thread_count;

    // Prepare CPU pool
    let cpu_pool = CpuPool::new(thread_count);

    // Prepare server
    let address: SocketAddr = {
        let port = port.as_ref().unwrap_or(&config.server.port);
        match format!("{}:{}", config.server.host, port).parse() {
            Ok(address) => address,
            Err(why) => {
                error!("Could not parse address {}:{}: {}", config.server.host, port, why);
                process::exit(1);
            }
        }
    };

    let context = StaticContext::new(db_pool, cpu_pool, ReposFactoryImpl::new());

    let serve = Http::new()
        .serve_addr_handle(&address, &handle, move || {
            // Prepare application
            let controller = controller::ControllerImpl::new(context.clone());
            let app = Application::new(controller);

            Ok(app)
        })
        .unwrap_or_else(|why| {
            error!("Http Server Initialization Error: {}", why);
            process::exit(1);
        });

    let handle_arc2 = handle.clone();
    handle.spawn(
        serve
            .for_each(move |conn| {
                handle_arc2.spawn(conn.map(|_| ()).map_err(|why| error!("Server Error: {}", why)));
                Ok(())
            })
            .map_err(|_| ()),
    );

    info!("Listening on http://{}, threads: {}", address, thread_count);
    handle.spawn_fn(move || {
        callback();
        future::ok(())
    });

    let ctrl_c = tokio_signal::ctrl_c().flatten_stream().take(1u64).for_each(|()| {
        info!("Ctrl+C received. Exit");

        Ok(())
    });
    if let Err(why) = core.run(ctrl_c) {
        error!("Failed to wait for Ctrl+C: {}", why);
    }
}
