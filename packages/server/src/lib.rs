#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the FIR desk backend.
//!
//! Serves the REST API the dashboard frontend consumes: analytics
//! summaries, case history browsing, new-case registration, and the
//! selector values for the filter controls. All case data lives in an
//! in-memory [`CaseRegister`]; handlers take a snapshot per request so a
//! registration arriving mid-computation never changes a result halfway
//! through.

mod handlers;

use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use fir_desk_registry::{CaseRegister, corpus, sample_register};

/// Shared application state.
pub struct AppState {
    /// The authoritative case register. Writers (registration) take the
    /// write lock; readers clone a snapshot and release it immediately.
    pub register: RwLock<CaseRegister>,
}

/// Loads the register the server starts with.
///
/// `FIR_CORPUS` names a JSON corpus file to seed from; when unset the
/// embedded sample corpus is used.
///
/// # Panics
///
/// Panics if `FIR_CORPUS` is set but the file cannot be read or violates
/// the corpus structural contract.
#[must_use]
pub fn register_from_env() -> CaseRegister {
    std::env::var("FIR_CORPUS").map_or_else(
        |_| {
            log::info!("FIR_CORPUS not set, seeding from embedded sample corpus");
            sample_register()
        },
        |path| {
            log::info!("Loading corpus from {path}");
            let json = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read corpus file {path}: {e}"));
            let report = corpus::load_corpus(&json)
                .unwrap_or_else(|e| panic!("Failed to load corpus file {path}: {e}"));
            if report.dropped > 0 {
                log::warn!("Dropped {} defective corpus records", report.dropped);
            }
            CaseRegister::from_cases(report.cases)
        },
    )
}

/// Starts the FIR desk API server.
///
/// Seeds the register (from `FIR_CORPUS` or the embedded sample corpus)
/// and starts the Actix-Web HTTP server. This is a regular async function —
/// the caller is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the seed corpus cannot be read or parsed.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let register = register_from_env();
    log::info!("Register seeded with {} cases", register.len());

    let state = web::Data::new(AppState {
        register: RwLock::new(register),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/dashboard", web::get().to(handlers::dashboard))
                    .route("/cases", web::get().to(handlers::cases))
                    .route("/cases", web::post().to(handlers::register_case))
                    .route("/filters", web::get().to(handlers::filters)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
