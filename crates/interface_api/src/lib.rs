//! HTTP API Layer
//!
//! This crate exposes the commercial motor quoting domain over REST using
//! Axum. There is no authentication and no persistence: every route is a
//! pure function of its request body.
//!
//! # Architecture
//!
//! - **Handlers**: Quotation, eligibility and comparison endpoints
//! - **Middleware**: Request IDs, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Status codes with fixed user-facing messages
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Money;
use domain_motor::{CoverageType, QuotationService};

use crate::config::ApiConfig;
use crate::handlers::{health, quotations};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub service: QuotationService,
}

impl AppState {
    /// Builds the state, applying the configured placeholder premiums
    pub fn new(config: ApiConfig) -> Self {
        let service = QuotationService::new()
            .with_placeholder(CoverageType::ThirdParty, Money::kes(config.third_party_placeholder))
            .with_placeholder(CoverageType::Comprehensive, Money::kes(config.comprehensive_placeholder))
            .with_placeholder(CoverageType::Tpft, Money::kes(config.tpft_placeholder));
        Self { config, service }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Commercial quotation routes
    let commercial_routes = Router::new()
        .route("/third-party", post(quotations::quote_third_party))
        .route("/comprehensive", post(quotations::quote_comprehensive))
        .route("/tpft", post(quotations::quote_tpft))
        .route("/eligibility", post(quotations::check_eligibility))
        .route("/compare", post(quotations::compare));

    let api_routes = Router::new()
        .nest("/quotations/commercial", commercial_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
