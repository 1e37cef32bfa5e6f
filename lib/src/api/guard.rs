//! Database reachability guard applied to every route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::Error, services::Services};

/// Acquires and releases a pooled connection before routing continues.
///
/// On failure the request is rejected with a generic 500 and the handler is
/// never invoked; the failure detail goes to the server logs.
pub async fn require_database(
    State(services): State<Services>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    services.deliveries.ping().await?;
    Ok(next.run(request).await)
}
