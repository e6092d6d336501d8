use {
    crate::{
        AppState,
        domain::{audit::NewAuditEvent, details::Details},
    },
    axum::{
        Json,
        extract::{ConnectInfo, Request, State},
        http::HeaderMap,
    },
    serde::{Deserialize, Serialize},
    std::net::SocketAddr,
};

pub const USER_ID_HEADER: &str = "x-user-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
}

/// `/internal`, any method. Always answers 200 with the configured greeting.
///
/// Each hit is audited; a failed audit write is only warned about, it never
/// turns the response into an error.
pub async fn internal_handler(
    State(state): State<AppState>,
    request: Request,
) -> Json<GreetingResponse> {
    let method = request.method().as_str().to_owned();
    let audit = NewAuditEvent {
        action: "internal.accessed".into(),
        entity: "endpoint".into(),
        entity_id: request.uri().path().to_owned(),
        user_id: user_id(request.headers()),
        request_ip: request_ip(&request),
        details: Details::new().with("method", method.clone()),
    };
    drop(request);

    if let Err(e) = state.recorder.record(audit).await {
        tracing::warn!(error = %e, %method, "audit write failed, responding anyway");
    }

    Json(GreetingResponse {
        message: state.greeting.to_string(),
    })
}

fn user_id(headers: &HeaderMap) -> String {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_owned()
}

/// First `X-Forwarded-For` hop, else the peer address.
fn request_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_owned();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}
