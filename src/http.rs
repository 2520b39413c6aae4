use axum::{
    extract::{Json, Path},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::LinkError;
use crate::links::{format, Endpoints};
use crate::presets;
use crate::qr::to_uri_qr;
use crate::types::{GeneratedLink, LinkRequest, RampFields, SwapFields};

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub url: GeneratedLink,
    /// `data:image/bmp;base64,...`, one pixel per module.
    pub qr: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub field: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetResponse {
    pub name: String,
    pub description: String,
    pub url: GeneratedLink,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<LinkError> for ErrorResponse {
    fn from(e: LinkError) -> Self {
        ErrorResponse {
            error: e.kind().to_string(),
            field: Some(e.field().to_string()),
            message: e.to_string(),
        }
    }
}

fn internal_error(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal".to_string(),
            field: None,
            message,
        }),
    )
}

/// Builds the link and its QR code, mapping validation failures to 422.
fn render(endpoints: &Endpoints, request: &LinkRequest) -> Result<LinkResponse, ApiError> {
    let url = format(endpoints, request).map_err(|e| {
        tracing::debug!(action = request.action(), "rejected link request: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::from(e)))
    })?;

    let qr = to_uri_qr(url.as_str(), None).map_err(|e| {
        tracing::error!("Error rendering QR code for {}: {}", url, e);
        internal_error(e.to_string())
    })?;

    Ok(LinkResponse { url, qr })
}

/// Request used for `GET /api/v1/links/:action`. Only actions that have no
/// required fields have one.
pub fn default_request(action: &str) -> Option<LinkRequest> {
    match action {
        "home" => Some(LinkRequest::Home),
        "buy" => Some(LinkRequest::Buy(RampFields::default())),
        "sell" => Some(LinkRequest::Sell(RampFields::default())),
        "swap" => Some(LinkRequest::Swap(SwapFields::default())),
        _ => None,
    }
}

pub struct HttpServer {
    endpoints: Arc<Endpoints>,
}

impl HttpServer {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints: Arc::new(endpoints),
        }
    }

    pub fn router(&self) -> Router {
        let endpoints = self.endpoints.clone();

        Router::new()
            .route("/api/v1/links", post({
                let endpoints = endpoints.clone();
                move |Json(request): Json<LinkRequest>| async move {
                    render(&endpoints, &request).map(Json)
                }
            }))
            .route("/api/v1/links/:action", get({
                let endpoints = endpoints.clone();
                move |Path(action): Path<String>| async move {
                    match default_request(&action) {
                        Some(request) => render(&endpoints, &request).map(Json),
                        None => Err((
                            StatusCode::NOT_FOUND,
                            Json(ErrorResponse {
                                error: "not_found".to_string(),
                                field: None,
                                message: format!("no default link for action {:?}", action),
                            }),
                        )),
                    }
                }
            }))
            .route("/api/v1/presets", get(move || async move {
                let mut response = Vec::new();
                for preset in presets::all() {
                    match format(&endpoints, &preset.request) {
                        Ok(url) => response.push(PresetResponse {
                            name: preset.name.to_string(),
                            description: preset.description.to_string(),
                            url,
                        }),
                        Err(e) => {
                            tracing::error!("Error formatting preset {}: {}", preset.name, e);
                            return Err(internal_error(e.to_string()));
                        }
                    }
                }
                Ok(Json(response))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests() {
        assert_eq!(default_request("home"), Some(LinkRequest::Home));
        assert!(default_request("swap").is_some());
        assert!(default_request("browser").is_none());
        assert!(default_request("send-native").is_none());
    }

    #[test]
    fn test_render_validation_error() {
        let request = LinkRequest::Buy(RampFields {
            address: Some("0xnope".into()),
            ..Default::default()
        });
        let (status, Json(body)) = render(&Endpoints::default(), &request).unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "malformed_field");
        assert_eq!(body.field.as_deref(), Some("address"));
    }
}
