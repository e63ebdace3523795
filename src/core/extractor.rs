use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::locale::Language;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// Display language for the current request.
///
/// Resolved from the `lang` query parameter, then `Accept-Language`, then
/// the default language. Unsupported values fall through to the next
/// source instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl RequestLanguage {
    fn resolve(parts: &Parts) -> Language {
        let from_query = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.lang)
            .and_then(|value| value.parse::<Language>().ok());

        from_query
            .or_else(|| {
                parts
                    .headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(Language::from_accept_language)
            })
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for RequestLanguage
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLanguage(Self::resolve(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    fn parts(uri: &str, accept_language: Option<&str>) -> Parts {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(value) = accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_query_parameter_wins() {
        let p = parts("/api/products/1?lang=ar", Some("en"));
        assert_eq!(RequestLanguage::resolve(&p), Language::Ar);
    }

    #[test]
    fn test_accept_language_used_without_query() {
        let p = parts("/api/products/1", Some("en-GB,en;q=0.9"));
        assert_eq!(RequestLanguage::resolve(&p), Language::En);
    }

    #[test]
    fn test_query_value_is_percent_decoded() {
        let p = parts("/api/products/1?page=2&lang=%61r", Some("en"));
        assert_eq!(RequestLanguage::resolve(&p), Language::Ar);
    }

    #[test]
    fn test_bare_lang_key_falls_back_to_header() {
        let p = parts("/api/products/1?lang", Some("en"));
        assert_eq!(RequestLanguage::resolve(&p), Language::En);
    }

    #[test]
    fn test_unsupported_values_fall_back_to_default() {
        let p = parts("/api/products/1?lang=de", Some("de-DE"));
        assert_eq!(RequestLanguage::resolve(&p), Language::Fr);
    }
}
