use axum::http::{header, HeaderMap, Uri};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// `Host` header, or the URI authority for absolute-form and HTTP/2 requests.
pub fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.trim().is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
}

pub fn request_scheme<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    if let Some(scheme) = uri.scheme_str() {
        return scheme;
    }

    match headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}
