const SENSITIVE_FIELDS: &[&str] = &[
    "access_token",
    "component_access_token",
    "appsecret",
    "secret",
    "ticket",
    "token",
    "authorization",
];

/// Mask credential query parameters before a URL reaches the logs.
pub(crate) fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let redacted_query = query
        .split('&')
        .map(|param| match param.split_once('=') {
            Some((key, _)) if SENSITIVE_FIELDS.iter().any(|s| key.eq_ignore_ascii_case(s)) => {
                format!("{key}=[REDACTED]")
            }
            _ => param.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{redacted_query}")
}
