use crate::errors::DomainError;

/// Lowercases a domain name and makes it fully qualified.
pub fn normalize_fqdn(name: &str) -> String {
    let trimmed = name.trim();
    let mut fqdn = trimmed.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

/// Removes a trailing `:port` from an HTTP `Host` value.
///
/// Bracketed IPv6 literals (`[::1]:8080`) keep their brackets; a bare IPv6
/// literal without brackets is returned untouched since its colons are not
/// a port separator.
pub fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port))
            if !name.contains(':') && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}

pub fn validate_host(host: &str) -> Result<(), DomainError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(DomainError::InvalidHost("empty host".to_string()));
    }
    if host.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(DomainError::InvalidHost(host.to_string()));
    }
    Ok(())
}

/// Key stored for a fresh probe: `label.host.` without any port.
pub fn probe_key(label: &str, host: &str) -> String {
    normalize_fqdn(&format!("{}.{}", label, strip_port(host.trim())))
}

/// Key looked up by `/feedback`, where the request host already carries the label.
pub fn feedback_key(host: &str) -> String {
    normalize_fqdn(strip_port(host.trim()))
}
