//! Subdomain resolver
//!
//! Derives the tenant slug from a hostname. All host-based tenant
//! detection goes through here; handlers receive the result instead of
//! re-deriving it from request data.

/// Subdomains that never map to a tenant
pub const RESERVED_SUBDOMAINS: &[&str] = &["www", "admin"];

/// Hostname component of a `Host` header value (port stripped).
///
/// `gold.example.com:8080` → `gold.example.com`. Bracketed IPv6
/// authorities keep their brackets so the IP check below still matches.
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        match host.split_once(':') {
            Some((hostname, _port)) => hostname,
            None => host,
        }
    }
}

/// Resolve the tenant subdomain of a hostname, if any.
///
/// - `gold.localhost` → `gold` (development: 2+ dot-parts)
/// - `localhost` → none
/// - `red-bistro.example.com` → `red-bistro` (production: 3+ dot-parts)
/// - `example.com` → none
/// - `www.example.com` / `admin.example.com` → none (reserved)
/// - IP-address hosts → none
pub fn resolve_subdomain(hostname: &str) -> Option<&str> {
    if hostname.is_empty() {
        return None;
    }

    // IP hosts have dot-separated parts but no subdomain semantics
    if trim_brackets(hostname).parse::<std::net::IpAddr>().is_ok() {
        return None;
    }

    let parts: Vec<&str> = hostname.split('.').collect();

    let candidate = if hostname.contains("localhost") {
        // Development: tenant.localhost
        (parts.len() >= 2).then(|| parts[0])
    } else {
        // Production: tenant.example.com (more than 2 parts means subdomain exists)
        (parts.len() > 2).then(|| parts[0])
    }?;

    if candidate.is_empty() || RESERVED_SUBDOMAINS.contains(&candidate) {
        return None;
    }

    Some(candidate)
}

/// Base domain shown in tenant links.
///
/// Development hosts keep their port (`gold.localhost:3001` →
/// `localhost:3001`); production hosts reduce to the last two dot-parts.
pub fn base_domain(host: &str) -> String {
    let hostname = strip_port(host);

    if hostname.contains("localhost") {
        return match host.rsplit_once(':') {
            Some((_, port)) => format!("localhost:{}", port),
            None => "localhost".to_string(),
        };
    }

    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() >= 2 {
        parts[parts.len() - 2..].join(".")
    } else {
        hostname.to_string()
    }
}

/// Absolute URL of a tenant's site: `{scheme}://{slug}.{base_domain}`
pub fn tenant_url(scheme: &str, slug: &str, base_domain: &str) -> String {
    format!("{}://{}.{}", scheme, slug, base_domain)
}

fn trim_brackets(hostname: &str) -> &str {
    hostname
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_hosts_need_three_parts() {
        assert_eq!(resolve_subdomain("red-bistro.example.com"), Some("red-bistro"));
        assert_eq!(resolve_subdomain("gold.example.co.uk"), Some("gold"));
        assert_eq!(resolve_subdomain("example.com"), None);
        assert_eq!(resolve_subdomain("com"), None);
    }

    #[test]
    fn localhost_needs_two_parts() {
        assert_eq!(resolve_subdomain("gold.localhost"), Some("gold"));
        assert_eq!(resolve_subdomain("tenant.localhost"), Some("tenant"));
        assert_eq!(resolve_subdomain("localhost"), None);
    }

    #[test]
    fn reserved_subdomains_never_resolve() {
        assert_eq!(resolve_subdomain("www.example.com"), None);
        assert_eq!(resolve_subdomain("admin.example.com"), None);
        assert_eq!(resolve_subdomain("www.localhost"), None);
        assert_eq!(resolve_subdomain("admin.localhost"), None);
    }

    #[test]
    fn ip_hosts_never_resolve() {
        assert_eq!(resolve_subdomain("127.0.0.1"), None);
        assert_eq!(resolve_subdomain("10.1.2.3"), None);
        assert_eq!(resolve_subdomain("[::1]"), None);
    }

    #[test]
    fn ports_are_stripped_before_resolution() {
        assert_eq!(resolve_subdomain(strip_port("gold.localhost:3001")), Some("gold"));
        assert_eq!(resolve_subdomain(strip_port("localhost:3001")), None);
        assert_eq!(resolve_subdomain(strip_port("example.com:443")), None);
        assert_eq!(strip_port("[::1]:3001"), "[::1]");
    }

    #[test]
    fn base_domain_keeps_localhost_port() {
        assert_eq!(base_domain("gold.localhost:3001"), "localhost:3001");
        assert_eq!(base_domain("localhost"), "localhost");
        assert_eq!(base_domain("red-bistro.example.com"), "example.com");
        assert_eq!(base_domain("example.com"), "example.com");
    }

    #[test]
    fn tenant_urls() {
        assert_eq!(
            tenant_url("https", "gold", "example.com"),
            "https://gold.example.com"
        );
        assert_eq!(
            tenant_url("http", "gold", "localhost:3001"),
            "http://gold.localhost:3001"
        );
    }
}
