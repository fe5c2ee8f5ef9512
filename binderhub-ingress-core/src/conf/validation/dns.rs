const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// RFC 1123 label: lowercase alphanumerics and '-', starting and ending
/// with an alphanumeric, at most 63 characters.
pub fn is_dns1123_label(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_LABEL_LEN {
        return false;
    }

    let bytes = s.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    edge_ok(bytes[0])
        && edge_ok(bytes[bytes.len() - 1])
        && bytes.iter().all(|&b| edge_ok(b) || b == b'-')
}

/// Host names accepted in an ingress rule: dot-separated DNS-1123 labels,
/// optionally led by a single `*` wildcard label.
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() || host.len() > MAX_NAME_LEN {
        return false;
    }

    let rest = host.strip_prefix("*.").unwrap_or(host);
    rest.split('.').all(is_dns1123_label)
}
