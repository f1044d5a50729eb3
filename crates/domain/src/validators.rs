/// Validate an IPv4 dotted-quad address.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|part| {
        !part.is_empty() && part.len() <= 3 && part.parse::<u16>().map_or(false, |n| n <= 255)
    })
}

/// Validate a MAC address.
/// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and bare `aabbccddeeff`.
pub fn is_valid_mac(mac: &str) -> bool {
    if mac.len() == 12 {
        return mac.chars().all(|c| c.is_ascii_hexdigit());
    }
    if mac.len() != 17 {
        return false;
    }

    let separator = if mac.contains(':') {
        ':'
    } else if mac.contains('-') {
        '-'
    } else {
        return false;
    };

    let parts: Vec<&str> = mac.split(separator).collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Canonical form used in the store and in projections: lowercase,
/// colon-separated. Assumes the input already passed [`is_valid_mac`].
pub fn normalize_mac(mac: &str) -> String {
    let hex: String = mac
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect::<String>()
        .to_lowercase();

    hex.as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(":")
}
