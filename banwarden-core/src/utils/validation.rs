//! Input validation for ban/unban targets

use std::net::IpAddr;

use crate::error::{CoreError, CoreResult};

/// Validate an IPv4/IPv6 address or CIDR block and return it trimmed.
pub fn validate_ip(input: &str) -> CoreResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::ValidationError(
            "IP address must not be empty".to_string(),
        ));
    }

    let (addr, prefix) = match input.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (input, None),
    };

    let ip: IpAddr = addr
        .parse()
        .map_err(|_| CoreError::ValidationError(format!("Invalid IP address: {input}")))?;

    if let Some(prefix) = prefix {
        let max = if ip.is_ipv4() { 32 } else { 128 };
        match prefix.parse::<u8>() {
            Ok(bits) if bits <= max => {}
            _ => {
                return Err(CoreError::ValidationError(format!(
                    "Invalid CIDR prefix: {input}"
                )))
            }
        }
    }

    Ok(input.to_string())
}

/// Validate a member the server already listed. Only emptiness is checked.
pub fn validate_member(input: &str) -> CoreResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::ValidationError(
            "Banned entry must not be empty".to_string(),
        ));
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_addresses_and_blocks() {
        for ok in ["10.0.0.1", " 203.0.113.7 ", "2001:db8::1", "10.0.0.0/8", "2001:db8::/32"] {
            assert_eq!(validate_ip(ok).unwrap(), ok.trim());
        }
    }

    #[test]
    fn rejects_invalid_input() {
        for bad in ["", "   ", "10.0.0", "example.com", "10.0.0.0/33", "::1/129", "10.0.0.1/x"] {
            assert!(
                matches!(validate_ip(bad), Err(CoreError::ValidationError(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn listed_members_are_opaque() {
        assert_eq!(validate_member(" host.example ").unwrap(), "host.example");
        assert!(matches!(
            validate_member("  "),
            Err(CoreError::ValidationError(_))
        ));
    }
}
