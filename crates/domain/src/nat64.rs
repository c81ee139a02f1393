//! NAT64 address embedding and reverse-name manipulation.

use crate::errors::HookError;
use hickory_proto::rr::Name;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Embed an IPv4 address into the low 32 bits of a /96 IPv6 prefix.
pub fn embed_v4(prefix: Ipv6Addr, addr: Ipv4Addr) -> Ipv6Addr {
    let mut octets = prefix.octets();
    octets[12..].copy_from_slice(&addr.octets());
    Ipv6Addr::from(octets)
}

/// Extract the IPv4 address embedded in the low 32 bits of a reverse-IPv6
/// lookup name (nibble labels, least significant first) and build the
/// equivalent `in-addr.arpa.` PTR name.
///
/// Returns `None` when fewer than 8 labels are present, too few to contain
/// an embedded address. A label that is not a single hex nibble is an error.
pub fn embedded_v4_ptr_name(qname: &Name) -> Result<Option<(Ipv4Addr, Name)>, HookError> {
    let labels: Vec<&[u8]> = qname.iter().collect();
    if labels.len() < 8 {
        return Ok(None);
    }

    let mut nibbles = [0u8; 8];
    for (i, label) in labels[..8].iter().enumerate() {
        let text = std::str::from_utf8(label).map_err(|_| malformed(qname))?;
        let nibble = u8::from_str_radix(text, 16).map_err(|_| malformed(qname))?;
        if nibble > 0xf {
            return Err(malformed(qname));
        }
        nibbles[i] = nibble;
    }

    // Low nibble comes first in a reversed name, and the reverse-IPv4 name
    // wants its least significant octet first as well.
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = nibbles[i * 2] + 16 * nibbles[i * 2 + 1];
    }

    let ptr_name = Name::from_str(&format!(
        "{}.{}.{}.{}.in-addr.arpa.",
        octets[0], octets[1], octets[2], octets[3]
    ))
    .map_err(|e| HookError::InvalidName(e.to_string()))?;

    let addr = Ipv4Addr::new(octets[3], octets[2], octets[1], octets[0]);
    Ok(Some((addr, ptr_name)))
}

fn malformed(qname: &Name) -> HookError {
    HookError::MalformedReverseName(qname.to_string())
}
