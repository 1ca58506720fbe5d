//! Expansion of packed fixed seeds into peer address records.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use cbsl_consensus::constants::{NODE_NETWORK, ONE_WEEK_SECS};
use cbsl_consensus::SeedSpec6;
use rand::Rng;

use crate::error::SeedError;

/// Size of one packed record: 16 address bytes and a big-endian port.
pub const PACKED_SEED_LEN: usize = 18;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// UNIX time the peer was last seen.
    pub last_seen: i64,
}

/// Turns fixed seeds into address records, preserving order. Each record is
/// stamped between two weeks and one week in the past, so a node treats
/// them as usable but replaces them once real peers answer.
pub fn convert_seed_specs<R: Rng + ?Sized>(
    specs: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            addr: seed_socket_addr(spec),
            services: NODE_NETWORK,
            last_seen: now - 2 * ONE_WEEK_SECS + rng.gen_range(0..ONE_WEEK_SECS),
        })
        .collect()
}

pub fn parse_packed_seeds(bytes: &[u8]) -> Result<Vec<SeedSpec6>, SeedError> {
    if bytes.len() % PACKED_SEED_LEN != 0 {
        return Err(SeedError::MalformedLength(bytes.len()));
    }

    let specs = bytes
        .chunks_exact(PACKED_SEED_LEN)
        .map(|record| {
            let mut addr = [0u8; 16];
            addr.copy_from_slice(&record[..16]);
            SeedSpec6 {
                addr,
                port: u16::from_be_bytes([record[16], record[17]]),
            }
        })
        .collect();
    Ok(specs)
}

/// IPv4-mapped addresses come back as plain IPv4.
pub fn seed_socket_addr(spec: &SeedSpec6) -> SocketAddr {
    let v6 = Ipv6Addr::from(spec.addr);
    let ip = match v6.to_ipv4_mapped() {
        Some(v4) => IpAddr::V4(v4),
        None => IpAddr::V6(v6),
    };
    SocketAddr::new(ip, spec.port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mapped_and_native_addresses() {
        let v4 = SeedSpec6::ipv4([10, 0, 0, 1], 28867);
        assert_eq!(
            seed_socket_addr(&v4),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 28867)
        );

        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 1;
        let v6 = SeedSpec6 { addr, port: 30007 };
        assert!(seed_socket_addr(&v6).is_ipv6());
    }

    #[test]
    fn parse_rejects_partial_records() {
        assert_eq!(parse_packed_seeds(&[0u8; 17]), Err(SeedError::MalformedLength(17)));
        assert_eq!(parse_packed_seeds(&[0u8; 37]), Err(SeedError::MalformedLength(37)));
        assert_eq!(parse_packed_seeds(&[]), Ok(Vec::new()));
    }

    #[test]
    fn parse_reads_big_endian_ports() {
        let mut packed = SeedSpec6::ipv4([1, 2, 3, 4], 0).addr.to_vec();
        packed.extend_from_slice(&[0x70, 0xc3]);
        let specs = parse_packed_seeds(&packed).expect("seeds");
        assert_eq!(specs, vec![SeedSpec6::ipv4([1, 2, 3, 4], 28867)]);
    }

    #[test]
    fn timestamps_fall_in_the_second_week_back() {
        let now = 1_700_000_000;
        let specs = vec![SeedSpec6::ipv4([1, 1, 1, 1], 1); 500];
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = convert_seed_specs(&specs, now, &mut rng);
        assert_eq!(seeds.len(), specs.len());
        for seed in &seeds {
            assert!(seed.last_seen >= now - 2 * ONE_WEEK_SECS);
            assert!(seed.last_seen < now - ONE_WEEK_SECS);
            assert_eq!(seed.services, NODE_NETWORK);
        }
        assert!(seeds.iter().any(|seed| seed.last_seen != seeds[0].last_seen));
    }
}
