//! Packed peer seed records and DNS seed hosts.

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SeedSpec6 {
    /// IPv6 address, or IPv4 mapped into `::ffff:a.b.c.d`.
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12] = octets[0];
        addr[13] = octets[1];
        addr[14] = octets[2];
        addr[15] = octets[3];
        Self { addr, port }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn same(host: &'static str) -> Self {
        Self { name: host, host }
    }
}

pub const MAINNET_FIXED_SEEDS: [SeedSpec6; 5] = [
    SeedSpec6::ipv4([5, 189, 139, 75], 28867),
    SeedSpec6::ipv4([207, 180, 213, 15], 28867),
    SeedSpec6::ipv4([144, 217, 224, 88], 28867),
    SeedSpec6::ipv4([161, 129, 66, 36], 28867),
    SeedSpec6::ipv4([140, 82, 52, 45], 28867),
];

pub const MAINNET_DNS_SEEDS: [DnsSeed; 6] = [
    DnsSeed::same("5.189.139.75"),
    DnsSeed::same("207.180.213.15"),
    DnsSeed::same("144.217.224.88"),
    DnsSeed::same("161.129.66.36"),
    DnsSeed::same("140.82.52.45"),
    DnsSeed::same("explorer.cbslco.in"),
];
