//! Startup helpers for telling display clients where to connect.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use crate::http::TELEMETRY_PATH;

/// LAN address of this host, or 127.0.0.1 when it cannot be determined.
///
/// Connecting a UDP socket sends nothing; it only selects the outbound
/// interface.
pub fn local_ip() -> IpAddr {
    outbound_ip().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn outbound_ip() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect("8.8.8.8:80")?;
    Ok(socket.local_addr()?.ip())
}

/// URL a display client should poll, given the listen address.
///
/// A wildcard listen address is replaced by `host_ip`.
pub fn client_url(listen: SocketAddr, host_ip: IpAddr) -> String {
    let ip = if listen.ip().is_unspecified() {
        host_ip
    } else {
        listen.ip()
    };
    let addr = SocketAddr::new(ip, listen.port());
    format!("http://{}{}", addr, TELEMETRY_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_wildcard_uses_host_ip() {
        let listen: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        let host: IpAddr = "192.168.2.60".parse().unwrap();
        assert_eq!(
            client_url(listen, host),
            "http://192.168.2.60:8080/system-info"
        );
    }

    #[test]
    fn test_client_url_explicit_listen() {
        let listen: SocketAddr = "10.0.0.5:9000".parse().unwrap();
        let host: IpAddr = "192.168.2.60".parse().unwrap();
        assert_eq!(client_url(listen, host), "http://10.0.0.5:9000/system-info");
    }

    #[test]
    fn test_client_url_ipv6() {
        let listen: SocketAddr = "[::1]:8080".parse().unwrap();
        assert_eq!(
            client_url(listen, IpAddr::V4(Ipv4Addr::LOCALHOST)),
            "http://[::1]:8080/system-info"
        );
    }

    #[test]
    fn test_local_ip_is_a_concrete_address() {
        let ip = local_ip();
        assert!(!ip.is_unspecified(), "{ip}");
        assert!(!ip.is_multicast(), "{ip}");
    }
}
