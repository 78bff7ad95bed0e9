crate::define_vendor_enum! {
    /// Protocol a virtual server or service group speaks
    ServiceType {
        Http => "HTTP",
        Ssl => "SSL",
        SslBridge => "SSL_BRIDGE",
        SslTcp => "SSL_TCP",
        Tcp => "TCP",
        Udp => "UDP",
        Ftp => "FTP",
        Dns => "DNS",
        DnsTcp => "DNS_TCP",
        Any => "ANY",
        Rdp => "RDP",
        Radius => "RADIUS",
        MySql => "MYSQL",
        MsSql => "MSSQL",
        SipUdp => "SIP_UDP",
        Rtsp => "RTSP",
    }
}

crate::define_vendor_enum! {
    /// Load-balancing method of a virtual server
    LbMethod {
        RoundRobin => "ROUNDROBIN",
        LeastConnection => "LEASTCONNECTION",
        LeastResponseTime => "LEASTRESPONSETIME",
        LeastBandwidth => "LEASTBANDWIDTH",
        LeastPackets => "LEASTPACKETS",
        LeastRequest => "LEASTREQUEST",
        UrlHash => "URLHASH",
        DomainHash => "DOMAINHASH",
        DestinationIpHash => "DESTINATIONIPHASH",
        SourceIpHash => "SOURCEIPHASH",
        SrcIpDestIpHash => "SRCIPDESTIPHASH",
        SrcIpSrcPortHash => "SRCIPSRCPORTHASH",
        CallIdHash => "CALLIDHASH",
        Token => "TOKEN",
        CustomLoad => "CUSTOMLOAD",
    }
}

impl Default for LbMethod {
    /// The device falls back to least-connection when `-lbMethod` is omitted.
    fn default() -> Self {
        LbMethod::LeastConnection
    }
}
