/// Path segment shared by every gateway endpoint.
pub const NAMESPACE: &str = "masking";

/// The two request shapes the gateway understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Parameters encoded in the query string.
    Get,
    /// Parameters encoded as an `application/x-www-form-urlencoded` body.
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Send,
    Report,
    Balance,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Report => "report",
            Self::Balance => "balance",
        }
    }

    pub fn kind(self) -> RequestKind {
        match self {
            Self::Send => RequestKind::Post,
            Self::Report | Self::Balance => RequestKind::Get,
        }
    }

    /// `base` must not end with `/`.
    pub fn url(self, base: &str) -> String {
        format!("{base}/{NAMESPACE}/{}.php", self.name())
    }
}
