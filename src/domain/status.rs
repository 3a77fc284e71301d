use crate::domain::response::DeliveryStatus;

/// How numeric report codes are turned into a [`DeliveryStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusMapping {
    /// Codes `50`, `51` and `52` all map to [`DeliveryStatus::Failed`].
    #[default]
    Collapsed,
    /// Codes `50`, `51` and `52` map to [`DeliveryStatus::BalanceInsufficient`],
    /// [`DeliveryStatus::BalanceExpired`] and [`DeliveryStatus::InvalidMsisdn`].
    Detailed,
}

impl StatusMapping {
    /// Classify a report code. Unknown and empty codes become
    /// [`DeliveryStatus::InvalidId`].
    pub fn classify(self, code: &str) -> DeliveryStatus {
        match (self, code) {
            (_, "20") => DeliveryStatus::Sent,
            (_, "22") => DeliveryStatus::Delivered,
            (Self::Collapsed, "50" | "51" | "52") => DeliveryStatus::Failed,
            (Self::Detailed, "50") => DeliveryStatus::BalanceInsufficient,
            (Self::Detailed, "51") => DeliveryStatus::BalanceExpired,
            (Self::Detailed, "52") => DeliveryStatus::InvalidMsisdn,
            _ => DeliveryStatus::InvalidId,
        }
    }
}

/// Classify a report code with the default [`StatusMapping::Collapsed`] table.
pub fn classify(code: &str) -> DeliveryStatus {
    StatusMapping::Collapsed.classify(code)
}
