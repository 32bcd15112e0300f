//! Path table for the Tebex Plugin API.
//!
//! Each [`Endpoint`] maps to a fixed base path. Resource identifiers are
//! appended as percent-encoded segments with [`Endpoint::with_segments`].

/// An endpoint of the Tebex Plugin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `/information`
    Information,
    /// `/queue`
    Queue,
    /// `/queue/offline-commands`
    QueueOfflineCommands,
    /// `/queue/online-commands`
    QueueOnlineCommands,
    /// `/listing`
    Listing,
    /// `/packages`
    Packages,
    /// `/community_goals`
    CommunityGoals,
    /// `/payments`
    Payments,
    /// `/checkout`
    Checkout,
    /// `/gift-cards`
    GiftCards,
    /// `/coupons`
    Coupons,
    /// `/bans`
    Bans,
    /// `/sales`
    Sales,
    /// `/user`
    User,
    /// `/player`
    Player,
}

impl Endpoint {
    /// Returns the base path of this endpoint.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Information => "/information",
            Self::Queue => "/queue",
            Self::QueueOfflineCommands => "/queue/offline-commands",
            Self::QueueOnlineCommands => "/queue/online-commands",
            Self::Listing => "/listing",
            Self::Packages => "/packages",
            Self::CommunityGoals => "/community_goals",
            Self::Payments => "/payments",
            Self::Checkout => "/checkout",
            Self::GiftCards => "/gift-cards",
            Self::Coupons => "/coupons",
            Self::Bans => "/bans",
            Self::Sales => "/sales",
            Self::User => "/user",
            Self::Player => "/player",
        }
    }

    /// Returns the base path followed by each segment, percent-encoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tebex_api::Endpoint;
    ///
    /// assert_eq!(
    ///     Endpoint::Player.with_segments(&["Some Player", "packages"]),
    ///     "/player/Some%20Player/packages"
    /// );
    /// ```
    #[must_use]
    pub fn with_segments(self, segments: &[&str]) -> String {
        let mut path = self.path().to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_api_layout() {
        assert_eq!(Endpoint::Information.path(), "/information");
        assert_eq!(Endpoint::QueueOfflineCommands.path(), "/queue/offline-commands");
        assert_eq!(Endpoint::CommunityGoals.path(), "/community_goals");
        assert_eq!(Endpoint::GiftCards.path(), "/gift-cards");
    }

    #[test]
    fn test_with_segments_appends_encoded_ids() {
        assert_eq!(
            Endpoint::Payments.with_segments(&["tbx-26929122a14", "note"]),
            "/payments/tbx-26929122a14/note"
        );
        assert_eq!(Endpoint::User.with_segments(&["a/b"]), "/user/a%2Fb");
    }

    #[test]
    fn test_with_no_segments_is_base_path() {
        assert_eq!(Endpoint::Queue.with_segments(&[]), "/queue");
    }
}
