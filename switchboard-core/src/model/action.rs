/// How the relay routes an inbound action tag.
///
/// The set of tags is open: anything not recognised is broadcast like a
/// presence signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Peer-to-peer negotiation, delivered only to the `socketId` named in the payload.
    Targeted,
    /// Speaking indicators, broadcast to the whole room including the sender.
    Presence,
    /// Everything else, broadcast to the whole room including the sender.
    Broadcast,
}

impl Action {
    pub const WEBRTC_OFFER: &'static str = "WEBRTC_OFFER";
    pub const WEBRTC_ANSWER: &'static str = "WEBRTC_ANSWER";
    pub const WEBRTC_ICE_CANDIDATE: &'static str = "WEBRTC_ICE_CANDIDATE";
    pub const USER_SPEAKING: &'static str = "USER_SPEAKING";
    pub const USER_STOPPED_SPEAKING: &'static str = "USER_STOPPED_SPEAKING";

    pub fn classify(tag: &str) -> Self {
        match tag {
            Self::WEBRTC_OFFER | Self::WEBRTC_ANSWER | Self::WEBRTC_ICE_CANDIDATE => Self::Targeted,
            Self::USER_SPEAKING | Self::USER_STOPPED_SPEAKING => Self::Presence,
            _ => Self::Broadcast,
        }
    }
}
