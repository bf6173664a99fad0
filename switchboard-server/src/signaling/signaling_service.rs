use crate::relay::RelayEngine;
use crate::room::RoomRegistry;
use std::sync::Arc;

struct SignalingInner {
    registry: RoomRegistry,
    relay: RelayEngine,
}

/// Shared state handed to every connection: the one room registry for the
/// process and the relay engine bound to it.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        let registry = RoomRegistry::new();
        let relay = RelayEngine::new(registry.clone());

        Self {
            inner: Arc::new(SignalingInner { registry, relay }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn relay(&self) -> &RelayEngine {
        &self.inner.relay
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}
