use serde::{Deserialize, Serialize};

use super::defaults;

/// Connection-request gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Users with fewer accepted connections than this may request anyone.
    pub free_request_quota: usize,
    /// Past the quota, the target must be reachable within this many hops.
    pub request_max_hops: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            free_request_quota: defaults::DEFAULT_FREE_REQUEST_QUOTA,
            request_max_hops: defaults::DEFAULT_REQUEST_MAX_HOPS,
        }
    }
}
