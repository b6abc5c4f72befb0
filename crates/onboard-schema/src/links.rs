//! Derived document links
//!
//! Each submission yields two URLs: a fixed site base plus a page name
//! plus a fragment carrying the full JSON payload, standard
//! base64-encoded. The pages decode the fragment client-side to
//! pre-fill the documents; nothing is persisted, collision-checked or
//! expired.

use crate::snapshot::HearingSnapshot;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Failure while deriving links
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Payload could not be serialized
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The two per-submission document links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedLinks {
    /// Pre-filled resume page
    pub resume: String,
    /// Pre-filled employment contract page
    pub contract: String,
}

impl DerivedLinks {
    /// Derive both links for a payload
    ///
    /// `site_base` is expected without a trailing slash.
    ///
    /// # Errors
    /// Returns [`LinkError::Serialize`] if the payload cannot be
    /// serialized to JSON.
    pub fn derive(site_base: &str, snapshot: &HearingSnapshot) -> Result<Self, LinkError> {
        let payload = serde_json::to_vec(snapshot)?;
        let encoded = STANDARD.encode(payload);
        Ok(Self {
            resume: format!("{site_base}/resume.html#{encoded}"),
            contract: format!("{site_base}/employment_contract.html#{encoded}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SITE: &str = "https://example.github.io/onboard";

    #[test]
    fn links_share_one_fragment() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("name", "Taro");
        let links = DerivedLinks::derive(SITE, &snapshot).unwrap();

        let resume_fragment = links.resume.split('#').nth(1).unwrap();
        let contract_fragment = links.contract.split('#').nth(1).unwrap();
        assert_eq!(resume_fragment, contract_fragment);
        assert!(links.resume.starts_with(&format!("{SITE}/resume.html#")));
        assert!(links
            .contract
            .starts_with(&format!("{SITE}/employment_contract.html#")));
    }

    #[test]
    fn fragment_decodes_back_to_payload() {
        let mut snapshot = HearingSnapshot::new();
        snapshot.set_single("name", "Taro");
        snapshot.set_many("pc_skills", vec!["Word".to_string()]);
        let links = DerivedLinks::derive(SITE, &snapshot).unwrap();

        let fragment = links.resume.split('#').nth(1).unwrap();
        let decoded = STANDARD.decode(fragment).unwrap();
        let restored: HearingSnapshot = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn empty_payload_still_links() {
        let links = DerivedLinks::derive(SITE, &HearingSnapshot::new()).unwrap();
        let fragment = links.resume.split('#').nth(1).unwrap();
        assert_eq!(STANDARD.decode(fragment).unwrap(), b"{}");
    }
}
