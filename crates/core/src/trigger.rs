//! The inbound build trigger and its acknowledgement.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// One request to start a build for a diff of a review revision.
///
/// Lives for the duration of a single request. Field names match the route
/// parameters so the router can deserialize it directly from the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildTrigger {
    /// Caller-supplied build number. Not checked for uniqueness.
    #[serde(deserialize_with = "digits_only")]
    pub build_id: u64,
    /// Diff under test.
    #[serde(deserialize_with = "digits_only")]
    pub diff_id: u64,
    /// Review revision the diff belongs to.
    #[serde(deserialize_with = "digits_only")]
    pub revision_id: u64,
    /// Opaque object identifier, passed through untouched.
    pub phid: String,
}

impl BuildTrigger {
    /// Reject triggers the router should never have produced.
    ///
    /// The only constraint on `phid` is that it is non-empty; its content is
    /// never inspected.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.phid.is_empty() {
            return Err(CoreError::Validation("phid must not be empty".to_string()));
        }
        Ok(())
    }

    /// Positional arguments for the build runner, in runner order.
    pub fn runner_args(&self) -> [String; 4] {
        [
            self.build_id.to_string(),
            self.diff_id.to_string(),
            self.revision_id.to_string(),
            self.phid.clone(),
        ]
    }

    /// Text returned to the caller once the runner has been started.
    pub fn acknowledgement(&self) -> String {
        format!(
            "Building B{}: Diff {} from D{} ({})\n",
            self.build_id, self.diff_id, self.revision_id, self.phid
        )
    }
}

/// Parse an id segment made only of ASCII digits.
///
/// `u64::from_str` alone would also take a leading `+`. Leading zeros are
/// accepted (`007` is build 7).
fn digits_only<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(serde::de::Error::custom(format!(
            "`{raw}` is not an unsigned integer"
        )));
    }
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("`{raw}` is out of range")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sample() -> BuildTrigger {
        BuildTrigger {
            build_id: 101,
            diff_id: 202,
            revision_id: 303,
            phid: "PHID-ABC-123".to_string(),
        }
    }

    #[test]
    fn runner_args_are_in_positional_order() {
        assert_eq!(
            sample().runner_args(),
            ["101", "202", "303", "PHID-ABC-123"].map(String::from)
        );
    }

    #[test]
    fn acknowledgement_echoes_all_ids() {
        assert_eq!(
            sample().acknowledgement(),
            "Building B101: Diff 202 from D303 (PHID-ABC-123)\n"
        );
    }

    #[test]
    fn phid_is_not_trimmed_or_rewritten() {
        let trigger = BuildTrigger {
            phid: " PHID; rm -rf / ".to_string(),
            ..sample()
        };
        assert_eq!(trigger.runner_args()[3], " PHID; rm -rf / ");
        assert!(trigger.validate().is_ok());
    }

    fn from_segments(build_id: &str) -> Result<BuildTrigger, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "build_id": build_id,
            "diff_id": "202",
            "revision_id": "303",
            "phid": "PHID-ABC-123",
        }))
    }

    #[test]
    fn ids_parse_from_digit_segments() {
        assert_eq!(from_segments("101").expect("parse"), sample());
        assert_eq!(from_segments("007").expect("parse").build_id, 7);
    }

    #[test]
    fn ids_reject_signs_and_non_digits() {
        for segment in ["+5", "-1", " 5", "5 ", "1.5", "abc", "", "99999999999999999999999"] {
            assert!(from_segments(segment).is_err(), "{segment:?} must be rejected");
        }
    }

    #[test]
    fn empty_phid_is_rejected() {
        let trigger = BuildTrigger {
            phid: String::new(),
            ..sample()
        };
        assert_matches!(trigger.validate(), Err(CoreError::Validation(_)));
    }
}
