use serde::{Deserialize, Serialize};

/// Client-facing configuration returned by `GET /api/config`.
///
/// The field serializes as `bgColor`; the client script reads
/// `data.bgColor` straight off the parsed JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub bg_color: String,
}
