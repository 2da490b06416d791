use serde::{Deserialize, Serialize};

/// Self-reported attributes collected by the intake forms.
///
/// Every field is optional. Each operation substitutes its own defaults for
/// whatever is missing, so an empty profile (`{}`) is always valid input and
/// never rejected. Values outside the known vocabularies (an unexpected
/// gender, face shape, and so on) are also accepted; lookups degrade to a
/// default bucket instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Body of a product suggestion request.
///
/// Unlike the other recommendation routes, which take a bare [`Profile`],
/// this one wraps the profile together with the requested product type
/// (`"skin"` or `"hair"`). Both fields are optional on the wire so the
/// gateway can reject incomplete requests with its own message instead of
/// a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRequest {
    pub profile: Option<Profile>,
    pub product_type: Option<String>,
}
