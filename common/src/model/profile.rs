use serde::{Deserialize, Serialize};

/// Profile summary shown in the card above the filters.
///
/// The default value (all fields empty) stands for "nothing fetched yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub profile_image_url: String,
    pub name: String,
    pub short_bio: String,
}
