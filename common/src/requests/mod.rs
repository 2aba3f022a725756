use crate::model::filters::FilterState;

/// Query parameters of the jobs read, snapshotted from a `FilterState` at the
/// moment a fetch is triggered.
///
/// All three parameters are always sent; an empty value means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobsQuery {
    pub employment_type: String,
    pub minimum_package: String,
    pub search: String,
}

impl JobsQuery {
    /// Name/value pairs in the order the API documents them.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("employment_type", self.employment_type.as_str()),
            ("minimum_package", self.minimum_package.as_str()),
            ("search", self.search.as_str()),
        ]
    }
}

impl From<&FilterState> for JobsQuery {
    fn from(filters: &FilterState) -> Self {
        Self {
            employment_type: filters.employment_type_param(),
            minimum_package: filters.minimum_package().to_string(),
            search: filters.search_input().to_string(),
        }
    }
}
