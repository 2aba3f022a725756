//! Filter options offered by the page and the user's current selection.

/// One selectable filter entry: a stable id sent to the API and a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const EMPLOYMENT_TYPES: &[FilterOption] = &[
    FilterOption {
        id: "FULLTIME",
        label: "Full Time",
    },
    FilterOption {
        id: "PARTTIME",
        label: "Part Time",
    },
    FilterOption {
        id: "FREELANCE",
        label: "Freelance",
    },
    FilterOption {
        id: "INTERNSHIP",
        label: "Internship",
    },
];

pub const SALARY_RANGES: &[FilterOption] = &[
    FilterOption {
        id: "1000000",
        label: "10 LPA and above",
    },
    FilterOption {
        id: "2000000",
        label: "20 LPA and above",
    },
    FilterOption {
        id: "3000000",
        label: "30 LPA and above",
    },
    FilterOption {
        id: "4000000",
        label: "40 LPA and above",
    },
];

/// A user action on the search bar or the filter group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The search text changed; nothing is requested until it is submitted.
    SearchEdited(String),
    /// Search button pressed or Enter hit in the search box.
    SearchSubmitted,
    EmploymentTypeToggled { id: String, checked: bool },
    MinimumPackageSelected(String),
}

/// Search and filter parameters driving the jobs read.
///
/// Only user interaction mutates this; fetch results never touch it. Every
/// field defaults to empty, meaning "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_input: String,
    /// Checked employment-type ids in the order they were checked.
    employment_types: Vec<String>,
    /// Selected salary-range id, empty when no radio is selected.
    minimum_package: String,
}

impl FilterState {
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub fn employment_types(&self) -> &[String] {
        &self.employment_types
    }

    pub fn is_employment_type_checked(&self, id: &str) -> bool {
        self.employment_types.iter().any(|checked| checked == id)
    }

    /// Applies a checkbox change. Checking an already checked id or
    /// unchecking an absent one leaves the state as it was.
    pub fn set_employment_type(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.is_employment_type_checked(id) {
                self.employment_types.push(id.to_string());
            }
        } else {
            self.employment_types.retain(|existing| existing != id);
        }
    }

    pub fn minimum_package(&self) -> &str {
        &self.minimum_package
    }

    pub fn select_minimum_package(&mut self, id: impl Into<String>) {
        self.minimum_package = id.into();
    }

    /// Applies `event` and reports whether it calls for a new jobs request.
    ///
    /// Every filter-control change and every search submission asks for
    /// exactly one request; editing the search text alone asks for none.
    pub fn apply(&mut self, event: FilterEvent) -> bool {
        match event {
            FilterEvent::SearchEdited(value) => {
                self.set_search_input(value);
                false
            }
            FilterEvent::SearchSubmitted => true,
            FilterEvent::EmploymentTypeToggled { id, checked } => {
                self.set_employment_type(&id, checked);
                true
            }
            FilterEvent::MinimumPackageSelected(id) => {
                self.select_minimum_package(id);
                true
            }
        }
    }

    /// Wire form of the employment-type filter: checked ids joined by commas.
    pub fn employment_type_param(&self) -> String {
        self.employment_types.join(",")
    }
}
