//! Employment-type checkboxes and salary-range radios.
//!
//! The component keeps no state of its own. Checked flags come from the
//! parent's `FilterState` through props, and every change is forwarded
//! upward as it happens.

use common::model::filters::FilterOption;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Shared `name` of the salary-range radio group.
const SALARY_RANGE_GROUP: &str = "minimumPackage";

#[derive(Properties, PartialEq)]
pub struct FilterGroupProps {
    pub employment_types: &'static [FilterOption],
    pub salary_ranges: &'static [FilterOption],
    /// Ids currently checked in the parent state.
    pub checked_employment_types: Vec<String>,
    /// Selected salary-range id, empty when none.
    pub selected_minimum_package: String,
    /// Emits `(id, checked)` on every checkbox toggle.
    pub on_employment_type_change: Callback<(String, bool)>,
    /// Emits the id of the radio that became selected.
    pub on_minimum_package_change: Callback<String>,
}

pub struct FilterGroup;

impl Component for FilterGroup {
    type Message = ();
    type Properties = FilterGroupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilterGroup
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="filter-group-container">
                <h1 class="filter-heading">{ "Type of Employment" }</h1>
                { build_employment_types(props) }
                <hr class="separator" />
                <h1 class="filter-heading">{ "Salary Range" }</h1>
                { build_salary_ranges(props) }
            </div>
        }
    }
}

fn build_employment_types(props: &FilterGroupProps) -> Html {
    let items = props
        .employment_types
        .iter()
        .map(|option| {
            let checked = props
                .checked_employment_types
                .iter()
                .any(|id| id == option.id);
            let onchange = {
                let callback = props.on_employment_type_change.clone();
                let id = option.id.to_string();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    callback.emit((id.clone(), input.checked()));
                })
            };

            html! {
                <li key={option.id} class="filter-item">
                    <label class="filter-label">
                        <input type="checkbox" id={option.id} name={option.id} checked={checked} onchange={onchange} />
                        { option.label }
                    </label>
                </li>
            }
        })
        .collect::<Html>();

    html! { <ul class="filter-list-container">{ items }</ul> }
}

fn build_salary_ranges(props: &FilterGroupProps) -> Html {
    let items = props
        .salary_ranges
        .iter()
        .map(|option| {
            let checked = props.selected_minimum_package == option.id;
            let onchange = {
                let callback = props.on_minimum_package_change.clone();
                let id = option.id.to_string();
                Callback::from(move |_: Event| callback.emit(id.clone()))
            };

            html! {
                <li key={option.id} class="filter-item">
                    <label class="filter-label">
                        <input
                            type="radio"
                            id={option.id}
                            value={option.id}
                            name={SALARY_RANGE_GROUP}
                            checked={checked}
                            onchange={onchange}
                        />
                        { option.label }
                    </label>
                </li>
            }
        })
        .collect::<Html>();

    html! { <ul class="filter-list-container">{ items }</ul> }
}
