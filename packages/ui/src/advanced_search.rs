use api::reference::{
    BirthStar, Education, FieldOfStudy, Income, MaritalStatus, Profession, StateOption,
};
use api::{HttpBackend, MatrimonyApi, ReferenceKind, ReferenceOption};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::components::{use_toast, ToastOptions};
use crate::context::{set_membership, toggle_membership, use_filters, use_search_results, DhosamPreference};
use crate::icons::FaMagnifyingGlass;
use crate::search_form::{
    digits_only, first_error, parse_bound, quick_search, validate_age_range, AgeRange, SearchField,
    ValidationError,
};
use crate::services::use_services;
use crate::timer::sleep_ms;
use crate::Icon;

/// One checkbox or `<option>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    fn from_reference(option: &impl ReferenceOption) -> Self {
        Self {
            value: option.option_value(),
            label: option.option_label().to_string(),
        }
    }
}

/// Option lists of the filter form. Each is fetched independently and stays
/// empty if its lookup fails.
#[derive(Clone, Debug, Default, PartialEq)]
struct OptionLists {
    marital_status: Vec<ChoiceOption>,
    professions: Vec<ChoiceOption>,
    education: Vec<ChoiceOption>,
    birth_stars: Vec<ChoiceOption>,
    incomes: Vec<ChoiceOption>,
    field_of_study: Vec<ChoiceOption>,
    states: Vec<ChoiceOption>,
}

fn load_options<T>(
    api: MatrimonyApi<HttpBackend>,
    kind: ReferenceKind,
    mut lists: Signal<OptionLists>,
    slot: fn(&mut OptionLists) -> &mut Vec<ChoiceOption>,
) where
    T: DeserializeOwned + ReferenceOption + 'static,
{
    spawn(async move {
        let options: Vec<ChoiceOption> = api
            .reference_options::<T>(kind)
            .await
            .into_options()
            .iter()
            .map(ChoiceOption::from_reference)
            .collect();
        *slot(&mut lists.write()) = options;
    });
}

fn bound_text(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[component]
fn CheckboxGroup(
    title: String,
    name: String,
    options: Vec<ChoiceOption>,
    selected: Vec<String>,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            h5 { "{title}" }
            div {
                class: "checkbox-group",
                for option in options {
                    div {
                        key: "{option.value}",
                        input {
                            r#type: "checkbox",
                            id: "{name}-{option.value}",
                            checked: selected.contains(&option.value),
                            onchange: {
                                let value = option.value.clone();
                                move |evt: FormEvent| on_toggle.call((value.clone(), evt.checked()))
                            },
                        }
                        label { r#for: "{name}-{option.value}", "{option.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectField(
    placeholder: String,
    options: Vec<ChoiceOption>,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            value: "{value}",
            onchange: move |evt: FormEvent| on_change.call(evt.value()),
            option { value: "", "{placeholder}" }
            for option in options {
                option { key: "{option.value}", value: "{option.value}", "{option.label}" }
            }
        }
    }
}

#[component]
fn DhosamRadios(
    title: String,
    name: String,
    value: Option<DhosamPreference>,
    on_change: EventHandler<DhosamPreference>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            h5 { "{title}" }
            div {
                class: "radio-group",
                for pref in DhosamPreference::ALL {
                    label {
                        key: "{pref}",
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{pref}",
                            checked: value == Some(pref),
                            onchange: move |_| on_change.call(pref),
                        }
                        span { "{pref}" }
                    }
                }
            }
        }
    }
}

/// Quick id/name search plus the advanced filter form.
///
/// - `on_search_results`: a quick search found profiles (already stored in
///   shared state)
/// - `on_find_match`: the filter form was submitted with valid ages
/// - `on_cancel`: the filters were reset
#[component]
pub fn AdvancedSearch(
    on_search_results: EventHandler<()>,
    on_find_match: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut filters = use_filters();
    let mut results = use_search_results();
    let lists = use_signal(OptionLists::default);
    let toast_api = use_toast();

    let mut query = use_signal(String::new);
    let mut query_error = use_signal(|| None::<ValidationError>);
    let mut searching = use_signal(|| false);
    let mut from_age = use_signal(String::new);
    let mut to_age = use_signal(String::new);

    // Fresh form on every visit: reset filters, forget the last quick search,
    // then seed the height bound from the viewer's own height.
    let mount_storage = services.storage.clone();
    use_effect(move || {
        filters.reset();
        mount_storage.clear_search_profile();
        if let Some(height) = mount_storage.viewer_height() {
            let gender = mount_storage.viewer().gender;
            filters.update(|f| f.seed_height(gender, height));
        }
    });

    let api = services.api.clone();
    use_hook(move || {
        load_options::<MaritalStatus>(api.clone(), ReferenceKind::MaritalStatus, lists, |l| &mut l.marital_status);
        load_options::<Profession>(api.clone(), ReferenceKind::Profession, lists, |l| &mut l.professions);
        load_options::<Education>(api.clone(), ReferenceKind::Education, lists, |l| &mut l.education);
        load_options::<BirthStar>(api.clone(), ReferenceKind::BirthStar, lists, |l| &mut l.birth_stars);
        load_options::<Income>(api.clone(), ReferenceKind::AnnualIncome, lists, |l| &mut l.incomes);
        load_options::<FieldOfStudy>(api.clone(), ReferenceKind::FieldOfStudy, lists, |l| &mut l.field_of_study);
        load_options::<StateOption>(api, ReferenceKind::State, lists, |l| &mut l.states);
    });

    let search_services = services.clone();
    let run_quick_search = move |evt: FormEvent| {
        evt.prevent_default();
        if searching() {
            return;
        }
        let text = query();
        let services = search_services.clone();
        searching.set(true);
        spawn(async move {
            match quick_search(&services.api, &services.storage, &text).await {
                Ok(found) => {
                    query_error.set(None);
                    results.set(found);
                    sleep_ms(services.config.search.results_delay_ms).await;
                    searching.set(false);
                    on_search_results.call(());
                }
                Err(e) => {
                    if e == ValidationError::SearchFailed {
                        toast_api.error(e.to_string(), ToastOptions::new());
                    }
                    query_error.set(Some(e));
                    searching.set(false);
                }
            }
        });
    };

    let viewer = services.storage.viewer();
    let submit_viewer = viewer.clone();
    let find_match = move |evt: FormEvent| {
        evt.prevent_default();
        let range = AgeRange::parse(&from_age(), &to_age());
        if !validate_age_range(range, &submit_viewer).is_empty() {
            return;
        }
        filters.set_age_range(range.from.unwrap_or(0), range.to.unwrap_or(0));
        on_find_match.call(());
    };

    let cancel = move |_: Event<MouseData>| {
        filters.reset();
        from_age.set(String::new());
        to_age.set(String::new());
        on_cancel.call(());
    };

    let age_errors = validate_age_range(AgeRange::parse(&from_age(), &to_age()), &viewer);
    let from_age_error = first_error(&age_errors, SearchField::FromAge).map(ToString::to_string);
    let to_age_error = first_error(&age_errors, SearchField::ToAge).map(ToString::to_string);
    let current = filters.get();
    let options = lists();

    rsx! {
        div {
            class: "advanced-search",

            form {
                class: "quick-search",
                onsubmit: run_quick_search,
                Icon { icon: FaMagnifyingGlass, width: 18, height: 18, class: "quick-search-icon" }
                input {
                    r#type: "text",
                    placeholder: "Search by Profile ID or Profile Name",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }
                button { r#type: "submit", disabled: searching(), "Search" }
            }
            if let Some(error) = query_error() {
                p { class: "field-error", "{error}" }
            }

            hr {}
            h4 { "Advanced Search" }

            form {
                class: "filter-form",
                onsubmit: find_match,

                div {
                    class: "form-field",
                    label { "Age" }
                    div {
                        class: "range-inputs",
                        div {
                            input {
                                r#type: "text",
                                placeholder: "From",
                                class: if from_age_error.is_some() { "invalid" } else { "" },
                                value: from_age(),
                                oninput: move |evt| from_age.set(digits_only(&evt.value())),
                            }
                            if let Some(error) = from_age_error.clone() {
                                p { class: "field-error", "{error}" }
                            }
                        }
                        div {
                            input {
                                r#type: "text",
                                placeholder: "To",
                                class: if to_age_error.is_some() { "invalid" } else { "" },
                                value: to_age(),
                                oninput: move |evt| to_age.set(digits_only(&evt.value())),
                            }
                            if let Some(error) = to_age_error.clone() {
                                p { class: "field-error", "{error}" }
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "Height" }
                    div {
                        class: "range-inputs",
                        input {
                            r#type: "text",
                            placeholder: "From",
                            value: bound_text(current.from_height),
                            oninput: move |evt| {
                                let height = parse_bound(&evt.value()).unwrap_or(0);
                                filters.update(|f| f.from_height = height);
                            },
                        }
                        input {
                            r#type: "text",
                            placeholder: "To",
                            value: bound_text(current.to_height),
                            oninput: move |evt| {
                                let height = parse_bound(&evt.value()).unwrap_or(0);
                                filters.update(|f| f.to_height = height);
                            },
                        }
                    }
                }

                CheckboxGroup {
                    title: "Marital Status",
                    name: "ms",
                    options: options.marital_status.clone(),
                    selected: current.marital_status.clone(),
                    on_toggle: move |(id, checked): (String, bool)| {
                        filters.update(|f| set_membership(&mut f.marital_status, &id, checked));
                    },
                }

                CheckboxGroup {
                    title: "Profession",
                    name: "p",
                    options: options.professions.clone(),
                    selected: current.professions.clone(),
                    on_toggle: move |(id, _): (String, bool)| {
                        filters.update(|f| toggle_membership(&mut f.professions, &id));
                    },
                }

                div {
                    class: "form-field",
                    label { "Education" }
                    SelectField {
                        placeholder: "-- Select Education --",
                        options: options.education.clone(),
                        value: current.education.clone(),
                        on_change: move |value: String| filters.update(|f| f.education = value),
                    }
                }

                CheckboxGroup {
                    title: "Field of Study",
                    name: "fs",
                    options: options.field_of_study.clone(),
                    selected: current.field_of_study.clone(),
                    on_toggle: move |(id, checked): (String, bool)| {
                        filters.update(|f| set_membership(&mut f.field_of_study, &id, checked));
                    },
                }

                div {
                    class: "form-field",
                    label { "Income" }
                    div {
                        class: "range-inputs",
                        SelectField {
                            placeholder: "Min Income",
                            options: options.incomes.clone(),
                            value: current.min_income.clone(),
                            on_change: move |value: String| filters.update(|f| f.min_income = value),
                        }
                        SelectField {
                            placeholder: "Max Income",
                            options: options.incomes.clone(),
                            value: current.max_income.clone(),
                            on_change: move |value: String| filters.update(|f| f.max_income = value),
                        }
                    }
                }

                DhosamRadios {
                    title: "Chevvai Dhosam",
                    name: "chevvai",
                    value: current.chevvai_dhosam,
                    on_change: move |pref: DhosamPreference| filters.update(|f| f.chevvai_dhosam = Some(pref)),
                }

                DhosamRadios {
                    title: "Rahu / Ketu Dhosam",
                    name: "rahu",
                    value: current.rahu_ketu_dhosam,
                    on_change: move |pref: DhosamPreference| filters.update(|f| f.rahu_ketu_dhosam = Some(pref)),
                }

                div {
                    class: "form-field",
                    label { "Birth Star" }
                    SelectField {
                        placeholder: "Select Birth Star",
                        options: options.birth_stars.clone(),
                        value: current.birth_star.clone(),
                        on_change: move |value: String| filters.update(|f| f.birth_star = value),
                    }
                }

                CheckboxGroup {
                    title: "Native State",
                    name: "nativeState",
                    options: options.states.clone(),
                    selected: current.native_state.clone(),
                    on_toggle: move |(id, checked): (String, bool)| {
                        filters.update(|f| set_membership(&mut f.native_state, &id, checked));
                    },
                }

                div {
                    class: "form-field",
                    label { "Work Location" }
                    SelectField {
                        placeholder: "Select Location",
                        options: options.states.clone(),
                        value: current.work_location.clone(),
                        on_change: move |value: String| filters.update(|f| f.work_location = value),
                    }
                }

                div {
                    class: "form-field",
                    h5 { "Profile Photo" }
                    input {
                        r#type: "checkbox",
                        id: "photo",
                        checked: current.people_only_with_photo,
                        onchange: move |evt: FormEvent| {
                            let checked = evt.checked();
                            filters.update(|f| f.people_only_with_photo = checked);
                        },
                    }
                    label { r#for: "photo", "People only with photo" }
                }

                div {
                    class: "form-actions",
                    button { r#type: "button", class: "secondary", onclick: cancel, "Cancel" }
                    button { r#type: "submit", class: "primary", "Find Match" }
                }
            }
        }
    }
}
