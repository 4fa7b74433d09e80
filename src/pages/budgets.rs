use chrono::{Datelike, Local};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{icon_edit, icon_plus, icon_trash};
use crate::components::layout::page_shell;
use crate::components::modal::Modal;
use crate::hooks::use_api;
use crate::models::{Budget, BudgetPayload, Category, EntryKind};
use crate::services::{budgets, categories};
use crate::util::{format_amount, month_name, MONTHS};

fn percent_spent(spent: f64, limit: f64) -> i64 {
    if limit > 0.0 {
        ((spent / limit) * 100.0).round() as i64
    } else {
        0
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(BudgetsPage)]
pub fn budgets_page() -> Html {
    let api = use_api();

    let list = use_state(Vec::<Budget>::new);
    let expense_categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);
    let month_only = use_state(|| false);

    let show_modal = use_state(|| false);
    let editing = use_state(|| None::<Budget>);
    let form_category = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_month = use_state(|| Local::now().month().to_string());
    let form_year = use_state(|| Local::now().year().to_string());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let list = list.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(_, month_only): &(u32, bool)| {
                let month_only = *month_only;
                spawn_local(async move {
                    loading.set(true);
                    let now = Local::now();
                    let result = if month_only {
                        budgets::for_month(&api, now.month(), now.year()).await
                    } else {
                        budgets::list(&api).await
                    };
                    match result {
                        Ok(data) => list.set(data),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (*refresh, *month_only),
        );
    }

    {
        let api = api.clone();
        let expense_categories = expense_categories.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(data) = categories::list(&api).await {
                        let filtered = data
                            .into_iter()
                            .filter(|c| c.kind == EntryKind::Expense)
                            .collect::<Vec<_>>();
                        expense_categories.set(filtered);
                    }
                });
                || ()
            },
            (),
        );
    }

    let reset_form = {
        let editing = editing.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_month = form_month.clone();
        let form_year = form_year.clone();
        move || {
            editing.set(None);
            form_category.set("".to_string());
            form_amount.set("".to_string());
            form_month.set(Local::now().month().to_string());
            form_year.set(Local::now().year().to_string());
        }
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |_: ()| {
            show_modal.set(false);
            reset_form();
        })
    };

    let on_open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };

    let on_edit = {
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_month = form_month.clone();
        let form_year = form_year.clone();
        Callback::from(move |budget: Budget| {
            form_category.set(
                budget
                    .category_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            );
            form_amount.set(budget.budget_amount.to_string());
            form_month.set(budget.month.to_string());
            form_year.set(budget.year.to_string());
            editing.set(Some(budget));
            show_modal.set(true);
        })
    };

    let on_delete = {
        let api = api.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            if !confirm("Are you sure you want to delete this budget?") {
                return;
            }
            let api = api.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match budgets::delete(&api, id).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_submit = {
        let api = api.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        let show_modal = show_modal.clone();
        let editing = editing.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_month = form_month.clone();
        let form_year = form_year.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(category_id) = form_category.parse::<i64>() else {
                error.set(Some("Please select a category".to_string()));
                return;
            };
            let amount = form_amount.trim().parse::<f64>().unwrap_or(0.0);
            if amount <= 0.0 {
                error.set(Some("Amount must be a positive number".to_string()));
                return;
            }
            let month = form_month.parse::<u32>().unwrap_or(1);
            let year = form_year.parse::<i32>().unwrap_or_else(|_| Local::now().year());
            let payload = BudgetPayload {
                category_id,
                amount,
                month,
                year,
            };

            saving.set(true);
            error.set(None);

            let api = api.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            let show_modal = show_modal.clone();
            let editing_id = editing.as_ref().map(|b| b.id);
            let saving = saving.clone();
            let reset_form = reset_form.clone();
            spawn_local(async move {
                let result = match editing_id {
                    Some(id) => budgets::update(&api, id, &payload).await,
                    None => budgets::create(&api, &payload).await,
                };
                match result {
                    Ok(_) => {
                        show_modal.set(false);
                        reset_form();
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let modal_title = if editing.is_some() {
        "Update Budget"
    } else {
        "Create Budget"
    };

    let on_toggle_month = {
        let month_only = month_only.clone();
        Callback::from(move |_| month_only.set(!*month_only))
    };
    let month_filter_class = if *month_only {
        "px-4 py-2 rounded-xl font-bold text-sm bg-primary text-primary-foreground hover:opacity-90 transition-all"
    } else {
        "px-4 py-2 rounded-xl font-bold text-sm bg-secondary text-secondary-foreground hover:opacity-90 transition-all"
    };

    html! {
        { page_shell(
            "Budgets",
            html! {
                <div class="flex items-center gap-2">
                    <button onclick={on_toggle_month} class={month_filter_class}>
                        {"This Month"}
                    </button>
                    <button onclick={on_open_modal} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_plus() }
                        {"Add Budget"}
                    </button>
                </div>
            },
            html! {
                <>
                    if let Some(msg) = &*error {
                        <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg text-sm">{ msg.clone() }</div>
                    }

                    { if *loading {
                        html! { <p class="text-muted-foreground">{"Loading..."}</p> }
                    } else if list.is_empty() {
                        html! { <p class="text-muted-foreground">{"No budgets set yet."}</p> }
                    } else {
                        html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            { for list.iter().map(|budget| {
                                let percent = percent_spent(budget.spent_amount, budget.budget_amount);
                                let over = percent > 100;
                                let edit_target = budget.clone();
                                let on_edit = on_edit.clone();
                                let on_delete = on_delete.clone();
                                let id = budget.id;
                                html! {
                                    <div class="bg-card rounded-[10px] p-6 border border-border">
                                        <div class="flex items-start justify-between mb-3">
                                            <div>
                                                <h3 class="text-lg font-semibold text-foreground">{ budget.category_name.clone() }</h3>
                                                <p class="text-sm text-muted-foreground">
                                                    { format!("{} {}", month_name(budget.month), budget.year) }
                                                </p>
                                            </div>
                                            <div class="flex gap-2">
                                                <button
                                                    class="text-muted-foreground hover:text-foreground transition-colors"
                                                    aria-label="Edit budget"
                                                    onclick={Callback::from(move |_| on_edit.emit(edit_target.clone()))}
                                                >
                                                    { icon_edit() }
                                                </button>
                                                <button
                                                    class="text-muted-foreground hover:text-red-600 transition-colors"
                                                    aria-label="Delete budget"
                                                    onclick={Callback::from(move |_| on_delete.emit(id))}
                                                >
                                                    { icon_trash() }
                                                </button>
                                            </div>
                                        </div>
                                        <div class="flex items-center justify-between text-sm mb-1">
                                            <span class="text-muted-foreground">
                                                { format!("Spent: {}", format_amount(budget.spent_amount)) }
                                            </span>
                                            <span class={if over { "text-red-600 font-semibold" } else { "text-muted-foreground" }}>
                                                { format!("{}%", percent) }
                                            </span>
                                        </div>
                                        <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                            <div
                                                class={if over { "h-full bg-red-500" } else { "h-full bg-primary" }}
                                                style={format!("width: {}%", percent.min(100))}
                                            ></div>
                                        </div>
                                        <p class="mt-2 text-xs text-muted-foreground">
                                            { format!("Limit: {}", format_amount(budget.budget_amount)) }
                                        </p>
                                    </div>
                                }
                            }) }
                        </div>
                        }
                    }}

                    if *show_modal {
                        <Modal title={modal_title} on_close={on_close_modal.clone()}>
                            <form class="space-y-4" onsubmit={on_submit.clone()}>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Category"}</label>
                                    <select
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        onchange={{
                                            let form_category = form_category.clone();
                                            Callback::from(move |e: Event| {
                                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                form_category.set(select.value());
                                            })
                                        }}
                                    >
                                        <option value="" selected={form_category.is_empty()}>{"Select a category"}</option>
                                        { for expense_categories.iter().map(|cat| html! {
                                            <option value={cat.id.to_string()} selected={*form_category == cat.id.to_string()}>
                                                { cat.name.clone() }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Amount"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        placeholder="0.00"
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        value={(*form_amount).clone()}
                                        oninput={{
                                            let form_amount = form_amount.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_amount.set(input.value());
                                            })
                                        }}
                                    />
                                </div>
                                <div class="grid grid-cols-2 gap-4">
                                    <div class="space-y-1">
                                        <label class="text-sm font-medium text-foreground">{"Month"}</label>
                                        <select
                                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                            onchange={{
                                                let form_month = form_month.clone();
                                                Callback::from(move |e: Event| {
                                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                    form_month.set(select.value());
                                                })
                                            }}
                                        >
                                            { for MONTHS.iter().enumerate().map(|(i, name)| {
                                                let value = (i + 1).to_string();
                                                html! {
                                                    <option value={value.clone()} selected={*form_month == value}>{ *name }</option>
                                                }
                                            }) }
                                        </select>
                                    </div>
                                    <div class="space-y-1">
                                        <label class="text-sm font-medium text-foreground">{"Year"}</label>
                                        <input
                                            type="number"
                                            min="2020"
                                            max="2100"
                                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                            value={(*form_year).clone()}
                                            oninput={{
                                                let form_year = form_year.clone();
                                                Callback::from(move |e: InputEvent| {
                                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                    form_year.set(input.value());
                                                })
                                            }}
                                        />
                                    </div>
                                </div>
                                <button
                                    type="submit"
                                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                    disabled={*saving}
                                >
                                    { if *saving { "Saving..." } else { modal_title } }
                                </button>
                            </form>
                        </Modal>
                    }
                </>
            }
        ) }
    }
}

#[cfg(test)]
mod tests {
    use super::percent_spent;

    #[test]
    fn percent_is_rounded_against_the_limit() {
        assert_eq!(percent_spent(50.0, 200.0), 25);
        assert_eq!(percent_spent(99.5, 100.0), 100);
    }

    #[test]
    fn overspend_exceeds_one_hundred() {
        assert_eq!(percent_spent(300.0, 200.0), 150);
    }

    #[test]
    fn zero_limit_reports_zero() {
        assert_eq!(percent_spent(50.0, 0.0), 0);
    }
}
