use chrono::Local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{icon_download, icon_plus, icon_upload};
use crate::components::layout::page_shell;
use crate::components::modal::Modal;
use crate::hooks::use_api;
use crate::models::{Account, Category, EntryKind, NewTransaction, Page, Transaction};
use crate::services::{accounts, categories, transactions};
use crate::util::format_amount;

const PAGE_SIZE: u32 = 10;

fn has_next_page(page: &Page<Transaction>) -> bool {
    page.total_pages > 0 && page.number + 1 < page.total_pages
}

fn download_csv(bytes: &[u8], filename: &str) -> Option<()> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let mut props = web_sys::BlobPropertyBag::new();
    props.type_("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let document = web_sys::window()?.document()?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a").ok()?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body()?;
    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let api = use_api();

    let page = use_state(|| 0u32);
    let listing = use_state(|| None::<Page<Transaction>>);
    let category_options = use_state(Vec::<Category>::new);
    let account_options = use_state(Vec::<Account>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);

    let show_modal = use_state(|| false);
    let form_description = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_kind = use_state(|| "EXPENSE".to_string());
    let form_category = use_state(|| "".to_string());
    let form_account = use_state(|| "".to_string());
    let form_date = use_state(|| Local::now().format("%Y-%m-%d").to_string());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let listing = listing.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |(page, _): &(u32, u32)| {
                let page = *page;
                spawn_local(async move {
                    loading.set(true);
                    match transactions::paged(&api, page, PAGE_SIZE).await {
                        Ok(data) => listing.set(Some(data)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
                });
                || ()
            },
            (*page, *refresh),
        );
    }

    {
        let api = api.clone();
        let category_options = category_options.clone();
        let account_options = account_options.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(data) = categories::list(&api).await {
                        category_options.set(data);
                    }
                    if let Ok(data) = accounts::list(&api).await {
                        account_options.set(data);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };

    let on_open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };

    let on_prev_page = {
        let page = page.clone();
        Callback::from(move |_| {
            if *page > 0 {
                page.set(*page - 1);
            }
        })
    };

    let on_next_page = {
        let page = page.clone();
        let listing = listing.clone();
        Callback::from(move |_| {
            if listing.as_ref().map(has_next_page).unwrap_or(false) {
                page.set(*page + 1);
            }
        })
    };

    let on_export = {
        let api = api.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let error = error.clone();
            spawn_local(async move {
                match transactions::export_csv(&api).await {
                    Ok(bytes) => {
                        if download_csv(&bytes, "transactions.csv").is_none() {
                            error.set(Some("Failed to save the exported file".to_string()));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_import = {
        let api = api.clone();
        let error = error.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            input.set_value("");

            let api = api.clone();
            let error = error.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();
            let page = page.clone();
            spawn_local(async move {
                match transactions::import_csv(&api, file).await {
                    Ok(_) => {
                        notice.set(Some("Import complete".to_string()));
                        page.set(0);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_submit = {
        let api = api.clone();
        let error = error.clone();
        let show_modal = show_modal.clone();
        let refresh = refresh.clone();
        let page = page.clone();
        let form_description = form_description.clone();
        let form_amount = form_amount.clone();
        let form_kind = form_kind.clone();
        let form_category = form_category.clone();
        let form_account = form_account.clone();
        let form_date = form_date.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let description = form_description.trim().to_string();
            if description.is_empty() {
                error.set(Some("Description is required".to_string()));
                return;
            }
            let amount = form_amount.trim().parse::<f64>().unwrap_or(0.0);
            if amount <= 0.0 {
                error.set(Some("Amount must be a positive number".to_string()));
                return;
            }
            let Ok(category_id) = form_category.parse::<i64>() else {
                error.set(Some("Please select a category".to_string()));
                return;
            };
            let Ok(account_id) = form_account.parse::<i64>() else {
                error.set(Some("Please select an account".to_string()));
                return;
            };
            let payload = NewTransaction {
                description,
                amount,
                kind: EntryKind::from_str_or_default(&form_kind),
                category_id,
                account_id,
                transaction_date: (*form_date).clone(),
            };

            saving.set(true);
            error.set(None);

            let api = api.clone();
            let error = error.clone();
            let show_modal = show_modal.clone();
            let refresh = refresh.clone();
            let page = page.clone();
            let form_description = form_description.clone();
            let form_amount = form_amount.clone();
            let form_date = form_date.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match transactions::create(&api, &payload).await {
                    Ok(_) => {
                        form_description.set("".to_string());
                        form_amount.set("".to_string());
                        form_date.set(Local::now().format("%Y-%m-%d").to_string());
                        show_modal.set(false);
                        page.set(0);
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let rows = listing
        .as_ref()
        .map(|p| p.content.clone())
        .unwrap_or_default();

    html! {
        { page_shell(
            "Transactions",
            html! {
                <div class="flex items-center gap-2">
                    <label class="flex items-center gap-2 bg-secondary text-secondary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all cursor-pointer">
                        { icon_upload() }
                        {"Import CSV"}
                        <input type="file" accept=".csv,text/csv" class="hidden" onchange={on_import} />
                    </label>
                    <button onclick={on_export} class="flex items-center gap-2 bg-secondary text-secondary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_download() }
                        {"Export CSV"}
                    </button>
                    <button onclick={on_open_modal} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { icon_plus() }
                        {"Add Transaction"}
                    </button>
                </div>
            },
            html! {
                <>
                    if let Some(msg) = &*error {
                        <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg text-sm">{ msg.clone() }</div>
                    }
                    if let Some(msg) = &*notice {
                        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg text-sm">{ msg.clone() }</div>
                    }

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-4 font-bold">{"Date"}</th>
                                        <th class="px-6 py-4 font-bold">{"Description"}</th>
                                        <th class="px-6 py-4 font-bold">{"Category"}</th>
                                        <th class="px-6 py-4 font-bold">{"Type"}</th>
                                        <th class="px-6 py-4 font-bold text-right">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if *loading {
                                        html! { <tr><td colspan="5" class="px-6 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr> }
                                    } else if rows.is_empty() {
                                        html! { <tr><td colspan="5" class="px-6 py-6 text-center text-muted-foreground">{"No transactions yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for rows.iter().map(|tx| {
                                                    let income = tx.kind.is_income();
                                                    let amount_label = if income {
                                                        format!("+ {}", format_amount(tx.amount.abs()))
                                                    } else {
                                                        format!("- {}", format_amount(tx.amount.abs()))
                                                    };
                                                    html! {
                                                        <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                            <td class="px-6 py-4 text-muted-foreground">{ tx.transaction_date.clone() }</td>
                                                            <td class="px-6 py-4 text-foreground">{ tx.description.clone() }</td>
                                                            <td class="px-6 py-4">
                                                                <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">
                                                                    { tx.category_name.clone() }
                                                                </span>
                                                            </td>
                                                            <td class="px-6 py-4">
                                                                <span class={if income { "text-green-600 text-xs font-bold" } else { "text-red-500 text-xs font-bold" }}>
                                                                    { tx.kind.label() }
                                                                </span>
                                                            </td>
                                                            <td class={if income { "px-6 py-4 text-right font-semibold text-green-600" } else { "px-6 py-4 text-right font-semibold text-foreground" }}>
                                                                { amount_label }
                                                            </td>
                                                        </tr>
                                                    }
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                        <div class="px-6 py-4 border-t border-border flex items-center justify-between text-sm">
                            <span class="text-muted-foreground">
                                {
                                    listing.as_ref().map(|p| {
                                        format!("Page {} of {} ({} total)", p.number + 1, p.total_pages.max(1), p.total_elements)
                                    }).unwrap_or_default()
                                }
                            </span>
                            <div class="flex gap-2">
                                <button
                                    onclick={on_prev_page}
                                    disabled={*page == 0}
                                    class="px-3 py-1 rounded-lg bg-secondary text-secondary-foreground font-semibold disabled:opacity-50"
                                >
                                    {"Previous"}
                                </button>
                                <button
                                    onclick={on_next_page}
                                    disabled={!listing.as_ref().map(has_next_page).unwrap_or(false)}
                                    class="px-3 py-1 rounded-lg bg-secondary text-secondary-foreground font-semibold disabled:opacity-50"
                                >
                                    {"Next"}
                                </button>
                            </div>
                        </div>
                    </div>

                    if *show_modal {
                        <Modal title="Add New Transaction" on_close={on_close_modal.clone()}>
                            <form class="space-y-4" onsubmit={on_submit.clone()}>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Description"}</label>
                                    <input
                                        placeholder="e.g., Grocery shopping"
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        value={(*form_description).clone()}
                                        oninput={{
                                            let form_description = form_description.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_description.set(input.value());
                                            })
                                        }}
                                    />
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
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Type"}</label>
                                    <select
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        onchange={{
                                            let form_kind = form_kind.clone();
                                            Callback::from(move |e: Event| {
                                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                form_kind.set(select.value());
                                            })
                                        }}
                                    >
                                        { for [EntryKind::Expense, EntryKind::Income].iter().map(|kind| html! {
                                            <option value={kind.as_str()} selected={*form_kind == kind.as_str()}>{ kind.label() }</option>
                                        }) }
                                    </select>
                                </div>
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
                                        { for category_options.iter().map(|cat| html! {
                                            <option value={cat.id.to_string()} selected={*form_category == cat.id.to_string()}>
                                                { cat.name.clone() }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Account"}</label>
                                    <select
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        onchange={{
                                            let form_account = form_account.clone();
                                            Callback::from(move |e: Event| {
                                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                form_account.set(select.value());
                                            })
                                        }}
                                    >
                                        <option value="" selected={form_account.is_empty()}>{"Select an account"}</option>
                                        { for account_options.iter().map(|acc| html! {
                                            <option value={acc.id.to_string()} selected={*form_account == acc.id.to_string()}>
                                                { acc.name.clone() }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Date"}</label>
                                    <input
                                        type="date"
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        value={(*form_date).clone()}
                                        oninput={{
                                            let form_date = form_date.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_date.set(input.value());
                                            })
                                        }}
                                    />
                                </div>
                                <button
                                    type="submit"
                                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                    disabled={*saving}
                                >
                                    { if *saving { "Saving..." } else { "Add Transaction" } }
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
    use super::*;

    fn page(number: u32, total_pages: u32) -> Page<Transaction> {
        Page {
            content: Vec::new(),
            total_pages,
            total_elements: 0,
            number,
            size: PAGE_SIZE,
        }
    }

    #[test]
    fn next_page_exists_before_the_last_page() {
        assert!(has_next_page(&page(0, 3)));
        assert!(has_next_page(&page(1, 3)));
    }

    #[test]
    fn no_next_page_on_the_last_or_empty_listing() {
        assert!(!has_next_page(&page(2, 3)));
        assert!(!has_next_page(&page(0, 0)));
    }
}
