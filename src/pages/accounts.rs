use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::icon_plus;
use crate::components::layout::page_shell;
use crate::components::modal::Modal;
use crate::hooks::use_api;
use crate::models::{AccountType, NewAccount};
use crate::services::accounts;
use crate::util::format_amount;

#[function_component(AccountsPage)]
pub fn accounts_page() -> Html {
    let api = use_api();

    let list = use_state(Vec::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let show_modal = use_state(|| false);

    let form_name = use_state(|| "".to_string());
    let form_kind = use_state(|| "CASH".to_string());
    let form_balance = use_state(|| "0".to_string());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let list = list.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match accounts::list(&api).await {
                        Ok(data) => list.set(data),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
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

    let on_submit = {
        let api = api.clone();
        let list = list.clone();
        let error = error.clone();
        let show_modal = show_modal.clone();
        let form_name = form_name.clone();
        let form_kind = form_kind.clone();
        let form_balance = form_balance.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = form_name.trim().to_string();
            if name_val.is_empty() {
                error.set(Some("Account name is required".to_string()));
                return;
            }
            let balance_val = form_balance.trim().parse::<f64>().unwrap_or(0.0);
            let payload = NewAccount {
                name: name_val,
                kind: AccountType::from_str_or_default(&form_kind),
                balance: balance_val,
            };

            saving.set(true);
            error.set(None);

            let api = api.clone();
            let list = list.clone();
            let error = error.clone();
            let show_modal = show_modal.clone();
            let form_name = form_name.clone();
            let form_balance = form_balance.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match accounts::create(&api, &payload).await {
                    Ok(created) => {
                        let mut next = (*list).clone();
                        next.push(created);
                        list.set(next);
                        form_name.set("".to_string());
                        form_balance.set("0".to_string());
                        show_modal.set(false);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Accounts",
            html! {
                <button onclick={on_open_modal} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Add Account"}
                </button>
            },
            html! {
                <>
                    if let Some(msg) = &*error {
                        <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg text-sm">{ msg.clone() }</div>
                    }

                    { if *loading {
                        html! { <p class="text-muted-foreground">{"Loading..."}</p> }
                    } else if list.is_empty() {
                        html! { <p class="text-muted-foreground">{"No accounts yet."}</p> }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                { for list.iter().map(|account| html! {
                                    <div class="bg-card rounded-[10px] p-6 border border-border">
                                        <div class="flex items-center justify-between mb-2">
                                            <h3 class="text-lg font-semibold text-foreground">{ account.name.clone() }</h3>
                                            <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">
                                                { account.kind.label() }
                                            </span>
                                        </div>
                                        <p class="text-2xl font-bold text-foreground">{ format_amount(account.balance) }</p>
                                    </div>
                                }) }
                            </div>
                        }
                    }}

                    if *show_modal {
                        <Modal title="Add New Account" on_close={on_close_modal.clone()}>
                            <form class="space-y-4" onsubmit={on_submit.clone()}>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Account Name"}</label>
                                    <input
                                        placeholder="e.g., Checking Account"
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        value={(*form_name).clone()}
                                        oninput={{
                                            let form_name = form_name.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_name.set(input.value());
                                            })
                                        }}
                                    />
                                </div>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Account Type"}</label>
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
                                        { for [AccountType::Cash, AccountType::Bank, AccountType::Credit].iter().map(|kind| html! {
                                            <option value={kind.as_str()} selected={*form_kind == kind.as_str()}>{ kind.label() }</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Initial Balance"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                        value={(*form_balance).clone()}
                                        oninput={{
                                            let form_balance = form_balance.clone();
                                            Callback::from(move |e: InputEvent| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                form_balance.set(input.value());
                                            })
                                        }}
                                    />
                                </div>
                                <button
                                    type="submit"
                                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                    disabled={*saving}
                                >
                                    { if *saving { "Creating..." } else { "Create Account" } }
                                </button>
                            </form>
                        </Modal>
                    }
                </>
            }
        ) }
    }
}
