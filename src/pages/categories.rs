use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{icon_plus, icon_trash};
use crate::components::layout::page_shell;
use crate::components::modal::Modal;
use crate::hooks::use_api;
use crate::models::{Category, EntryKind, NewCategory};
use crate::services::categories;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let api = use_api();

    let list = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let show_modal = use_state(|| false);

    let form_name = use_state(|| "".to_string());
    let form_kind = use_state(|| "EXPENSE".to_string());
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let list = list.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match categories::list(&api).await {
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
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = form_name.trim().to_string();
            if name_val.is_empty() {
                error.set(Some("Category name is required".to_string()));
                return;
            }
            let payload = NewCategory {
                name: name_val,
                kind: EntryKind::from_str_or_default(&form_kind),
            };

            saving.set(true);
            error.set(None);

            let api = api.clone();
            let list = list.clone();
            let error = error.clone();
            let show_modal = show_modal.clone();
            let form_name = form_name.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match categories::create(&api, &payload).await {
                    Ok(created) => {
                        let mut next = (*list).clone();
                        next.push(created);
                        list.set(next);
                        form_name.set("".to_string());
                        show_modal.set(false);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let list = list.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            if !confirm("Delete this category?") {
                return;
            }
            let api = api.clone();
            let list = list.clone();
            let error = error.clone();
            spawn_local(async move {
                match categories::delete(&api, id).await {
                    Ok(()) => {
                        let next = list.iter().filter(|c| c.id != id).cloned().collect();
                        list.set(next);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        { page_shell(
            "Categories",
            html! {
                <button onclick={on_open_modal} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    {"Add Category"}
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
                        html! { <p class="text-muted-foreground">{"No categories yet."}</p> }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                { for list.iter().map(|category| {
                                    let id = category.id;
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <div class="bg-card rounded-[10px] p-6 border border-border">
                                            <div class="flex items-center justify-between">
                                                <h3 class="text-lg font-semibold text-foreground">{ category.name.clone() }</h3>
                                                <button
                                                    class="text-muted-foreground hover:text-red-600 transition-colors"
                                                    aria-label="Delete category"
                                                    onclick={Callback::from(move |_| on_delete.emit(id))}
                                                >
                                                    { icon_trash() }
                                                </button>
                                            </div>
                                            <p class="text-sm text-muted-foreground mt-2">
                                                {"Type: "}{ category.kind.label() }
                                            </p>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }}

                    if *show_modal {
                        <Modal title="Add New Category" on_close={on_close_modal.clone()}>
                            <form class="space-y-4" onsubmit={on_submit.clone()}>
                                <div class="space-y-1">
                                    <label class="text-sm font-medium text-foreground">{"Category Name"}</label>
                                    <input
                                        placeholder="e.g., Groceries"
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
                                <button
                                    type="submit"
                                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                    disabled={*saving}
                                >
                                    { if *saving { "Creating..." } else { "Create Category" } }
                                </button>
                            </form>
                        </Modal>
                    }
                </>
            }
        ) }
    }
}
