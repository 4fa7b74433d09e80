use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4" onclick={on_backdrop}>
            <div class="bg-card border border-border rounded-2xl shadow-lg w-full max-w-md p-6" onclick={stop_bubble}>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-bold text-foreground">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="text-muted-foreground hover:text-foreground text-xl leading-none"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                    >
                        {"\u{00d7}"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
