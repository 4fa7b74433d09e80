use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_tag() -> Html {
    icon_base("M3 3h8l10 10-8 8L3 11zM7.5 7.5h.01")
}
pub fn icon_arrows() -> Html {
    icon_base("M8 3L4 7l4 4M4 7h16M16 21l4-4-4-4M20 17H4")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 5h18v16H3zM3 9h18M8 3v4M16 3v4")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_chevron_left() -> Html {
    icon_base("M15 18l-6-6 6-6")
}
pub fn icon_chevron_right() -> Html {
    icon_base("M9 18l6-6-6-6")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6M10 11v6M14 11v6")
}
pub fn icon_edit() -> Html {
    icon_base("M11 4H4v16h16v-7M18.5 2.5a2.1 2.1 0 013 3L12 15l-4 1 1-4z")
}
pub fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
