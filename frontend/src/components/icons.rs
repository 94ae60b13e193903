use yew::prelude::*;

fn icon_base(path: &'static str, size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_dashboard() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v5h-8zM13 10h8v11h-8zM3 13h8v8H3z", 20)
}
pub fn icon_hand_coins() -> Html {
    icon_base("M11 15h2a2 2 0 100-4h-3c-.6 0-1.1.2-1.4.6L3 17M7 21l1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 00-2.8-2.9l-4.2 3.9", 20)
}
pub fn icon_receipt() -> Html {
    icon_base("M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1zM16 8H8M16 12H8M13 16H8", 20)
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9", 20)
}
pub fn icon_user() -> Html {
    icon_base("M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 11a4 4 0 100-8 4 4 0 000 8z", 18)
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2M17 12h.01", 20)
}
pub fn icon_arrow_up_circle() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM16 12l-4-4-4 4M12 16V8", 20)
}
pub fn icon_arrow_down_circle() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM8 12l4 4 4-4M12 8v8", 20)
}
pub fn icon_activity() -> Html {
    icon_base("M22 12h-4l-3 9L9 3l-3 9H2", 24)
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M19 6v14a2 2 0 01-2 2H7a2 2 0 01-2-2V6M8 6V4a2 2 0 012-2h4a2 2 0 012 2v2", 18)
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3", 18)
}
pub fn icon_plus_circle() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM12 8v8M8 12h8", 20)
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12", 16)
}
pub fn icon_refresh() -> Html {
    icon_base("M23 4v6h-6M1 20v-6h6M3.5 9a9 9 0 0114.9-3.4L23 10M1 14l4.6 4.4A9 9 0 0020.5 15", 16)
}
