use yew::prelude::*;

use super::icons::{icon_arrow_down_circle, icon_arrow_up_circle, icon_wallet};
use crate::format::format_money;

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Balance,
    Income,
    Expense,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub icon: StatIcon,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (card_class, title_class, amount_class) = if props.highlight {
        (
            "bg-gradient-to-br from-[#875cf5] to-[#6b3fe0] p-6 rounded-2xl text-white shadow-xl",
            "text-sm font-medium opacity-80",
            "text-3xl font-bold",
        )
    } else {
        (
            "bg-[#121212] p-6 rounded-2xl border border-gray-800 shadow-sm",
            "text-sm font-medium text-gray-400",
            "text-3xl font-bold text-white",
        )
    };

    let icon = match props.icon {
        StatIcon::Balance => html! { <span>{ icon_wallet() }</span> },
        StatIcon::Income => html! { <span class="text-green-500">{ icon_arrow_up_circle() }</span> },
        StatIcon::Expense => html! { <span class="text-red-500">{ icon_arrow_down_circle() }</span> },
    };

    html! {
        <div class={card_class}>
            <div class="flex justify-between items-center mb-2">
                <span class={title_class}>{ props.title }</span>
                { icon }
            </div>
            <h2 class={amount_class}>{ format_money(props.amount) }</h2>
        </div>
    }
}
