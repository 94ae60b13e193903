use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api_client;
use crate::components::icons::icon_activity;
use crate::components::{CashFlowChart, StatCard, StatIcon};
use crate::models::DashboardStats;
use crate::toast::use_notifier;

const STATS_PATH: &str = "/stats/dashboard";

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client = use_api_client();
    let notifier = use_notifier();
    let stats = use_state(|| None::<DashboardStats>);
    let loading = use_state(|| true);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match client.get::<DashboardStats>(STATS_PATH).await {
                        Ok(data) => {
                            stats.set(Some(data));
                            loading.set(false);
                        }
                        Err(e) if e.is_aborted() => {}
                        Err(e) => {
                            log::warn!("Loading dashboard failed: {}", e);
                            notifier.error(e.user_message("Failed to load dashboard data"));
                            loading.set(false);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    if *loading {
        return html! {
            <div class="flex items-center justify-center h-64 text-gray-400 animate-pulse">
                {"Loading dashboard..."}
            </div>
        };
    }

    let data = (*stats).clone().unwrap_or_default();
    let summary = &data.summary;

    html! {
        <div class="max-w-6xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold text-white">{"Financial Overview"}</h1>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Net Balance" amount={summary.balance} icon={StatIcon::Balance} highlight={true} />
                <StatCard title="Total Income" amount={summary.total_income} icon={StatIcon::Income} />
                <StatCard title="Total Expenses" amount={summary.total_expense} icon={StatIcon::Expense} />
            </div>

            <div class="bg-[#121212] p-6 rounded-2xl border border-gray-800">
                <div class="flex items-center gap-2 mb-6">
                    <span class="text-[#875cf5]">{ icon_activity() }</span>
                    <h3 class="text-lg font-bold text-white">{"Cash Flow Trend"}</h3>
                </div>
                <CashFlowChart points={data.chart_data.clone()} />
            </div>
        </div>
    }
}
