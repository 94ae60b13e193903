use yew::prelude::*;

use crate::chart::{plot, Plot};
use crate::models::ChartPoint;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 360.0;

const INCOME_COLOR: &str = "#22c55e";
const EXPENSE_COLOR: &str = "#ef4444";

#[derive(Properties, PartialEq)]
pub struct CashFlowChartProps {
    pub points: Vec<ChartPoint>,
}

/// Income and expense areas over time.
#[function_component(CashFlowChart)]
pub fn cash_flow_chart(props: &CashFlowChartProps) -> Html {
    let Some(plot) = plot(&props.points, WIDTH, HEIGHT) else {
        return html! {
            <p class="text-sm text-gray-500 py-16 text-center">{"No transactions to chart yet."}</p>
        };
    };

    html! {
        <div class="w-full">
            <div class="flex gap-6 justify-center mb-4 text-sm">
                { legend("Income", INCOME_COLOR) }
                { legend("Expense", EXPENSE_COLOR) }
            </div>
            <svg viewBox={format!("0 0 {} {}", plot.width, plot.height)} class="w-full h-auto" preserveAspectRatio="none">
                { grid(&plot) }
                <path d={plot.income.area.clone()} fill={INCOME_COLOR} fill-opacity="0.1" stroke="none" />
                <path d={plot.expense.area.clone()} fill={EXPENSE_COLOR} fill-opacity="0.1" stroke="none" />
                <path d={plot.income.line.clone()} fill="none" stroke={INCOME_COLOR} stroke-width="3" />
                <path d={plot.expense.line.clone()} fill="none" stroke={EXPENSE_COLOR} stroke-width="3" />
                { for plot.x_ticks.iter().map(|tick| html! {
                    <text x={format!("{:.1}", tick.pos)} y={format!("{:.1}", plot.height - 8.0)} text-anchor="middle" font-size="12" fill="#9ca3af">
                        { &tick.label }
                    </text>
                }) }
            </svg>
        </div>
    }
}

fn grid(plot: &Plot) -> Html {
    html! {
        <g>
            { for plot.y_ticks.iter().map(|tick| html! {
                <g>
                    <line x1={format!("{:.1}", plot.left())} x2={format!("{:.1}", plot.right())}
                          y1={format!("{:.1}", tick.pos)} y2={format!("{:.1}", tick.pos)}
                          stroke="#2a2a2a" stroke-dasharray="3 3" />
                    <text x={format!("{:.1}", plot.left() - 8.0)} y={format!("{:.1}", tick.pos + 4.0)} text-anchor="end" font-size="12" fill="#9ca3af">
                        { &tick.label }
                    </text>
                </g>
            }) }
            <line x1={format!("{:.1}", plot.left())} x2={format!("{:.1}", plot.right())}
                  y1={format!("{:.1}", plot.baseline())} y2={format!("{:.1}", plot.baseline())}
                  stroke="#4b5563" />
        </g>
    }
}

fn legend(label: &'static str, color: &'static str) -> Html {
    html! {
        <span class="flex items-center gap-2 text-gray-300">
            <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {}", color)}></span>
            { label }
        </span>
    }
}
