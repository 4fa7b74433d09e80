use chrono::{Datelike, Local};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons::{icon_arrow_up_right, icon_credit_card, icon_target, icon_wallet};
use crate::components::layout::page_shell;
use crate::error::ApiError;
use crate::hooks::use_api;
use crate::models::{CashFlow, DashboardData, MonthlySummary, TrendPeriod, TrendPoint};
use crate::services::transactions;
use crate::util::format_amount;

/// One line per failed section, successful sections stay silent.
fn failure_lines(sections: &[(&str, Option<ApiError>)]) -> Vec<String> {
    sections
        .iter()
        .filter_map(|(label, err)| err.as_ref().map(|e| format!("{}: {}", label, e)))
        .collect()
}

fn bar_percent(value: f64, max: f64) -> i64 {
    if max > 0.0 {
        ((value / max) * 100.0).round().clamp(0.0, 100.0) as i64
    } else {
        0
    }
}

fn series_max(points: &[TrendPoint]) -> f64 {
    points
        .iter()
        .map(|p| p.income.max(p.expense))
        .fold(0.0, f64::max)
}

fn stat_card(title: &'static str, value: String, icon: Html) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ title }</p>
                <h3 class="text-2xl font-bold text-foreground tracking-tight">{ value }</h3>
            </div>
            <div class="p-3 bg-secondary rounded-[10px]">
                { icon }
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();

    let overview = use_state(|| None::<DashboardData>);
    let summary = use_state(|| None::<MonthlySummary>);
    let trend_points = use_state(|| None::<Vec<TrendPoint>>);
    let cash = use_state(|| None::<CashFlow>);
    let errors = use_state(Vec::<String>::new);
    let loading = use_state(|| true);
    let trend_period = use_state(|| TrendPeriod::Monthly);

    {
        let api = api.clone();
        let overview = overview.clone();
        let summary = summary.clone();
        let trend_points = trend_points.clone();
        let cash = cash.clone();
        let errors = errors.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |period: &TrendPeriod| {
                let period = *period;
                spawn_local(async move {
                    let now = Local::now();
                    let month = now.month();
                    let year = now.year();

                    // Four independent aggregates; one failing must not take
                    // down the others.
                    let (overview_res, summary_res, trends_res, cash_res) = futures::join!(
                        transactions::dashboard(&api, month, year),
                        transactions::monthly_summary(&api, month, year),
                        transactions::trends(&api, period, year, Some(month)),
                        transactions::cash_flow(&api, month, year),
                    );

                    let sections = [
                        ("Overview", overview_res.as_ref().err().cloned()),
                        ("Monthly summary", summary_res.as_ref().err().cloned()),
                        ("Spending trends", trends_res.as_ref().err().cloned()),
                        ("Cash flow", cash_res.as_ref().err().cloned()),
                    ];
                    errors.set(failure_lines(&sections));

                    overview.set(overview_res.ok());
                    summary.set(summary_res.ok());
                    trend_points.set(trends_res.ok());
                    cash.set(cash_res.ok());
                    loading.set(false);
                });
                || ()
            },
            *trend_period,
        );
    }

    let period_button = |target: TrendPeriod| {
        let active = *trend_period == target;
        let trend_period = trend_period.clone();
        let class_name = if active {
            "px-3 py-1 rounded text-xs font-semibold bg-primary text-primary-foreground"
        } else {
            "px-3 py-1 rounded text-xs font-semibold bg-secondary text-secondary-foreground hover:opacity-90"
        };
        html! {
            <button class={class_name} onclick={Callback::from(move |_| trend_period.set(target))}>
                { target.label() }
            </button>
        }
    };

    if *loading {
        return html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-primary"></div>
            </div>
        };
    }

    let trend_rows = trend_points.as_ref().cloned().unwrap_or_default();
    let trend_scale = series_max(&trend_rows);

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    { for errors.iter().map(|line| html! {
                        <div class="bg-red-50 border border-red-200 text-red-600 px-4 py-3 rounded-lg text-sm">{ line.clone() }</div>
                    }) }

                    if let Some(data) = &*overview {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                            { stat_card("Total Balance", format_amount(data.balance()), icon_wallet()) }
                            { stat_card("Income", format_amount(data.total_income), icon_arrow_up_right()) }
                            { stat_card("Expenses", format_amount(data.total_expense), icon_credit_card()) }
                            { stat_card("Savings", format_amount(data.net_savings), icon_target()) }
                        </div>
                    }

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="flex items-center justify-between mb-4">
                            <div>
                                <h3 class="font-bold text-foreground text-lg">{"Spending Trends"}</h3>
                                <p class="text-xs text-muted-foreground">{"Income and expenses across periods"}</p>
                            </div>
                            <div class="flex gap-2">
                                { period_button(TrendPeriod::Daily) }
                                { period_button(TrendPeriod::Weekly) }
                                { period_button(TrendPeriod::Monthly) }
                            </div>
                        </div>
                        { if trend_rows.is_empty() {
                            html! { <p class="text-sm text-muted-foreground text-center py-8">{"No trend data available"}</p> }
                        } else {
                            html! {
                                <div class="space-y-3">
                                    { for trend_rows.iter().map(|point| html! {
                                        <div class="grid grid-cols-[8rem_1fr] gap-3 items-center text-sm">
                                            <span class="text-muted-foreground truncate">{ point.period.clone() }</span>
                                            <div class="space-y-1">
                                                <div class="flex items-center gap-2">
                                                    <div class="h-2 flex-1 bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-green-500" style={format!("width: {}%", bar_percent(point.income, trend_scale))}></div>
                                                    </div>
                                                    <span class="w-24 text-right text-xs text-green-600">{ format_amount(point.income) }</span>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    <div class="h-2 flex-1 bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-red-500" style={format!("width: {}%", bar_percent(point.expense, trend_scale))}></div>
                                                    </div>
                                                    <span class="w-24 text-right text-xs text-red-500">{ format_amount(point.expense) }</span>
                                                </div>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            }
                        }}
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        if let Some(data) = &*summary {
                            <div class="bg-card rounded-[10px] p-6 border border-border">
                                <h3 class="font-bold text-foreground text-lg mb-1">{"Income vs Expenses"}</h3>
                                <p class="text-xs text-muted-foreground mb-4">{"Current month comparison"}</p>
                                {
                                    {
                                        let scale = data.income.max(data.expense);
                                        html! {
                                            <div class="space-y-4">
                                                <div>
                                                    <div class="flex justify-between text-sm mb-1">
                                                        <span class="text-muted-foreground">{"Income"}</span>
                                                        <span class="text-green-600 font-semibold">{ format_amount(data.income) }</span>
                                                    </div>
                                                    <div class="h-3 w-full bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-green-500" style={format!("width: {}%", bar_percent(data.income, scale))}></div>
                                                    </div>
                                                </div>
                                                <div>
                                                    <div class="flex justify-between text-sm mb-1">
                                                        <span class="text-muted-foreground">{"Expenses"}</span>
                                                        <span class="text-red-500 font-semibold">{ format_amount(data.expense) }</span>
                                                    </div>
                                                    <div class="h-3 w-full bg-secondary rounded-full overflow-hidden">
                                                        <div class="h-full bg-red-500" style={format!("width: {}%", bar_percent(data.expense, scale))}></div>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    }
                                }
                            </div>
                        }

                        if let Some(data) = &*overview {
                            if !data.category_breakdown.is_empty() {
                                <div class="bg-card rounded-[10px] p-6 border border-border">
                                    <h3 class="font-bold text-foreground text-lg mb-1">{"Spending by Category"}</h3>
                                    <p class="text-xs text-muted-foreground mb-4">{"Current month breakdown"}</p>
                                    {
                                        {
                                            let scale = data.category_breakdown.iter().map(|s| s.value).fold(0.0, f64::max);
                                            html! {
                                                <div class="space-y-3">
                                                    { for data.category_breakdown.iter().map(|slice| html! {
                                                        <div class="flex flex-col gap-1 text-sm">
                                                            <div class="flex items-center justify-between">
                                                                <span class="text-foreground">{ slice.name.clone() }</span>
                                                                <span class="text-muted-foreground">{ format_amount(slice.value) }</span>
                                                            </div>
                                                            <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                                                                <div class="h-full bg-primary" style={format!("width: {}%", bar_percent(slice.value, scale))}></div>
                                                            </div>
                                                        </div>
                                                    }) }
                                                </div>
                                            }
                                        }
                                    }
                                </div>
                            }
                        }
                    </div>

                    if let Some(data) = &*cash {
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-1">{"Cash Flow"}</h3>
                            <p class="text-xs text-muted-foreground mb-4">{"Daily inflow, outflow and balance"}</p>
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-4">
                                <div>
                                    <p class="text-xs text-muted-foreground">{"Opening Balance"}</p>
                                    <p class="text-lg font-semibold text-foreground">{ format_amount(data.opening_balance) }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-muted-foreground">{"Total Inflow"}</p>
                                    <p class="text-lg font-semibold text-green-600">{ format_amount(data.total_inflow) }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-muted-foreground">{"Total Outflow"}</p>
                                    <p class="text-lg font-semibold text-red-500">{ format_amount(data.total_outflow) }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-muted-foreground">{"Closing Balance"}</p>
                                    <p class="text-lg font-semibold text-foreground">{ format_amount(data.closing_balance) }</p>
                                </div>
                            </div>
                            { if data.daily_flow.is_empty() {
                                html! { <p class="text-sm text-muted-foreground text-center py-4">{"No cash flow data available"}</p> }
                            } else {
                                html! {
                                    <div class="overflow-x-auto">
                                        <table class="w-full text-left border-collapse">
                                            <thead>
                                                <tr class="text-muted-foreground text-[10px] uppercase tracking-widest border-b border-border">
                                                    <th class="px-4 py-2 font-bold">{"Date"}</th>
                                                    <th class="px-4 py-2 font-bold text-right">{"Inflow"}</th>
                                                    <th class="px-4 py-2 font-bold text-right">{"Outflow"}</th>
                                                    <th class="px-4 py-2 font-bold text-right">{"Balance"}</th>
                                                </tr>
                                            </thead>
                                            <tbody class="divide-y divide-border">
                                                { for data.daily_flow.iter().map(|day| html! {
                                                    <tr class="text-sm">
                                                        <td class="px-4 py-2 text-muted-foreground">{ day.date.clone() }</td>
                                                        <td class="px-4 py-2 text-right text-green-600">{ format_amount(day.inflow) }</td>
                                                        <td class="px-4 py-2 text-right text-red-500">{ format_amount(day.outflow) }</td>
                                                        <td class="px-4 py-2 text-right text-foreground">{ format_amount(day.balance) }</td>
                                                    </tr>
                                                }) }
                                            </tbody>
                                        </table>
                                    </div>
                                }
                            }}
                        </div>
                    }

                    if let Some(data) = &*overview {
                        if !data.recent_transactions.is_empty() {
                            <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                                <div class="p-6 flex justify-between items-center border-b border-border">
                                    <h3 class="font-bold text-foreground text-lg">{"Recent Transactions"}</h3>
                                </div>
                                <div class="overflow-x-auto">
                                    <table class="w-full text-left border-collapse">
                                        <thead>
                                            <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                                <th class="px-6 py-4 font-bold">{"Date"}</th>
                                                <th class="px-6 py-4 font-bold">{"Description"}</th>
                                                <th class="px-6 py-4 font-bold">{"Category"}</th>
                                                <th class="px-6 py-4 font-bold text-right">{"Amount"}</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-border">
                                            { for data.recent_transactions.iter().map(|tx| {
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
                                                        <td class={if income { "px-6 py-4 text-right font-semibold text-green-600" } else { "px-6 py-4 text-right font-semibold text-foreground" }}>
                                                            { amount_label }
                                                        </td>
                                                    </tr>
                                                }
                                            }) }
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }
                    }
                </>
            }
        ) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_failure_out_of_four_yields_exactly_one_line() {
        let failed = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        let sections = [
            ("Overview", None),
            ("Monthly summary", None),
            ("Spending trends", Some(failed)),
            ("Cash flow", None),
        ];
        let lines = failure_lines(&sections);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Spending trends:"));
    }

    #[test]
    fn no_failures_yield_no_lines() {
        let sections = [("Overview", None), ("Cash flow", None)];
        assert!(failure_lines(&sections).is_empty());
    }

    #[test]
    fn bars_scale_against_the_series_maximum() {
        assert_eq!(bar_percent(50.0, 200.0), 25);
        assert_eq!(bar_percent(250.0, 200.0), 100);
        assert_eq!(bar_percent(10.0, 0.0), 0);
    }

    #[test]
    fn series_max_spans_income_and_expense() {
        let points = vec![
            TrendPoint {
                period: "2025-01".to_string(),
                income: 100.0,
                expense: 40.0,
            },
            TrendPoint {
                period: "2025-02".to_string(),
                income: 20.0,
                expense: 250.0,
            },
        ];
        assert_eq!(series_max(&points), 250.0);
        assert_eq!(series_max(&[]), 0.0);
    }
}
