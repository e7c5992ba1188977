use crate::shared::charts::{BarChart, LineChart};
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, PageHeader, ProgressRow, StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d505_fund_supervision::budget_execution::*;
use contracts::navigation::{FundSupervisionView, SectionView};
use contracts::shared::format::{format_percent, format_wan, format_yuan};
use leptos::prelude::*;
use thaw::*;

fn health_variant(health: ExecutionHealth) -> &'static str {
    match health {
        ExecutionHealth::Good => "success",
        ExecutionHealth::Normal => "primary",
        ExecutionHealth::Lagging => "warning",
    }
}

fn rounded_percent(value: f64) -> String {
    format_percent((value * 100.0).round() / 100.0)
}

#[component]
pub fn BudgetExecution() -> impl IntoView {
    let lines = StoredValue::new(budget_lines());
    let totals = lines.with_value(|l| BudgetTotals::from_lines(l));
    let selected_tab = RwSignal::new(BudgetTab::default().id().to_string());
    let active_tab = Memo::new(move |_| BudgetTab::parse(&selected_tab.get()).unwrap_or_default());

    let overview = move || {
        view! {
            <div class="card-grid card-grid--2">
                <CardAnimated title="预算执行趋势">
                    <LineChart data=execution_trend(&totals) y_max=100.0 area=true suffix="%" />
                </CardAnimated>
                <CardAnimated title="预算与实际支出对比" delay_ms=80>
                    <BarChart data=lines.with_value(|l| budget_comparison(l)) />
                </CardAnimated>
            </div>
        }
    };

    let details = move || {
        let slowest = lines.with_value(|l| slowest_line(l).copied());
        view! {
            {slowest.map(|line| view! {
                <div class="alert-banner alert-banner--warning">
                    {icon("alert-triangle")}
                    <span>
                        {format!(
                            "{}执行率仅为{}，为各科目最低，请关注支出进度。",
                            line.category,
                            rounded_percent(line.execution_rate())
                        )}
                    </span>
                </div>
            })}
            <Card>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=140.0>"预算科目"</TableHeaderCell>
                            <TableHeaderCell>"预算金额"</TableHeaderCell>
                            <TableHeaderCell>"实际支出"</TableHeaderCell>
                            <TableHeaderCell>"剩余金额"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"执行率"</TableHeaderCell>
                            <TableHeaderCell>"执行状态"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {lines.with_value(|l| l.to_vec()).into_iter().map(|line| {
                            let health = line_health(&line);
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{line.category}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_yuan(line.budget)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_yuan(line.actual)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_yuan(line.budget - line.actual)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <ProgressRow label="" percent=line.execution_rate() caption=rounded_percent(line.execution_rate()) />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=health_variant(health)>{health.label()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                        <TableRow class="table-totals-row">
                            <TableCell><TableCellLayout>"合计"</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_yuan(totals.budget)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_yuan(totals.used)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_yuan(totals.remaining())}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{rounded_percent(totals.usage_rate())}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
                        </TableRow>
                    </TableBody>
                </Table>
            </Card>
        }
    };

    let analysis = move || {
        view! {
            <div class="card-grid card-grid--2">
                <CardAnimated title="计划与实际执行率偏差">
                    <BarChart data=lines.with_value(|l| deviation_chart(l)) y_max=100.0 suffix="%" />
                </CardAnimated>
                <CardAnimated title="预算执行效率" delay_ms=80>
                    {efficiency_scores()
                        .into_iter()
                        .map(|(m, score)| view! {
                            <ProgressRow label=m.label percent=score caption=m.value />
                        })
                        .collect_view()}
                </CardAnimated>
            </div>
            <CardAnimated title="分析结论" delay_ms=160>
                <p>{ANALYSIS_CONCLUSION}</p>
            </CardAnimated>
        }
    };

    view! {
        <PageFrame page=FundSupervisionView::BudgetExecution category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader title=FundSupervisionView::BudgetExecution.title() />
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="年度预算总额" value=format_wan(totals.budget) icon_name="dollar-sign" />
                    <StatCard label="已执行金额" value=format_wan(totals.used) tone=StatTone::Success icon_name="check-circle" />
                    <StatCard label="剩余预算" value=format_wan(totals.remaining()) icon_name="clock" />
                    <StatCard label="预算执行率" value=rounded_percent(totals.usage_rate()) tone=StatTone::Warning icon_name="bar-chart" />
                </div>

                <TabList selected_value=selected_tab>
                    {BudgetTab::ALL
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.id()>{tab.label()}</Tab> })
                        .collect_view()}
                </TabList>

                {move || match active_tab.get() {
                    BudgetTab::Overview => overview().into_any(),
                    BudgetTab::Details => details().into_any(),
                    BudgetTab::Analysis => analysis().into_any(),
                }}
            </div>
        </PageFrame>
    }
}
