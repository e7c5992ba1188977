use crate::shared::charts::RadarChart;
use crate::shared::components::ui::{severity_variant, Badge};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::dashboards::d502_contract_signing::risk_assessment::*;
use contracts::navigation::{ContractSigningView, SectionView};
use contracts::shared::chart::ChartData;
use contracts::shared::search::filter_by_query;
use leptos::prelude::*;
use thaw::*;

fn radar_data() -> ChartData {
    let labels: Vec<&'static str> = RiskDimension::ALL.iter().map(|d| d.label()).collect();
    ChartData::new(&labels).with_series("风险评分", "#ef4444", &radar_values())
}

#[component]
pub fn RiskAssessment() -> impl IntoView {
    let notice = use_notice();
    let all = StoredValue::new(risk_contracts());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(1u32);
    let dimension = RwSignal::new(RiskDimension::Legal.code().to_string());

    let visible = Memo::new(move |_| all.with_value(|c| filter_by_query(c, &query.get())));
    let active_dimension =
        Memo::new(move |_| RiskDimension::from_code(&dimension.get()).unwrap_or(RiskDimension::Legal));

    view! {
        <PageFrame page=ContractSigningView::RiskAssessment category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title=ContractSigningView::RiskAssessment.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索合同..." />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| notice.run_action("导出评估报告", "合同风险评估")
                    >
                        "导出报告"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="split-layout">
                    <CardAnimated title="待评估合同" style="flex: 1;">
                        <div class="select-list">
                            {move || visible.get().into_iter().map(|c| {
                                let id = c.id;
                                let level = c.level();
                                view! {
                                    <div
                                        class="select-list__item"
                                        class:select-list__item--active=move || selected.get() == id
                                        on:click=move |_| selected.set(id)
                                    >
                                        <div class="select-list__head">
                                            <span class="select-list__title">{c.name}</span>
                                            <Badge variant=severity_variant(level)>
                                                {format!("{} ({})", level.risk_label(), c.risk_score)}
                                            </Badge>
                                        </div>
                                        <div class="muted">{format!("{} · {} · {}", c.kind, c.party, c.submit_time)}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </CardAnimated>

                    <CardAnimated title="风险评估结果" delay_ms=80 style="flex: 2;">
                        <div class="card-grid card-grid--2">
                            <RadarChart data=radar_data() max=RISK_SCALE_MAX />
                            <div class="score-panel">
                                <div class="score-panel__value">{overall_score()}</div>
                                <div class="score-panel__caption">"综合风险评分"</div>
                                <Badge variant=severity_variant(risk_level(overall_score()))>
                                    {risk_level(overall_score()).risk_label()}
                                </Badge>
                            </div>
                        </div>

                        <TabList selected_value=dimension>
                            {RiskDimension::ALL
                                .iter()
                                .map(|d| view! { <Tab value=d.code()>{d.label()}</Tab> })
                                .collect_view()}
                        </TabList>

                        {move || {
                            let d = active_dimension.get();
                            let suggestions = d.suggestions();
                            view! {
                                <div class="dimension-panel">
                                    <div class="dimension-panel__head">
                                        <span>{format!("{}评分：{}", d.label(), d.score())}</span>
                                        <Badge variant=severity_variant(d.severity())>{d.severity().risk_label()}</Badge>
                                    </div>
                                    {d.findings().into_iter().map(|f| view! {
                                        <div class="finding">
                                            <div class="finding__head">
                                                <span class="finding__title">{f.title}</span>
                                                <Badge variant=severity_variant(f.severity)>{f.severity.risk_label()}</Badge>
                                            </div>
                                            <div class="muted">{f.detail}</div>
                                        </div>
                                    }).collect_view()}
                                    {(!suggestions.is_empty()).then(|| view! {
                                        <h4 class="section-title">"风险防控建议"</h4>
                                        <ul class="checklist">
                                            {suggestions.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                                        </ul>
                                    })}
                                </div>
                            }
                        }}
                    </CardAnimated>
                </div>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="合同条款完善建议" delay_ms=160>
                        <ul class="checklist">
                            {clause_measures().into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                        </ul>
                    </CardAnimated>
                    <CardAnimated title="履约监控措施" delay_ms=240>
                        <ul class="checklist">
                            {performance_measures().into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                        </ul>
                    </CardAnimated>
                </div>

                <CardAnimated title="评估历史记录" delay_ms=320>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=220.0>"合同名称"</TableHeaderCell>
                                <TableHeaderCell>"评估日期"</TableHeaderCell>
                                <TableHeaderCell>"评估人"</TableHeaderCell>
                                <TableHeaderCell>"风险评分"</TableHeaderCell>
                                <TableHeaderCell>"风险等级"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {assessment_history().into_iter().map(|h| {
                                let level = risk_level(h.score);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{h.contract}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{h.date}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{h.assessor}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{h.score}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=severity_variant(level)>{level.risk_label()}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
