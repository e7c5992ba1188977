use crate::shared::charts::{DoughnutChart, LineChart};
use crate::shared::components::ui::{severity_variant, Badge};
use crate::shared::components::{
    use_table_pager, CardAnimated, LogList, PageHeader, ProgressRow, StatCard, StatTone,
    TablePagination, Timeline,
};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d502_contract_signing::signing_process::*;
use contracts::navigation::{ContractSigningView, SectionView};
use contracts::shared::format::format_percent;
use contracts::shared::search::filter_by_query;
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: SigningStatus) -> &'static str {
    match status {
        SigningStatus::Reviewing => "primary",
        SigningStatus::Signing => "warning",
        SigningStatus::Completed => "success",
        SigningStatus::Abnormal => "error",
    }
}

#[component]
pub fn SigningProcess() -> impl IntoView {
    let notice = use_notice();
    let all = StoredValue::new(signing_contracts());
    let query = RwSignal::new(String::new());
    let rows = Memo::new(move |_| all.with_value(|c| filter_by_query(c, &query.get())));

    let pager = use_table_pager();
    let total = Signal::derive(move || rows.with(|r| r.len()));
    Effect::new(move |_| {
        rows.track();
        pager.reset();
    });

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<SigningContract>);

    let stats = signing_stats();
    let methods = signing_methods();

    view! {
        <PageFrame page=ContractSigningView::SigningProcess category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=ContractSigningView::SigningProcess.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索合同..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="今日签订" value=stats.today.to_string() icon_name="file-contract" />
                    <StatCard label="本周签订" value=stats.week.to_string() icon_name="file-contract" />
                    <StatCard label="本月签订" value=stats.month.to_string() tone=StatTone::Success icon_name="check-circle" />
                    <StatCard label="异常率" value=format_percent(stats.abnormal_rate) tone=StatTone::Warning icon_name="alert-triangle" />
                </div>

                <CardAnimated title="合同签订进度">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=220.0>"合同名称"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"签约双方"</TableHeaderCell>
                                <TableHeaderCell>"当前环节"</TableHeaderCell>
                                <TableHeaderCell>"状态"</TableHeaderCell>
                                <TableHeaderCell>"更新时间"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let page = rows.with(|r| pager.paginator(r.len()).slice(r).to_vec());
                                page.into_iter().map(|c| {
                                    let for_dialog = c.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{c.name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.parties}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{c.current_step}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=status_variant(c.status)>{c.status.label()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{c.time}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            detail.set(Some(for_dialog.clone()));
                                                            detail_open.set(true);
                                                        }
                                                    >
                                                        "查看详情"
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <TablePagination pager=pager total=total />
                </CardAnimated>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="异常合同记录" delay_ms=80>
                        {abnormal_records().into_iter().map(|r| view! {
                            <div class="finding">
                                <div class="finding__head">
                                    <span class="finding__title">{r.contract}</span>
                                    <Badge variant=severity_variant(r.severity)>{r.severity.risk_label()}</Badge>
                                </div>
                                <div class="muted">{format!("{} · {}", r.date, r.description)}</div>
                            </div>
                        }).collect_view()}
                    </CardAnimated>
                    <CardAnimated title="合同签订趋势" delay_ms=160>
                        <LineChart data=signing_trend() />
                    </CardAnimated>
                </div>

                <div class="card-grid card-grid--3">
                    <CardAnimated title="合同类型分布" delay_ms=240>
                        {type_distribution()
                            .into_iter()
                            .map(|s| view! { <ProgressRow label=s.label percent=s.percent /> })
                            .collect_view()}
                    </CardAnimated>
                    <CardAnimated title="签订效率分析" delay_ms=320>
                        {efficiency().into_iter().map(|m| view! {
                            <div class="metric-row">
                                <span class="metric-row__label">{m.label}</span>
                                <span class="metric-row__value">{m.value}</span>
                            </div>
                        }).collect_view()}
                    </CardAnimated>
                    <CardAnimated title="签署方式分布" delay_ms=400>
                        <DoughnutChart
                            labels=methods.iter().map(|s| s.label).collect()
                            values=methods.iter().map(|s| s.percent).collect()
                        />
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || detail.with(|d| d.as_ref().map(|c| c.name).unwrap_or_default())}
                        </DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|c| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"签约双方"</span>{c.parties}</div>
                                    <div><span class="detail-grid__label">"当前环节"</span>{c.current_step}</div>
                                    <div>
                                        <span class="detail-grid__label">"状态"</span>
                                        <Badge variant=status_variant(c.status)>{c.status.label()}</Badge>
                                    </div>
                                    <div><span class="detail-grid__label">"更新时间"</span>{c.time}</div>
                                </div>
                                <h4 class="section-title">"签订流程"</h4>
                                <Timeline steps=c.timeline() />
                                {c.abnormal_reason.map(|reason| view! {
                                    <div class="alert-banner alert-banner--error">
                                        {icon("alert-triangle")}
                                        <div>
                                            <div class="alert-banner__title">"异常原因"</div>
                                            <div>{reason}</div>
                                        </div>
                                    </div>
                                })}
                                <h4 class="section-title">"操作记录"</h4>
                                <LogList entries=operation_log() />
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().and_then(|c| c.status.action().map(|action| view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        notice.run_action(action, c.name);
                                        detail_open.set(false);
                                    }
                                >
                                    {action}
                                </Button>
                            }))}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
