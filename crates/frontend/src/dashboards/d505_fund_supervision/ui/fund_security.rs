use crate::shared::charts::LineChart;
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, DateInput, PageHeader, StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::dashboards::d505_fund_supervision::fund_security::*;
use contracts::navigation::{FundSupervisionView, SectionView};
use leptos::prelude::*;
use thaw::*;

fn level_variant(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::High => "error",
        AlertLevel::Medium => "warning",
    }
}

#[component]
pub fn FundSecurity() -> impl IntoView {
    let notice = use_notice();
    let metrics = security_metrics();

    let period = RwSignal::new(MonitoringPeriod::default().code().to_string());
    Effect::new(move |_| {
        let code = period.get();
        match MonitoringPeriod::from_code(&code) {
            Some(p) => log::debug!("risk monitoring period: {}", p.label()),
            None => log::warn!("unknown monitoring period: {}", code),
        }
    });

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<SecurityCheck>);

    let defaults = RemediationForm::default();
    let measures = RwSignal::new(defaults.measures);
    let owner = RwSignal::new(defaults.owner);
    let due_date = RwSignal::new(defaults.due_date);

    let submit_remediation = move |_| {
        if let Some(check) = detail.get_untracked() {
            log::debug!(
                "remediation for {}: owner={}, due={}",
                check.name,
                owner.get_untracked(),
                due_date.get_untracked()
            );
            notice.run_action("提交整改", check.name);
        }
        detail_open.set(false);
    };

    view! {
        <PageFrame page=FundSupervisionView::FundSecurity category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title=FundSupervisionView::FundSecurity.title()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| notice.run_action("立即扫描", "资金管理系统")
                    >
                        "立即扫描"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid stat-grid--4">
                    <StatCard label="风险评分" value=metrics.risk_score.to_string() tone=StatTone::Success icon_name="shield" subtitle="低风险".to_string() />
                    <StatCard label="异常交易" value=metrics.abnormal_transactions.to_string() tone=StatTone::Warning icon_name="alert-triangle" />
                    <StatCard label="安全等级" value=metrics.security_level.to_string() icon_name="check-circle" />
                    <StatCard label="最近扫描" value=metrics.last_scan_date().to_string() icon_name="clock" subtitle=metrics.last_scan.to_string() />
                </div>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="风险监控">
                        <Flex justify=FlexJustify::End>
                            <Select value=period size=SelectSize::Small>
                                {MonitoringPeriod::ALL
                                    .into_iter()
                                    .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </Flex>
                        <LineChart data=risk_monitoring() />
                        <p class="muted">{risk_summary(&metrics)}</p>
                    </CardAnimated>

                    <CardAnimated title="风险预警" delay_ms=80>
                        {risk_alerts().into_iter().map(|a| view! {
                            <div class="finding">
                                <div class="finding__head">
                                    {icon("alert-triangle")}
                                    <span class="finding__title">{a.kind}</span>
                                    <Badge variant=level_variant(a.level)>{a.level.label()}</Badge>
                                    <Badge variant=if a.resolved { "success" } else { "warning" }>{a.status_label()}</Badge>
                                </div>
                                <div class="finding__detail">{a.description}</div>
                                <div class="muted">{a.time}</div>
                            </div>
                        }).collect_view()}
                    </CardAnimated>
                </div>

                <Card>
                    <h3 class="card-title">"安全检查"</h3>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=true min_width=180.0>"检查项目"</TableHeaderCell>
                                <TableHeaderCell>"最近检查"</TableHeaderCell>
                                <TableHeaderCell>"检查频率"</TableHeaderCell>
                                <TableHeaderCell>"检查结果"</TableHeaderCell>
                                <TableHeaderCell>"操作"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {security_checks().into_iter().map(|c| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{c.name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.last_check}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{c.frequency.label()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=if c.passed() { "success" } else { "error" }>{c.result_label()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    detail.set(Some(c));
                                                    detail_open.set(true);
                                                }
                                            >
                                                "查看详情"
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Card>

                <div class="card-grid card-grid--2">
                    <CardAnimated title="安全防护措施" delay_ms=160>
                        {protection_measures().into_iter().map(|m| view! {
                            <div class="finding finding--info">
                                <div class="finding__head">
                                    {icon("shield")}
                                    <span class="finding__title">{m.title}</span>
                                </div>
                                <div class="finding__detail">{m.description}</div>
                                <div class="metric-row">
                                    <span class="metric-row__label">{m.caption}</span>
                                    <span class="metric-row__value">{m.value}</span>
                                </div>
                            </div>
                        }).collect_view()}
                    </CardAnimated>
                    <CardAnimated title="安全培训" delay_ms=240>
                        {trainings().into_iter().map(|t| view! {
                            <div class="finding">
                                <div class="finding__head">
                                    <span class="finding__title">{t.title}</span>
                                    <Badge variant=if t.completed { "success" } else { "primary" }>{t.status_label()}</Badge>
                                </div>
                                <div class="finding__detail">{t.description}</div>
                                <div class="muted">{format!("{}：{}", t.date_caption(), t.date)}</div>
                            </div>
                        }).collect_view()}
                    </CardAnimated>
                </div>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"安全检查详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|c| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"检查项目"</span>{c.name}</div>
                                    <div><span class="detail-grid__label">"检查方式"</span>{CHECK_METHOD}</div>
                                    <div><span class="detail-grid__label">"最近检查"</span>{c.last_check}</div>
                                    <div><span class="detail-grid__label">"下次检查"</span>{c.frequency.next_check()}</div>
                                    <div><span class="detail-grid__label">"检查频率"</span>{c.frequency.label()}</div>
                                    <div><span class="detail-grid__label">"检查结果"</span>{c.result_label()}</div>
                                </div>
                                <h4 class="section-title">"检查范围"</h4>
                                <p>{c.scope}</p>
                                {c.issue.map(|issue| view! {
                                    <div class="alert-banner alert-banner--error">{icon("alert-triangle")}<span>{issue}</span></div>
                                    <h4 class="section-title">"整改措施"</h4>
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Textarea value=measures attr:rows=3 />
                                        <label class="filter-panel__field">
                                            <span>"负责人"</span>
                                            <Input value=owner />
                                        </label>
                                        <DateInput value=due_date title="完成期限" />
                                    </Flex>
                                })}
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            {move || detail.get().filter(|c| !c.passed()).map(|_| view! {
                                <Button appearance=ButtonAppearance::Primary on_click=submit_remediation>
                                    "提交整改"
                                </Button>
                            })}
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
