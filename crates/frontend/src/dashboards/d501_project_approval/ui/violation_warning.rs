use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d501_project_approval::violation_warning::*;
use contracts::navigation::{ProjectApprovalView, SectionView};
use leptos::prelude::*;
use thaw::*;

fn priority_variant(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "error",
        Priority::Medium => "warning",
        Priority::Low => "primary",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "warning-card warning-card--high",
        Priority::Medium => "warning-card warning-card--medium",
        Priority::Low => "warning-card warning-card--low",
    }
}

#[component]
pub fn ViolationWarningPage() -> impl IntoView {
    let notice = use_notice();
    let warnings = StoredValue::new(violation_warnings());
    let kind = RwSignal::new("all".to_string());
    let query = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let kind = ViolationKind::from_code(&kind.get());
        warnings.with_value(|all| filter_warnings(all, kind, &query.get()))
    });

    let detail_open = RwSignal::new(false);
    let detail = RwSignal::new(None::<ViolationWarning>);

    view! {
        <PageFrame page=ProjectApprovalView::ViolationWarning category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title=ProjectApprovalView::ViolationWarning.title()>
                    <Select value=kind size=SelectSize::Small>
                        <option value="all">"全部类型"</option>
                        {ViolationKind::ALL
                            .iter()
                            .map(|k| view! { <option value=k.code()>{k.label()}</option> })
                            .collect_view()}
                    </Select>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索预警..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="alert-banner alert-banner--error">
                    {icon("alert-triangle")}
                    <div>
                        <div class="alert-banner__title">"违规预警提醒"</div>
                        <div>{move || alert_text(visible.with(|v| v.len()))}</div>
                    </div>
                </div>

                <div class="card-grid card-grid--2">
                    {move || visible.get().into_iter().map(|w| {
                        let for_dialog = w.clone();
                        let project = w.project;
                        view! {
                            <div class=priority_class(w.priority)>
                                <div class="warning-card__head">
                                    <div class="warning-card__title">{w.project}</div>
                                    <Badge variant=priority_variant(w.priority)>{w.priority.label()}</Badge>
                                </div>
                                <div class="warning-card__meta">
                                    <Badge variant="neutral">{w.kind.label()}</Badge>
                                    <span class="muted">{w.time}</span>
                                </div>
                                <p class="warning-card__desc">{w.description}</p>
                                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        size=ButtonSize::Small
                                        on_click=move |_| notice.run_action("忽略预警", project)
                                    >
                                        "忽略"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        size=ButtonSize::Small
                                        on_click=move |_| {
                                            detail.set(Some(for_dialog.clone()));
                                            detail_open.set(true);
                                        }
                                    >
                                        "查看详情"
                                    </Button>
                                </Flex>
                            </div>
                        }
                    }).collect_view()}
                </div>
                <Show when=move || visible.with(|v| v.is_empty())>
                    <div class="empty-state">"没有符合条件的预警"</div>
                </Show>
            </div>

            <Dialog open=detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"违规预警详情"</DialogTitle>
                        <DialogContent>
                            {move || detail.get().map(|w| view! {
                                <div class="detail-grid">
                                    <div><span class="detail-grid__label">"项目名称"</span>{w.project}</div>
                                    <div><span class="detail-grid__label">"违规类型"</span>{w.kind.label()}</div>
                                    <div><span class="detail-grid__label">"预警时间"</span>{w.time}</div>
                                    <div>
                                        <span class="detail-grid__label">"优先级"</span>
                                        <Badge variant=priority_variant(w.priority)>{w.priority.label()}</Badge>
                                    </div>
                                </div>
                                <h4 class="section-title">"违规描述"</h4>
                                <p>{w.description}</p>
                                <h4 class="section-title">"相关证据"</h4>
                                <ul class="evidence-list">
                                    {evidence().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                                </ul>
                            })}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| detail_open.set(false)>
                                "关闭"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    let target = detail.with(|d| d.as_ref().map(|w| w.project).unwrap_or_default());
                                    notice.run_action("立即处理", target);
                                    detail_open.set(false);
                                }
                            >
                                "立即处理"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
