use crate::shared::charts::BarChart;
use crate::shared::components::ui::{severity_variant, Badge};
use crate::shared::components::{CardAnimated, PageHeader, ProgressRow};
use crate::shared::icons::icon;
use crate::shared::notice::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::dashboards::d502_contract_signing::compliance_review::*;
use contracts::navigation::{ContractSigningView, SectionView};
use contracts::shared::search::Searchable;
use contracts::shared::status_filter::{filter_by_tab, tab_caption, StatusTab};
use leptos::prelude::*;
use thaw::*;

fn status_variant(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Reviewing => "warning",
        ReviewStatus::Passed => "success",
        ReviewStatus::Rejected => "error",
    }
}

#[component]
pub fn ComplianceReview() -> impl IntoView {
    let notice = use_notice();
    let all = StoredValue::new(contracts());
    let selected_tab = RwSignal::new(ReviewTab::All.id().to_string());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(DEFAULT_SELECTED);
    let suggestion = RwSignal::new(DEFAULT_SUGGESTION.to_string());

    let visible = Memo::new(move |_| {
        let tab = ReviewTab::parse(&selected_tab.get()).unwrap_or(ReviewTab::All);
        let query = query.get();
        all.with_value(|c| {
            filter_by_tab(c, tab)
                .into_iter()
                .filter(|c| c.matches_query(&query))
                .collect::<Vec<_>>()
        })
    });

    let selected_name = move || {
        all.with_value(|c| {
            c.iter()
                .find(|c| c.id == selected.get())
                .map(|c| c.name)
                .unwrap_or_default()
        })
    };

    let document = contract_document();
    let rule = rule_reference();

    view! {
        <PageFrame page=ContractSigningView::ComplianceReview category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader title=ContractSigningView::ComplianceReview.title()>
                    <div class="search-box">
                        {icon("search")}
                        <Input value=query placeholder="搜索合同..." />
                    </div>
                </PageHeader>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    {ReviewTab::ALL
                        .iter()
                        .map(|&tab| {
                            let caption = all.with_value(|c| tab_caption(c, tab));
                            view! { <Tab value=tab.id()>{caption}</Tab> }
                        })
                        .collect_view()}
                </TabList>

                <div class="split-layout">
                    <CardAnimated title="合同列表" style="flex: 1;">
                        <div class="select-list">
                            {move || visible.get().into_iter().map(|c| {
                                let id = c.id;
                                view! {
                                    <div
                                        class="select-list__item"
                                        class:select-list__item--active=move || selected.get() == id
                                        on:click=move |_| selected.set(id)
                                    >
                                        <div class="select-list__head">
                                            <span class="select-list__title">{c.name}</span>
                                            <Badge variant=status_variant(c.status)>{c.status.label()}</Badge>
                                        </div>
                                        <div class="muted">{format!("{} · {} · {}", c.kind, c.party, c.submit_time)}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                        <Show when=move || visible.with(|v| v.is_empty())>
                            <div class="empty-state">"没有符合条件的合同"</div>
                        </Show>
                    </CardAnimated>

                    <CardAnimated title="合规性审查" delay_ms=80 style="flex: 2;">
                        <div class="contract-preview">
                            <h3 class="contract-preview__title">{document.title}</h3>
                            <div class="detail-grid">
                                <div><span class="detail-grid__label">"合同编号"</span>{document.number}</div>
                                <div><span class="detail-grid__label">"甲方"</span>{document.party_a}</div>
                                <div><span class="detail-grid__label">"乙方"</span>{document.party_b}</div>
                                <div><span class="detail-grid__label">"合同金额"</span>{document.amount}</div>
                                <div><span class="detail-grid__label">"合同期限"</span>{document.term}</div>
                            </div>
                            {document.clauses.iter().map(|clause| view! {
                                <div class="contract-preview__clause" class:contract-preview__clause--flagged=clause.flag.is_some()>
                                    <h4>{clause.title}</h4>
                                    {clause.items.iter().map(|item| view! { <p>{*item}</p> }).collect_view()}
                                    {clause.flag.map(|f| view! {
                                        <div class="contract-preview__flag">{icon("alert-triangle")}{f}</div>
                                    })}
                                </div>
                            }).collect_view()}
                        </div>

                        <h4 class="section-title">"合规性问题"</h4>
                        {compliance_issues().into_iter().map(|issue| view! {
                            <div class="finding">
                                <div class="finding__head">
                                    <span class="finding__title">{issue.title}</span>
                                    <Badge variant=severity_variant(issue.severity)>{issue.severity.risk_label()}</Badge>
                                </div>
                                <div class="muted">{issue.detail}</div>
                            </div>
                        }).collect_view()}

                        <h4 class="section-title">"审核建议"</h4>
                        <Textarea value=suggestion placeholder="请输入审核建议..." attr:rows=4 />

                        <div class="rule-reference">
                            <div class="rule-reference__code">{format!("{} {}", rule.code, rule.title)}</div>
                            <div class="muted">{rule.text}</div>
                        </div>

                        <Flex justify=FlexJustify::End gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| notice.run_action("退回修改", selected_name())
                            >
                                "退回修改"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| notice.run_action("审核通过", selected_name())
                            >
                                "审核通过"
                            </Button>
                        </Flex>
                    </CardAnimated>
                </div>

                <CardAnimated title="合规性审查统计" delay_ms=160>
                    <div class="card-grid card-grid--3">
                        <div>
                            <h4 class="section-title">"合同类型分布"</h4>
                            <BarChart data=contract_type_distribution() />
                        </div>
                        <div>
                            <h4 class="section-title">"审核结果分布"</h4>
                            <BarChart
                                data=review_result_distribution()
                                category_colors=vec!["#10b981", "#ef4444", "#f59e0b"]
                            />
                        </div>
                        <div>
                            <h4 class="section-title">"常见问题类型"</h4>
                            {common_issues()
                                .into_iter()
                                .map(|s| view! { <ProgressRow label=s.label percent=s.percent /> })
                                .collect_view()}
                        </div>
                    </div>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
