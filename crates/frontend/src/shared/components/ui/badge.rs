use contracts::dashboards::common::Severity;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn severity_variant(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "success",
        Severity::Low => "primary",
        Severity::Medium => "warning",
        Severity::High => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_distinct_variants() {
        assert_eq!(severity_variant(Severity::High), "error");
        assert_eq!(severity_variant(Severity::Medium), "warning");
        assert_ne!(severity_variant(Severity::Ok), severity_variant(Severity::Low));
    }
}
