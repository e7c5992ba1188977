/// Display-only action buttons (submit, approve, urge, export).
///
/// There is no backend behind the dashboard, so an action only records
/// that it was requested. Returns the message shown to the user.
pub fn noop_action(action: &str, target: &str) -> String {
    log::info!("action '{}' requested for '{}' (display only)", action, target);
    format!("已提交「{}」：{}", action, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_action_builds_notice() {
        assert_eq!(noop_action("催办", "城市道路改造工程"), "已提交「催办」：城市道路改造工程");
    }
}
