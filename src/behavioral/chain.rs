// Chain of Responsibility: a support desk tries its handlers in order until one
// takes the issue.

pub trait SupportHandler {
    fn name(&self) -> &'static str;

    /// `None` passes the issue on to the next handler.
    fn handle(&self, issue: &str) -> Option<String>;
}

pub struct TechnicalSupport;
impl SupportHandler for TechnicalSupport {
    fn name(&self) -> &'static str {
        "technical"
    }

    fn handle(&self, issue: &str) -> Option<String> {
        (issue == "technical")
            .then(|| "Technical support: I'll fix your technical issue".to_string())
    }
}

pub struct BillingSupport;
impl SupportHandler for BillingSupport {
    fn name(&self) -> &'static str {
        "billing"
    }

    fn handle(&self, issue: &str) -> Option<String> {
        (issue == "billing")
            .then(|| "Billing support: I'll help with your bill".to_string())
    }
}

/// Catch-all; always resolves.
pub struct GeneralSupport;
impl SupportHandler for GeneralSupport {
    fn name(&self) -> &'static str {
        "general"
    }

    fn handle(&self, issue: &str) -> Option<String> {
        Some(format!("General support: I'll help you with {}", issue))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub handler: &'static str,
    pub reply: String,
}

#[derive(Default)]
pub struct SupportDesk {
    handlers: Vec<Box<dyn SupportHandler>>,
}

impl SupportDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Technical, then billing, then general.
    pub fn standard() -> Self {
        Self::new()
            .with(TechnicalSupport)
            .with(BillingSupport)
            .with(GeneralSupport)
    }

    pub fn with(mut self, handler: impl SupportHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn resolve(&self, issue: &str) -> Option<Resolution> {
        for handler in &self.handlers {
            if let Some(reply) = handler.handle(issue) {
                return Some(Resolution {
                    handler: handler.name(),
                    reply,
                });
            }
            tracing::trace!(handler = handler.name(), issue, "passing issue on");
        }
        tracing::debug!(issue, "no handler took the issue");
        None
    }
}

pub fn demo() -> Vec<String> {
    let desk = SupportDesk::standard();
    ["technical", "billing", "other"]
        .iter()
        .filter_map(|issue| desk.resolve(issue))
        .map(|resolution| resolution.reply)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_resolved_by_first() {
        let resolution = SupportDesk::standard().resolve("technical").unwrap();
        assert_eq!(resolution.handler, "technical");
        assert_eq!(resolution.reply, "Technical support: I'll fix your technical issue");
    }

    #[test]
    fn test_billing_falls_through_to_second() {
        let resolution = SupportDesk::standard().resolve("billing").unwrap();
        assert_eq!(resolution.handler, "billing");
        assert_eq!(resolution.reply, "Billing support: I'll help with your bill");
    }

    #[test]
    fn test_other_falls_through_to_general() {
        let resolution = SupportDesk::standard().resolve("refund").unwrap();
        assert_eq!(resolution.handler, "general");
        assert_eq!(resolution.reply, "General support: I'll help you with refund");
    }

    #[test]
    fn test_order_matters() {
        let desk = SupportDesk::new().with(GeneralSupport).with(TechnicalSupport);
        assert_eq!(desk.resolve("technical").unwrap().handler, "general");
    }

    #[test]
    fn test_no_catch_all() {
        let desk = SupportDesk::new().with(TechnicalSupport).with(BillingSupport);
        assert_eq!(desk.resolve("other"), None);
        assert_eq!(SupportDesk::new().resolve("technical"), None);
    }

    #[test]
    fn test_demo_lines() {
        assert_eq!(
            demo(),
            vec![
                "Technical support: I'll fix your technical issue",
                "Billing support: I'll help with your bill",
                "General support: I'll help you with other",
            ]
        );
    }
}
