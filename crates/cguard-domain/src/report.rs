use std::collections::BTreeSet;

const HEADER: &str = "Your submission was rejected because of the following:";
const FOOTER: &str = "Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Reject,
}

impl Verdict {
    pub fn from_violations(violations: &BTreeSet<String>) -> Self {
        if violations.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Reject
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Reject => "reject",
        }
    }
}

/// Human-readable rejection notice, one bullet per message in sorted order.
///
/// Returns `None` when there is nothing to reject.
pub fn render_report(violations: &BTreeSet<String>) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    let mut report = String::new();
    report.push_str(HEADER);
    report.push_str("\n\n");
    for message in violations {
        report.push_str("* ");
        report.push_str(message);
        report.push('\n');
    }
    report.push('\n');
    report.push_str(FOOTER);
    report.push('\n');
    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(messages: &[&str]) -> BTreeSet<String> {
        messages.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn no_violations_no_report() {
        assert_eq!(render_report(&BTreeSet::new()), None);
        assert_eq!(Verdict::from_violations(&BTreeSet::new()), Verdict::Pass);
    }

    #[test]
    fn bullets_are_sorted() {
        let violations = set(&["Loops are disallowed.", "Arrays are disallowed."]);

        assert_eq!(
            render_report(&violations).as_deref(),
            Some(
                "Your submission was rejected because of the following:\n\n\
                 * Arrays are disallowed.\n\
                 * Loops are disallowed.\n\
                 \n\
                 Please try again.\n"
            )
        );
        assert_eq!(Verdict::from_violations(&violations), Verdict::Reject);
    }

    #[test]
    fn verdict_strings() {
        assert_eq!(Verdict::Pass.as_str(), "pass");
        assert_eq!(Verdict::Reject.as_str(), "reject");
    }
}
