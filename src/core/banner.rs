use crate::core::greeting::GreetingRecord;

const RULE_WIDTH: usize = 50;
pub const TITLE: &str = "🚀 HELLO WORLD CI/CD APPLICATION";
pub const COMPLETION_LINE: &str = "✅ Application completed successfully!";

/// Render the stdout banner for `rec`, one entry per line, newline-terminated.
pub fn render(rec: &GreetingRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let lines = [
        rule.clone(),
        TITLE.to_string(),
        rule.clone(),
        format!("Message: {}", rec.message),
        format!("Version: {}", rec.version),
        format!("Environment: {}", rec.environment),
        format!("Build ID: {}", rec.build_id),
        format!("Timestamp: {}", rec.timestamp),
        rule,
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GreetingRecord {
        GreetingRecord {
            message: "Hello World".into(),
            timestamp: "2024-01-01T00:00:00.000000+00:00".into(),
            version: "1.0.0".into(),
            environment: "staging".into(),
            build_id: "42".into(),
        }
    }

    #[test]
    fn banner_has_fixed_shape() {
        let text = render(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        let rule = "=".repeat(50);
        assert_eq!(lines[0], rule);
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[2], rule);
        assert_eq!(lines[8], rule);
    }

    #[test]
    fn banner_labels_every_field_in_order() {
        let text = render(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "Message: Hello World");
        assert_eq!(lines[4], "Version: 1.0.0");
        assert_eq!(lines[5], "Environment: staging");
        assert_eq!(lines[6], "Build ID: 42");
        assert_eq!(lines[7], "Timestamp: 2024-01-01T00:00:00.000000+00:00");
    }
}
