pub const WEATHER_EXPERT_SYSTEM: &str = include_str!("../data/prompts/weather_expert_system.txt");
pub const WEATHER_CHAT_USER: &str = include_str!("../data/prompts/weather_chat_user.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Single pass: substituted values are copied literally and never scanned for
/// further placeholders. Unknown placeholders are left as they are.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => result.push_str(value),
            None => {
                result.push_str("{{");
                result.push_str(key);
                result.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}
