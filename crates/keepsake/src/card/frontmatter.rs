use super::CardMeta;

/// Extract `key: value` frontmatter delimited by `---` lines at the top of
/// a card file. Returns the parsed meta and the remaining body. A document
/// without frontmatter comes back with default meta and an untouched body.
pub fn extract(content: &str) -> (CardMeta, String) {
    let content = content.replace("\r\n", "\n");
    let mut lines = content.lines();

    if lines.next().map(str::trim) != Some("---") {
        return (CardMeta::default(), content);
    }

    let mut meta = CardMeta::default();
    let mut consumed = 1;
    let mut closed = false;

    for line in lines {
        consumed += 1;
        let trimmed = line.trim();
        if trimmed == "---" {
            closed = true;
            break;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "title" => meta.title = Some(value),
            "theme" => meta.theme = Some(value),
            "transition" => meta.transition = Some(value),
            "recipient" => meta.recipient = Some(value),
            "sender" => meta.sender = Some(value),
            "music" => meta.music = Some(value),
            _ => {}
        }
    }

    if !closed {
        // Opening --- was a slide separator, not frontmatter.
        return (CardMeta::default(), content);
    }

    let body = content
        .lines()
        .skip(consumed)
        .collect::<Vec<_>>()
        .join("\n");
    (meta, body)
}
