pub mod frontmatter;
pub mod splitter;

/// Placeholder tokens replaced once at load time.
const RECIPIENT_TOKEN: &str = "[Her Name]";
const SENDER_TOKEN: &str = "[Your Name]";

#[derive(Debug, Clone)]
pub struct Card {
    pub meta: CardMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default)]
pub struct CardMeta {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub transition: Option<String>,
    pub recipient: Option<String>,
    pub sender: Option<String>,
    /// Path to a background music file, relative to the card file.
    pub music: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    pub animation: Option<EnterAnimation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading { level: u8 },
    Paragraph,
}

/// Named enter animation a block restarts from on every slide entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAnimation {
    Pop,
    FadeIn,
    SlideLeft,
    SlideRight,
    SlideUp,
    Bounce,
}

impl EnterAnimation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pop" => Some(Self::Pop),
            "fade-in" => Some(Self::FadeIn),
            "slide-left" => Some(Self::SlideLeft),
            "slide-right" => Some(Self::SlideRight),
            "slide-up" => Some(Self::SlideUp),
            "bounce" => Some(Self::Bounce),
            _ => None,
        }
    }
}

/// Display names substituted for the placeholder tokens.
#[derive(Debug, Clone)]
pub struct DisplayNames {
    pub recipient: String,
    pub sender: String,
}

impl Default for DisplayNames {
    fn default() -> Self {
        Self {
            recipient: "My Love".to_string(),
            sender: "Your Boyfriend".to_string(),
        }
    }
}

pub fn parse(content: &str) -> Card {
    let (meta, body) = frontmatter::extract(content);
    let slides: Vec<Slide> = splitter::split(&body)
        .into_iter()
        .map(|raw| Slide {
            blocks: parse_blocks(&raw),
        })
        .filter(|s| !s.blocks.is_empty())
        .collect();
    Card { meta, slides }
}

/// Parse one slide's raw text into blocks. An `@animate: <name>` directive
/// line applies to the block that follows it.
fn parse_blocks(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending_animation: Option<EnterAnimation> = None;
    let mut paragraph: Vec<&str> = Vec::new();

    let mut flush_paragraph = |paragraph: &mut Vec<&str>,
                               blocks: &mut Vec<Block>,
                               animation: &mut Option<EnterAnimation>| {
        if paragraph.is_empty() {
            return;
        }
        blocks.push(Block {
            kind: BlockKind::Paragraph,
            text: paragraph.join("\n"),
            animation: animation.take(),
        });
        paragraph.clear();
    };

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks, &mut pending_animation);
            continue;
        }

        if let Some(name) = trimmed.strip_prefix("@animate:") {
            flush_paragraph(&mut paragraph, &mut blocks, &mut pending_animation);
            pending_animation = EnterAnimation::from_name(name.trim());
            continue;
        }

        let level = trimmed.chars().take_while(|&c| c == '#').count();
        if (1..=3).contains(&level) && trimmed[level..].starts_with(' ') {
            flush_paragraph(&mut paragraph, &mut blocks, &mut pending_animation);
            blocks.push(Block {
                kind: BlockKind::Heading { level: level as u8 },
                text: trimmed[level + 1..].trim().to_string(),
                animation: pending_animation.take(),
            });
            continue;
        }

        paragraph.push(trimmed);
    }
    flush_paragraph(&mut paragraph, &mut blocks, &mut pending_animation);

    blocks
}

/// One-time literal substitution of the placeholder tokens across the
/// card's title and every block, before the card is presented.
pub fn substitute_names(card: &mut Card, names: &DisplayNames) {
    let apply = |text: &mut String| {
        if text.contains(RECIPIENT_TOKEN) {
            *text = text.replace(RECIPIENT_TOKEN, &names.recipient);
        }
        if text.contains(SENDER_TOKEN) {
            *text = text.replace(SENDER_TOKEN, &names.sender);
        }
    };

    if let Some(title) = card.meta.title.as_mut() {
        apply(title);
    }
    for slide in &mut card.slides {
        for block in &mut slide.blocks {
            apply(&mut block.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headings_and_paragraphs() {
        let card = parse("# Hello\n\nFirst line\nsecond line\n\nAnother paragraph");
        assert_eq!(card.slides.len(), 1);
        let blocks = &card.slides[0].blocks;
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading { level: 1 });
        assert_eq!(blocks[0].text, "Hello");
        assert_eq!(blocks[1].text, "First line\nsecond line");
        assert_eq!(blocks[2].text, "Another paragraph");
    }

    #[test]
    fn animate_directive_applies_to_the_following_block() {
        let card = parse("@animate: pop\n# Title\n\n@animate: fade-in\nBody text");
        let blocks = &card.slides[0].blocks;
        assert_eq!(blocks[0].animation, Some(EnterAnimation::Pop));
        assert_eq!(blocks[1].animation, Some(EnterAnimation::FadeIn));
    }

    #[test]
    fn unknown_animation_name_is_ignored() {
        let card = parse("@animate: wobble\nText");
        assert_eq!(card.slides[0].blocks[0].animation, None);
    }

    #[test]
    fn hash_without_space_is_plain_text() {
        let card = parse("#hashtag not a heading");
        assert_eq!(card.slides[0].blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn substitutes_both_placeholder_tokens_everywhere() {
        let mut card = parse(
            "---\ntitle: For [Her Name]\n---\n\n# Dear [Her Name]\n\nWith love, [Your Name] and [Your Name]",
        );
        let names = DisplayNames {
            recipient: "Ada".to_string(),
            sender: "Alan".to_string(),
        };
        substitute_names(&mut card, &names);
        assert_eq!(card.meta.title.as_deref(), Some("For Ada"));
        assert_eq!(card.slides[0].blocks[0].text, "Dear Ada");
        assert_eq!(card.slides[0].blocks[1].text, "With love, Alan and Alan");
    }

    #[test]
    fn empty_slides_are_dropped() {
        let card = parse("# One\n\n---\n\n---\n\n# Two");
        assert_eq!(card.slides.len(), 2);
    }
}
