/// Split a card body (after frontmatter extraction) into raw slide strings.
///
/// Two mechanisms create slide breaks:
/// 1. A `---` line (three or more dashes)
/// 2. Three or more consecutive blank lines
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");

    let mut slides: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut blank_run = 0;

    let mut flush = |current: &mut Vec<&str>, slides: &mut Vec<String>| {
        let text = current.join("\n").trim().to_string();
        if !text.is_empty() {
            slides.push(text);
        }
        current.clear();
    };

    for line in body.lines() {
        let trimmed = line.trim();

        if is_dash_separator(trimmed) {
            blank_run = 0;
            flush(&mut current, &mut slides);
            continue;
        }

        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run == 3 {
                flush(&mut current, &mut slides);
            } else if blank_run < 3 {
                current.push(line);
            }
            continue;
        }

        blank_run = 0;
        current.push(line);
    }
    flush(&mut current, &mut slides);

    slides
}

fn is_dash_separator(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_separator() {
        let body = "Slide one\n\n---\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn test_blank_line_split() {
        let body = "Slide one\n\n\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "Slide one");
        assert_eq!(slides[1], "Slide two");
    }

    #[test]
    fn test_single_blank_line_no_split() {
        let body = "Paragraph one\n\nParagraph two";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_combined_separators_make_a_single_break() {
        let body = "Slide one\n\n\n\n---\n\n\n\nSlide two";
        let slides = split(body);
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn test_empty_body() {
        assert!(split("").is_empty());
        assert!(split("\n\n---\n\n").is_empty());
    }

    #[test]
    fn test_longer_dash_runs_split_too() {
        let slides = split("One\n-----\nTwo");
        assert_eq!(slides.len(), 2);
    }
}
