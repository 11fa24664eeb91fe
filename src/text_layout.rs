/// Greedy word wrap. `measure` reports the rendered width of a candidate
/// line, so the routine stays pure and independent of any font backend.
///
/// A word that is wider than `max_width` on its own is emitted alone and
/// allowed to overflow. Empty input produces a single empty line.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            // First word of a line is always accepted, even if too wide.
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10 px per character keeps the expectations easy to read.
    fn measure(s: &str) -> f32 {
        (s.chars().count() * 10) as f32
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 100.0, measure), vec![String::new()]);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("a bc", 100.0, measure), vec!["a bc".to_string()]);
    }

    #[test]
    fn lines_fit_within_max_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(text, 150.0, measure);
        for line in &lines {
            assert!(measure(line) <= 150.0, "line too wide: {line:?}");
        }
        assert!(lines.len() > 1);
    }

    #[test]
    fn word_order_is_preserved() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 120.0, measure);
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn overlong_word_is_emitted_alone() {
        let lines = wrap_text("hi extraordinarily no", 100.0, measure);
        assert_eq!(
            lines,
            vec!["hi".to_string(), "extraordinarily".to_string(), "no".to_string()]
        );
    }

    #[test]
    fn overlong_first_word_does_not_produce_an_empty_line() {
        let lines = wrap_text("extraordinarily hi", 100.0, measure);
        assert_eq!(lines, vec!["extraordinarily".to_string(), "hi".to_string()]);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let text = "some repeated input text for wrapping";
        assert_eq!(wrap_text(text, 130.0, measure), wrap_text(text, 130.0, measure));
    }
}
