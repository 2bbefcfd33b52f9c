use remix_core::prompt::SEGMENT_MAX_CHARS;
use remix_core::{build_prompt, OutputMode, Style, SEGMENT_DELIMITER};

const CONTENT: &str = "The quarterly numbers beat expectations by 12%.";

#[test]
fn every_known_style_embeds_content_and_single_directive() {
    for style in Style::ALL {
        let prompt = build_prompt(CONTENT, style.as_str(), OutputMode::Single);
        assert!(prompt.contains(CONTENT), "{style}: content missing");
        assert!(
            prompt.ends_with("Respond with exactly 2-3 sentences, no more. Be impactful but brief."),
            "{style}: wrong directive in {prompt}"
        );
        assert!(!prompt.contains(SEGMENT_DELIMITER));
    }
}

#[test]
fn every_known_style_embeds_content_and_multi_directive() {
    for style in Style::ALL {
        let prompt = build_prompt(CONTENT, style.as_str(), OutputMode::Multi);
        assert!(prompt.contains(CONTENT));
        assert!(prompt.contains(SEGMENT_DELIMITER));
        assert!(prompt.contains("exactly 3 segments"));
        assert!(prompt.contains(&format!("under {SEGMENT_MAX_CHARS} characters")));
    }
}

#[test]
fn templates_differ_per_style() {
    let prompts: Vec<String> = Style::ALL
        .iter()
        .map(|s| build_prompt(CONTENT, s.as_str(), OutputMode::Single))
        .collect();
    for (i, a) in prompts.iter().enumerate() {
        for b in prompts.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    assert!(prompts[1].contains("cyberpunk terminology"));
    assert!(prompts[3].contains("post-human AI"));
}

#[test]
fn unknown_styles_use_generic_template() {
    let generic = build_prompt(CONTENT, "no-such-style", OutputMode::Single);
    assert!(generic.starts_with(
        "Transform this content into 2-3 concise sentences while maintaining its core meaning:"
    ));
    assert!(generic.contains(CONTENT));

    // Exact match only: case and whitespace variants fall back too
    for style in ["", "CASUAL", " casual", "Cybernetic", "formal"] {
        assert_eq!(build_prompt(CONTENT, style, OutputMode::Single), generic);
    }
}

#[test]
fn content_is_embedded_verbatim() {
    let tricky = "  line one\nline two {braces} [TWEET] \"quotes\"  ";
    let prompt = build_prompt(tricky, "casual", OutputMode::Multi);
    assert!(prompt.contains(tricky));
}

#[test]
fn build_prompt_is_deterministic() {
    for mode in [OutputMode::Single, OutputMode::Multi] {
        for style in ["casual", "extreme-cybernetic", "whatever"] {
            assert_eq!(
                build_prompt(CONTENT, style, mode),
                build_prompt(CONTENT, style, mode)
            );
        }
    }
}
