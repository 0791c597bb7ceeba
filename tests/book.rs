use std::fs;

use reckon::{AngleMode, EvaluationOutcome, evaluate};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/book/src")).into_iter()
                                                                      .filter_map(Result::ok)
                                                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_reckon_blocks(&content) {
            count += check_block(&block, &path.display().to_string());
        }
    }

    assert!(count > 0, "No reckon examples found in book/src");
}

/// Runs every `expression => expected` line of a block and returns how many
/// were checked.
fn check_block(block: &str, origin: &str) -> usize {
    let mut angle_mode = AngleMode::Deg;
    let mut ans = 0.0;
    let mut count = 0;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(mode) = line.strip_prefix("# mode:") {
            angle_mode = mode.trim().parse().unwrap();
            continue;
        }
        if let Some(value) = line.strip_prefix("# ans:") {
            ans = value.trim().parse().unwrap();
            continue;
        }

        let (expression, expected) =
            line.rsplit_once("=>").unwrap_or_else(|| panic!("{origin}: no `=>` in `{line}`"));
        let (expression, expected) = (expression.trim(), expected.trim());
        count += 1;

        match (evaluate(expression, angle_mode, ans), expected.strip_prefix("error:")) {
            (EvaluationOutcome::Success { formatted, .. }, None) => {
                assert_eq!(formatted, expected, "{origin}: `{expression}`");
            },
            (EvaluationOutcome::Error(e), Some(kind)) => {
                assert_eq!(e.kind().to_string(),
                           format!("{} error", kind.trim()),
                           "{origin}: `{expression}`");
            },
            (outcome, _) => panic!("{origin}: `{expression}` gave {outcome:?}, expected {expected}"),
        }
    }

    count
}

fn extract_reckon_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
