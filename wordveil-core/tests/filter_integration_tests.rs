// wordveil-core/tests/filter_integration_tests.rs
use anyhow::Result;
use std::sync::Arc;
use std::thread;

use wordveil_core::{headless_filter_string, FilterConfig, FilterEngine, TrieEngine};

fn engine(words: &[&str]) -> Result<TrieEngine> {
    TrieEngine::new(FilterConfig::from_words(words))
}

#[test]
fn every_dictionary_word_collapses_to_one_mask_token() -> Result<()> {
    let words = ["bad", "worse", "赌博", "a"];
    let engine = engine(&words)?;
    for word in words {
        assert_eq!(engine.filter(word), "***", "word: {word}");
    }
    Ok(())
}

#[test]
fn text_without_dictionary_words_is_unchanged() -> Result<()> {
    let engine = engine(&["bad"])?;
    for text in [
        "a perfectly clean sentence",
        "b a", // prefix that never completes
        "数字社区",
        "BAD", // no case folding
    ] {
        assert_eq!(engine.filter(text), text);
    }
    Ok(())
}

#[test]
fn filtering_is_idempotent_on_filtered_output() -> Result<()> {
    let engine = engine(&["bad", "worse"])?;
    let once = engine.filter("bad things get worse, badly");
    assert_eq!(engine.filter(&once), once);
    Ok(())
}

#[test]
fn adjacent_words_each_get_their_own_mask_token() -> Result<()> {
    let engine = engine(&["ab", "cd"])?;
    assert_eq!(engine.filter("abcd"), "******");
    Ok(())
}

#[test]
fn symbols_inside_a_span_do_not_prevent_a_match() -> Result<()> {
    let engine = engine(&["bad"])?;
    assert_eq!(engine.filter("b*a*d"), "***");
    assert_eq!(engine.filter("b a d"), "***");
    assert_eq!(engine.filter("b--a--d!"), "***!");
    Ok(())
}

#[test]
fn masking_happens_at_the_word_end_node_not_at_a_boundary() -> Result<()> {
    // "badge" is not in the dictionary, but its prefix "bad" is; the scan
    // masks as soon as it reaches a word-end node and copies the rest.
    let engine = engine(&["bad"])?;
    assert_eq!(engine.filter("badge"), "***ge");
    Ok(())
}

#[test]
fn symbol_only_and_empty_inputs_are_unchanged() -> Result<()> {
    let engine = engine(&["bad"])?;
    assert_eq!(engine.filter(""), "");
    assert_eq!(engine.filter("!!! ... ***"), "!!! ... ***");
    assert_eq!(engine.filter(" \t\n"), " \t\n");
    Ok(())
}

#[test]
fn unfinished_trailing_candidate_is_copied_out() -> Result<()> {
    let engine = engine(&["bad"])?;
    assert_eq!(engine.filter("so ba"), "so ba");
    assert_eq!(engine.filter("so b*a"), "so b*a");
    Ok(())
}

#[test]
fn cjk_words_are_masked_in_context() -> Result<()> {
    let engine = engine(&["赌博", "嫖娼"])?;
    assert_eq!(engine.filter("这里禁止赌博和嫖娼！"), "这里禁止***和***！");
    assert_eq!(engine.filter("赌★博也不行"), "***也不行");
    Ok(())
}

#[test]
fn one_engine_serves_concurrent_callers() -> Result<()> {
    let engine = Arc::new(engine(&["bad", "赌博"])?);
    let mut handles = Vec::new();
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                assert_eq!(engine.filter("a bad 赌博 day"), "a *** *** day");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("filter thread panicked");
    }
    Ok(())
}

#[test]
fn scan_and_filter_agree_on_matches() -> Result<()> {
    let engine = engine(&["bad"])?;
    let input = "one bad, two b*a*d";
    let matches = engine.scan(input);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].original_string, "bad");
    assert_eq!(matches[1].original_string, "b*a*d");

    let summary = engine.analyze(input);
    assert_eq!(summary.occurrences, 2);
    assert_eq!(engine.filter(input), "one ***, two ***");
    Ok(())
}

#[test]
fn headless_filter_string_runs_end_to_end() -> Result<()> {
    let config = FilterConfig::from_words(["fabricate"]);
    let filtered = headless_filter_string(config, "do not fabricate evidence")?;
    assert_eq!(filtered, "do not *** evidence");
    Ok(())
}
