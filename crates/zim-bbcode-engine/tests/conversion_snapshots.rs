use pretty_assertions::assert_eq;
use zim_bbcode_engine::{ParsedPage, ZimParser, parse};

const ROOT_PATH: &str = "res://addons/docs/";

#[test]
fn fixture_basic_page() {
    assert_fixture("basic_page");
}

#[test]
fn fixture_nested_lists() {
    assert_fixture("nested_lists");
}

#[test]
fn fixture_table() {
    assert_fixture("table");
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn report(page: &ParsedPage) -> String {
    let mut out = String::from("metadata:\n");
    for (key, value) in &page.metadata {
        out.push_str(&format!("  {key} = {value}\n"));
    }
    out.push_str("bbcode:\n");
    out.push_str(&page.bbcode);
    out
}

fn assert_fixture(name: &str) {
    let page = parse(&read_fixture(name), ROOT_PATH);
    insta::assert_snapshot!(name, report(&page));
}

/// Re-running the pipeline on converted output must not change it
#[test]
fn converted_fixtures_are_fixed_points() {
    for name in ["basic_page", "nested_lists", "table"] {
        let once = parse(&read_fixture(name), ROOT_PATH).bbcode;
        let twice = parse(&once, ROOT_PATH).bbcode;
        assert_eq!(once, twice, "{name}");
    }
}

/// Every opening list/table tag has a matching close
#[test]
fn converted_fixtures_balance_block_tags() {
    for name in ["nested_lists", "table"] {
        let bbcode = parse(&read_fixture(name), ROOT_PATH).bbcode;
        for (open, close) in [("[ul]", "[/ul]"), ("[ol]", "[/ol]"), ("[table=", "[/table]")] {
            assert_eq!(
                bbcode.matches(open).count(),
                bbcode.matches(close).count(),
                "{name}: {open}"
            );
        }
    }
}

/// A parser instance reused across pages behaves like a fresh one
#[test]
fn reused_parser_matches_fresh_parser() {
    let mut parser = ZimParser::new();
    for name in ["nested_lists", "basic_page", "table"] {
        let text = read_fixture(name);
        let reused = parser.parse_text_to_bbcode(&text, ROOT_PATH);
        let fresh = parse(&text, ROOT_PATH);
        assert_eq!(reused, fresh.bbcode, "{name}");
        assert_eq!(parser.extracted_data(), &fresh.metadata, "{name}");
    }
}
