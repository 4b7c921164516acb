// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wiki_page(sections: usize) -> String {
    let header = "Content-Type: text/x-zim-wiki\nWiki-Format: zim 0.6\nCreation-Date: 2024-01-01T00:00:00+00:00\n\n";
    let section = "===== Section =====\nSome **bold**, //italic// and ''code'' with a [[Page|link]].\n\n* item\n* item\n\t1. nested\n\t2. nested\n* item\n\n|Name|Value|\n|:--|--:|\n|a|1|\n|b|2|\n\n{{..\\images\\shot.png}}\n\n";
    let mut content = String::from(header);
    content.push_str(&section.repeat(sections));
    content
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&"\t".repeat(level));
        content.push_str("* level\n");
    }
    content.push_str("* back\n");
    content
}
