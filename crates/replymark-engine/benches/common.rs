// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "## Summary\n\nThe **fix** is in `parse_row` and touches *two* files.\nSee [the docs](https://example.com/docs?a=1&b=2) for details.\n\n1. read the input\n2. split on pipes\n   and trim cells\n\n| step | time |\n|---|--:|\n| parse | 3ms |\n| render | 1ms |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> Note: unpaired ** markers and stray * get dropped.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {i}: **bold** __strong__ *em* _em_ `code_{i}` [link](https://x.io/{i}) <tag> & 'q'"))
        .collect::<Vec<_>>()
        .join("\n")
}
