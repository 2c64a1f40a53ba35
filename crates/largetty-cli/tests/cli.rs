use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn font_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../largetty/tests/fonts")
}

fn large_tty() -> Command {
    Command::cargo_bin("large-tty").unwrap()
}

#[test]
fn render_with_bundled_font() {
    large_tty()
        .args(["render", "--text", "Hi", "--font", "small"])
        .assert()
        .success()
        .stdout("# # ### \n# #  #  \n###  #  \n# #  #  \n# # ### \n")
        .stderr("");
}

#[test]
fn render_falls_back_to_term_when_narrow() {
    large_tty()
        .args(["render", "--text", "hello world", "--width", "5"])
        .assert()
        .success()
        .stdout("hello\nworld\n")
        .stderr(predicate::str::contains("standard → term (auto-shrunk)"));
}

#[test]
fn render_reports_shrinking() {
    large_tty()
        .args(["render", "--text", "ab", "--font", "big", "--width", "4", "--rows", "1"])
        .arg("--font-dir")
        .arg(font_dir())
        .assert()
        .success()
        .stdout("aabb\naabb\n")
        .stderr(predicate::str::contains("big → small (auto-shrunk)"));
}

#[test]
fn render_reports_truncation() {
    large_tty()
        .args(["render", "--text", "abcdefgh", "--width", "3", "--rows", "1"])
        .assert()
        .success()
        .stdout("abc\n")
        .stderr(predicate::str::contains("text truncated"));
}

#[test]
fn fonts_lists_catalog() {
    large_tty()
        .arg("fonts")
        .arg("--font-dir")
        .arg(font_dir())
        .assert()
        .success()
        .stdout("big (default) [tier 1]\nsmall [tier 2]\nterm [tier 3]\n");
}

#[test]
fn inspect_prints_metadata() {
    large_tty()
        .arg("inspect")
        .arg("--font")
        .arg(font_dir().join("small.flf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("FIGlet font: small"))
        .stdout(predicate::str::contains("Defined characters: 95"));
}

#[test]
fn missing_font_dir_fails() {
    large_tty()
        .args(["fonts", "--font-dir", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading fonts from"));
}

#[test]
fn session_reads_lines() {
    large_tty()
        .args(["session", "--width", "20"])
        .write_stdin("hi there\n/quit\nignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there"))
        .stdout(predicate::str::contains("font: standard → "))
        .stdout(predicate::str::contains("(1/5)"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn session_random_commands() {
    large_tty()
        .args(["session", "--width", "200"])
        .arg("--font-dir")
        .arg(font_dir())
        .write_stdin("/random\n/play\nhi\n/play\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"font: (big|small|term)(  | → )").unwrap())
        .stdout(predicate::str::is_match(r"\([123]/3\)").unwrap());
}
