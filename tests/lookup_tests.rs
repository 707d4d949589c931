//! Integration tests for search and random commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_entry, init_wiki, wiki_cmd};

fn animal_wiki() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_wiki(temp.path());
    add_entry(temp.path(), "Cat", "meow");
    add_entry(temp.path(), "Category", "taxonomy");
    add_entry(temp.path(), "Dog", "woof");
    add_entry(temp.path(), "Dogma", "belief");
    temp
}

#[test]
fn test_search_exact_hit_wins() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", "Cat"])
        .assert()
        .success()
        .stdout("meow\n");
}

#[test]
fn test_search_substring_candidates() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", "ogm"])
        .assert()
        .success()
        .stdout("Dogma\n");

    wiki_cmd(temp.path())
        .args(["search", "at"])
        .assert()
        .success()
        .stdout("Cat\nCategory\n");
}

#[test]
fn test_search_is_case_sensitive() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", "cat"])
        .assert()
        .code(4);
}

#[test]
fn test_search_no_match() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", "zzz"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("zzz"));
}

#[test]
fn test_search_empty_query_lists_all() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", ""])
        .assert()
        .success()
        .stdout("Cat\nCategory\nDog\nDogma\n");
}

#[test]
fn test_search_exact_hit_html() {
    let temp = animal_wiki();

    wiki_cmd(temp.path())
        .args(["search", "Dog", "--html"])
        .assert()
        .success()
        .stdout("<p>woof</p>\n\n");
}

#[test]
fn test_random_on_empty_wiki() {
    let temp = TempDir::new().unwrap();
    init_wiki(temp.path());

    wiki_cmd(temp.path())
        .arg("random")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no entries"));
}

#[test]
fn test_random_single_entry() {
    let temp = TempDir::new().unwrap();
    init_wiki(temp.path());
    add_entry(temp.path(), "Only", "the one");

    wiki_cmd(temp.path())
        .arg("random")
        .assert()
        .success()
        .stdout("Only\n\nthe one\n");
}

#[test]
fn test_random_picks_existing_entry() {
    let temp = animal_wiki();

    for _ in 0..5 {
        wiki_cmd(temp.path())
            .arg("random")
            .assert()
            .success()
            .stdout(
                predicate::str::starts_with("Cat\n")
                    .or(predicate::str::starts_with("Category\n"))
                    .or(predicate::str::starts_with("Dog\n"))
                    .or(predicate::str::starts_with("Dogma\n")),
            );
    }
}
