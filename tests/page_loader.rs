// SPDX-License-Identifier: GPL-3.0-only

mod common;

use std::time::Duration;

use common::{FakeDex, kanto_starters, pokemon_url};
use dexview::core::{FetchStep, load_page, try_load_page};

#[tokio::test]
async fn first_page_is_returned_in_index_order() {
    // bulbasaur answers last, it must still come first
    let dex = kanto_starters().delayed(pokemon_url(1), Duration::from_millis(50));

    let page = load_page(&dex, 1, 20, 20).await;

    let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "charmander"]);
    assert_eq!(page[0].types, ["grass", "poison"]);
    assert_eq!(page[0].sprite_url.as_deref(), Some("bulbasaur.png"));
    assert_eq!(page[0].detail_url, pokemon_url(1));
    assert_eq!(page[1].types, ["fire"]);
}

#[tokio::test]
async fn pages_request_their_offset() {
    let dex = FakeDex::new().with_numbered(45);

    let first = load_page(&dex, 1, 20, 20).await;
    let second = load_page(&dex, 2, 20, 20).await;
    let last = load_page(&dex, 3, 20, 20).await;

    assert_eq!(first.len(), 20);
    assert_eq!(second.first().map(|p| p.name.as_str()), Some("mon-21"));
    assert_eq!(last.len(), 5);

    let lists: Vec<_> = dex
        .requests()
        .into_iter()
        .filter(|r| r.starts_with("list"))
        .collect();
    assert_eq!(
        lists,
        [
            "list offset=0 limit=20",
            "list offset=20 limit=20",
            "list offset=40 limit=20"
        ]
    );
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let dex = FakeDex::new().with_numbered(3);
    assert!(load_page(&dex, 5, 20, 20).await.is_empty());
}

#[tokio::test]
async fn rejected_index_gives_an_empty_page() {
    let dex = kanto_starters().failing("list");

    assert!(load_page(&dex, 1, 20, 20).await.is_empty());

    let err = try_load_page(&dex, 1, 20, 20).await.unwrap_err();
    assert_eq!(err.step(), Some(FetchStep::List));
    // no detail is requested once the index failed
    assert_eq!(dex.requests().len(), 2);
}

#[tokio::test]
async fn one_failed_detail_fails_the_whole_page() {
    let dex = kanto_starters().failing(pokemon_url(4));

    assert!(load_page(&dex, 1, 20, 20).await.is_empty());

    let err = try_load_page(&dex, 1, 20, 20).await.unwrap_err();
    assert_eq!(err.step(), Some(FetchStep::Detail));
}

#[tokio::test]
async fn concurrency_limit_does_not_change_the_result() {
    let dex = FakeDex::new().with_numbered(20);

    let sequential = load_page(&dex, 1, 20, 1).await;
    let concurrent = load_page(&dex, 1, 20, 20).await;

    assert_eq!(sequential, concurrent);
    assert_eq!(sequential.len(), 20);
}
