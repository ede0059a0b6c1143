//! Enumeration and fan-out against the mock platform.

mod common;

use common::{bot_pr, repo, MockPlatform, BOT_ID};
use futures::TryStreamExt;
use mergedeps::{
    discover, pull_requests, repositories, CancelScope, MergeError, PullRequest, Repository,
    SharedPlatform,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn repositories_are_paginated_and_filtered() {
    let archived = Repository {
        archived: true,
        ..repo("old")
    };
    let read_only = Repository {
        can_push: false,
        ..repo("mirror")
    };
    let platform = Arc::new(
        MockPlatform::new()
            .with_page_size(2)
            .with_repository(repo("one"), Vec::new())
            .with_repository(archived, Vec::new())
            .with_repository(repo("two"), Vec::new())
            .with_repository(read_only, Vec::new())
            .with_repository(repo("three"), Vec::new()),
    );

    let found: Vec<Repository> = repositories(platform.clone(), "acme".to_string())
        .try_collect()
        .await
        .unwrap();

    let names: Vec<String> = found.iter().map(|r| r.name.name.clone()).collect();
    assert_eq!(names, vec!["one", "two", "three"]);
    assert_eq!(platform.repository_pages(), vec![1, 2, 3]);
}

#[tokio::test]
async fn pull_requests_are_limited_to_bot_and_default_branch() {
    let web = repo("web");
    let by_human = PullRequest {
        author_id: 1,
        ..bot_pr(&web, 2, "Bump a from 1 to 2")
    };
    let against_release = PullRequest {
        base_branch: "release".to_string(),
        ..bot_pr(&web, 3, "Bump b from 1 to 2")
    };
    let platform = Arc::new(MockPlatform::new().with_page_size(1).with_repository(
        web.clone(),
        vec![
            bot_pr(&web, 1, "Bump c from 1 to 2"),
            by_human,
            against_release,
            bot_pr(&web, 4, "Bump d from 1 to 2"),
        ],
    ));

    let found: Vec<PullRequest> = pull_requests(platform, web, BOT_ID)
        .try_collect()
        .await
        .unwrap();

    let numbers: Vec<u64> = found.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![1, 4]);
}

#[tokio::test]
async fn failing_page_ends_the_enumeration() {
    let platform = MockPlatform::new()
        .with_page_size(1)
        .with_repository(repo("one"), Vec::new())
        .with_repository(repo("two"), Vec::new())
        .with_repository(repo("three"), Vec::new());
    platform.fail_repository_page(2);
    let platform = Arc::new(platform);

    let result: Result<Vec<Repository>, _> = repositories(platform.clone(), "acme".to_string())
        .try_collect()
        .await;

    assert!(result.is_err());
    assert_eq!(platform.repository_pages(), vec![1, 2]);
}

#[tokio::test]
async fn discover_forwards_every_pull_request_and_closes_the_channel() {
    let web = repo("web");
    let api = repo("api");
    let platform: SharedPlatform = Arc::new(
        MockPlatform::new()
            .with_repository(
                web.clone(),
                vec![bot_pr(&web, 1, "Bump a from 1 to 2"), bot_pr(&web, 2, "Bump b from 1 to 2")],
            )
            .with_repository(api.clone(), vec![bot_pr(&api, 7, "Bump a from 1 to 2")]),
    );
    let (sender, mut receiver) = mpsc::channel(1);
    let scope = CancelScope::new();

    let discovery = tokio::spawn(discover(
        platform,
        "acme".to_string(),
        BOT_ID,
        sender,
        scope.clone(),
    ));

    let mut received = BTreeSet::new();
    while let Some(pr) = receiver.recv().await {
        received.insert(pr.reference());
    }

    assert_eq!(discovery.await.unwrap().unwrap(), 2);
    assert_eq!(
        received,
        BTreeSet::from([
            "acme/api#7".to_string(),
            "acme/web#1".to_string(),
            "acme/web#2".to_string(),
        ])
    );
    assert!(!scope.is_cancelled());
}

#[tokio::test]
async fn discover_failure_cancels_the_scope() {
    let web = repo("web");
    let platform = MockPlatform::new().with_repository(web.clone(), vec![bot_pr(&web, 1, "Bump a from 1 to 2")]);
    platform.fail_pull_requests_for("acme/web");
    let platform: SharedPlatform = Arc::new(platform);
    let (sender, mut receiver) = mpsc::channel(4);
    let scope = CancelScope::new();

    let result = discover(platform, "acme".to_string(), BOT_ID, sender, scope.clone()).await;

    assert!(matches!(result, Err(MergeError::Platform(_))));
    assert!(scope.is_cancelled());
    assert!(receiver.recv().await.is_none());
}

#[tokio::test]
async fn discover_stops_when_scope_is_cancelled() {
    let web = repo("web");
    let platform: SharedPlatform = Arc::new(
        MockPlatform::new().with_repository(web.clone(), vec![bot_pr(&web, 1, "Bump a from 1 to 2")]),
    );
    let (sender, _receiver) = mpsc::channel(4);
    let scope = CancelScope::new();
    scope.cancel();

    let result = discover(platform, "acme".to_string(), BOT_ID, sender, scope).await;

    assert!(matches!(result, Err(MergeError::Cancelled)));
}
