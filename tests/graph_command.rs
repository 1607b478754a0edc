use crate::common::command::{read_graph, repository_dir, run_bit_graph};
use crate::common::store::{DIRECTORY_MODE, FILE_MODE, StoreBuilder, document, edge, label};
use assert_fs::TempDir;
use bit_graph::artifacts::objects::object_id::ObjectId;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn single_commit_produces_two_edges(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let file_name = format!("{}.txt", Word().fake::<String>());
    let blob = store.blob(&Words(3..8).fake::<Vec<String>>().join(" "));
    let tree = store.tree(&[(FILE_MODE, &file_name, &blob)]);
    let commit = store.commit(&tree, &[], "Initial commit");
    store.point_branch("main", &commit);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let commit_label = label("commit", &commit, None);
    let tree_label = label("tree", &tree, None);
    let expected = document(&[
        edge(&commit_label, &tree_label),
        edge(&tree_label, &label("blob", &blob, Some(&file_name))),
    ]);
    pretty_assertions::assert_eq!(read_graph(repository_dir.path()), expected);

    Ok(())
}

#[rstest]
fn history_is_walked_depth_first(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let readme = store.blob("# project\n");
    let main_rs = store.blob("fn main() {}\n");
    let src = store.tree(&[(FILE_MODE, "main.rs", &main_rs)]);
    let first_tree = store.tree(&[(FILE_MODE, "README.md", &readme)]);
    let second_tree = store.tree(&[
        (FILE_MODE, "README.md", &readme),
        (DIRECTORY_MODE, "src", &src),
    ]);
    let first = store.commit(&first_tree, &[], "Add readme");
    let second = store.commit(&second_tree, &[&first], "Add sources");
    store.point_branch("main", &second);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[]).assert().success();

    let second_label = label("commit", &second, None);
    let second_tree_label = label("tree", &second_tree, None);
    let src_label = label("tree", &src, Some("src"));
    let first_label = label("commit", &first, None);
    let first_tree_label = label("tree", &first_tree, None);
    let readme_label = label("blob", &readme, Some("README.md"));
    let expected = document(&[
        edge(&second_label, &second_tree_label),
        edge(&second_tree_label, &readme_label),
        edge(&second_tree_label, &src_label),
        edge(&src_label, &label("blob", &main_rs, Some("main.rs"))),
        edge(&second_label, &first_label),
        edge(&first_label, &first_tree_label),
        edge(&first_tree_label, &readme_label),
    ]);
    pretty_assertions::assert_eq!(read_graph(repository_dir.path()), expected);

    Ok(())
}

#[rstest]
fn shared_tree_is_repeated_unless_unique_edges(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let blob = store.blob("same\n");
    let tree = store.tree(&[(FILE_MODE, "same.txt", &blob)]);
    let first = store.commit(&tree, &[], "first");
    let second = store.commit(&tree, &[&first], "empty change");
    store.point_branch("main", &second);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[]).assert().success();
    let per_path = read_graph(repository_dir.path());

    run_bit_graph(repository_dir.path(), &["--unique-edges"])
        .assert()
        .success();
    let unique = read_graph(repository_dir.path());

    let tree_to_blob = edge(
        &label("tree", &tree, None),
        &label("blob", &blob, Some("same.txt")),
    );
    assert_eq!(per_path.matches(&tree_to_blob).count(), 2);
    assert_eq!(unique.matches(&tree_to_blob).count(), 1);
    assert_eq!(per_path.lines().count(), 7);
    assert_eq!(unique.lines().count(), 6);

    Ok(())
}

#[rstest]
fn repeated_runs_are_byte_identical(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let mut head = None;
    for i in 0..5 {
        let blob = store.blob(&format!("revision {i}\n"));
        let tree = store.tree(&[(FILE_MODE, "file.txt", &blob)]);
        let parents = head.iter().collect::<Vec<_>>();
        head = Some(store.commit(&tree, &parents, &format!("commit {i}")));
    }
    store.point_branch("main", head.as_ref().ok_or("no commits written")?);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[]).assert().success();
    let first_run = std::fs::read(repository_dir.path().join("graph.dot"))?;
    run_bit_graph(repository_dir.path(), &[]).assert().success();
    let second_run = std::fs::read(repository_dir.path().join("graph.dot"))?;

    assert_eq!(first_run, second_run);

    Ok(())
}

#[rstest]
fn missing_objects_drop_their_edges(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let tree = store.tree(&[]);
    let commit = store.commit(&tree, &[], "root");
    let missing_parent = ObjectId::try_parse("1111111111111111111111111111111111111111".into())?;
    let head = store.commit(&tree, &[&commit, &missing_parent], "merge with pruned side");
    store.point_branch("main", &head);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[]).assert().success();

    let graph = read_graph(repository_dir.path());
    assert!(!graph.contains("111111"));
    assert_eq!(graph.lines().count(), 5);

    Ok(())
}

#[rstest]
fn quoted_file_names_are_escaped(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    let blob = store.blob("quoted\n");
    let tree = store.tree(&[(FILE_MODE, "say \"hi\".txt", &blob)]);
    let commit = store.commit(&tree, &[], "quotes");
    store.point_branch("main", &commit);
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[]).assert().success();

    let graph = read_graph(repository_dir.path());
    assert!(graph.contains(&label("blob", &blob, Some(r#"say \"hi\".txt"#))));
    assert_eq!(graph.lines().count(), 4);

    Ok(())
}

#[rstest]
fn head_missing_from_store_writes_empty_graph(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = StoreBuilder::new(&repository_dir);
    store.set_branch("main", "89abcdef0123456789abcdef0123456789abcdef\n");
    store.write_config("main");

    run_bit_graph(repository_dir.path(), &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found in object store"));

    pretty_assertions::assert_eq!(read_graph(repository_dir.path()), "digraph G {\n}\n");

    Ok(())
}
