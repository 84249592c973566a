//! End-to-end tests for `topo-order-commits` against hand-written
//! repositories.

mod common;

use common::{topo, topo_env, Fixture};

#[test]
fn linear_history() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    let b = repo.commit(&[a], "B");
    let c = repo.commit(&[b], "C");
    repo.branch("main", c);

    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, format!("{c} main\n{b}\n{a}\n"));
}

#[test]
fn diverging_branches_are_joined_by_markers() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    let b = repo.commit(&[a], "B");
    let c = repo.commit(&[a], "C");
    repo.branch("feature", b);
    repo.branch("main", c);

    let (first, first_name, second, second_name) = if b > c {
        (b, "feature", c, "main")
    } else {
        (c, "main", b, "feature")
    };

    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        format!("{first} {first_name}\n{a}=\n\n=\n{second} {second_name}\n{a}\n")
    );
}

#[test]
fn merge_of_unrelated_histories() {
    let mut repo = Fixture::new();
    let p1 = repo.commit(&[], "P1");
    let p2 = repo.commit(&[], "P2");
    let m = repo.commit(&[p2, p1], "M");
    repo.branch("main", m);

    let (hi, lo) = if p1 > p2 { (p1, p2) } else { (p2, p1) };

    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, format!("{m} main\n{hi}\n=\n\n={m}\n{lo}\n"));
}

#[test]
fn nested_and_shared_branch_names() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    repo.branch("main", a);
    repo.branch("topic/deep/work", a);
    repo.branch("alpha", a);

    let result = topo(repo.path(), &[]);
    assert_eq!(result.stdout, format!("{a} alpha main topic/deep/work\n"));
}

#[test]
fn runs_from_a_subdirectory() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    repo.branch("main", a);
    let sub = repo.path().join("src/nested");
    std::fs::create_dir_all(&sub).unwrap();

    let result = topo(&sub, &[]);
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, format!("{a} main\n"));
}

#[test]
fn change_dir_flag() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    repo.branch("main", a);
    let elsewhere = tempfile::tempdir().unwrap();

    let result = topo(elsewhere.path(), &["-C", repo.path().to_str().unwrap()]);
    assert_eq!(result.exit_code, 0, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, format!("{a} main\n"));
}

#[test]
fn git_dir_flag_and_env() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    repo.branch("main", a);
    let elsewhere = tempfile::tempdir().unwrap();
    let git_dir = repo.git_dir();
    let git_dir = git_dir.to_str().unwrap();

    let flag = topo(elsewhere.path(), &["--git-dir", git_dir]);
    assert_eq!(flag.stdout, format!("{a} main\n"));

    let env = topo_env(elsewhere.path(), &[], &[("GIT_DIR", git_dir)]);
    assert_eq!(env.stdout, format!("{a} main\n"));
}

#[test]
fn outside_a_repository_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let ceiling = dir.path().parent().unwrap().to_str().unwrap().to_string();

    let result = topo_env(dir.path(), &[], &[("GIT_CEILING_DIRECTORIES", ceiling.as_str())]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Not inside a Git repository"));
}

#[test]
fn missing_object_is_fatal() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    let b = repo.commit(&[a], "B");
    repo.branch("main", b);
    repo.remove_object(a);

    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 128);
    assert!(result.stderr.starts_with("fatal:"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains(&a.to_string()));
}

#[test]
fn corrupt_branch_file_is_fatal() {
    let mut repo = Fixture::new();
    let a = repo.commit(&[], "A");
    repo.branch("main", a);
    std::fs::write(repo.git_dir().join("refs/heads/broken"), "zzz\n").unwrap();

    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 128);
    assert!(result.stderr.contains("broken"), "stderr: {}", result.stderr);
}

#[test]
fn no_branches_prints_nothing() {
    let repo = Fixture::new();
    let result = topo(repo.path(), &[]);
    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.is_empty());
}

#[test]
fn output_is_stable_and_logging_stays_on_stderr() {
    let mut repo = Fixture::new();
    let root = repo.commit(&[], "root");
    let mut tips = Vec::new();
    for i in 0..5 {
        let mid = repo.commit(&[root], &format!("mid {i}"));
        let tip = repo.commit(&[mid], &format!("tip {i}"));
        repo.branch(&format!("b{i}"), tip);
        tips.push(tip);
    }
    let merge = repo.commit(&tips, "octopus");
    repo.branch("main", merge);

    let first = topo(repo.path(), &[]);
    let second = topo(repo.path(), &[]);
    let verbose = topo(repo.path(), &["-vv"]);

    assert_eq!(first.exit_code, 0, "stderr: {}", first.stderr);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout, verbose.stdout);
    assert!(first.stderr.is_empty());
    assert!(verbose.stderr.contains("built commit graph"));
}

#[test]
fn usage_error_exits_128() {
    let repo = Fixture::new();
    let result = topo(repo.path(), &["--no-such-flag"]);
    assert_eq!(result.exit_code, 128);
}
