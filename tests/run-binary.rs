use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_default() {
    let output = r"Heuristic: none
Starting state:
s_m
_e

Search strategy: astar
States created: 16
States expanded: 8
Reached duplicates: 6
Max frontier size: 5
Solution cost: 4
Solution path length: 4
Solution path (actions): rrld
";

    Command::main_binary()
        .unwrap()
        .arg("boards/01-simplest.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_manhattan() {
    let output = r"Heuristic: manhattan
Starting state:
s_m
_e

Search strategy: astar
States created: 14
States expanded: 7
Reached duplicates: 5
Max frontier size: 6
Solution cost: 4
Solution path length: 4
Solution path (actions): rrld
";

    Command::main_binary()
        .unwrap()
        .args(&["--heuristic", "manhattan", "boards/01-simplest.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_water() {
    let output = r"Heuristic: none
Starting state:
s_w_e
_____

Search strategy: ucs
States created: 22
States expanded: 9
Reached duplicates: 7
Max frontier size: 7
Solution cost: 6
Solution path length: 6
Solution path (actions): rdrrur
";

    Command::main_binary()
        .unwrap()
        .args(&["-s", "ucs", "boards/02-water.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"Heuristic: none
Starting state:
s_e

__m

Search strategy: bfs
States created: 3
States expanded: 3
Reached duplicates: 0
Max frontier size: 1
No solution
";

    Command::main_binary()
        .unwrap()
        .args(&["--strategy", "bfs", "boards/03-no-solution.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_closest_mice() {
    let output = r"Heuristic: closestMice
Starting state:
m__w
_s_w
ww__m
e

Search strategy: astar
States created: 134
States expanded: 46
Reached duplicates: 56
Max frontier size: 49
Solution cost: 18
Solution path length: 13
Solution path (actions): rdrrllulluddd
";

    Command::main_binary()
        .unwrap()
        .args(&["-H", "closestMice", "boards/04-two-mice.txt"])
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_compare() {
    let output = Command::main_binary()
        .unwrap()
        .args(&["--compare", "boards/04-two-mice.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Heuristic: none\nStarting state:\n"));
    assert!(stdout.contains("Search strategy: astar\n"));
    for name in &[
        "none",
        "manhattan",
        "euclidean",
        "mice-remaining",
        "totalDistance",
        "closestMice",
    ] {
        let row = stdout
            .lines()
            .find(|line| line.contains(&format!(" {} ", name)))
            .unwrap_or_else(|| panic!("missing row for {}", name));
        // every heuristic finds the cheapest path on this board
        assert!(row.contains(" 18 "), "{}", row);
    }
}

#[test]
fn fail_unknown_heuristic() {
    Command::main_binary()
        .unwrap()
        .args(&["-H", "chebyshev", "boards/01-simplest.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid heuristic: chebyshev\n");
}

#[test]
fn fail_empty_heuristic() {
    Command::main_binary()
        .unwrap()
        .args(&["-H", "", "boards/01-simplest.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid heuristic: \n");
}

#[test]
fn fail_unknown_strategy() {
    Command::main_binary()
        .unwrap()
        .args(&["-s", "ids", "boards/01-simplest.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Unrecognized search strategy: ids\n");
}

#[test]
fn fail_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("boards/missing.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn fail_invalid_board() {
    Command::main_binary()
        .unwrap()
        .arg("boards/05-no-exit.txt")
        .assert()
        .failure()
        .stdout("");
}
